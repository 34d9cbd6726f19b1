use std::sync::OnceLock;

use regex::Regex;

use super::{adjacent_to, for_each_match};
use crate::decor::{Construct, DecorationKind, Span};
use crate::text::ByteSpan;

fn inline_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"`(?:[^\s`]|[^\s`][^`\n]*?[^\s`])`").expect("invalid inline code regex")
    })
}

fn backtick_fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Opening fence with optional info string, non-greedy body, closing fence
    // of the same character. Two patterns instead of a backreference, which
    // the regex crate does not support.
    RE.get_or_init(|| {
        Regex::new(r"(?ms)^`{3,}[^\n]*$\n.*?^`{3,}[ \t]*$").expect("invalid backtick fence regex")
    })
}

fn tilde_fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?ms)^~{3,}[^\n]*$\n.*?^~{3,}[ \t]*$").expect("invalid tilde fence regex")
    })
}

/// Single-backtick spans: hide the backticks only.
///
/// Content is never decorated, and these spans are exempt from the code-block
/// exclusion filter so inline code always displays literally.
pub fn inline_code(text: &str, out: &mut Vec<Span>) {
    for_each_match(inline_code_regex(), text, |m| {
        if adjacent_to(text, &m, b"`") {
            return false;
        }
        let parent = ByteSpan::new(m.start(), m.end());
        out.push(Span::new(
            Construct::InlineCode,
            DecorationKind::Hide,
            ByteSpan::new(parent.start, parent.start + 1),
            parent,
        ));
        out.push(Span::new(
            Construct::InlineCode,
            DecorationKind::Hide,
            ByteSpan::new(parent.end - 1, parent.end),
            parent,
        ));
        true
    });
}

/// Fenced blocks (``` or ~~~): one hide span per fence line.
///
/// The parent range of these spans is what the code-block exclusion filter
/// tests other constructs against.
pub fn fenced_blocks(text: &str, out: &mut Vec<Span>) {
    for re in [backtick_fence_regex(), tilde_fence_regex()] {
        for m in re.find_iter(text) {
            let parent = ByteSpan::new(m.start(), m.end());
            let body = m.as_str();
            // The pattern guarantees at least one newline between the fences.
            let first_nl = body.find('\n').unwrap_or(body.len());
            let last_nl = body.rfind('\n').unwrap_or(0);
            out.push(Span::new(
                Construct::FencedCode,
                DecorationKind::Hide,
                ByteSpan::new(parent.start, parent.start + first_nl),
                parent,
            ));
            out.push(Span::new(
                Construct::FencedCode,
                DecorationKind::Hide,
                ByteSpan::new(parent.start + last_nl + 1, parent.end),
                parent,
            ));
        }
    }
}
