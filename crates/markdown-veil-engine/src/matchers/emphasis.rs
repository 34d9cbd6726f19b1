use std::sync::OnceLock;

use regex::Regex;

use super::{adjacent_to, for_each_match};
use crate::decor::{Construct, DecorationKind, Span};
use crate::text::ByteSpan;

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Content must start and end with a non-whitespace, non-marker character,
    // so `** x**` does not match while `**x**` does. The single-character
    // alternative covers `**x**`.
    RE.get_or_init(|| {
        Regex::new(r"\*\*(?:[^\s*]|[^\s*].*?[^\s*])\*\*|__(?:[^\s_]|[^\s_].*?[^\s_])__")
            .expect("invalid bold regex")
    })
}

fn italic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*(?:[^\s*]|[^\s*].*?[^\s*])\*|_(?:[^\s_]|[^\s_].*?[^\s_])_")
            .expect("invalid italic regex")
    })
}

fn strikethrough_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"~~(?:[^\s~]|[^\s~].*?[^\s~])~~").expect("invalid strikethrough regex")
    })
}

/// Emits a hide span over each delimiter of a symmetric construct.
fn push_marker_pair(out: &mut Vec<Span>, construct: Construct, parent: ByteSpan, marker_len: usize) {
    out.push(Span::new(
        construct,
        DecorationKind::Hide,
        ByteSpan::new(parent.start, parent.start + marker_len),
        parent,
    ));
    out.push(Span::new(
        construct,
        DecorationKind::Hide,
        ByteSpan::new(parent.end - marker_len, parent.end),
        parent,
    ));
}

/// `**text**` / `__text__`: hide both markers, recolor the whole match.
pub fn bold(text: &str, out: &mut Vec<Span>) {
    for_each_match(bold_regex(), text, |m| {
        let parent = ByteSpan::new(m.start(), m.end());
        push_marker_pair(out, Construct::Bold, parent, 2);
        out.push(Span::new(
            Construct::Bold,
            DecorationKind::DefaultColor,
            parent,
            parent,
        ));
        true
    });
}

/// `*text*` / `_text_`: same shape as bold, but a candidate adjacent to
/// another `*`/`_` is rejected so bold markers never half-match as italic.
pub fn italic(text: &str, out: &mut Vec<Span>) {
    for_each_match(italic_regex(), text, |m| {
        if adjacent_to(text, &m, b"*_") {
            return false;
        }
        let parent = ByteSpan::new(m.start(), m.end());
        push_marker_pair(out, Construct::Italic, parent, 1);
        out.push(Span::new(
            Construct::Italic,
            DecorationKind::DefaultColor,
            parent,
            parent,
        ));
        true
    });
}

/// `~~text~~`: hide pair only, no recolor.
pub fn strikethrough(text: &str, out: &mut Vec<Span>) {
    for_each_match(strikethrough_regex(), text, |m| {
        if adjacent_to(text, &m, b"~") {
            return false;
        }
        let parent = ByteSpan::new(m.start(), m.end());
        push_marker_pair(out, Construct::Strikethrough, parent, 2);
        true
    });
}
