//! # Span Matchers
//!
//! One matcher per markdown construct, each a pure function of the full
//! document text returning candidate [`Span`]s. Matchers are independent of
//! each other; only the downstream filters relate their outputs.
//!
//! ## Priority order
//!
//! Matchers run in a fixed, documented order so construct exclusivity is a
//! property of this list rather than of regex lookaround tricks (the `regex`
//! crate has none):
//!
//! 1. fenced code block
//! 2. inline code
//! 3. bold
//! 4. italic
//! 5. strikethrough
//! 6. bare URI
//! 7. aliased link
//! 8. reference link
//! 9. heading
//! 10. horizontal rule
//!
//! Bold/italic exclusivity is enforced by the adjacency rule: an italic
//! candidate whose neighbor is another `*`/`_` is rejected in code and the
//! scan resumes one byte past the rejected start.
//!
//! ## Regex state
//!
//! Patterns are compiled once behind `OnceLock` and carry no scan position;
//! every invocation scans from offset 0. Rejection-aware scanning owns its
//! position locally in [`for_each_match`]. Nothing here keeps cross-call
//! match state, so recomputes can never skip or duplicate spans.

pub mod code;
pub mod emphasis;
pub mod heading;
pub mod links;
pub mod rule;

use regex::{Match, Regex};

use crate::decor::Span;
use crate::links::LinkCandidate;
use crate::options::Options;

/// Everything one scan pass produces: decoration candidates plus the link
/// candidates that take the parallel path into the link registry.
#[derive(Debug, Default)]
pub struct MatchSet {
    pub spans: Vec<Span>,
    pub links: Vec<LinkCandidate>,
}

/// Runs every enabled matcher over the text, in priority order.
#[must_use]
pub fn scan(text: &str, options: &Options) -> MatchSet {
    let mut out = MatchSet::default();
    if options.block_code {
        code::fenced_blocks(text, &mut out.spans);
    }
    if options.inline_code {
        code::inline_code(text, &mut out.spans);
    }
    if options.bold {
        emphasis::bold(text, &mut out.spans);
    }
    if options.italic {
        emphasis::italic(text, &mut out.spans);
    }
    if options.strikethrough {
        emphasis::strikethrough(text, &mut out.spans);
    }
    if options.simple_uri {
        links::bare_uris(text, &mut out.spans);
    }
    if options.aliased_uris {
        links::aliased_links(text, &mut out.spans, &mut out.links);
    }
    if options.reference_uris {
        links::reference_links(
            text,
            options.reference_uris_fully,
            &mut out.spans,
            &mut out.links,
        );
    }
    if options.headings {
        heading::headings(text, &mut out.spans);
    }
    if options.horizontal_line {
        rule::horizontal_rules(text, &mut out.spans);
    }
    out
}

/// Scan loop with rejection-aware resumption.
///
/// The callback returns whether it accepted the match. Accepted matches
/// resume scanning at their end; rejected matches resume one byte past their
/// start, so a valid construct starting inside a rejected candidate is still
/// found (plain `find_iter` would skip it).
pub(crate) fn for_each_match(re: &Regex, text: &str, mut f: impl FnMut(Match<'_>) -> bool) {
    let mut pos = 0;
    while pos <= text.len() {
        let Some(m) = re.find_at(text, pos) else {
            break;
        };
        if f(m) {
            // Guard against zero-width matches pinning the scan in place.
            pos = m.end().max(m.start() + 1);
        } else {
            pos = m.start() + 1;
        }
    }
}

/// True if the byte just before or just after the match is one of `markers`.
///
/// Used for the adjacency rules (italic next to `*`/`_`, strikethrough next
/// to `~`, inline code next to a backtick). All marker bytes are ASCII so
/// byte inspection is safe.
pub(crate) fn adjacent_to(text: &str, m: &Match<'_>, markers: &[u8]) -> bool {
    let bytes = text.as_bytes();
    let before = m.start().checked_sub(1).and_then(|i| bytes.get(i));
    let after = bytes.get(m.end());
    before.is_some_and(|b| markers.contains(b)) || after.is_some_and(|b| markers.contains(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    fn word_re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"a+").expect("invalid test regex"))
    }

    #[test]
    fn rejection_resumes_inside_rejected_match() {
        // Reject the first candidate; the scan must still see the overlap.
        let mut seen = vec![];
        let mut first = true;
        for_each_match(word_re(), "aaa", |m| {
            seen.push((m.start(), m.end()));
            let accept = !first;
            first = false;
            accept
        });
        assert_eq!(seen, vec![(0, 3), (1, 3)]);
    }

    #[test]
    fn adjacency_checks_both_sides() {
        let text = "*x*_";
        let re = Regex::new(r"x").unwrap();
        let m = re.find(text).unwrap();
        assert!(adjacent_to(text, &m, b"*"));
        assert!(!adjacent_to(text, &m, b"~"));
    }
}
