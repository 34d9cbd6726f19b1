use std::sync::OnceLock;

use regex::Regex;

use crate::decor::{Construct, DecorationKind, Span};
use crate::text::ByteSpan;

fn rule_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$").expect("invalid rule regex")
    })
}

/// True if the line before `line_start` is blank or absent.
fn blank_before(text: &str, line_start: usize) -> bool {
    if line_start == 0 {
        return true;
    }
    // line_start - 1 is the newline ending the previous line
    let before = &text[..line_start - 1];
    let prev_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    before[prev_start..].trim().is_empty()
}

/// True if the line after `line_end` is blank or absent.
fn blank_after(text: &str, line_end: usize) -> bool {
    if line_end >= text.len() {
        return true;
    }
    let after = &text[line_end + 1..];
    let next_end = after.find('\n').unwrap_or(after.len());
    after[..next_end].trim().is_empty()
}

/// Lines of 3+ `-`, `*`, or `_` with blank lines on both sides.
///
/// The blank-line requirement disambiguates rules from list-item separators
/// and heading underlines; document start and end count as blank boundaries.
/// Neighbor lines are checked in code rather than consumed by the pattern so
/// consecutive rules sharing one blank line both match.
pub fn horizontal_rules(text: &str, out: &mut Vec<Span>) {
    for m in rule_regex().find_iter(text) {
        if !blank_before(text, m.start()) || !blank_after(text, m.end()) {
            continue;
        }
        let parent = ByteSpan::new(m.start(), m.end());
        out.push(Span::new(
            Construct::HorizontalRule,
            DecorationKind::HorizontalLine,
            parent,
            parent,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(text: &str) -> Vec<Span> {
        let mut out = vec![];
        horizontal_rules(text, &mut out);
        out
    }

    #[test]
    fn rule_between_blank_lines() {
        let text = "para\n\n---\n\npara";
        let spans = rules(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range, ByteSpan::new(6, 9));
        assert_eq!(spans[0].kind, DecorationKind::HorizontalLine);
    }

    #[test]
    fn rule_without_blank_neighbors_is_skipped() {
        assert!(rules("para\n---\n\nafter").is_empty());
        assert!(rules("before\n\n***\nafter").is_empty());
    }

    #[test]
    fn rule_at_document_edges_matches() {
        assert_eq!(rules("---\n\npara").len(), 1);
        assert_eq!(rules("para\n\n___").len(), 1);
        assert_eq!(rules("---").len(), 1);
    }

    #[test]
    fn all_three_marker_characters_match() {
        assert_eq!(rules("\n---\n").len(), 1);
        assert_eq!(rules("\n***\n").len(), 1);
        assert_eq!(rules("\n___\n").len(), 1);
    }

    #[test]
    fn consecutive_rules_share_a_blank_line() {
        let spans = rules("---\n\n---\n\n---");
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn two_markers_are_not_a_rule() {
        assert!(rules("\n--\n").is_empty());
    }
}
