use std::sync::OnceLock;

use regex::Regex;

use crate::decor::{Construct, DecorationKind, Span};
use crate::text::ByteSpan;

fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ATX only. The `#`-run must be followed by whitespace or end of line, so
    // `#5` is not a heading and a 7+ run never matches. A bare `#` is a
    // valid, empty level-1 heading.
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*(#{1,6})([ \t].*|$)").expect("invalid heading regex")
    })
}

/// Level-specific enlargement: 1 → XXL, 2 → XL, 3 → L, 4–6 → none.
fn size_kind(level: usize) -> Option<DecorationKind> {
    match level {
        1 => Some(DecorationKind::HeadingXxl),
        2 => Some(DecorationKind::HeadingXl),
        3 => Some(DecorationKind::HeadingL),
        _ => None,
    }
}

/// ATX headings: hide the `#`-run plus one following whitespace character,
/// recolor the whole line, enlarge levels 1–3.
pub fn headings(text: &str, out: &mut Vec<Span>) {
    for caps in heading_regex().captures_iter(text) {
        let m = caps.get(0).expect("whole match");
        let marker = caps.get(1).expect("hash run group");
        let rest = caps.get(2).expect("title group");
        let parent = ByteSpan::new(m.start(), m.end());
        let level = marker.len();

        // Swallow exactly one whitespace character after the run, if any.
        let hide_end = if rest.as_str().is_empty() {
            marker.end()
        } else {
            marker.end() + 1
        };
        out.push(Span::new(
            Construct::Heading,
            DecorationKind::Hide,
            ByteSpan::new(marker.start(), hide_end),
            parent,
        ));
        out.push(Span::new(
            Construct::Heading,
            DecorationKind::DefaultColor,
            parent,
            parent,
        ));
        if let Some(kind) = size_kind(level) {
            out.push(Span::new(Construct::Heading, kind, parent, parent));
        }
    }
}
