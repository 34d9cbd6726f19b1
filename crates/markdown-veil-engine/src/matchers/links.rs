use std::sync::OnceLock;

use regex::Regex;

use crate::decor::{Construct, DecorationKind, Span};
use crate::links::LinkCandidate;
use crate::text::ByteSpan;

fn bare_uri_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Scheme shape only; the target is passed through unvalidated.
    RE.get_or_init(|| {
        Regex::new(r"<[A-Za-z][A-Za-z0-9+.\-]*:[^<>\n]*>").expect("invalid bare URI regex")
    })
}

fn aliased_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\[\]\n]*)\]\(([A-Za-z][A-Za-z0-9+.\-]*:[^()\n]*)\)")
            .expect("invalid aliased link regex")
    })
}

fn reference_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\[\]\n]+)\] ?\[([^\[\]\n]+)\]").expect("invalid reference link regex")
    })
}

/// `<scheme:...>`: hides only the angle brackets.
pub fn bare_uris(text: &str, out: &mut Vec<Span>) {
    for m in bare_uri_regex().find_iter(text) {
        let parent = ByteSpan::new(m.start(), m.end());
        out.push(Span::new(
            Construct::BareUri,
            DecorationKind::Hide,
            ByteSpan::new(parent.start, parent.start + 1),
            parent,
        ));
        out.push(Span::new(
            Construct::BareUri,
            DecorationKind::Hide,
            ByteSpan::new(parent.end - 1, parent.end),
            parent,
        ));
    }
}

/// `[text](scheme:target)`: hide `[` and the `](target)` tail, style the
/// link text, and yield one link candidate per match.
pub fn aliased_links(text: &str, out: &mut Vec<Span>, links: &mut Vec<LinkCandidate>) {
    for caps in aliased_link_regex().captures_iter(text) {
        let m = caps.get(0).expect("whole match");
        let label = caps.get(1).expect("link text group");
        let target = caps.get(2).expect("target group");
        let parent = ByteSpan::new(m.start(), m.end());
        let label_span = ByteSpan::new(label.start(), label.end());

        out.push(Span::new(
            Construct::AliasedLink,
            DecorationKind::Hide,
            ByteSpan::new(parent.start, parent.start + 1),
            parent,
        ));
        out.push(Span::new(
            Construct::AliasedLink,
            DecorationKind::Hide,
            ByteSpan::new(label.end(), parent.end),
            parent,
        ));
        out.push(Span::new(
            Construct::AliasedLink,
            DecorationKind::UriStyle,
            label_span,
            parent,
        ));
        links.push(LinkCandidate {
            range: label_span,
            parent,
            target: target.as_str().to_string(),
        });
    }
}

/// `[text][ref]` with an optional single space between the groups.
///
/// Fully-hidden mode hides everything after the `]` that closes the link
/// text. Partial mode keeps the `[ref]` tail visible but recolored, and when
/// the source had no separating space, injects a synthetic space after the
/// link text so the reference id does not collide with it.
pub fn reference_links(
    text: &str,
    fully_hidden: bool,
    out: &mut Vec<Span>,
    links: &mut Vec<LinkCandidate>,
) {
    for caps in reference_link_regex().captures_iter(text) {
        let m = caps.get(0).expect("whole match");
        let label = caps.get(1).expect("link text group");
        let reference = caps.get(2).expect("reference group");
        let parent = ByteSpan::new(m.start(), m.end());
        let label_span = ByteSpan::new(label.start(), label.end());
        // reference.start() is inside the second bracket group
        let tail_start = reference.start() - 1;
        let spaced = tail_start > label.end() + 1;

        out.push(Span::new(
            Construct::ReferenceLink,
            DecorationKind::Hide,
            ByteSpan::new(parent.start, parent.start + 1),
            parent,
        ));
        out.push(Span::new(
            Construct::ReferenceLink,
            DecorationKind::Hide,
            ByteSpan::new(label.end(), label.end() + 1),
            parent,
        ));
        if fully_hidden {
            out.push(Span::new(
                Construct::ReferenceLink,
                DecorationKind::Hide,
                ByteSpan::new(label.end() + 1, parent.end),
                parent,
            ));
        } else {
            out.push(Span::new(
                Construct::ReferenceLink,
                DecorationKind::DefaultColor,
                ByteSpan::new(tail_start, parent.end),
                parent,
            ));
            if !spaced {
                out.push(Span::new(
                    Construct::ReferenceLink,
                    DecorationKind::SpaceAfter,
                    label_span,
                    parent,
                ));
            }
        }
        out.push(Span::new(
            Construct::ReferenceLink,
            DecorationKind::UriStyle,
            label_span,
            parent,
        ));
        links.push(LinkCandidate {
            range: label_span,
            parent,
            target: reference.as_str().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_uri_hides_angle_brackets() {
        let mut out = vec![];
        bare_uris("see <https://example.org> now", &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].range.len(), 1);
        assert_eq!(out[1].range.len(), 1);
        assert_eq!(out[0].parent, ByteSpan::new(4, 25));
    }

    #[test]
    fn bare_uri_requires_scheme() {
        let mut out = vec![];
        bare_uris("<not a uri>", &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn aliased_link_spans_and_candidate() {
        let text = "[text](https://example.org)";
        let mut out = vec![];
        let mut links = vec![];
        aliased_links(text, &mut out, &mut links);
        assert_eq!(out.len(), 3);
        // [
        assert_eq!(out[0].range, ByteSpan::new(0, 1));
        // ](https://example.org)
        assert_eq!(out[1].range, ByteSpan::new(5, 27));
        // text
        assert_eq!(out[2].kind, DecorationKind::UriStyle);
        assert_eq!(out[2].range, ByteSpan::new(1, 5));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "https://example.org");
        assert_eq!(links[0].range, ByteSpan::new(1, 5));
    }

    #[test]
    fn aliased_link_requires_scheme_qualified_target() {
        let mut out = vec![];
        let mut links = vec![];
        aliased_links("[text](relative/path)", &mut out, &mut links);
        assert!(out.is_empty());
        assert!(links.is_empty());
    }

    #[test]
    fn reference_link_fully_hidden() {
        let text = "[text][ref]";
        let mut out = vec![];
        let mut links = vec![];
        reference_links(text, true, &mut out, &mut links);
        let hides: Vec<ByteSpan> = out
            .iter()
            .filter(|s| s.kind == DecorationKind::Hide)
            .map(|s| s.range)
            .collect();
        assert_eq!(
            hides,
            vec![
                ByteSpan::new(0, 1),
                ByteSpan::new(5, 6),
                ByteSpan::new(6, 11)
            ]
        );
        assert!(!out.iter().any(|s| s.kind == DecorationKind::SpaceAfter));
        assert_eq!(links[0].target, "ref");
    }

    #[test]
    fn reference_link_partial_injects_space_when_tight() {
        let text = "[text][ref]";
        let mut out = vec![];
        let mut links = vec![];
        reference_links(text, false, &mut out, &mut links);
        let tail = out
            .iter()
            .find(|s| s.kind == DecorationKind::DefaultColor)
            .unwrap();
        assert_eq!(tail.range, ByteSpan::new(6, 11));
        let space = out
            .iter()
            .find(|s| s.kind == DecorationKind::SpaceAfter)
            .unwrap();
        assert_eq!(space.range, ByteSpan::new(1, 5));
    }

    #[test]
    fn reference_link_partial_spaced_needs_no_injection() {
        let mut out = vec![];
        let mut links = vec![];
        reference_links("[text] [ref]", false, &mut out, &mut links);
        assert!(!out.iter().any(|s| s.kind == DecorationKind::SpaceAfter));
    }
}
