//! The recompute pass: one pure function from a text snapshot, the current
//! selections, and the current options to a decoration set plus link list.
//!
//! The host calls [`recompute`] from its own event callbacks (document edit,
//! selection change, configuration change). There is no incremental update
//! and no shared state: every trigger performs a full synchronous scan over
//! the snapshot, making recomputes idempotent and safe to run repeatedly.

use crate::decor::DecorationSet;
use crate::filters;
use crate::links::LinkEntry;
use crate::matchers;
use crate::options::Options;
use crate::text::{Range, TextIndex};

/// Document kinds the engine activates for; anything else is a no-op.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["markdown", "md", "mdx"];

#[must_use]
pub fn is_supported_language(language_id: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language_id)
}

/// The document snapshot a recompute operates on.
///
/// Supplied whole by the host; the engine never reads editor or file state
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub text: &'a str,
    pub language_id: &'a str,
}

/// Output of one recompute pass. Ephemeral: applied, published, discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recomputed {
    pub decorations: DecorationSet,
    pub links: Vec<LinkEntry>,
}

/// Computes the full decoration set and link list for one snapshot.
///
/// Unsupported document kinds and empty documents yield an all-empty result,
/// which clears any previously applied decorations when handed to the
/// renderer. Malformed constructs simply fail to match and are shown raw;
/// nothing here can fail.
#[must_use]
pub fn recompute(snapshot: &Snapshot<'_>, selections: &[Range], options: &Options) -> Recomputed {
    if !is_supported_language(snapshot.language_id) {
        return Recomputed::default();
    }

    let index = TextIndex::new(snapshot.text);
    let matched = matchers::scan(snapshot.text, options);
    let (spans, link_candidates) = filters::apply(matched, selections, &index);

    Recomputed {
        decorations: DecorationSet::from_spans(&spans, &index),
        links: link_candidates
            .into_iter()
            .map(|candidate| LinkEntry {
                range: index.range_of(candidate.range),
                target: candidate.target,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decor::DecorationKind;

    fn markdown(text: &str) -> Snapshot<'_> {
        Snapshot {
            text,
            language_id: "markdown",
        }
    }

    #[test]
    fn unsupported_language_is_a_no_op() {
        let snapshot = Snapshot {
            text: "# heading",
            language_id: "rust",
        };
        let result = recompute(&snapshot, &[], &Options::default());
        assert!(result.decorations.is_empty());
        assert!(result.links.is_empty());
    }

    #[test]
    fn empty_document_yields_empty_set() {
        let result = recompute(&markdown(""), &[], &Options::default());
        assert!(result.decorations.is_empty());
    }

    #[test]
    fn recompute_is_deterministic() {
        let snapshot = markdown("# h\n\n**b** and `c` and [t][r]\n\n---");
        let options = Options::default();
        let first = recompute(&snapshot, &[], &options);
        let second = recompute(&snapshot, &[], &options);
        assert_eq!(first, second);
    }

    #[test]
    fn disabled_construct_produces_nothing() {
        let options = Options {
            headings: false,
            ..Options::default()
        };
        let result = recompute(&markdown("# heading"), &[], &options);
        assert!(result.decorations.is_empty());
    }

    #[test]
    fn mdx_and_md_activate() {
        for lang in ["md", "mdx"] {
            let snapshot = Snapshot {
                text: "**b**",
                language_id: lang,
            };
            let result = recompute(&snapshot, &[], &Options::default());
            assert!(!result.decorations.ranges(DecorationKind::Hide).is_empty());
        }
    }
}
