use std::collections::BTreeMap;

use super::kind::DecorationKind;
use super::span::Span;
use crate::text::{Range, TextIndex};

/// Rendering collaborator: paints one decoration kind over a list of ranges.
///
/// Passing an empty or replaced range list fully clears prior decorations of
/// that kind; the engine relies on this to erase stale output.
pub trait DecorationRenderer {
    fn set_decorations(&mut self, kind: DecorationKind, ranges: &[Range]);
}

/// Aggregated per-kind ranges for one recompute pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    per_kind: BTreeMap<DecorationKind, Vec<Range>>,
}

impl DecorationSet {
    /// Groups surviving spans by kind, converting byte spans to host ranges.
    ///
    /// Ranges within a kind are sorted into document order; duplicates are
    /// allowed and harmless.
    #[must_use]
    pub fn from_spans(spans: &[Span], index: &TextIndex<'_>) -> Self {
        let mut per_kind: BTreeMap<DecorationKind, Vec<Range>> = BTreeMap::new();
        for span in spans {
            per_kind
                .entry(span.kind)
                .or_default()
                .push(index.range_of(span.range));
        }
        for ranges in per_kind.values_mut() {
            ranges.sort();
        }
        Self { per_kind }
    }

    #[must_use]
    pub fn ranges(&self, kind: DecorationKind) -> &[Range] {
        self.per_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_kind.values().all(Vec::is_empty)
    }

    /// Issues exactly one bulk apply per kind, including empty lists so the
    /// renderer clears anything left over from the previous pass.
    pub fn apply(&self, renderer: &mut dyn DecorationRenderer) {
        for kind in DecorationKind::ALL {
            renderer.set_decorations(kind, self.ranges(kind));
        }
    }
}
