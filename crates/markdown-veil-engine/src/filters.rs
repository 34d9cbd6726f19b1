//! Exclusion filters applied between matching and aggregation.
//!
//! Two rules, decided once per recompute pass, never partially:
//!
//! - **Code-block exclusion**: a non-code span whose parent lies entirely
//!   within a fenced-block or inline-code parent is suppressed. Containment,
//!   not intersection; malformed fences simply don't match and so exclude
//!   nothing.
//! - **Selection suppression**: a span whose parent's line range overlaps any
//!   selection is suppressed, at line granularity, so the user sees raw
//!   markdown on the line being edited.
//!
//! Code spans themselves are exempt from both rules; hiding backticks stays
//! independent of nesting and of what is selected.

use crate::decor::Span;
use crate::links::LinkCandidate;
use crate::matchers::MatchSet;
use crate::text::{ByteSpan, Range, TextIndex};

/// Parent ranges of every code construct in the match set.
fn code_parents(spans: &[Span]) -> Vec<ByteSpan> {
    let mut parents: Vec<ByteSpan> = spans
        .iter()
        .filter(|s| s.construct.is_code())
        .map(|s| s.parent)
        .collect();
    parents.dedup();
    parents
}

fn inside_code(parent: ByteSpan, code: &[ByteSpan]) -> bool {
    code.iter().any(|c| c.contains(parent))
}

fn touches_selection(lines: (u32, u32), selections: &[(u32, u32)]) -> bool {
    let (first, last) = lines;
    selections
        .iter()
        .any(|&(sel_first, sel_last)| sel_first <= last && first <= sel_last)
}

/// Applies both exclusion rules, returning the surviving spans and link
/// candidates.
#[must_use]
pub fn apply(
    matched: MatchSet,
    selections: &[Range],
    index: &TextIndex<'_>,
) -> (Vec<Span>, Vec<LinkCandidate>) {
    let code = code_parents(&matched.spans);
    let selected: Vec<(u32, u32)> = selections.iter().map(|r| r.line_span()).collect();

    let keep = |parent: ByteSpan| {
        !inside_code(parent, &code) && !touches_selection(index.line_span(parent), &selected)
    };

    let spans = matched
        .spans
        .into_iter()
        .filter(|s| s.construct.is_code() || keep(s.parent))
        .collect();
    let links = matched
        .links
        .into_iter()
        .filter(|l| keep(l.parent))
        .collect();
    (spans, links)
}
