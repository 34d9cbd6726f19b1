use super::kind::DecorationKind;
use crate::text::ByteSpan;

/// The markdown construct a span was matched from.
///
/// Carried alongside the decoration kind because the exclusion filters key
/// off the construct, not the visual style: code delimiters are exempt from
/// both code-block exclusion and selection suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    FencedCode,
    BareUri,
    AliasedLink,
    ReferenceLink,
    Heading,
    HorizontalRule,
}

impl Construct {
    /// True for the two code constructs whose spans are never filtered.
    #[must_use]
    pub fn is_code(self) -> bool {
        matches!(self, Construct::InlineCode | Construct::FencedCode)
    }
}

/// A candidate decoration: the sub-range to decorate plus the full construct
/// it belongs to.
///
/// Multiple spans share one `parent` when a construct needs several
/// independent decorations (hide markers + recolor content, for instance).
/// The whole span set is ephemeral, rebuilt from scratch every recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub construct: Construct,
    pub kind: DecorationKind,
    /// The specific sub-part to decorate (e.g. just a `**` marker).
    pub range: ByteSpan,
    /// The full syntactic match (e.g. the entire `**bold**`).
    pub parent: ByteSpan,
}

impl Span {
    #[must_use]
    pub fn new(construct: Construct, kind: DecorationKind, range: ByteSpan, parent: ByteSpan) -> Self {
        debug_assert!(parent.contains(range));
        Self {
            construct,
            kind,
            range,
            parent,
        }
    }
}
