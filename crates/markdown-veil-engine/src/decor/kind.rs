use serde::{Deserialize, Serialize};

/// A visual treatment the host renderer knows how to paint.
///
/// Each kind maps 1:1 to a style defined entirely by the rendering
/// collaborator; the engine only produces kind + range pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecorationKind {
    /// Collapse the range to zero visual width (syntax markers).
    Hide,
    /// Repaint the range in the host's default foreground color.
    DefaultColor,
    /// Enlarge a level-1 heading line.
    HeadingXxl,
    /// Enlarge a level-2 heading line.
    HeadingXl,
    /// Enlarge a level-3 heading line.
    HeadingL,
    /// Link-text styling (underline/color per the host).
    UriStyle,
    /// Inject one visual space after the range.
    SpaceAfter,
    /// Replace the range's line with a drawn divider.
    HorizontalLine,
}

impl DecorationKind {
    /// Every kind, in the order bulk applies are issued. The host call count
    /// per recompute is bounded by this array's length.
    pub const ALL: [DecorationKind; 8] = [
        DecorationKind::Hide,
        DecorationKind::DefaultColor,
        DecorationKind::HeadingXxl,
        DecorationKind::HeadingXl,
        DecorationKind::HeadingL,
        DecorationKind::UriStyle,
        DecorationKind::SpaceAfter,
        DecorationKind::HorizontalLine,
    ];
}
