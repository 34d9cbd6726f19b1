pub mod decor;
pub mod filters;
pub mod links;
pub mod matchers;
pub mod options;
pub mod pipeline;
pub mod text;

// Re-export key types for easier usage
pub use decor::{Construct, DecorationKind, DecorationRenderer, DecorationSet};
pub use links::{LinkEntry, LinkNavigator, LinkRegistry};
pub use options::Options;
pub use pipeline::{Recomputed, SUPPORTED_LANGUAGES, Snapshot, is_supported_language, recompute};
pub use text::{ByteSpan, Position, Range, TextIndex};
