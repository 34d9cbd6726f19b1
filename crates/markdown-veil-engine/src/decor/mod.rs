//! # Decorations
//!
//! The closed set of visual treatments, the internal working span unit, and
//! the aggregator that turns surviving spans into one bulk apply per kind.
//!
//! - **`kind`**: `DecorationKind`, one variant per visual style
//! - **`span`**: `Span` (kind + decorated sub-range + owning parent range)
//!   and `Construct` (which matcher produced it)
//! - **`set`**: `DecorationSet` grouping ranges per kind, plus the
//!   `DecorationRenderer` collaborator trait

pub mod kind;
pub mod set;
pub mod span;

pub use kind::DecorationKind;
pub use set::{DecorationRenderer, DecorationSet};
pub use span::{Construct, Span};
