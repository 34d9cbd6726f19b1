//! # Text Geometry
//!
//! Byte-level span primitives and the byte-offset ↔ host-position index.
//!
//! Matchers work in byte offsets (the native coordinate of Rust string
//! slicing and the `regex` crate). Hosts speak `(line, column)` positions
//! with UTF-16 columns, so everything crossing the pipeline boundary is
//! converted through a [`TextIndex`] built once per recompute.
//!
//! - **`span`**: `ByteSpan`, the `[start, end)` byte range all matchers emit
//! - **`index`**: `Position`, `Range`, and `TextIndex` for conversion

pub mod index;
pub mod span;

pub use index::{Position, Range, TextIndex};
pub use span::ByteSpan;
