use serde::{Deserialize, Serialize};

use super::span::ByteSpan;

/// A `(line, column)` pair in the host's position model.
///
/// Both components are 0-based; `column` counts UTF-16 code units, matching
/// how editor hosts index within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// An ordered pair of [`Position`]s denoting a half-open span of the
/// document.
///
/// Ranges never outlive the text snapshot they were computed from; they are
/// recomputed on every document change, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Inclusive interval of lines this range touches.
    #[must_use]
    pub fn line_span(self) -> (u32, u32) {
        (self.start.line, self.end.line)
    }
}

/// Byte offset ↔ [`Position`] conversion for one text snapshot.
///
/// Built once per recompute pass; line starts are collected eagerly, UTF-16
/// column arithmetic happens on demand per conversion.
pub struct TextIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> TextIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    /// 0-based line containing the given byte offset.
    #[must_use]
    pub fn line_of(&self, byte: usize) -> u32 {
        (self.line_starts.partition_point(|&start| start <= byte) - 1) as u32
    }

    /// Converts a byte offset (on a char boundary) to a host position.
    #[must_use]
    pub fn position_of(&self, byte: usize) -> Position {
        let byte = byte.min(self.text.len());
        let line = self.line_of(byte);
        let line_start = self.line_starts[line as usize];
        let column = self.text[line_start..byte].encode_utf16().count() as u32;
        Position { line, column }
    }

    /// Converts a host position back to a byte offset.
    ///
    /// Positions past the end of a line clamp to the line end; lines past the
    /// end of the document clamp to the document end.
    #[must_use]
    pub fn byte_of(&self, pos: Position) -> usize {
        let Some(&line_start) = self.line_starts.get(pos.line as usize) else {
            return self.text.len();
        };
        let line_end = self
            .line_starts
            .get(pos.line as usize + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.text.len());
        let line = &self.text[line_start..line_end];
        let mut units = 0u32;
        for (i, ch) in line.char_indices() {
            if units >= pos.column {
                return line_start + i;
            }
            units += ch.len_utf16() as u32;
        }
        line_end
    }

    /// Converts a byte span to a host range.
    #[must_use]
    pub fn range_of(&self, span: ByteSpan) -> Range {
        Range {
            start: self.position_of(span.start),
            end: self.position_of(span.end),
        }
    }

    /// Inclusive interval of lines a byte span touches.
    ///
    /// The exclusive end offset is pulled back one byte so a span ending
    /// exactly on a newline does not count the following line.
    #[must_use]
    pub fn line_span(&self, span: ByteSpan) -> (u32, u32) {
        let first = self.line_of(span.start);
        let last = self.line_of(span.end.saturating_sub(1).max(span.start));
        (first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_of_finds_lines() {
        let idx = TextIndex::new("ab\ncd\n\nef");
        assert_eq!(idx.line_of(0), 0);
        assert_eq!(idx.line_of(2), 0);
        assert_eq!(idx.line_of(3), 1);
        assert_eq!(idx.line_of(6), 2);
        assert_eq!(idx.line_of(7), 3);
    }

    #[test]
    fn position_of_ascii() {
        let idx = TextIndex::new("ab\ncd");
        assert_eq!(idx.position_of(4), Position { line: 1, column: 1 });
    }

    #[test]
    fn position_of_counts_utf16_units() {
        // é is 1 UTF-16 unit (2 bytes), 😀 is 2 UTF-16 units (4 bytes)
        let text = "é😀x";
        let idx = TextIndex::new(text);
        assert_eq!(idx.position_of(0).column, 0);
        assert_eq!(idx.position_of(2).column, 1);
        assert_eq!(idx.position_of(6).column, 3);
    }

    #[test]
    fn byte_of_round_trips() {
        let text = "é😀x\nplain";
        let idx = TextIndex::new(text);
        for (byte, _) in text.char_indices() {
            assert_eq!(idx.byte_of(idx.position_of(byte)), byte);
        }
        assert_eq!(idx.byte_of(idx.position_of(text.len())), text.len());
    }

    #[test]
    fn byte_of_clamps_past_end() {
        let idx = TextIndex::new("ab\ncd");
        assert_eq!(
            idx.byte_of(Position {
                line: 0,
                column: 99
            }),
            2
        );
        assert_eq!(
            idx.byte_of(Position {
                line: 9,
                column: 0
            }),
            5
        );
    }

    #[test]
    fn line_span_excludes_trailing_newline() {
        let idx = TextIndex::new("ab\ncd\nef");
        // "ab\n" touches only line 0
        assert_eq!(idx.line_span(ByteSpan::new(0, 3)), (0, 0));
        // "ab\ncd" touches lines 0..=1
        assert_eq!(idx.line_span(ByteSpan::new(0, 5)), (0, 1));
        // empty span sits on its own line
        assert_eq!(idx.line_span(ByteSpan::new(3, 3)), (1, 1));
    }
}
