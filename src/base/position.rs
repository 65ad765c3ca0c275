//! Position tracking for syntax elements
//!
//! Stores the source location (line/column/byte) of blocks, labels and
//! attributes for diagnostics, hover and go-to-definition.

use std::fmt;
use std::sync::Arc;

use text_size::{TextRange, TextSize};

/// A position in source code.
///
/// Lines and columns are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
    pub byte: usize,
}

impl Pos {
    pub fn new(line: usize, column: usize, byte: usize) -> Self {
        Self { line, column, byte }
    }

    /// Position of byte `offset` within `source`.
    ///
    /// Columns count characters, so multi-byte characters advance the column
    /// by one. Offsets past the end clamp to the end of `source`.
    pub fn at_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
            byte: offset,
        }
    }

    /// Move `n` single-byte characters forward on the same line
    pub fn advance(self, n: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + n,
            byte: self.byte + n,
        }
    }

    /// Move `n` single-byte characters back on the same line.
    ///
    /// Saturates at the start of the line and the start of the file.
    pub fn retreat(self, n: usize) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_sub(n).max(1),
            byte: self.byte.saturating_sub(n),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range `[start, end)` in a named source file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    pub filename: Arc<str>,
    pub start: Pos,
    pub end: Pos,
}

impl Range {
    pub fn new(filename: impl Into<Arc<str>>, start: Pos, end: Pos) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }

    /// Range covering bytes `start..end` of `source`
    pub fn from_offsets(
        filename: impl Into<Arc<str>>,
        source: &str,
        start: usize,
        end: usize,
    ) -> Self {
        Self::new(
            filename,
            Pos::at_offset(source, start),
            Pos::at_offset(source, end),
        )
    }

    /// Create a zero-width range at `pos`
    pub fn empty_at(filename: impl Into<Arc<str>>, pos: Pos) -> Self {
        Self::new(filename, pos, pos)
    }

    /// Range spanning from the start of `start` to the end of `end`
    pub fn between(start: &Range, end: &Range) -> Self {
        Self {
            filename: start.filename.clone(),
            start: start.start,
            end: end.end,
        }
    }

    /// Check if a position falls within this range (end exclusive)
    pub fn contains_pos(&self, pos: Pos) -> bool {
        self.contains_offset(pos.byte)
    }

    /// Check if a byte offset falls within this range (end exclusive)
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start.byte <= offset && offset < self.end.byte
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.filename == other.filename
            && self.start.byte < other.end.byte
            && other.start.byte < self.end.byte
    }

    pub fn is_empty(&self) -> bool {
        self.start.byte >= self.end.byte
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// Byte span as a [`TextRange`], or `None` if the offsets do not fit in `u32`
    pub fn text_range(&self) -> Option<TextRange> {
        let start = TextSize::try_from(self.start.byte).ok()?;
        let end = TextSize::try_from(self.end.byte).ok()?;
        (start <= end).then(|| TextRange::new(start, end))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.filename, self.start, self.end)
    }
}
