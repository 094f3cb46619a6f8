//! Position and location tracking for source code locations
//!
//! This module defines the data structures for representing positions and locations in source code,
//! as well as utilities for converting byte offsets to line/column positions.
//!
//! ## Types
//!
//! - [`Span`] - The byte span carried by every AST node
//! - [`Position`] - A line:column position in source code, used in error reports
//! - [`SourceLocation`] - Utility for converting byte offsets to positions
//!
//! ## Key Design
//!
//! - **Byte offsets, exclusive end**: spans index into the normalized source the lexer ran over
//! - **Sentinel, not Option**: a node whose span cannot be resolved carries [`Span::UNRESOLVED`]
//!   (`{-1, -1}`), which is also what hosts receive when the tree is serialized
//! - **Unicode-aware**: line starts are found via `char_indices()`

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// Represents a position in source code (line and column, both 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Byte span of an AST node: `start..end`, or the `{-1, -1}` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: isize,
    pub end: isize,
}

impl Span {
    /// Sentinel for nodes whose span cannot be resolved (e.g. synthesized empty nodes)
    pub const UNRESOLVED: Span = Span { start: -1, end: -1 };

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start as isize,
            end: end as isize,
        }
    }

    pub fn from_range(range: &ByteRange<usize>) -> Self {
        Self::new(range.start, range.end)
    }

    pub fn is_resolved(&self) -> bool {
        self.start >= 0 && self.end >= 0
    }

    /// The byte range, if resolved
    pub fn byte_range(&self) -> Option<ByteRange<usize>> {
        if self.is_resolved() {
            Some(self.start as usize..self.end as usize)
        } else {
            None
        }
    }

    /// Smallest span covering both, ignoring unresolved sides
    pub fn union(self, other: Span) -> Span {
        match (self.is_resolved(), other.is_resolved()) {
            (true, true) => Span {
                start: self.start.min(other.start),
                end: self.end.max(other.end),
            },
            (true, false) => self,
            (false, _) => other,
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::UNRESOLVED
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source code
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
