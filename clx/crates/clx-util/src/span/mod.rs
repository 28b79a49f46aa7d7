//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use clx_util::span::{FileId, Span};
//!
//! // A span covering bytes 10..20, starting at line 1, column 5
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//!
//! // The same span attributed to a specific file
//! let span = Span::with_file(10, 20, FileId(3), 1, 5);
//! assert_eq!(span.file_id.index(), 3);
//! ```

mod source_map;

use std::fmt;

use serde::Serialize;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileId(pub usize);

impl FileId {
    /// A placeholder id for sources that were never registered in a map
    pub const DUMMY: FileId = FileId(0);

    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` covers the half-open byte range `start..end` of a source buffer.
/// `line` and `column` are the 1-based human-readable coordinates of `start`;
/// columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    #[serde(skip)]
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for tests and synthesized diagnostics
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number of `start` (1-based)
    /// * `column` - Column number of `start` (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span attributed to a file
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Create an empty span at a line/column position
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the byte offset lies inside this span
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the span covering both `self` and `other`
    ///
    /// The line/column of the result are those of whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use clx_util::span::Span;
    ///
    /// let a = Span::new(4, 6, 1, 5);
    /// let b = Span::new(10, 12, 2, 3);
    /// let both = a.to(b);
    /// assert_eq!((both.start, both.end), (4, 12));
    /// assert_eq!((both.line, both.column), (1, 5));
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
            file_id: self.file_id,
        }
    }

    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_index() {
        let id = FileId::new(10);
        assert_eq!(id.index(), 10);
        assert_eq!(FileId::default(), FileId::DUMMY);
    }

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
        assert_eq!(span.file_id, FileId::DUMMY);
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(3, 7);
        assert!(span.is_empty());
        assert_eq!((span.line, span.column), (3, 7));
    }

    #[test]
    fn test_span_len_and_contains() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.len(), 10);
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
    }

    #[test]
    fn test_span_to_is_order_independent() {
        let a = Span::new(0, 2, 1, 1);
        let b = Span::new(8, 9, 3, 2);
        assert_eq!(a.to(b), b.to(a).with_file_id(a.file_id));
        assert_eq!(a.to(b).len(), 9);
    }

    #[test]
    fn test_span_with_file_id() {
        let span = Span::new(10, 20, 1, 5).with_file_id(FileId(2));
        assert_eq!(span.file_id, FileId(2));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 12, 4).to_string(), "12:4");
    }

    #[test]
    fn test_span_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
