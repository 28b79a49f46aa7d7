//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use clx_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.c", "int main(void) {}");
/// assert_eq!(file.name(), "main.c");
/// assert_eq!(file.content(), "int main(void) {}");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// An empty file, or a file whose last line has no terminator, still
    /// counts that final line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Columns are counted in characters, matching the positions the
    /// tokenizer attaches to its spans.
    ///
    /// # Examples
    ///
    /// ```
    /// use clx_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "a.c", "int x;\nchar *s;");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(12), (2, 6));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }

    /// Get the text of a 1-based line, without its terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Get the source line containing a byte offset
    pub fn line_at_offset(&self, offset: usize) -> Option<&str> {
        let (line, _) = self.offset_to_line_col(offset);
        self.line_at(line)
    }

    /// Extract the text covered by a span
    pub fn extract(&self, span: Span) -> SourceMapResult<&str> {
        let (start, end) = (span.start, span.end);
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or_else(|| SourceMapError::ExtractFailed(format!("{start}..{end} splits a character")))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A collection of source files addressed by [`FileId`] or by name
///
/// Files keep their insertion order; a file's id is its insertion index.
/// Re-adding a name replaces the content but keeps the id.
#[derive(Default)]
pub struct SourceMap {
    files: IndexMap<String, Arc<SourceFile>, FxBuildHasher>,
}

impl SourceMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file and return its id
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        let index = self
            .files
            .get_index_of(&name)
            .unwrap_or_else(|| self.files.len());
        let file = SourceFile::new(index, name.clone(), content);
        self.files.insert(name, Arc::new(file));
        FileId(index)
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get_index(id.0).map(|(_, file)| Arc::clone(file))
    }

    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Render `name:line:col` for a span, if its file is known
    pub fn location(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        Some(format!("{}:{}:{}", file.name(), span.line, span.column))
    }
}
