//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use serde::Serialize;

use super::{Diagnostic, DiagnosticCode, Level};
use crate::span::{SourceFile, Span};

/// A single source line with an underlined column range
///
/// # Examples
///
/// ```
/// use clx_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("int x = 09z;", 1, 9, 12).with_label("here");
/// let text = snippet.format();
/// assert!(text.contains("int x = 09z;"));
/// assert!(text.ends_with("^^^ here"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator
    pub line: String,
    /// 1-based line number
    pub line_number: usize,
    /// 1-based first underlined column
    pub start_column: usize,
    /// 1-based column one past the underline
    pub end_column: usize,
    /// Text printed after the underline
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Build the snippet for the first line a span touches
    ///
    /// Spans running past the end of their first line are underlined up to
    /// the end of that line.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line_number = span.line as usize;
        let line = file.line_at(line_number)?;
        let start_column = span.column as usize;
        let line_chars = line.chars().count();
        let span_chars = file
            .extract(span)
            .map_or(1, |text| text.chars().take_while(|&c| c != '\n').count());
        let end_column = (start_column + span_chars.max(1)).min(line_chars.max(start_column) + 1);
        Some(Self::new(line, line_number, start_column, end_column))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the line with a gutter and a caret underline
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }
        result
    }
}

/// Fluent builder for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use clx_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use clx_util::Span;
///
/// let diag = DiagnosticBuilder::error("invalid suffix `uu` on integer literal")
///     .code(DiagnosticCode::E_INVALID_SUFFIX)
///     .span(Span::new(0, 4, 1, 1))
///     .help("use at most one `u` marker")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and hand it to a handler
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
