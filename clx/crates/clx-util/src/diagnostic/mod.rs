//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! tokenizer diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use clx_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use clx_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_UNEXPECTED_CHARACTER)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;
use std::fmt::Write as _;

use serde::Serialize;

use crate::span::{SourceFile, Span};

/// A diagnostic message with severity and location
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic in the usual compiler layout
    ///
    /// ```text
    /// error[E0003]: invalid suffix `uu` on numeric literal
    ///   --> main.c:3:9
    ///   3 | int x = 12uu;
    ///     |         ^^^^
    ///   = help: integer suffixes combine one `u` with `l` or `ll`; floating suffixes are `f` and `l`
    /// ```
    ///
    /// When `file` is given and the diagnostic carries no snippet of its own,
    /// one is built from the span.
    pub fn render(&self, file: Option<&SourceFile>) -> String {
        let mut out = String::new();
        match self.code {
            Some(code) => {
                let _ = writeln!(out, "{}[{}]: {}", self.level, code, self.message);
            },
            None => {
                let _ = writeln!(out, "{}: {}", self.level, self.message);
            },
        }

        let name = file.map_or("<input>", SourceFile::name);
        let _ = writeln!(out, "  --> {}:{}", name, self.span);

        let derived = file
            .filter(|_| self.snippets.is_empty())
            .and_then(|file| SourceSnippet::from_span(file, self.span));
        for snippet in self.snippets.iter().chain(derived.as_ref()) {
            let _ = writeln!(out, "{}", snippet.format());
        }
        for note in &self.notes {
            let _ = writeln!(out, "  = note: {note}");
        }
        for help in &self.helps {
            let _ = writeln!(out, "  = help: {help}");
        }
        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a `RefCell`, so producers only
/// need a shared reference. It is not `Sync`: each tokenizer running on its
/// own thread gets its own handler.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_constructors() {
        let diag = Diagnostic::error("error message", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "error message");

        let diag = Diagnostic::warning("warning message", Span::DUMMY)
            .with_code(DiagnosticCode::W_UNKNOWN_ESCAPE)
            .with_note("note 1")
            .with_help("help 1");
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, Some(DiagnosticCode::W_UNKNOWN_ESCAPE));
        assert_eq!(diag.notes, vec!["note 1"]);
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_render_with_file() {
        let file = SourceFile::new(0, "main.c", "int x = 12uu;\n");
        let diag = Diagnostic::error("invalid suffix `uu` on integer literal", Span::new(8, 12, 1, 9))
            .with_code(DiagnosticCode::E_INVALID_SUFFIX)
            .with_help("use at most one `u` marker");
        let rendered = diag.render(Some(&file));

        assert!(rendered.starts_with("error[E0003]: invalid suffix `uu` on integer literal\n"));
        assert!(rendered.contains("  --> main.c:1:9\n"));
        assert!(rendered.contains("  1 | int x = 12uu;\n"));
        assert!(rendered.contains("    |         ^^^^\n"));
        assert!(rendered.ends_with("  = help: use at most one `u` marker\n"));
    }

    #[test]
    fn test_render_without_file() {
        let diag = Diagnostic::warning("unknown escape sequence `\\q`", Span::new(3, 5, 2, 4));
        assert_eq!(
            diag.render(None),
            "warning: unknown escape sequence `\\q`\n  --> <input>:2:4\n"
        );
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w2", Span::DUMMY));

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_take_and_clear() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        assert_eq!(handler.take().len(), 1);
        assert!(!handler.has_errors());

        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        handler.clear();
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_builder_emits_into_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("test error")
            .span(Span::DUMMY)
            .code(DiagnosticCode::E_MALFORMED_NUMBER)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_MALFORMED_NUMBER));
        assert_eq!(diags[0].level, Level::Error);
    }
}
