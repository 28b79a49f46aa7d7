//! Common types and utilities for clxt commands.
//!
//! Shared by `tokenize` and `check`: output format selection, source
//! loading, effective lexer options, and diagnostic rendering.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use clx_lex::{ErrorPolicy, LexerConfig};
use clx_util::{Diagnostic, FileId, SourceMap};

use crate::error::{ClxtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `LL:CC Kind "text"` line per token
    #[default]
    Text,
    /// A JSON array with one object per file
    Json,
}

// ============================================================================
// Sources
// ============================================================================

/// Read every path into `sources`, returning the file ids in argument order.
///
/// A path given twice maps to the same id.
pub fn load_sources(sources: &mut SourceMap, paths: &[PathBuf]) -> Result<Vec<FileId>> {
    paths
        .iter()
        .map(|path| {
            let content = read_source(path)?;
            Ok(sources.add_file(path.display().to_string(), content))
        })
        .collect()
}

/// Read a UTF-8 source file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ClxtError::Input {
            path: path.to_path_buf(),
            reason: error_messages::INPUT_PATH_NOT_EXIST.to_string(),
        });
    }
    if !path.is_file() {
        return Err(ClxtError::Input {
            path: path.to_path_buf(),
            reason: error_messages::INPUT_PATH_NOT_FILE.to_string(),
        });
    }

    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ClxtError::Input {
        path: path.to_path_buf(),
        reason: error_messages::INPUT_NOT_UTF8.to_string(),
    })
}

// ============================================================================
// Lexer Options
// ============================================================================

/// Apply command-line switches on top of the configured lexer options.
pub fn effective_lexer_config(base: LexerConfig, trivia: bool, resilient: bool) -> LexerConfig {
    let mut config = base;
    if trivia {
        config.emit_whitespace = true;
        config.emit_comments = true;
    }
    if resilient {
        config.policy = ErrorPolicy::Resilient;
    }
    config
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Render diagnostics against the files their spans point into, one block
/// per diagnostic.
pub fn render_diagnostics(diagnostics: &[Diagnostic], sources: &SourceMap) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.render(sources.get(diagnostic.span.file_id).as_deref()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "no such file";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "not a regular file";

    /// Error when the file contents are not UTF-8.
    pub const INPUT_NOT_UTF8: &str = "file is not valid UTF-8";

    /// Error when zero worker threads are requested.
    pub const ZERO_JOBS: &str = "--jobs must be at least 1";
}
