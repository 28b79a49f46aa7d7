//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use clx_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(format!("{}", Level::Warning), "warning");
//! ```

use std::fmt;

use serde::Serialize;

/// Diagnostic severity level
///
/// Errors correspond to lexical errors that the tokenizer also reports to its
/// caller; warnings flag constructs that tokenize fine but are suspicious.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Invalid source text
    Error,
    /// Suspicious but accepted source text
    Warning,
    /// Additional information attached to a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the lowercase name used when rendering
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
