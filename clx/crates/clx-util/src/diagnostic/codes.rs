//! Diagnostic codes for categorizing tokenizer errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tools can filter or look up a specific problem.
//!
//! # Examples
//!
//! ```
//! use clx_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_INVALID_SUFFIX;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 3);
//! assert_eq!(code.as_str(), "E0003");
//! ```

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is zero-padded to four
/// digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001", "W0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERRORS (E0001-E0999)
    // =========================================================================

    /// E0001: `/*` without a closing `*/`
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 1);
    /// E0002: character or string literal missing its closing quote
    pub const E_UNTERMINATED_LITERAL: Self = Self::new("E", 2);
    /// E0003: numeric literal with an invalid suffix
    pub const E_INVALID_SUFFIX: Self = Self::new("E", 3);
    /// E0004: character that starts no token
    pub const E_UNEXPECTED_CHARACTER: Self = Self::new("E", 4);
    /// E0005: numeric literal with missing digits or an out-of-range value
    pub const E_MALFORMED_NUMBER: Self = Self::new("E", 5);
    /// E0006: `''`
    pub const E_EMPTY_CHAR_LITERAL: Self = Self::new("E", 6);

    // =========================================================================
    // LEXICAL WARNINGS (W0001-W0999)
    // =========================================================================

    /// W0001: character literal holding more than one character
    pub const W_MULTI_CHAR_LITERAL: Self = Self::new("W", 1);
    /// W0002: backslash followed by a character with no escape meaning
    pub const W_UNKNOWN_ESCAPE: Self = Self::new("W", 2);
    /// W0003: numeric escape whose value does not fit
    pub const W_ESCAPE_OUT_OF_RANGE: Self = Self::new("W", 3);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}
