//! Lexical errors.

use clx_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// A lexical error with the span of the offending text.
///
/// The span's line/column point at the start of the construct: the opening
/// `/*` of an unterminated comment, the opening quote of an unterminated
/// literal, the first digit of a malformed number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {}:{}", .span.line, .span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// `/*` with no closing `*/` before end of input
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// Newline or end of input before the closing quote
    #[error("unterminated {} literal", literal_name(.quote))]
    UnterminatedLiteral { quote: char },

    #[error("invalid suffix `{suffix}` on numeric literal")]
    InvalidSuffix { suffix: String },

    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char },

    #[error("malformed numeric literal: {reason}")]
    MalformedNumber { reason: String },

    #[error("empty character literal")]
    EmptyCharLiteral,
}

fn literal_name(quote: &char) -> &'static str {
    if *quote == '\'' {
        "character"
    } else {
        "string"
    }
}

impl LexErrorKind {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_UNTERMINATED_COMMENT,
            LexErrorKind::UnterminatedLiteral { .. } => DiagnosticCode::E_UNTERMINATED_LITERAL,
            LexErrorKind::InvalidSuffix { .. } => DiagnosticCode::E_INVALID_SUFFIX,
            LexErrorKind::UnexpectedCharacter { .. } => DiagnosticCode::E_UNEXPECTED_CHARACTER,
            LexErrorKind::MalformedNumber { .. } => DiagnosticCode::E_MALFORMED_NUMBER,
            LexErrorKind::EmptyCharLiteral => DiagnosticCode::E_EMPTY_CHAR_LITERAL,
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            LexErrorKind::UnterminatedComment => Some("add `*/` to close the comment".into()),
            LexErrorKind::UnterminatedLiteral { quote } => Some(format!(
                "add a closing {quote} before the end of the line, or end the line with `\\`"
            )),
            LexErrorKind::InvalidSuffix { .. } => Some(
                "integer suffixes combine one `u` with `l` or `ll`; floating suffixes are `f` and `l`"
                    .into(),
            ),
            LexErrorKind::EmptyCharLiteral => {
                Some("write `'\\0'` for the null character".into())
            },
            LexErrorKind::UnexpectedCharacter { .. } | LexErrorKind::MalformedNumber { .. } => {
                None
            },
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Converts the error into a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.kind.to_string())
            .code(self.code())
            .span(self.span);
        match self.kind.help() {
            Some(help) => builder.help(help).build(),
            None => builder.build(),
        }
    }
}
