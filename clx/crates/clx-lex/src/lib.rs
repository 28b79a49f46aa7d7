//! clx-lex - Lexical Analyzer for C Source Text
//!
//! This crate turns C source text into a lazy stream of classified tokens:
//! identifiers, keywords, integer and floating literals with their parsed
//! suffixes, character and string literals with escapes decoded,
//! punctuators, comments and (optionally) whitespace.
//!
//! # Example Usage
//!
//! ```
//! use clx_lex::{Lexer, TokenKind};
//!
//! let source = "unsigned long n = 161718lu;";
//! let mut lexer = Lexer::new(source);
//!
//! // Iterate through tokens; the stream ends with one `EndOfFile`
//! for token in &mut lexer {
//!     let token = token.unwrap();
//!     println!("{}", token);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().unwrap().text, "unsigned");
//! ```
//!
//! # Lossless Mode
//!
//! With [`LexerConfig::lossless`], whitespace and comments are emitted too
//! and concatenating the token texts reproduces the input:
//!
//! ```
//! use clx_lex::{reconstruct, tokenize_with, LexerConfig};
//!
//! let source = "int x; /* note */\n";
//! let tokens = tokenize_with(source, LexerConfig::lossless()).unwrap();
//! assert_eq!(reconstruct(&tokens), source);
//! ```
//!
//! # Module Structure
//!
//! - [`chars`] - Character classification
//! - [`cursor`] - Character cursor for source traversal
//! - [`token`] - Token type definitions, keyword and punctuator tables
//! - [`lexer`] - Main lexer implementation
//! - [`config`] - Lexer options and error policy
//! - [`error`] - Lexical error type
//!
//! # Errors
//!
//! Errors are yielded in-stream as `Err(LexError)`. Under
//! [`ErrorPolicy::Strict`] (the default) the stream ends after the first
//! error; under [`ErrorPolicy::Resilient`] it continues after the offending
//! text. Warnings (multi-character literals, unknown escapes) never
//! interrupt the stream and only reach an attached [`clx_util::Handler`].

#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{ErrorPolicy, LexerConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind};
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use token::{
    reconstruct, CharValue, CommentStyle, FloatSuffix, FloatValue, IntRank, IntegerSuffix,
    IntegerValue, Keyword, NumberBase, Punct, StringValue, Token, TokenKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Token<'static>: Send, Sync, Clone);
    assert_impl_all!(LexError: Send, Sync, std::error::Error);
    assert_impl_all!(LexerConfig: Send, Sync, Copy, Default);
    assert_impl_all!(Cursor<'static>: Send, Sync);

    /// Helper to collect all non-trivia tokens as (kind name, text).
    fn lex_all(source: &str) -> Vec<(&'static str, &str)> {
        tokenize_with(
            source,
            LexerConfig {
                emit_comments: false,
                ..LexerConfig::default()
            },
        )
        .unwrap()
        .into_iter()
        .filter(|t| !t.is_eof())
        .map(|t| (t.kind.name(), t.text))
        .collect()
    }

    #[test]
    fn test_enum_declaration() {
        assert_eq!(
            lex_all("eA, eB, eC = 5, eD"),
            [
                ("Identifier", "eA"),
                ("Punctuator", ","),
                ("Identifier", "eB"),
                ("Punctuator", ","),
                ("Identifier", "eC"),
                ("Punctuator", "="),
                ("IntegerLiteral", "5"),
                ("Punctuator", ","),
                ("Identifier", "eD"),
            ]
        );

        let five = tokenize("eC = 5").unwrap().remove(2);
        assert_eq!(
            five.kind,
            TokenKind::IntegerLiteral(IntegerValue {
                value: 5,
                base: NumberBase::Decimal,
                suffix: IntegerSuffix::new(false, IntRank::Int),
            })
        );
    }

    #[test]
    fn test_struct_declaration() {
        let source = "struct S {\n    int a;\n    char *b;\n};";
        let kinds: Vec<&str> = lex_all(source).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            [
                "Keyword",
                "Identifier",
                "Punctuator",
                "Keyword",
                "Identifier",
                "Punctuator",
                "Keyword",
                "Punctuator",
                "Identifier",
                "Punctuator",
                "Punctuator",
                "Punctuator",
            ]
        );
    }

    #[test]
    fn test_function_definition() {
        let source = "int main(int argc, char **argv) {\n    return argc > 1 ? 0 : -1;\n}\n";
        let texts: Vec<&str> = lex_all(source).into_iter().map(|(_, t)| t).collect();
        assert_eq!(
            texts,
            [
                "int", "main", "(", "int", "argc", ",", "char", "*", "*", "argv", ")", "{",
                "return", "argc", ">", "1", "?", "0", ":", "-", "1", ";", "}",
            ]
        );
    }

    #[test]
    fn test_line_column_tracking() {
        let tokens = tokenize("int a;\n  char c = 'c';\n").unwrap();
        let positions: Vec<(u32, u32)> = tokens
            .iter()
            .map(|t| (t.span.line, t.span.column))
            .collect();
        assert_eq!(
            positions,
            [(1, 1), (1, 5), (1, 6), (2, 3), (2, 8), (2, 10), (2, 12), (2, 15), (3, 1)]
        );
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize("\"é\" x").unwrap();
        assert_eq!(tokens[1].span.column, 5);
        assert_eq!(tokens[1].span.start, 5);
    }

    #[test]
    fn test_lossless_reconstruction() {
        let source = "/* head */\nint x = 0x1F; // tail\r\n\tchar *s = \"a\\\nb\";\\\n";
        let tokens = tokenize_with(source, LexerConfig::lossless()).unwrap();
        assert_eq!(reconstruct(&tokens), source);

        let mut offset = 0;
        for token in &tokens {
            assert_eq!(token.span.start, offset);
            offset = token.span.end;
        }
        assert_eq!(offset, source.len());
    }

    #[test]
    fn test_retokenizing_is_idempotent() {
        let source = "float f = 1.23F; /* c */ unsigned u = 0777L;";
        let first = tokenize_with(source, LexerConfig::lossless()).unwrap();
        let rebuilt = reconstruct(&first);
        let second = tokenize_with(&rebuilt, LexerConfig::lossless()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("  \n\t  \r\n").is_empty());
    }

    #[test]
    fn test_comments_only() {
        assert!(lex_all("// c\n/* d */").is_empty());
    }

    #[test]
    fn test_resilient_collects_every_error() {
        let source = "int a = 12uu;\nchar c = '';\nx @ y;\n/* open";
        let config = LexerConfig::default().with_policy(ErrorPolicy::Resilient);
        let (tokens, errors) = Lexer::with_config(source, config).tokens_and_errors();

        let kinds: Vec<&LexErrorKind> = errors.iter().map(|e| &e.kind).collect();
        assert_eq!(
            kinds,
            [
                &LexErrorKind::InvalidSuffix { suffix: "uu".into() },
                &LexErrorKind::EmptyCharLiteral,
                &LexErrorKind::UnexpectedCharacter { ch: '@' },
                &LexErrorKind::UnterminatedComment,
            ]
        );
        let lines: Vec<u32> = errors.iter().map(|e| e.span.line).collect();
        assert_eq!(lines, [1, 2, 3, 4]);
        assert!(tokens.last().unwrap().is_eof());
        assert!(tokens.iter().any(|t| t.text == "y"));
    }

    #[test]
    fn test_resilient_unterminated_literal_resumes_at_newline() {
        let config = LexerConfig::default().with_policy(ErrorPolicy::Resilient);
        let (tokens, errors) = Lexer::with_config("s = \"abc\nint x;", config).tokens_and_errors();
        assert_eq!(errors.len(), 1);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, ["s", "=", "int", "x", ";", ""]);
        assert_eq!(tokens[2].span.line, 2);
    }
}
