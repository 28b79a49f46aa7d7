//! Property Tests - Invariants over Generated Input
//!
//! - Lossless token texts concatenate back to the source
//! - Re-tokenizing reconstructed text yields the same tokens
//! - Resilient lexing terminates on arbitrary text and accounts for every byte

use clx_lex::{
    reconstruct, tokenize, tokenize_with, ErrorPolicy, Lexer, LexerConfig, TokenKind,
};
use proptest::prelude::*;

/// Whitespace-separated fragments that never glue into an invalid token.
fn c_like_source() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        "[1-9][0-9]{0,8}[uUlL]{0,1}",
        "0x[0-9a-fA-F]{1,8}",
        "[0-9]{1,4}\\.[0-9]{1,4}([eE][+-]?[0-9]{1,2})?[fFlL]?",
        "\"[a-zA-Z0-9 ,.!?]{0,16}\"",
        "'[a-zA-Z0-9]'",
        "/\\*[a-zA-Z0-9 \n]{0,16}\\*/",
        "//[a-zA-Z0-9 ]{0,16}\n",
        prop::sample::select(vec![
            "+", "-", "*", "/", "%", "==", "!=", "<<=", ">>", "->", "...", "&&", "||", "?",
            ":", ";", ",", "(", ")", "[", "]", "{", "}", "#", "##",
        ])
        .prop_map(String::from),
    ];
    let separator = prop::sample::select(vec![" ", "\n", "\t", "\r\n", "  "]);
    prop::collection::vec((fragment, separator), 0..48).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, sep)| fragment + sep)
            .collect()
    })
}

#[test]
fn test_property_lossless_reconstruction() {
    proptest!(|(source in c_like_source())| {
        let tokens = tokenize_with(&source, LexerConfig::lossless()).unwrap();
        prop_assert_eq!(reconstruct(&tokens), source);
    });
}

#[test]
fn test_property_retokenizing_is_idempotent() {
    proptest!(|(source in c_like_source())| {
        let first = tokenize_with(&source, LexerConfig::lossless()).unwrap();
        let rebuilt = reconstruct(&first);
        let second = tokenize_with(&rebuilt, LexerConfig::lossless()).unwrap();
        prop_assert_eq!(first, second);
    });
}

#[test]
fn test_property_arbitrary_identifier_strings() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
        let tokens = tokenize(&input).unwrap();
        // One identifier or keyword, then end of file
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(tokens[0].kind, TokenKind::Identifier | TokenKind::Keyword(_)));
    });
}

#[test]
fn test_property_arbitrary_decimal_number_strings() {
    proptest!(|(input in "[0-9]{1,18}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(matches!(tokens[0].kind, TokenKind::IntegerLiteral(_)));
    });
}

#[test]
fn test_property_arbitrary_hex_number_strings() {
    proptest!(|(digits in "[0-9a-fA-F]{1,16}")| {
        let input = format!("0x{}", digits);
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        match &tokens[0].kind {
            TokenKind::IntegerLiteral(value) => {
                prop_assert_eq!(value.value, u64::from_str_radix(&digits, 16).unwrap());
            },
            other => prop_assert!(false, "expected integer literal, got {:?}", other),
        }
    });
}

#[test]
fn test_property_resilient_accounts_for_every_byte() {
    proptest!(|(source in any::<String>())| {
        let config = LexerConfig::lossless().with_policy(ErrorPolicy::Resilient);
        let mut ranges = Vec::new();
        for item in Lexer::with_config(&source, config) {
            let span = match item {
                Ok(token) => token.span,
                Err(err) => err.span,
            };
            ranges.push((span.start, span.end));
        }

        // Tokens and errors tile the input, ending with an empty EOF span
        let mut offset = 0;
        for (start, end) in ranges {
            prop_assert_eq!(start, offset);
            offset = end;
        }
        prop_assert_eq!(offset, source.len());
    });
}
