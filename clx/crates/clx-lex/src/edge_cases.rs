//! Edge case tests for clx-lex
