//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, state dispatch and iterator
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and floating literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Punctuator lexing
//! - `comment` - Comment and whitespace lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, tokenize_with, Lexer, State};
