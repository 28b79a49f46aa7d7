//! String and character literal lexing.
//!
//! Both literal forms share one body scanner that decodes escapes into code
//! units. Escapes are permissive: an unknown escape is kept as written and
//! reported as a warning.

use clx_util::DiagnosticCode;

use crate::chars::{hex_digit_value, is_hex_digit, is_octal_digit};
use crate::error::LexErrorKind;
use crate::token::{CharValue, StringValue, TokenKind};
use crate::{LexError, Lexer};

/// Largest value of a single octal or `\x` escape.
const MAX_BYTE_ESCAPE: u32 = 0xFF;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    pub(crate) fn lex_string(&mut self) -> Result<TokenKind, LexError> {
        let units = self.scan_quoted('"')?;
        let value = units
            .into_iter()
            .map(|unit| char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        Ok(TokenKind::StringLiteral(StringValue { value }))
    }

    /// Lexes a character literal.
    ///
    /// A literal holding several characters is accepted with a warning; its
    /// value packs the low byte of each unit, first unit most significant.
    pub(crate) fn lex_char(&mut self) -> Result<TokenKind, LexError> {
        let start = self.mark();
        let units = self.scan_quoted('\'')?;

        match units.as_slice() {
            [] => Err(self.error(LexErrorKind::EmptyCharLiteral)),
            [unit] => Ok(TokenKind::CharLiteral(CharValue {
                value: *unit,
                multi_char: false,
            })),
            units => {
                self.warn(
                    DiagnosticCode::W_MULTI_CHAR_LITERAL,
                    "multi-character character literal".to_string(),
                    start,
                );
                let value = units
                    .iter()
                    .fold(0u32, |acc, unit| (acc << 8) | (unit & 0xFF));
                Ok(TokenKind::CharLiteral(CharValue {
                    value,
                    multi_char: true,
                }))
            },
        }
    }

    /// Scans from the opening quote through the closing one, returning the
    /// decoded units.
    ///
    /// A line end (not preceded by a backslash) or the end of input before
    /// the closing quote is an error; the cursor is left on the line end so
    /// a resilient caller resumes there.
    fn scan_quoted(&mut self, quote: char) -> Result<Vec<u32>, LexError> {
        self.cursor.advance();
        let mut units = Vec::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedLiteral { quote }));
            }

            match self.cursor.current_char() {
                c if c == quote => {
                    self.cursor.advance();
                    return Ok(units);
                },
                '\n' => return Err(self.error(LexErrorKind::UnterminatedLiteral { quote })),
                '\r' if self.cursor.peek_char(1) == '\n' => {
                    return Err(self.error(LexErrorKind::UnterminatedLiteral { quote }));
                },
                '\\' => {
                    let splice = self.splice_len();
                    if splice > 0 {
                        self.cursor.advance_n(splice);
                    } else {
                        self.lex_escape(&mut units);
                    }
                },
                c => {
                    units.push(u32::from(c));
                    self.cursor.advance();
                },
            }
        }
    }

    /// Decodes one escape sequence starting at the backslash.
    ///
    /// Handles simple escapes (`\n \t \r \\ \' \" \? \a \b \f \v`), octal
    /// (`\0`, up to three digits), hex (`\x` with one or more digits) and
    /// universal character names (`\uXXXX`, `\UXXXXXXXX`).
    fn lex_escape(&mut self, units: &mut Vec<u32>) {
        let start = self.mark();
        self.cursor.advance();

        if self.cursor.is_at_end() {
            units.push(u32::from('\\'));
            return;
        }

        let c = self.cursor.current_char();
        let simple = match c {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '\\' => Some('\\'),
            '\'' => Some('\''),
            '"' => Some('"'),
            '?' => Some('?'),
            'a' => Some('\x07'),
            'b' => Some('\x08'),
            'f' => Some('\x0C'),
            'v' => Some('\x0B'),
            _ => None,
        };
        if let Some(value) = simple {
            self.cursor.advance();
            units.push(u32::from(value));
            return;
        }

        match c {
            c if is_octal_digit(c) => {
                let mut value = 0u32;
                for _ in 0..3 {
                    match self.cursor.current_char().to_digit(8) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            self.cursor.advance();
                        },
                        None => break,
                    }
                }
                units.push(self.byte_escape(value, start));
            },
            'x' if is_hex_digit(self.cursor.peek_char(1)) => {
                self.cursor.advance();
                let mut value = 0u32;
                while let Some(digit) = hex_digit_value(self.cursor.current_char()) {
                    value = value.saturating_mul(16).saturating_add(digit);
                    self.cursor.advance();
                }
                units.push(self.byte_escape(value, start));
            },
            'u' | 'U' if self.has_hex_digits(if c == 'u' { 4 } else { 8 }) => {
                let len = if c == 'u' { 4 } else { 8 };
                self.cursor.advance();
                let mut value = 0u32;
                for _ in 0..len {
                    value = (value << 4) | hex_digit_value(self.cursor.current_char()).unwrap_or(0);
                    self.cursor.advance();
                }
                if char::from_u32(value).is_none() {
                    self.warn(
                        DiagnosticCode::W_ESCAPE_OUT_OF_RANGE,
                        format!("universal character name {value:#X} is not a valid character"),
                        start,
                    );
                    value = u32::from(char::REPLACEMENT_CHARACTER);
                }
                units.push(value);
            },
            c => {
                self.cursor.advance();
                self.warn(
                    DiagnosticCode::W_UNKNOWN_ESCAPE,
                    format!("unknown escape sequence `\\{c}`"),
                    start,
                );
                units.push(u32::from('\\'));
                units.push(u32::from(c));
            },
        }
    }

    /// Returns true if the `count` characters after the escape letter are
    /// all hex digits.
    fn has_hex_digits(&self, count: usize) -> bool {
        (1..=count).all(|offset| is_hex_digit(self.cursor.peek_char(offset)))
    }

    /// Truncates an octal or hex escape to a byte, warning when it did not
    /// fit.
    fn byte_escape(&self, value: u32, start: super::core::Position) -> u32 {
        if value > MAX_BYTE_ESCAPE {
            self.warn(
                DiagnosticCode::W_ESCAPE_OUT_OF_RANGE,
                "escape sequence out of range".to_string(),
                start,
            );
        }
        value & MAX_BYTE_ESCAPE
    }
}
