//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `123U`, `161718lu`
//! - Octal: `0777L` (a leading `0` followed only by octal digits)
//! - Hexadecimal: `0xFFu`, hex floats `0x1.8p3`
//! - Binary: `0b1010`
//! - Float: `3.14`, `.5`, `1.`, `1e10`, `2.5e-3f`, `7.89L`
//!
//! The suffix is the maximal run of identifier characters after the digits.
//! Whether `l`/`L` means `long` or `long double` depends only on whether the
//! literal has a fraction or exponent.

use crate::chars::{
    hex_digit_value, is_binary_digit, is_digit, is_hex_digit, is_ident_continue, is_octal_digit,
};
use crate::error::LexErrorKind;
use crate::token::{
    FloatSuffix, FloatValue, IntegerSuffix, IntegerValue, NumberBase, TokenKind,
};
use crate::{LexError, Lexer};

/// Byte ranges of the parts of a scanned literal, relative to the source.
struct NumberParts {
    base: NumberBase,
    /// Digits before the radix point, prefix excluded
    integer: (usize, usize),
    /// Digits after the radix point, if a point was present
    fraction: Option<(usize, usize)>,
    /// Exponent digits with their sign, if an exponent was present
    exponent: Option<(usize, usize)>,
    suffix: (usize, usize),
}

impl NumberParts {
    fn is_float(&self) -> bool {
        self.fraction.is_some() || self.exponent.is_some()
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Entered at a decimal digit, or at `.` followed by a digit.
    pub(crate) fn lex_number(&mut self) -> Result<TokenKind, LexError> {
        let parts = self.scan_number();
        let source = self.cursor.source();
        let slice = |(start, end): (usize, usize)| &source[start..end];
        let suffix = slice(parts.suffix);

        if parts.base == NumberBase::Hexadecimal
            && parts.integer.0 == parts.integer.1
            && parts.fraction.map_or(true, |f| f.0 == f.1)
        {
            return Err(self.malformed("no digits after `0x`"));
        }

        if parts.is_float() {
            if parts.base == NumberBase::Hexadecimal && parts.exponent.is_none() {
                return Err(self.malformed("hexadecimal floating literal requires an exponent"));
            }
            let suffix = FloatSuffix::parse(suffix).ok_or_else(|| self.invalid_suffix(suffix))?;
            let value = if parts.base == NumberBase::Hexadecimal {
                hex_float_value(
                    slice(parts.integer),
                    parts.fraction.map_or("", slice),
                    parts.exponent.map_or("", slice),
                )
            } else {
                let end = parts.suffix.0;
                let start = parts.integer.0;
                source[start..end].parse::<f64>().unwrap_or(f64::INFINITY)
            };
            return self.float_literal(value, suffix);
        }

        // `1f` and `010f`: a plain digit sequence with an `f` suffix is a float.
        if matches!(suffix, "f" | "F")
            && matches!(parts.base, NumberBase::Decimal | NumberBase::Octal)
        {
            let value = slice(parts.integer).parse::<f64>().unwrap_or(f64::INFINITY);
            return self.float_literal(value, FloatSuffix::Float);
        }

        let suffix = IntegerSuffix::parse(suffix).ok_or_else(|| self.invalid_suffix(suffix))?;
        let value = u64::from_str_radix(slice(parts.integer), parts.base.radix())
            .map_err(|_| self.malformed("integer literal is too large"))?;

        Ok(TokenKind::IntegerLiteral(IntegerValue {
            value,
            base: parts.base,
            suffix,
        }))
    }

    /// Consumes the literal including its suffix, recording where each part
    /// lies.
    fn scan_number(&mut self) -> NumberParts {
        let c = self.cursor.current_char();
        let next = self.cursor.peek_char(1);

        if c == '0' && matches!(next, 'x' | 'X') {
            self.cursor.advance_n(2);
            let integer = self.scan_digits(is_hex_digit);
            let fraction = if self.cursor.match_char('.') {
                Some(self.scan_digits(is_hex_digit))
            } else {
                None
            };
            let exponent = self.scan_exponent(['p', 'P']);
            let suffix = self.scan_suffix();
            return NumberParts {
                base: NumberBase::Hexadecimal,
                integer,
                fraction,
                exponent,
                suffix,
            };
        }

        if c == '0' && matches!(next, 'b' | 'B') && is_binary_digit(self.cursor.peek_char(2)) {
            self.cursor.advance_n(2);
            let integer = self.scan_digits(is_binary_digit);
            let suffix = self.scan_suffix();
            return NumberParts {
                base: NumberBase::Binary,
                integer,
                fraction: None,
                exponent: None,
                suffix,
            };
        }

        let integer = self.scan_digits(is_digit);
        let fraction = if self.cursor.match_char('.') {
            Some(self.scan_digits(is_digit))
        } else {
            None
        };
        let exponent = self.scan_exponent(['e', 'E']);
        let suffix = self.scan_suffix();

        let digits = &self.cursor.source()[integer.0..integer.1];
        let is_octal = fraction.is_none()
            && exponent.is_none()
            && digits.len() > 1
            && digits.starts_with('0')
            && digits.chars().all(is_octal_digit);

        NumberParts {
            base: if is_octal {
                NumberBase::Octal
            } else {
                NumberBase::Decimal
            },
            integer,
            fraction,
            exponent,
            suffix,
        }
    }

    fn scan_digits(&mut self, is_digit: fn(char) -> bool) -> (usize, usize) {
        let start = self.cursor.position();
        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }
        (start, self.cursor.position())
    }

    /// Consumes an exponent if a marker is followed by digits, optionally
    /// signed. Otherwise the marker is left for the suffix.
    fn scan_exponent(&mut self, markers: [char; 2]) -> Option<(usize, usize)> {
        if !markers.contains(&self.cursor.current_char()) {
            return None;
        }
        let signed = matches!(self.cursor.peek_char(1), '+' | '-');
        let first_digit = self.cursor.peek_char(if signed { 2 } else { 1 });
        if !is_digit(first_digit) {
            return None;
        }

        self.cursor.advance();
        let start = self.cursor.position();
        if signed {
            self.cursor.advance();
        }
        let (_, end) = self.scan_digits(is_digit);
        Some((start, end))
    }

    fn scan_suffix(&mut self) -> (usize, usize) {
        let start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        (start, self.cursor.position())
    }

    fn float_literal(&self, value: f64, suffix: FloatSuffix) -> Result<TokenKind, LexError> {
        if !value.is_finite() {
            return Err(self.malformed("floating literal is out of range"));
        }
        Ok(TokenKind::FloatLiteral(FloatValue { value, suffix }))
    }

    fn invalid_suffix(&self, suffix: &str) -> LexError {
        self.error(LexErrorKind::InvalidSuffix {
            suffix: suffix.to_string(),
        })
    }

    fn malformed(&self, reason: &str) -> LexError {
        self.error(LexErrorKind::MalformedNumber {
            reason: reason.to_string(),
        })
    }
}

/// Computes `0x<integer>.<fraction>p<exponent>` as mantissa × 2^exponent.
///
/// The mantissa keeps at most 60 significant bits; digits past that only
/// move the binary exponent (integer part) or are dropped (fraction part).
fn hex_float_value(integer: &str, fraction: &str, exponent: &str) -> f64 {
    const MANTISSA_LIMIT: u64 = 1 << 60;
    const MAX_STEP: i64 = 1000;

    let mut mantissa = 0_u64;
    let mut scale = 0_i64;
    for digit in integer.chars().filter_map(hex_digit_value) {
        if mantissa < MANTISSA_LIMIT {
            mantissa = (mantissa << 4) | u64::from(digit);
        } else {
            scale += 4;
        }
    }
    for digit in fraction.trim_end_matches('0').chars().filter_map(hex_digit_value) {
        if mantissa < MANTISSA_LIMIT {
            mantissa = (mantissa << 4) | u64::from(digit);
            scale -= 4;
        }
    }
    if mantissa == 0 {
        return 0.0;
    }

    let (negative, digits) = match exponent.as_bytes().first() {
        Some(b'-') => (true, &exponent[1..]),
        Some(b'+') => (false, &exponent[1..]),
        _ => (false, exponent),
    };
    // Anything past this magnitude over- or underflows regardless of the mantissa.
    let magnitude = digits.bytes().fold(0_i64, |acc, d| {
        (acc * 10 + i64::from(d - b'0')).min(1 << 20)
    });
    let mut remaining = scale + if negative { -magnitude } else { magnitude };

    // Scale in steps so no intermediate power of two leaves the f64 range.
    let mut value = mantissa as f64;
    while remaining != 0 && value != 0.0 && value.is_finite() {
        let step = remaining.clamp(-MAX_STEP, MAX_STEP);
        value *= 2f64.powi(step as i32);
        remaining -= step;
    }
    value
}
