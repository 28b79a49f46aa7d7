//! Character classification for C source text.
//!
//! Pure predicates over a single character. Identifiers are ASCII-only:
//! anything outside `[A-Za-z0-9_]` ends an identifier.

/// Byte order mark accepted at the very start of a source buffer.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use clx_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Checks if a character is C whitespace: space, tab, newline, carriage
/// return, form feed or vertical tab.
///
/// # Example
///
/// ```
/// use clx_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\x0B'));
/// assert!(is_whitespace('\x0C'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Converts a hex digit character to its numeric value.
///
/// ```
/// use clx_lex::chars::hex_digit_value;
///
/// assert_eq!(hex_digit_value('7'), Some(7));
/// assert_eq!(hex_digit_value('f'), Some(15));
/// assert_eq!(hex_digit_value('G'), None);
/// ```
#[inline]
pub fn hex_digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}
