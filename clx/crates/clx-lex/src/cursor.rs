//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor only moves forward. Lookahead is done with [`Cursor::peek_char`],
/// which never changes the position.
///
/// # Example
///
/// ```
/// use clx_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source. Use
    /// [`Cursor::is_at_end`] to tell the end apart from a NUL in the text.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use clx_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a<<=");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(3), '=');
    /// assert_eq!(cursor.peek_char(4), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source.as_bytes()[self.position..];

        // Fast path for ASCII (most common case)
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        // Slow path for UTF-8
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    ///
    /// # Example
    ///
    /// ```
    /// use clx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<<= 1");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), ' ');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use clx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("->");
    /// assert!(cursor.match_char('-'));
    /// assert!(!cursor.match_char('-'));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use clx_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("char *s;");
    /// let start = cursor.position();
    /// cursor.advance_n(4);
    /// assert_eq!(cursor.slice_from(start), "char");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
