//! Comment and whitespace lexing.
//!
//! Trivia is scanned like any other token so that spans stay contiguous;
//! the driver drops it unless the configuration asks for it.

use crate::chars::{is_whitespace, BOM};
use crate::error::LexErrorKind;
use crate::token::{CommentStyle, TokenKind};
use crate::{LexError, Lexer};

impl<'a> Lexer<'a> {
    /// Lexes a run of whitespace.
    ///
    /// Backslash-newline splices and a byte order mark at offset 0 count as
    /// whitespace.
    pub(crate) fn lex_whitespace(&mut self) -> TokenKind {
        loop {
            let c = self.cursor.current_char();
            if self.cursor.is_at_end() {
                break;
            }
            if is_whitespace(c) || (c == BOM && self.cursor.position() == 0) {
                self.cursor.advance();
                continue;
            }
            match self.splice_len() {
                0 => break,
                n => self.cursor.advance_n(n),
            }
        }
        TokenKind::Whitespace
    }

    /// Lexes a line comment, from `//` up to but not including the line end.
    ///
    /// A backslash-newline continues the comment onto the next line.
    pub(crate) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.advance_n(2);

        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '\n' => break,
                '\r' if self.cursor.peek_char(1) == '\n' => break,
                '\\' if self.splice_len() > 0 => {
                    let splice = self.splice_len();
                    self.cursor.advance_n(splice);
                },
                _ => self.cursor.advance(),
            }
        }
        TokenKind::Comment(CommentStyle::Line)
    }

    /// Lexes a block comment, from `/*` through the first `*/`.
    ///
    /// Block comments do not nest. Reaching the end of input first is an
    /// error spanning from the opening `/*`.
    pub(crate) fn lex_block_comment(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance_n(2);

        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                return Ok(TokenKind::Comment(CommentStyle::Block));
            }
            self.cursor.advance();
        }

        Err(self.error(LexErrorKind::UnterminatedComment))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{CommentStyle, TokenKind};
    use crate::{tokenize, tokenize_with, LexErrorKind, LexerConfig};

    fn lossless(source: &str) -> Vec<(&'static str, &str)> {
        tokenize_with(source, LexerConfig::lossless())
            .unwrap()
            .iter()
            .map(|t| (t.kind.name(), t.text))
            .collect()
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        let tokens = tokenize("// This is a single-line comment\nx").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Comment(CommentStyle::Line));
        assert_eq!(tokens[0].text, "// This is a single-line comment");
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].span.line, 2);
    }

    #[test]
    fn test_line_comment_excludes_crlf() {
        let tokens = tokenize("// c\r\nx").unwrap();
        assert_eq!(tokens[0].text, "// c");
    }

    #[test]
    fn test_line_comment_at_eof() {
        let tokens = tokenize("x // trailing").unwrap();
        assert_eq!(tokens[1].text, "// trailing");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_line_comment_continued_by_splice() {
        let tokens = tokenize("// one \\\ntwo\nx").unwrap();
        assert_eq!(tokens[0].text, "// one \\\ntwo");
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].span.line, 3);
    }

    #[test]
    fn test_block_comment_counts_lines() {
        let tokens = tokenize("/* This is a\n multi-line comment */ x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Comment(CommentStyle::Block));
        assert_eq!(tokens[0].text, "/* This is a\n multi-line comment */");
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[1].span.line, 2);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let tokens = tokenize("/* a /* b */ c */").unwrap();
        assert_eq!(tokens[0].text, "/* a /* b */");
        assert_eq!(tokens[1].text, "c");
    }

    #[test]
    fn test_block_comment_needs_separate_close() {
        let err = tokenize("/*/ x").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_unterminated_block_comment_position() {
        let err = tokenize("int a;\n  /* open\nmore").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!((err.span.line, err.span.column), (2, 3));
        assert_eq!(err.span.start, 9);
        assert_eq!(err.span.end, 21);
    }

    #[test]
    fn test_whitespace_tokens() {
        assert_eq!(
            lossless(" \t\x0B\x0Cx\r\n"),
            [
                ("Whitespace", " \t\x0B\x0C"),
                ("Identifier", "x"),
                ("Whitespace", "\r\n"),
                ("EndOfFile", ""),
            ]
        );
    }

    #[test]
    fn test_splice_is_whitespace() {
        assert_eq!(
            lossless("a\\\nb"),
            [
                ("Identifier", "a"),
                ("Whitespace", "\\\n"),
                ("Identifier", "b"),
                ("EndOfFile", ""),
            ]
        );
    }

    #[test]
    fn test_leading_bom_is_whitespace() {
        assert_eq!(
            lossless("\u{FEFF}int"),
            [("Whitespace", "\u{FEFF}"), ("Keyword", "int"), ("EndOfFile", "")]
        );
    }

    #[test]
    fn test_bom_after_start_is_unexpected() {
        let err = tokenize("x\u{FEFF}").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { ch: '\u{FEFF}' });
    }
}
