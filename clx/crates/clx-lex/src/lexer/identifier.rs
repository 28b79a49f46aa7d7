//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{Keyword, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads the maximal `[A-Za-z0-9_]` run, then checks it against the C
    /// keyword set.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        Keyword::lookup(text).map_or(TokenKind::Identifier, TokenKind::Keyword)
    }
}
