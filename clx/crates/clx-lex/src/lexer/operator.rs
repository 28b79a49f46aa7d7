//! Punctuator lexing.

use crate::error::LexErrorKind;
use crate::token::{Punct, TokenKind};
use crate::{LexError, Lexer};

impl<'a> Lexer<'a> {
    /// Lexes a punctuator, longest match first (`<<=` over `<<` over `<`).
    ///
    /// A character that starts no punctuator is consumed and reported as
    /// unexpected.
    pub(crate) fn lex_punctuator(&mut self) -> Result<TokenKind, LexError> {
        if let Some(punct) = Punct::longest_prefix(self.cursor.remaining()) {
            self.cursor.advance_n(punct.as_str().len());
            return Ok(TokenKind::Punctuator(punct));
        }

        let ch = self.cursor.current_char();
        self.cursor.advance();
        Err(self.error(LexErrorKind::UnexpectedCharacter { ch }))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Punct, TokenKind};
    use crate::{tokenize, LexErrorKind};

    fn puncts(source: &str) -> Vec<Punct> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .filter_map(|t| match t.kind {
                TokenKind::Punctuator(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(puncts("<<="), [Punct::ShlAssign]);
        assert_eq!(puncts("<<"), [Punct::Shl]);
        assert_eq!(puncts("<"), [Punct::Less]);
        assert_eq!(puncts("a<<=b"), [Punct::ShlAssign]);
    }

    #[test]
    fn test_greedy_splits() {
        assert_eq!(puncts("+++"), [Punct::PlusPlus, Punct::Plus]);
        assert_eq!(puncts("-->"), [Punct::MinusMinus, Punct::Greater]);
        assert_eq!(puncts("...."), [Punct::Ellipsis, Punct::Dot]);
        assert_eq!(puncts(".."), [Punct::Dot, Punct::Dot]);
        assert_eq!(puncts("###"), [Punct::HashHash, Punct::Hash]);
    }

    #[test]
    fn test_all_punctuators_round_trip() {
        for &(text, punct) in crate::token::PUNCTUATORS {
            assert_eq!(puncts(text), [punct], "punctuator {text:?}");
        }
    }

    #[test]
    fn test_slash_forms() {
        assert_eq!(puncts("a / b"), [Punct::Slash]);
        assert_eq!(puncts("a /= b"), [Punct::SlashAssign]);
    }

    #[test]
    fn test_cast_expression() {
        assert_eq!(
            puncts("((int*)&floats[0] + 1u)[12] = 12;"),
            [
                Punct::LParen,
                Punct::LParen,
                Punct::Star,
                Punct::RParen,
                Punct::Amp,
                Punct::LBracket,
                Punct::RBracket,
                Punct::Plus,
                Punct::RParen,
                Punct::LBracket,
                Punct::RBracket,
                Punct::Assign,
                Punct::Semicolon,
            ]
        );
    }

    #[test]
    fn test_digraphs_are_not_recognised() {
        assert_eq!(puncts("<:"), [Punct::Less, Punct::Colon]);
    }

    #[test]
    fn test_unexpected_character() {
        for (source, ch) in [("@", '@'), ("$", '$'), ("`", '`'), ("\\", '\\'), ("λ", 'λ')] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { ch });
            assert_eq!(err.span.end, source.len());
        }
    }
}
