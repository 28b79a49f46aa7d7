//! Token definitions for C source text.
//!
//! A [`Token`] borrows its text from the source buffer, so the tokens of a
//! buffer can be concatenated back into it (see [`reconstruct`]) when trivia
//! is emitted.

use std::fmt;

use clx_util::Span;
use serde::{Serialize, Serializer};

/// A classified slice of source text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact source slice, including quotes, prefixes and suffixes.
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true for whitespace and comments.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment(_))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {} {:?}",
            self.span.line, self.span.column, self.kind, self.text
        )
    }
}

/// The kind of a token, with a kind-specific payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    IntegerLiteral(IntegerValue),
    FloatLiteral(FloatValue),
    CharLiteral(CharValue),
    StringLiteral(StringValue),
    Punctuator(Punct),
    Comment(CommentStyle),
    Whitespace,
    EndOfFile,
}

impl TokenKind {
    /// Stable name of the kind, without payload.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::IntegerLiteral(_) => "IntegerLiteral",
            TokenKind::FloatLiteral(_) => "FloatLiteral",
            TokenKind::CharLiteral(_) => "CharLiteral",
            TokenKind::StringLiteral(_) => "StringLiteral",
            TokenKind::Punctuator(_) => "Punctuator",
            TokenKind::Comment(_) => "Comment",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::EndOfFile => "EndOfFile",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Radix a numeric literal was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl NumberBase {
    pub const fn radix(self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }
}

/// Integer rank selected by the `l`/`ll` suffix markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntRank {
    #[default]
    Int = 0,
    Long = 1,
    LongLong = 2,
}

/// Parsed integer suffix. Marker order is insignificant: `lu` equals `ul`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct IntegerSuffix {
    pub unsigned: bool,
    pub rank: IntRank,
}

impl IntegerSuffix {
    pub const fn new(unsigned: bool, rank: IntRank) -> Self {
        Self { unsigned, rank }
    }

    /// Parses a suffix run such as `u`, `LL`, `llu` or `uL`.
    ///
    /// At most one unsigned marker and one long group are allowed; the two
    /// markers of `ll` must be adjacent and may differ in case.
    ///
    /// ```
    /// use clx_lex::token::{IntRank, IntegerSuffix};
    ///
    /// assert_eq!(IntegerSuffix::parse("lu"), Some(IntegerSuffix::new(true, IntRank::Long)));
    /// assert_eq!(IntegerSuffix::parse("lL"), Some(IntegerSuffix::new(false, IntRank::LongLong)));
    /// assert_eq!(IntegerSuffix::parse("lul"), None);
    /// assert_eq!(IntegerSuffix::parse("uu"), None);
    /// ```
    pub fn parse(suffix: &str) -> Option<Self> {
        let bytes = suffix.as_bytes();
        let mut unsigned = false;
        let mut rank = None;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'u' | b'U' if !unsigned => {
                    unsigned = true;
                    i += 1;
                },
                b'l' | b'L' if rank.is_none() => {
                    if matches!(bytes.get(i + 1), Some(b'l' | b'L')) {
                        rank = Some(IntRank::LongLong);
                        i += 2;
                    } else {
                        rank = Some(IntRank::Long);
                        i += 1;
                    }
                },
                _ => return None,
            }
        }

        Some(Self::new(unsigned, rank.unwrap_or_default()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct IntegerValue {
    pub value: u64,
    pub base: NumberBase,
    pub suffix: IntegerSuffix,
}

/// Floating suffix: none (`double`), `f`/`F` (`float`) or `l`/`L`
/// (`long double`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatSuffix {
    #[default]
    None,
    Float,
    LongDouble,
}

impl FloatSuffix {
    pub fn parse(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(FloatSuffix::None),
            "f" | "F" => Some(FloatSuffix::Float),
            "l" | "L" => Some(FloatSuffix::LongDouble),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FloatValue {
    pub value: f64,
    pub suffix: FloatSuffix,
}

/// Decoded character literal.
///
/// Multi-character literals fold their units into `value`, eight bits per
/// unit, the way common C compilers do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CharValue {
    pub value: u32,
    pub multi_char: bool,
}

/// Decoded string literal, escapes resolved and line splices removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct StringValue {
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// `// ...` up to, not including, the end of the line
    Line,
    /// `/* ... */`
    Block,
}

/// Generates a spelling-backed enum with its lookup tables.
macro_rules! spelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident, table $table:ident {
            $($variant:ident => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// Returns the source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        pub static $table: &[(&str, $name)] = &[
            $(($text, $name::$variant),)*
        ];
    };
}

spelled_enum! {
    /// C17 keywords.
    pub enum Keyword, table KEYWORDS {
        Auto => "auto",
        Break => "break",
        Case => "case",
        Char => "char",
        Const => "const",
        Continue => "continue",
        Default => "default",
        Do => "do",
        Double => "double",
        Else => "else",
        Enum => "enum",
        Extern => "extern",
        Float => "float",
        For => "for",
        Goto => "goto",
        If => "if",
        Inline => "inline",
        Int => "int",
        Long => "long",
        Register => "register",
        Restrict => "restrict",
        Return => "return",
        Short => "short",
        Signed => "signed",
        Sizeof => "sizeof",
        Static => "static",
        Struct => "struct",
        Switch => "switch",
        Typedef => "typedef",
        Union => "union",
        Unsigned => "unsigned",
        Void => "void",
        Volatile => "volatile",
        While => "while",
        Alignas => "_Alignas",
        Alignof => "_Alignof",
        Atomic => "_Atomic",
        Bool => "_Bool",
        Complex => "_Complex",
        Generic => "_Generic",
        Imaginary => "_Imaginary",
        Noreturn => "_Noreturn",
        StaticAssert => "_Static_assert",
        ThreadLocal => "_Thread_local",
    }
}

impl Keyword {
    /// Looks up a complete identifier in the keyword set.
    ///
    /// ```
    /// use clx_lex::token::Keyword;
    ///
    /// assert_eq!(Keyword::lookup("struct"), Some(Keyword::Struct));
    /// assert_eq!(Keyword::lookup("_Bool"), Some(Keyword::Bool));
    /// assert_eq!(Keyword::lookup("structure"), None);
    /// ```
    pub fn lookup(ident: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == ident)
            .map(|&(_, keyword)| keyword)
    }
}

spelled_enum! {
    /// C punctuators. The table lists longer spellings before their prefixes.
    pub enum Punct, table PUNCTUATORS {
        Ellipsis => "...",
        ShlAssign => "<<=",
        ShrAssign => ">>=",
        Arrow => "->",
        PlusPlus => "++",
        MinusMinus => "--",
        Shl => "<<",
        Shr => ">>",
        LessEq => "<=",
        GreaterEq => ">=",
        EqEq => "==",
        NotEq => "!=",
        AndAnd => "&&",
        OrOr => "||",
        StarAssign => "*=",
        SlashAssign => "/=",
        PercentAssign => "%=",
        PlusAssign => "+=",
        MinusAssign => "-=",
        AndAssign => "&=",
        CaretAssign => "^=",
        OrAssign => "|=",
        HashHash => "##",
        LBracket => "[",
        RBracket => "]",
        LParen => "(",
        RParen => ")",
        LBrace => "{",
        RBrace => "}",
        Dot => ".",
        Amp => "&",
        Star => "*",
        Plus => "+",
        Minus => "-",
        Tilde => "~",
        Bang => "!",
        Slash => "/",
        Percent => "%",
        Less => "<",
        Greater => ">",
        Caret => "^",
        Pipe => "|",
        Question => "?",
        Colon => ":",
        Semicolon => ";",
        Assign => "=",
        Comma => ",",
        Hash => "#",
    }
}

impl Punct {
    /// Returns the longest punctuator that prefixes `text`.
    ///
    /// ```
    /// use clx_lex::token::Punct;
    ///
    /// assert_eq!(Punct::longest_prefix("<<= 1"), Some(Punct::ShlAssign));
    /// assert_eq!(Punct::longest_prefix("<-"), Some(Punct::Less));
    /// assert_eq!(Punct::longest_prefix("@"), None);
    /// ```
    pub fn longest_prefix(text: &str) -> Option<Punct> {
        PUNCTUATORS
            .iter()
            .find(|(spelling, _)| text.starts_with(spelling))
            .map(|&(_, punct)| punct)
    }
}

/// Concatenates token texts.
///
/// For a stream produced with whitespace and comments enabled, this returns
/// the original source.
pub fn reconstruct<'t, 'a: 't, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'t Token<'a>>,
{
    tokens.into_iter().map(|token| token.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_suffix_accepts_c_spellings() {
        let cases = [
            ("", false, IntRank::Int),
            ("u", true, IntRank::Int),
            ("U", true, IntRank::Int),
            ("l", false, IntRank::Long),
            ("L", false, IntRank::Long),
            ("ul", true, IntRank::Long),
            ("lu", true, IntRank::Long),
            ("UL", true, IntRank::Long),
            ("ll", false, IntRank::LongLong),
            ("LL", false, IntRank::LongLong),
            ("Ll", false, IntRank::LongLong),
            ("ULL", true, IntRank::LongLong),
            ("llu", true, IntRank::LongLong),
        ];
        for (suffix, unsigned, rank) in cases {
            assert_eq!(
                IntegerSuffix::parse(suffix),
                Some(IntegerSuffix::new(unsigned, rank)),
                "suffix {suffix:?}"
            );
        }
    }

    #[test]
    fn test_integer_suffix_rejects_invalid_runs() {
        for suffix in ["uu", "lll", "lul", "ulu", "f", "x", "u8", "lf"] {
            assert_eq!(IntegerSuffix::parse(suffix), None, "suffix {suffix:?}");
        }
    }

    #[test]
    fn test_float_suffix() {
        assert_eq!(FloatSuffix::parse(""), Some(FloatSuffix::None));
        assert_eq!(FloatSuffix::parse("F"), Some(FloatSuffix::Float));
        assert_eq!(FloatSuffix::parse("l"), Some(FloatSuffix::LongDouble));
        assert_eq!(FloatSuffix::parse("fl"), None);
        assert_eq!(FloatSuffix::parse("u"), None);
    }

    #[test]
    fn test_keyword_table_round_trips() {
        assert_eq!(KEYWORDS.len(), 44);
        for &(text, keyword) in KEYWORDS {
            assert_eq!(keyword.as_str(), text);
            assert_eq!(Keyword::lookup(text), Some(keyword));
        }
        assert_eq!(Keyword::lookup("Int"), None);
    }

    #[test]
    fn test_punctuator_table_is_longest_first() {
        for (i, (text, _)) in PUNCTUATORS.iter().enumerate() {
            for (later, _) in &PUNCTUATORS[i + 1..] {
                assert!(
                    !later.starts_with(text) || later == text,
                    "{later:?} is shadowed by {text:?}"
                );
            }
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Identifier.name(), "Identifier");
        assert_eq!(TokenKind::Punctuator(Punct::Comma).to_string(), "Punctuator");
        assert_eq!(TokenKind::Comment(CommentStyle::Line).name(), "Comment");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(
            TokenKind::Keyword(Keyword::Char),
            "char",
            Span::new(0, 4, 3, 5),
        );
        assert_eq!(token.to_string(), "03:05 Keyword \"char\"");
    }

    #[test]
    fn test_token_serializes_payload() {
        let token = Token::new(
            TokenKind::IntegerLiteral(IntegerValue {
                value: 255,
                base: NumberBase::Hexadecimal,
                suffix: IntegerSuffix::new(true, IntRank::Int),
            }),
            "0xFFu",
            Span::new(0, 5, 1, 1),
        );
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["text"], "0xFFu");
        assert_eq!(json["kind"]["IntegerLiteral"]["value"], 255);
        assert_eq!(json["kind"]["IntegerLiteral"]["base"], "hexadecimal");
        assert_eq!(json["kind"]["IntegerLiteral"]["suffix"]["rank"], "int");
        assert_eq!(json["span"]["line"], 1);
    }

    #[test]
    fn test_is_trivia() {
        let ws = Token::new(TokenKind::Whitespace, " ", Span::DUMMY);
        let comment = Token::new(TokenKind::Comment(CommentStyle::Block), "/**/", Span::DUMMY);
        let ident = Token::new(TokenKind::Identifier, "x", Span::DUMMY);
        assert!(ws.is_trivia());
        assert!(comment.is_trivia());
        assert!(!ident.is_trivia());
    }

    #[test]
    fn test_reconstruct() {
        let tokens = [
            Token::new(TokenKind::Identifier, "a", Span::DUMMY),
            Token::new(TokenKind::Whitespace, " ", Span::DUMMY),
            Token::new(TokenKind::Punctuator(Punct::Assign), "=", Span::DUMMY),
            Token::new(TokenKind::EndOfFile, "", Span::DUMMY),
        ];
        assert_eq!(reconstruct(&tokens), "a =");
    }
}
