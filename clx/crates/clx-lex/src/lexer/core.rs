//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the state dispatch, and the
//! token iterator.

use std::iter::FusedIterator;

use clx_util::{DiagnosticBuilder, DiagnosticCode, FileId, Handler, SourceFile, Span};
use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_start, is_whitespace, BOM};
use crate::config::{ErrorPolicy, LexerConfig};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

/// Scanner state selected from the first character of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Between tokens; whitespace is consumed here
    Start,
    InIdentifier,
    InNumber,
    InString,
    InChar,
    InLineComment,
    InBlockComment,
    InPunctuator,
    /// End of input, terminal
    End,
}

/// Tokenizer for C source text.
///
/// The lexer produces tokens lazily, in source order, one pass over the
/// buffer. Tokens borrow their text from the source.
///
/// # Example
///
/// ```
/// use clx_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("int x;");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.text, "int");
/// assert!(matches!(token.kind, TokenKind::Keyword(_)));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    config: LexerConfig,

    /// Optional sink for errors and warnings.
    handler: Option<&'a Handler>,

    file_id: FileId,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    state: State,

    /// Set once the iterator has yielded its last item.
    exhausted: bool,

    token_count: usize,
    error_count: usize,
    end_logged: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            handler: None,
            file_id: FileId::DUMMY,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            state: State::Start,
            exhausted: false,
            token_count: 0,
            error_count: 0,
            end_logged: false,
        }
    }

    /// Creates a lexer over a registered source file; spans carry its id.
    pub fn for_file(file: &'a SourceFile, config: LexerConfig) -> Self {
        Self::with_config(file.content(), config).with_file_id(file.id())
    }

    /// Reports errors and warnings to `handler` as they are found.
    pub fn with_handler(mut self, handler: &'a Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the next token from the source code.
    ///
    /// Trivia the configuration does not ask for is skipped. Once the input
    /// is exhausted, or after the first error under [`ErrorPolicy::Strict`],
    /// every call returns an `EndOfFile` token.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            self.begin_token();
            self.state = self.next_state();

            let kind = match self.dispatch() {
                Ok(kind) => kind,
                Err(err) => {
                    self.error_count += 1;
                    if self.config.policy == ErrorPolicy::Strict {
                        self.state = State::End;
                    } else {
                        debug!(error = %err, "recovered from lexical error");
                    }
                    return Err(err);
                },
            };

            let wanted = match kind {
                TokenKind::Whitespace => self.config.emit_whitespace,
                TokenKind::Comment(_) => self.config.emit_comments,
                _ => true,
            };
            if !wanted {
                continue;
            }

            let token = Token::new(kind, self.cursor.slice_from(self.token_start), self.token_span());
            self.token_count += 1;
            trace!(kind = token.kind.name(), text = token.text, line = token.span.line, "token");
            return Ok(token);
        }
    }

    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Picks the scanner for the character under the cursor.
    fn next_state(&self) -> State {
        if self.state == State::End || self.cursor.is_at_end() {
            return State::End;
        }

        let c = self.cursor.current_char();
        let next = self.cursor.peek_char(1);
        match c {
            c if is_whitespace(c) => State::Start,
            '\\' if self.splice_len() > 0 => State::Start,
            BOM if self.cursor.position() == 0 => State::Start,
            c if is_ident_start(c) => State::InIdentifier,
            c if is_digit(c) => State::InNumber,
            '.' if is_digit(next) => State::InNumber,
            '\'' => State::InChar,
            '"' => State::InString,
            '/' if next == '/' => State::InLineComment,
            '/' if next == '*' => State::InBlockComment,
            _ => State::InPunctuator,
        }
    }

    fn dispatch(&mut self) -> Result<TokenKind, LexError> {
        match self.state {
            State::Start => Ok(self.lex_whitespace()),
            State::InIdentifier => Ok(self.lex_identifier()),
            State::InNumber => self.lex_number(),
            State::InString => self.lex_string(),
            State::InChar => self.lex_char(),
            State::InLineComment => Ok(self.lex_line_comment()),
            State::InBlockComment => self.lex_block_comment(),
            State::InPunctuator => self.lex_punctuator(),
            State::End => {
                self.end_of_input();
                Ok(TokenKind::EndOfFile)
            },
        }
    }

    fn end_of_input(&mut self) {
        if !self.end_logged {
            self.end_logged = true;
            debug!(
                tokens = self.token_count,
                errors = self.error_count,
                bytes = self.cursor.source().len(),
                "reached end of input"
            );
        }
    }

    /// Length in bytes of a backslash-newline splice at the cursor, or 0.
    pub(crate) fn splice_len(&self) -> usize {
        if self.cursor.current_char() != '\\' {
            return 0;
        }
        match (self.cursor.peek_char(1), self.cursor.peek_char(2)) {
            ('\n', _) => 2,
            ('\r', '\n') => 3,
            _ => 0,
        }
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds an error covering the current token and reports it.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        let err = LexError::new(kind, self.token_span());
        if let Some(handler) = self.handler {
            handler.emit_diagnostic(err.to_diagnostic());
        }
        err
    }

    /// Reports a warning for the text between `start` and the cursor.
    pub(crate) fn warn(&self, code: DiagnosticCode, message: String, start: Position) {
        debug!(code = %code, warning = %message, "lexical warning");
        if let Some(handler) = self.handler {
            let span = Span::with_file(
                start.offset,
                self.cursor.position(),
                self.file_id,
                start.line,
                start.column,
            );
            DiagnosticBuilder::warning(message)
                .code(code)
                .span(span)
                .emit(handler);
        }
    }

    pub(crate) fn mark(&self) -> Position {
        Position {
            offset: self.cursor.position(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Drains the stream, separating tokens from errors.
    ///
    /// Under [`ErrorPolicy::Strict`] there is at most one error and the
    /// tokens stop where it occurred.
    pub fn tokens_and_errors(self) -> (Vec<Token<'a>>, Vec<LexError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }
        (tokens, errors)
    }
}

/// A saved cursor location, used to attribute warnings inside a token.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    /// Yields tokens, then one `EndOfFile`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.next_token();
        match &item {
            Ok(token) if token.is_eof() => self.exhausted = true,
            Err(_) if self.config.policy == ErrorPolicy::Strict => self.exhausted = true,
            _ => {},
        }
        Some(item)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `source` with the default configuration.
///
/// The result ends with the `EndOfFile` token.
///
/// # Example
///
/// ```
/// use clx_lex::tokenize;
///
/// let tokens = tokenize("eA, eB").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["eA", ",", "eB", ""]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    tokenize_with(source, LexerConfig::default())
}

/// Tokenizes `source`, stopping at the first error whatever the policy.
pub fn tokenize_with(source: &str, config: LexerConfig) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::with_config(source, config).collect()
}
