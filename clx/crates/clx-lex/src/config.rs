//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// What the token stream does after a lexical error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// The first error is yielded and the stream ends.
    #[default]
    Strict,
    /// The error is yielded, the offending text is consumed, and the stream
    /// continues after it.
    Resilient,
}

/// Options controlling which tokens are produced.
///
/// With both trivia switches on, concatenating the token texts gives back the
/// source exactly.
///
/// # Example
///
/// ```
/// use clx_lex::{ErrorPolicy, LexerConfig};
///
/// let config: LexerConfig = toml::from_str("policy = \"resilient\"").unwrap();
/// assert_eq!(config.policy, ErrorPolicy::Resilient);
/// assert!(config.emit_comments);
/// assert!(!config.emit_whitespace);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    pub policy: ErrorPolicy,
    /// Emit `Whitespace` tokens (including line splices and a leading BOM)
    pub emit_whitespace: bool,
    /// Emit `Comment` tokens
    pub emit_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            policy: ErrorPolicy::Strict,
            emit_whitespace: false,
            emit_comments: true,
        }
    }
}

impl LexerConfig {
    /// Every byte of input ends up in some token.
    pub fn lossless() -> Self {
        Self {
            emit_whitespace: true,
            emit_comments: true,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn is_lossless(&self) -> bool {
        self.emit_whitespace && self.emit_comments
    }
}
