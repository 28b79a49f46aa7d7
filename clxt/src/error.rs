//! Error handling module for the clxt CLI.
//!
//! Every command reports failures through [`ClxtError`]; `main` adds
//! context with `anyhow` before printing.

use std::path::PathBuf;

use clx_util::SourceMapError;
use thiserror::Error;

/// Main error type for the clxt CLI application.
#[derive(Error, Debug)]
pub enum ClxtError {
    /// Error when the configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be used.
    #[error("Cannot read {}: {reason}", .path.display())]
    Input { path: PathBuf, reason: String },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lexical errors were reported; the diagnostics have already been printed.
    #[error("{errors} lexical error(s) in {files} file(s)")]
    Lex { errors: usize, files: usize },

    /// Lossless re-tokenization did not reproduce a file.
    #[error("Reconstruction mismatch in {}", .0.display())]
    Reconstruction(PathBuf),

    /// A file id did not resolve in the source map.
    #[error("Source map error: {0}")]
    SourceMap(#[from] SourceMapError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the configuration file is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using ClxtError.
pub type Result<T> = std::result::Result<T, ClxtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ClxtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_input_error_display() {
        let err = ClxtError::Input {
            path: PathBuf::from("main.c"),
            reason: "not a file".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot read main.c: not a file");
    }

    #[test]
    fn test_lex_error_display() {
        let err = ClxtError::Lex { errors: 3, files: 2 };
        assert_eq!(err.to_string(), "3 lexical error(s) in 2 file(s)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let clxt_err: ClxtError = io_err.into();
        assert!(matches!(clxt_err, ClxtError::Io(_)));
    }

    #[test]
    fn test_source_map_error_conversion() {
        let clxt_err: ClxtError = SourceMapError::FileNotFound("a.c".to_string()).into();
        assert_eq!(clxt_err.to_string(), "Source map error: File not found: a.c");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let clxt_err: ClxtError = json_err.into();
        assert!(matches!(clxt_err, ClxtError::Json(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let clxt_err: ClxtError = toml_err.into();
        assert!(matches!(clxt_err, ClxtError::Toml(_)));
    }
}
