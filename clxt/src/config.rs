//! Configuration module for the clxt CLI.
//!
//! Settings come from `clxt.toml`; command-line flags override them.
//!
//! ```toml
//! jobs = 8
//!
//! [lexer]
//! policy = "resilient"
//! emit_comments = false
//!
//! [output]
//! format = "json"
//! ```

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use clx_lex::LexerConfig;

use crate::commands::common::OutputFormat;
use crate::error::{ClxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Tokenizer options shared by every command.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// How results are printed.
    #[serde(default)]
    pub output: OutputConfig,

    /// Number of files checked in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexer: LexerConfig::default(),
            output: OutputConfig::default(),
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/clxt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.jobs == 0 {
            return Err(ClxtError::Config("`jobs` must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
