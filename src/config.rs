//! Configuration for embedding applications.
//!
//! Selects which optional built-in subcommands are registered and lets the
//! program name shown in help and completion output be overridden.

use crate::error::{Result, SubcommandError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Program name shown in help and completion output.
    #[serde(default)]
    pub program_name: Option<String>,

    /// Optional built-in subcommands. `None` when the file has no `[builtins]` table.
    #[serde(default)]
    pub builtins: Option<BuiltinsConfig>,
}

/// Which optional built-ins to register. `help` is always registered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuiltinsConfig {
    /// Register `commands`, which lists subcommand names for completion.
    #[serde(default)]
    pub commands: bool,

    /// Register `bash-completion`, which prints a completion script.
    #[serde(default)]
    pub bash_completion: bool,
}

impl BuiltinsConfig {
    /// Every optional built-in enabled.
    pub fn all() -> Self {
        Self {
            commands: true,
            bash_completion: true,
        }
    }
}

impl Config {
    /// Returns the default config file path for `app` on the current platform.
    pub fn default_path(app: &str) -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app)
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SubcommandError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SubcommandError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Configured built-ins, or `fallback` when none were configured.
    pub fn builtins_or(&self, fallback: BuiltinsConfig) -> BuiltinsConfig {
        self.builtins.unwrap_or(fallback)
    }
}
