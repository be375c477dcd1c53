//! Error types for subcommand registration and dispatch.
//!
//! Failures inside a subcommand are reported through its exit code; these
//! variants cover everything the dispatch machinery itself can get wrong.

use thiserror::Error;

/// Main error type for registration, dispatch, and configuration.
#[derive(Error, Debug)]
pub enum SubcommandError {
    /// Neither the first argument nor the binary name matched a subcommand.
    #[error("Invalid subcommand, available choices are:\n\n{available}")]
    UnknownSubcommand {
        /// The first argument, if one was supplied.
        requested: Option<String>,
        /// Sorted, aligned listing of every registered subcommand.
        available: String,
    },

    /// The selected subcommand rejected its flags.
    #[error("Error parsing flags for {command}: {message}")]
    FlagParse {
        /// Name of the subcommand whose flags failed to parse.
        command: String,
        /// Message from the flag parser.
        message: String,
    },

    /// A subcommand with this name is already registered.
    #[error("Subcommand already registered: {0}")]
    DuplicateName(String),

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SubcommandError {
    /// Creates an unknown-subcommand error carrying the available listing.
    pub fn unknown(requested: Option<&str>, available: impl Into<String>) -> Self {
        Self::UnknownSubcommand {
            requested: requested.map(str::to_string),
            available: available.into(),
        }
    }

    /// Creates a flag-parse error for the given subcommand.
    pub fn flag_parse(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FlagParse {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate-name error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownSubcommand { .. } => "Unknown Subcommand",
            Self::FlagParse { .. } => "Flag Error",
            Self::DuplicateName(_) => "Registration Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }

    /// Process exit status an entry point should use for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias using SubcommandError.
pub type Result<T> = std::result::Result<T, SubcommandError>;
