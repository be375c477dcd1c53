//! Subcommands - register named subcommands and dispatch to them.
//!
//! A program registers subcommands, each with its own flags, and the
//! dispatcher routes the command line to one of them by its first argument
//! or by the name the binary was invoked under.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{
    BashCompletion, CommandList, Context, Dispatcher, FlagSet, Flags, Help, Registry, Resolution,
    Subcommand,
};
pub use config::{BuiltinsConfig, Config};
pub use error::{Result, SubcommandError};
