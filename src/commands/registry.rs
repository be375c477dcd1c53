//! Ordered collection of registered subcommands.

use tracing::debug;

use super::completion::{BashCompletion, CommandList};
use super::help::Help;
use super::subcommand::Subcommand;
use crate::config::BuiltinsConfig;
use crate::error::{Result, SubcommandError};

/// Registered subcommands, in insertion order.
///
/// A fresh registry always contains the `help` built-in. Names are unique;
/// registering a second subcommand under a taken name fails.
pub struct Registry {
    known: Vec<Box<dyn Subcommand>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry holding only the `help` built-in.
    pub fn new() -> Self {
        Self {
            known: vec![Box::new(Help)],
        }
    }

    /// Creates a registry with `help` plus the configured optional built-ins.
    pub fn with_builtins(builtins: &BuiltinsConfig) -> Self {
        let mut registry = Self::new();
        if builtins.commands {
            registry.known.push(Box::new(CommandList));
        }
        if builtins.bash_completion {
            registry.known.push(Box::new(BashCompletion));
        }
        registry
    }

    /// Adds a subcommand.
    pub fn register(&mut self, cmd: Box<dyn Subcommand>) -> Result<()> {
        let name = cmd.name();
        if self.find(name).is_some() {
            return Err(SubcommandError::duplicate(name));
        }

        debug!(name, "registered subcommand");
        self.known.push(cmd);
        Ok(())
    }

    /// Finds a subcommand by name.
    pub fn find(&self, name: &str) -> Option<&dyn Subcommand> {
        self.known
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| cmd.as_ref())
    }

    /// Returns true if a subcommand with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Name and synopsis of every subcommand, in registration order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.known.iter().map(|cmd| cmd.info()).collect()
    }

    /// Names of every subcommand, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.known.iter().map(|cmd| cmd.name()).collect()
    }

    /// Iterates over the registered subcommands.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Subcommand> {
        self.known.iter().map(|cmd| cmd.as_ref())
    }

    /// Number of registered subcommands, built-ins included.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Returns true if nothing is registered. Never true for a registry
    /// built with [`Registry::new`].
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
