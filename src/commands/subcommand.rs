//! The contract every subcommand implements.

use std::io::Write;

use super::flags::{FlagSet, Flags};
use super::registry::Registry;

/// A named subcommand with its own flags.
///
/// Only [`info`](Subcommand::info) and [`execute`](Subcommand::execute) are
/// required; the default [`arguments`](Subcommand::arguments) declares no
/// flags.
///
/// ```
/// use std::io::Write;
/// use subcommands::{Context, FlagSet, Subcommand};
///
/// struct Greet;
///
/// impl Subcommand for Greet {
///     fn arguments(&self, flags: &mut FlagSet) {
///         flags.string("name", "world", "Who to greet");
///     }
///
///     fn info(&self) -> (&str, &str) {
///         ("greet", "Print a greeting.")
///     }
///
///     fn execute(&self, ctx: &mut Context<'_>) -> i32 {
///         let name = ctx.flags().get_str("name").to_string();
///         match writeln!(ctx.out(), "Hello, {name}!") {
///             Ok(()) => 0,
///             Err(_) => 1,
///         }
///     }
/// }
/// ```
pub trait Subcommand {
    /// Declares the flags this subcommand accepts.
    fn arguments(&self, _flags: &mut FlagSet) {}

    /// Returns the name and a one-line synopsis.
    fn info(&self) -> (&str, &str);

    /// Runs the subcommand and returns its exit code.
    fn execute(&self, ctx: &mut Context<'_>) -> i32;

    /// Name of this subcommand.
    fn name(&self) -> &str {
        self.info().0
    }

    /// Builds a fresh flag set populated by [`arguments`](Subcommand::arguments).
    fn flag_set(&self) -> FlagSet {
        let mut flags = FlagSet::new(self.name());
        self.arguments(&mut flags);
        flags
    }
}

/// Everything a subcommand sees when it runs.
pub struct Context<'a> {
    program: &'a str,
    binary: &'a str,
    registry: &'a Registry,
    flags: Flags,
    args: Vec<String>,
    out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a context for one invocation.
    pub fn new(
        program: &'a str,
        registry: &'a Registry,
        flags: Flags,
        args: Vec<String>,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            program,
            binary: program,
            registry,
            flags,
            args,
            out,
        }
    }

    /// Sets the base name of the executable that was actually invoked.
    ///
    /// Defaults to the display program name.
    pub fn with_binary(mut self, binary: &'a str) -> Self {
        self.binary = binary;
        self
    }

    /// Program name as shown to the user.
    pub fn program(&self) -> &'a str {
        self.program
    }

    /// Base name of the invoked executable, ignoring any display override.
    pub fn binary(&self) -> &'a str {
        self.binary
    }

    /// The registry the subcommand was dispatched from.
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Parsed flag values.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Positional arguments left over after flag parsing.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Output stream for the subcommand.
    pub fn out(&mut self) -> &mut (dyn Write + 'a) {
        &mut *self.out
    }
}
