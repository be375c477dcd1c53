//! Subcommand resolution and dispatch.
//!
//! The dispatcher picks a subcommand from the first argument or, failing
//! that, from the name the binary was invoked under. That second rule lets a
//! binary symlinked as `run` behave like `tool run`.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::debug;

use super::flags::{FlagSet, ParseOutcome};
use super::output::{base_name, format_listing};
use super::registry::Registry;
use super::subcommand::Context;
use crate::error::{Result, SubcommandError};

/// Where the subcommand name was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The first command-line argument named a subcommand.
    FirstArgument,
    /// The executable's base name named a subcommand.
    BinaryName,
}

/// Routes a command line to one subcommand of a [`Registry`].
pub struct Dispatcher<'r> {
    registry: &'r Registry,
    program_name: Option<String>,
}

impl<'r> Dispatcher<'r> {
    /// Creates a dispatcher over `registry`.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            program_name: None,
        }
    }

    /// Overrides the program name shown in help output.
    ///
    /// Resolution by binary name and the completion script still use the
    /// real executable name.
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Dispatches the process arguments, writing to stdout.
    pub fn execute(&self) -> Result<i32> {
        let argv: Vec<String> = std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let code = self.execute_from(argv, &mut out)?;
        out.flush()?;
        Ok(code)
    }

    /// Dispatches the process arguments and turns errors into an exit code.
    ///
    /// Errors are printed to stderr. The caller decides whether to exit.
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{e}");
                e.exit_code()
            }
        }
    }

    /// Dispatches `argv`, whose first element is the invoked program path.
    pub fn execute_from<I, S>(&self, argv: I, out: &mut dyn Write) -> Result<i32>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();

        let mut flag_sets: HashMap<&str, FlagSet> = self
            .registry
            .iter()
            .map(|cmd| (cmd.name(), cmd.flag_set()))
            .collect();

        let Some((name, resolution)) = self.resolve(&argv) else {
            let requested = argv.get(1).map(String::as_str);
            debug!(requested, "no subcommand matched");
            return Err(SubcommandError::unknown(
                requested,
                format_listing(self.registry),
            ));
        };

        let (Some(cmd), Some(flags)) = (self.registry.find(name), flag_sets.remove(name)) else {
            return Err(SubcommandError::unknown(Some(name), format_listing(self.registry)));
        };

        let rest = match resolution {
            Resolution::FirstArgument => &argv[2..],
            Resolution::BinaryName => &argv[1..],
        };

        let invoked = argv.first().map(|path| base_name(path)).unwrap_or_default();
        let program = self.program_name.as_deref().unwrap_or(invoked);

        match flags.parse(rest) {
            Ok(ParseOutcome::Help(usage)) => {
                out.write_all(usage.as_bytes())?;
                Ok(0)
            }
            Ok(ParseOutcome::Parsed { flags, args }) => {
                debug!(name, ?args, "executing subcommand");
                let mut ctx =
                    Context::new(program, self.registry, flags, args, out).with_binary(invoked);
                Ok(cmd.execute(&mut ctx))
            }
            Err(e) => {
                debug!(name, "flag parsing failed: {e}");
                Err(e)
            }
        }
    }

    /// Finds the requested subcommand name. The first argument wins over
    /// the binary name.
    pub fn resolve<'a>(&self, argv: &'a [String]) -> Option<(&'a str, Resolution)> {
        if let Some(first) = argv.get(1) {
            if self.registry.contains(first) {
                debug!(name = %first, "resolved subcommand from first argument");
                return Some((first, Resolution::FirstArgument));
            }
        }

        let invoked = base_name(argv.first()?);
        if self.registry.contains(invoked) {
            debug!(name = invoked, "resolved subcommand from binary name");
            return Some((invoked, Resolution::BinaryName));
        }

        None
    }
}
