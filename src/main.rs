//! subcmd - a small program demonstrating the subcommands crate.
//!
//! ```text
//! subcmd help
//! subcmd help run
//! subcmd run -verbose 1 2 3
//! subcmd version
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use subcommands::logging::init_stderr_logging;
use subcommands::{BuiltinsConfig, Config, Context, Dispatcher, FlagSet, Registry, Subcommand};
use tracing::{debug, error};

/// Environment variable naming an alternative config file.
const CONFIG_ENV: &str = "SUBCMD_CONFIG";

/// Takes one optional flag and echoes its arguments.
struct RunCommand;

impl Subcommand for RunCommand {
    fn arguments(&self, flags: &mut FlagSet) {
        flags.bool("verbose", false, "Should we be verbose");
    }

    fn info(&self) -> (&str, &str) {
        ("run", "Runs some magic, and dumps its arguments.")
    }

    fn execute(&self, ctx: &mut Context<'_>) -> i32 {
        let verbose = ctx.flags().get_bool("verbose");
        let mut text = format!("I am a running application!\nVerbose flag is {verbose}\n");
        for (i, arg) in ctx.args().iter().enumerate() {
            text.push_str(&format!("Argument {i} is {arg}\n"));
        }

        match ctx.out().write_all(text.as_bytes()) {
            Ok(()) => 0,
            Err(e) => {
                error!("write failed: {e}");
                1
            }
        }
    }
}

/// Takes no flags.
struct VersionCommand;

impl Subcommand for VersionCommand {
    fn info(&self) -> (&str, &str) {
        ("version", "Show the application version.")
    }

    fn execute(&self, ctx: &mut Context<'_>) -> i32 {
        match writeln!(ctx.out(), "I am application version {}", env!("CARGO_PKG_VERSION")) {
            Ok(()) => 0,
            Err(_) => 1,
        }
    }
}

fn main() {
    init_stderr_logging();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let config_path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| Config::default_path("subcmd"));
    debug!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let mut registry = Registry::with_builtins(&config.builtins_or(BuiltinsConfig::all()));
    registry
        .register(Box::new(RunCommand))
        .context("registering run")?;
    registry
        .register(Box::new(VersionCommand))
        .context("registering version")?;

    let mut dispatcher = Dispatcher::new(&registry);
    if let Some(name) = &config.program_name {
        dispatcher = dispatcher.program_name(name);
    }

    Ok(dispatcher.run())
}
