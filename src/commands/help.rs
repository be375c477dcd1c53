//! The built-in `help` subcommand.

use std::fmt::Write as _;

use tracing::debug;

use super::output::format_listing;
use super::registry::Registry;
use super::subcommand::{Context, Subcommand};

/// Lists the available subcommands, or describes the named ones.
pub struct Help;

impl Subcommand for Help {
    fn info(&self) -> (&str, &str) {
        ("help", "Show usage information.")
    }

    fn execute(&self, ctx: &mut Context<'_>) -> i32 {
        let text = if ctx.args().is_empty() {
            overview(ctx.registry(), ctx.program())
        } else {
            details(ctx.registry(), ctx.program(), ctx.args())
        };

        match ctx.out().write_all(text.as_bytes()) {
            Ok(()) => 0,
            Err(e) => {
                debug!("failed to write help: {e}");
                1
            }
        }
    }
}

/// Help text with no arguments: every subcommand, sorted.
pub fn overview(registry: &Registry, program: &str) -> String {
    format!(
        "Available subcommands:\n\n{}\nFor more details please run '{program} help subcommand'.\n",
        format_listing(registry)
    )
}

/// Help text for the named subcommands. Unknown names are skipped.
pub fn details(registry: &Registry, program: &str, names: &[String]) -> String {
    let mut text = String::new();

    for name in names {
        let Some(cmd) = registry.find(name) else {
            debug!(name = %name, "help requested for unknown subcommand");
            continue;
        };

        let (name, synopsis) = cmd.info();
        let flags = cmd.flag_set();

        let _ = write!(text, "Synopsis:\n\t{synopsis}\n\n");
        if flags.is_empty() {
            let _ = write!(text, "Usage:\n\t{program} {name}\n\n");
        } else {
            let _ = write!(text, "Usage:\n\t{program} {name} [flags]\n\n");
            let _ = write!(text, "\nAvailable flags:\n{}", flags.defaults());
        }
    }

    text
}
