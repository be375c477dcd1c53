//! Subcommand registration and dispatch.
//!
//! Applications implement [`Subcommand`], add instances to a [`Registry`],
//! and hand the registry to a [`Dispatcher`], which picks the subcommand from
//! the command line, parses its flags, and runs it.

pub mod completion;
pub mod flags;
pub mod help;
pub mod output;
pub mod registry;
pub mod router;
pub mod subcommand;

pub use completion::{BashCompletion, CommandList};
pub use flags::{FlagKind, FlagSet, FlagSpec, Flags, ParseOutcome};
pub use help::Help;
pub use registry::Registry;
pub use router::{Dispatcher, Resolution};
pub use subcommand::{Context, Subcommand};
