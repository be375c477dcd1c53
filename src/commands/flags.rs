//! Per-subcommand flag sets.
//!
//! A [`FlagSet`] collects the flags one subcommand accepts and parses an
//! argument list against them using clap's builder API. Flags use the
//! single-dash conventions common to Go-style tools:
//! - `-flag` and `--flag` are equivalent
//! - `-flag=value` or `-flag value` for non-boolean flags
//! - `-flag` or `-flag=false` for boolean flags, which also take `1`, `0`,
//!   `t`, `f`, `TRUE` and friends
//! - Parsing stops at the first positional argument or at `--`

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use tracing::warn;

use crate::error::{Result, SubcommandError};

/// Clap id of the catch-all positional argument.
const POSITIONAL: &str = "__positional";

/// Spellings accepted for a boolean flag value.
const BOOL_VALUES: [&str; 12] = [
    "1", "t", "T", "true", "TRUE", "True", "0", "f", "F", "false", "FALSE", "False",
];

fn parse_bool(value: String) -> bool {
    matches!(value.as_str(), "1" | "t" | "T" | "true" | "TRUE" | "True")
}

/// Value type of a declared flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Boolean switch, `-flag` sets it to true.
    Bool,
    /// Free-form string value.
    String,
    /// Signed integer value.
    Int,
    /// Floating point value.
    Float,
}

impl FlagKind {
    /// Type name shown after the flag in usage output (none for booleans).
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Bool => None,
            Self::String => Some("string"),
            Self::Int => Some("int"),
            Self::Float => Some("float"),
        }
    }
}

/// Declaration of a single flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSpec {
    /// Flag name, without leading dashes.
    pub name: String,
    /// Value type.
    pub kind: FlagKind,
    /// Default value, rendered as text.
    pub default: String,
    /// One-line description.
    pub usage: String,
}

impl FlagSpec {
    /// Returns true if the default is the zero value for its type.
    ///
    /// Zero defaults are left out of usage output.
    pub fn has_zero_default(&self) -> bool {
        match self.kind {
            FlagKind::Bool => self.default == "false",
            FlagKind::String => self.default.is_empty(),
            FlagKind::Int | FlagKind::Float => self.default == "0",
        }
    }

    fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.name.clone())
            .long(self.name.clone())
            .help(self.usage.clone());

        match self.kind {
            FlagKind::Bool => arg
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .default_value(self.default.clone())
                .value_parser(PossibleValuesParser::new(BOOL_VALUES).map(parse_bool)),
            FlagKind::String => {
                let arg = arg.num_args(1).action(ArgAction::Set);
                if self.default.is_empty() {
                    arg
                } else {
                    arg.default_value(self.default.clone())
                }
            }
            FlagKind::Int => arg
                .num_args(1)
                .allow_negative_numbers(true)
                .default_value(self.default.clone())
                .value_parser(value_parser!(i64)),
            FlagKind::Float => arg
                .num_args(1)
                .allow_negative_numbers(true)
                .default_value(self.default.clone())
                .value_parser(value_parser!(f64)),
        }
    }
}

/// Result of parsing an argument list.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Flags parsed; the remaining positional arguments are in `args`.
    Parsed {
        /// Parsed flag values.
        flags: Flags,
        /// Arguments not consumed as flags, in order.
        args: Vec<String>,
    },
    /// `-h`, `-help` or `--help` was given; carries the usage text.
    Help(String),
}

/// Argument list rewritten into clap's long-flag syntax.
enum Normalized {
    Args(Vec<String>),
    Help,
}

/// The flags accepted by one subcommand.
#[derive(Debug, Clone)]
pub struct FlagSet {
    name: String,
    flags: Vec<FlagSpec>,
}

impl FlagSet {
    /// Creates an empty flag set for the named subcommand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: Vec::new(),
        }
    }

    /// Name of the subcommand this set belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares a boolean flag.
    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> &mut Self {
        self.define(name, FlagKind::Bool, default.to_string(), usage)
    }

    /// Declares a string flag.
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> &mut Self {
        self.define(name, FlagKind::String, default.to_string(), usage)
    }

    /// Declares an integer flag.
    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> &mut Self {
        self.define(name, FlagKind::Int, default.to_string(), usage)
    }

    /// Declares a floating point flag.
    pub fn float(&mut self, name: &str, default: f64, usage: &str) -> &mut Self {
        self.define(name, FlagKind::Float, default.to_string(), usage)
    }

    fn define(&mut self, name: &str, kind: FlagKind, default: String, usage: &str) -> &mut Self {
        let spec = FlagSpec {
            name: name.to_string(),
            kind,
            default,
            usage: usage.to_string(),
        };

        match self.flags.iter_mut().find(|f| f.name == name) {
            Some(existing) => {
                warn!(command = %self.name, flag = name, "flag redefined");
                *existing = spec;
            }
            None => self.flags.push(spec),
        }
        self
    }

    /// Looks up a declared flag by name.
    pub fn lookup(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }

    /// All declared flags, sorted by name.
    pub fn flags(&self) -> Vec<&FlagSpec> {
        let mut flags: Vec<&FlagSpec> = self.flags.iter().collect();
        flags.sort_by(|a, b| a.name.cmp(&b.name));
        flags
    }

    /// Number of declared flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if no flags are declared.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Formats every flag with its usage and non-zero default.
    ///
    /// ```text
    ///   -name string
    ///     	Who to greet (default "world")
    ///   -verbose
    ///     	Print more
    /// ```
    pub fn defaults(&self) -> String {
        let mut out = String::new();

        for spec in self.flags() {
            let mut line = format!("  -{}", spec.name);
            if let Some(type_name) = spec.kind.type_name() {
                line.push(' ');
                line.push_str(type_name);
            }

            // Single-letter booleans fit on one line
            if line.len() <= 4 {
                line.push('\t');
            } else {
                line.push_str("\n    \t");
            }
            line.push_str(&spec.usage.replace('\n', "\n    \t"));

            if !spec.has_zero_default() {
                match spec.kind {
                    FlagKind::String => line.push_str(&format!(" (default {:?})", spec.default)),
                    _ => line.push_str(&format!(" (default {})", spec.default)),
                }
            }

            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    /// Usage text printed when help is requested through a flag.
    pub fn usage(&self) -> String {
        format!("Usage of {}:\n{}", self.name, self.defaults())
    }

    /// Parses `args` against the declared flags.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParseOutcome> {
        let argv = match self.normalize(args)? {
            Normalized::Args(argv) => argv,
            Normalized::Help => return Ok(ParseOutcome::Help(self.usage())),
        };

        match self.command().try_get_matches_from(argv) {
            Ok(matches) => {
                let args = matches
                    .get_many::<String>(POSITIONAL)
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default();
                let names = self.flags.iter().map(|f| f.name.clone()).collect();
                Ok(ParseOutcome::Parsed {
                    flags: Flags { matches, names },
                    args,
                })
            }
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                Ok(ParseOutcome::Help(self.usage()))
            }
            Err(err) => Err(SubcommandError::flag_parse(
                &self.name,
                self.parse_error_message(&err),
            )),
        }
    }

    fn command(&self) -> Command {
        let positional = Arg::new(POSITIONAL)
            .value_name("ARGS")
            .num_args(0..)
            .action(ArgAction::Append);

        self.flags.iter().fold(
            Command::new(self.name.clone())
                .no_binary_name(true)
                .disable_help_flag(true)
                .disable_version_flag(true)
                .args_override_self(true)
                .color(ColorChoice::Never)
                .arg(positional),
            |cmd, spec| cmd.arg(spec.to_arg()),
        )
    }

    /// Rewrites single-dash flags into clap's `--name[=value]` form.
    ///
    /// A `--` is inserted before the first positional argument so clap takes
    /// everything from there on verbatim. Undeclared flags and missing values
    /// are reported here, in terms of what the user typed; clap only ever
    /// sees declared names.
    fn normalize<S: AsRef<str>>(&self, args: &[S]) -> Result<Normalized> {
        let mut out = Vec::with_capacity(args.len() + 1);
        let mut iter = args.iter().map(AsRef::<str>::as_ref);

        while let Some(arg) = iter.next() {
            if arg == "--" {
                out.push(arg.to_string());
                break;
            }

            let body = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
                Some(body) if !body.is_empty() && !body.starts_with(['-', '=']) => body,
                // A lone "-" is positional
                Some(_) if arg != "-" => {
                    return Err(SubcommandError::flag_parse(
                        &self.name,
                        format!("bad flag syntax: {arg}"),
                    ));
                }
                _ => {
                    out.push("--".to_string());
                    out.push(arg.to_string());
                    break;
                }
            };

            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };

            let Some(spec) = self.lookup(name) else {
                if matches!(name, "h" | "help") {
                    return Ok(Normalized::Help);
                }
                return Err(SubcommandError::flag_parse(
                    &self.name,
                    format!("flag provided but not defined: -{name}"),
                ));
            };

            match value {
                Some(value) => out.push(format!("--{name}={value}")),
                None if spec.kind == FlagKind::Bool => out.push(format!("--{name}")),
                None => match iter.next() {
                    Some(value) => out.push(format!("--{name}={value}")),
                    None => {
                        return Err(SubcommandError::flag_parse(
                            &self.name,
                            format!("flag needs an argument: -{name}"),
                        ));
                    }
                },
            }
        }

        out.extend(iter.map(str::to_string));
        Ok(Normalized::Args(out))
    }

    /// Describes a clap value error using the single-dash flag name.
    ///
    /// Falls back to the first line of clap's own message, without its
    /// `error: ` prefix.
    fn parse_error_message(&self, err: &clap::Error) -> String {
        let context = move |kind| match err.get(kind) {
            Some(ContextValue::String(s)) => Some(s.as_str()),
            _ => None,
        };

        if matches!(err.kind(), ErrorKind::InvalidValue | ErrorKind::ValueValidation) {
            let spec = context(ContextKind::InvalidArg)
                .map(|arg| arg.trim_start_matches('-'))
                .and_then(|arg| arg.split([' ', '[', '=']).next())
                .and_then(|name| self.lookup(name));

            if let (Some(spec), Some(value)) = (spec, context(ContextKind::InvalidValue)) {
                return match spec.kind {
                    FlagKind::Bool => {
                        format!("invalid boolean value {value:?} for -{}: parse error", spec.name)
                    }
                    _ => format!("invalid value {value:?} for flag -{}: parse error", spec.name),
                };
            }
        }

        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        first.strip_prefix("error: ").unwrap_or(first).to_string()
    }
}

/// Flag values parsed for the selected subcommand.
///
/// Accessors fall back to the zero value for undeclared names or a type
/// mismatch, so a subcommand never panics on a typo in a flag name.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    matches: ArgMatches,
    names: Vec<String>,
}

impl Flags {
    /// Flags for a subcommand that declared none.
    pub fn empty() -> Self {
        Self::default()
    }

    fn get<T: std::any::Any + Clone + Send + Sync + 'static>(&self, name: &str) -> Option<&T> {
        if !self.is_declared(name) {
            return None;
        }
        self.matches.try_get_one::<T>(name).ok().flatten()
    }

    /// Returns true if `name` was declared by the subcommand.
    pub fn is_declared(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns true if `name` was given on the command line.
    pub fn is_set(&self, name: &str) -> bool {
        self.is_declared(name)
            && self.matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
    }

    /// Value of a boolean flag.
    pub fn get_bool(&self, name: &str) -> bool {
        self.get::<bool>(name).copied().unwrap_or(false)
    }

    /// Value of a string flag, empty if unset without a default.
    pub fn get_str(&self, name: &str) -> &str {
        self.get::<String>(name).map(String::as_str).unwrap_or("")
    }

    /// Value of an integer flag.
    pub fn get_int(&self, name: &str) -> i64 {
        self.get::<i64>(name).copied().unwrap_or(0)
    }

    /// Value of a floating point flag.
    pub fn get_float(&self, name: &str) -> f64 {
        self.get::<f64>(name).copied().unwrap_or(0.0)
    }
}
