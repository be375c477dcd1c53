//! Dispatch through the real binary.

use super::common::{binary_path, run_binary, run_subcmd};
use pretty_assertions::assert_eq;

#[test]
fn test_run_prints_arguments_in_order() {
    let (code, stdout, _) = run_subcmd(&["run", "1", "2", "3"]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "I am a running application!\n\
         Verbose flag is false\n\
         Argument 0 is 1\n\
         Argument 1 is 2\n\
         Argument 2 is 3\n"
    );
}

#[test]
fn test_run_with_verbose_flag() {
    let (code, stdout, _) = run_subcmd(&["run", "-verbose", "x"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Verbose flag is true\n"));
    assert!(stdout.contains("Argument 0 is x\n"));
    assert!(!stdout.contains("Argument 1"));
}

#[test]
fn test_version() {
    let (code, stdout, _) = run_subcmd(&["version"]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        format!("I am application version {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_no_arguments_fails_with_listing() {
    let (code, stdout, stderr) = run_subcmd(&[]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid subcommand, available choices are:"));
    assert!(stderr.contains("\trun "));
}

#[test]
fn test_unknown_subcommand_lists_every_name() {
    let (code, stdout, stderr) = run_subcmd(&["bogus"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty(), "No subcommand should have run");
    for name in ["bash-completion", "commands", "help", "run", "version"] {
        assert!(stderr.contains(&format!("\t{name} ")), "missing {name}");
    }
}

#[test]
fn test_bad_flag_fails() {
    let (code, stdout, stderr) = run_subcmd(&["run", "-bogus", "x"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert_eq!(
        stderr.trim_end(),
        "Error parsing flags for run: flag provided but not defined: -bogus"
    );
}

#[test]
fn test_flags_rejected_by_flagless_subcommand() {
    let (code, _, stderr) = run_subcmd(&["version", "-verbose"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Error parsing flags for version"));
}

#[test]
fn test_help_overview() {
    let (code, stdout, _) = run_subcmd(&["help"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("Available subcommands:\n\n"));
    assert!(stdout.contains("\trun             Runs some magic, and dumps its arguments.\n"));
    assert!(stdout.ends_with("For more details please run 'subcmd help subcommand'.\n"));
}

#[test]
fn test_help_for_subcommand_with_flags() {
    let (code, stdout, _) = run_subcmd(&["help", "run"]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Synopsis:\n\tRuns some magic, and dumps its arguments.\n\n\
         Usage:\n\tsubcmd run [flags]\n\n\
         \nAvailable flags:\n  -verbose\n    \tShould we be verbose\n"
    );
}

#[test]
fn test_help_flag_on_subcommand() {
    let (code, stdout, _) = run_subcmd(&["run", "-h"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("Usage of run:\n"));
    assert!(!stdout.contains("I am a running application!"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_binary_acts_as_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("run");
    std::os::unix::fs::symlink(binary_path(), &link).unwrap();

    let (code, stdout, _) = run_binary(&link, &["-verbose", "x"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Verbose flag is true\n"));
    assert!(stdout.contains("Argument 0 is x\n"));
}

#[cfg(unix)]
#[test]
fn test_first_argument_beats_binary_name() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("run");
    std::os::unix::fs::symlink(binary_path(), &link).unwrap();

    let (code, stdout, _) = run_binary(&link, &["version"]);

    assert_eq!(code, 0);
    assert!(stdout.starts_with("I am application version"));
}
