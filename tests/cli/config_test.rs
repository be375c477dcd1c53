//! Configuration file handling in the demo binary.

use std::io::Write;

use super::common::{binary_path, run_with_config};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_builtins_can_be_disabled() {
    let config = config_file("[builtins]\ncommands = false\nbash_completion = false\n");

    let (code, _, stderr) = run_with_config(&binary_path(), &["commands"], config.path());
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid subcommand"));
    assert!(!stderr.contains("\tcommands "));
}

#[test]
fn test_program_name_override() {
    let config = config_file("program_name = \"tool\"\n");

    let (code, stdout, _) = run_with_config(&binary_path(), &["help"], config.path());
    assert_eq!(code, 0);
    assert!(stdout.contains("please run 'tool help subcommand'"));
}

#[test]
fn test_invalid_config_reports_error() {
    let config = config_file("program_name = 42\n");

    let (code, stdout, stderr) = run_with_config(&binary_path(), &["version"], config.path());
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_program_name_override_keeps_completion_on_real_binary() {
    let config = config_file("program_name = \"tool\"\n");

    let (code, stdout, _) = run_with_config(&binary_path(), &["bash-completion"], config.path());
    assert_eq!(code, 0);
    assert!(stdout.contains("local subs=$(subcmd commands)"));
    assert!(stdout.contains("complete -F _subcommands_subcmd subcmd"));
    assert!(!stdout.contains("tool"));
}
