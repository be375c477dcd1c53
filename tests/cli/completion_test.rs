//! The completion built-ins.

use super::common::run_subcmd;
use pretty_assertions::assert_eq;

#[test]
fn test_commands_lists_registration_order() {
    let (code, stdout, _) = run_subcmd(&["commands"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "help\ncommands\nbash-completion\nrun\nversion\n");
}

#[test]
fn test_bash_completion_script() {
    let (code, stdout, _) = run_subcmd(&["bash-completion"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("_subcommands_subcmd()"));
    assert!(stdout.contains("local subs=$(subcmd commands)"));
    assert!(stdout.contains("complete -F _subcommands_subcmd subcmd"));
    assert!(!stdout.contains("#Command#"));
}
