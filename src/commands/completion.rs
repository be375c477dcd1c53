//! Built-ins for shell completion: `commands` and `bash-completion`.

use super::subcommand::{Context, Subcommand};

/// Placeholder replaced with the program name in [`BASH_TEMPLATE`].
const PLACEHOLDER: &str = "#Command#";

/// Bash completion script template.
const BASH_TEMPLATE: &str = r#"
_subcommands_#Command#()
{
    local cur
    COMPREPLY=()

    # Variable to hold the current word
    cur="${COMP_WORDS[COMP_CWORD]}"

    # The first argument is one of the available sub-commands.
    if [ $COMP_CWORD = 1 ]; then

        local subs=$(#Command# commands)
        COMPREPLY=($(compgen -W "${subs}" $cur))
    else

        # If we see a dash complete from the available flags,
        # otherwise a file/directory.
        if [[ "$cur" =~ ^-.* ]];  then
            local flags="$(#Command# help ${COMP_WORDS[1]} | awk '{print $1}' | grep -- -)"
            COMPREPLY=($(compgen -W "${flags}" -- "$cur"))
        else
            COMPREPLY=($(compgen -f -- ${cur}))
        fi
   fi
}

complete -F _subcommands_#Command# #Command#
"#;

/// Prints every registered name, one per line, in registration order.
pub struct CommandList;

impl Subcommand for CommandList {
    fn info(&self) -> (&str, &str) {
        ("commands", "Show all available sub-commands.")
    }

    fn execute(&self, ctx: &mut Context<'_>) -> i32 {
        let registry = ctx.registry();
        for name in registry.names() {
            if writeln!(ctx.out(), "{name}").is_err() {
                return 1;
            }
        }
        0
    }
}

/// Prints a bash completion script for the program.
pub struct BashCompletion;

impl Subcommand for BashCompletion {
    fn info(&self) -> (&str, &str) {
        ("bash-completion", "Generate and output a bash completion-script.")
    }

    fn execute(&self, ctx: &mut Context<'_>) -> i32 {
        let script = bash_script(ctx.binary());
        match writeln!(ctx.out(), "{script}") {
            Ok(()) => 0,
            Err(_) => 1,
        }
    }
}

/// Renders the bash completion script for `program`.
pub fn bash_script(program: &str) -> String {
    BASH_TEMPLATE.replace(PLACEHOLDER, program)
}
