//! Command: print shell completions.
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsOpts};

/// Write the completion script for the requested shell to `out`.
pub fn write(opts: &CompletionsOpts, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, out);
}

/// Print the completion script to stdout.
pub fn run(opts: &CompletionsOpts) {
    write(opts, &mut std::io::stdout().lock());
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn script(shell: Shell) -> String {
        let mut out = Vec::new();
        write(&CompletionsOpts { shell }, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn zsh_completion_names_binary() {
        assert!(script(Shell::Zsh).contains("#compdef workstation"));
    }

    #[test]
    fn bash_completion_lists_infra_subcommands() {
        let bash = script(Shell::Bash);
        assert!(bash.contains("infra"));
        assert!(bash.contains("outputs"));
    }
}
