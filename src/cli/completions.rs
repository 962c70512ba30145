//! Shell completion generation.

use clap::CommandFactory;

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Generate completions for the given shell on stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let target = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
    };

    clap_complete::generate(target, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
