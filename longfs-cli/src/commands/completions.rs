//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "longfs";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!("#   longfs completions bash > ~/.local/share/bash-completion/completions/longfs");
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(longfs completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   longfs completions zsh > ~/.zsh/completions/_longfs");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   longfs completions fish > ~/.config/fish/completions/longfs.fish");
        }
        Shell::PowerShell => {
            eprintln!("#   longfs completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
