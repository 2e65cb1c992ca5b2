//! Main entry point for the longfs CLI.
//!
//! This is the command-line interface to the longfs library. Every command
//! goes through the long-path-tolerant facade:
//! - `resolve`: Show absolute and rewritten forms of paths
//! - `mkdir`, `rm`, `mv`, `ln`, `touch`: Modify the filesystem
//! - `stat`, `readlink`: Inspect the filesystem

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Library records go through `log`; a second install is harmless
    let _ = longfs::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        threshold: cli.threshold,
        long_paths: cli.long_paths,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Mv(cmd) => cmd.execute(&global),
        cli::Command::Ln(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Readlink(cmd) => cmd.execute(&global),
        cli::Command::Touch(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
