//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, LnCommand, MkdirCommand, MvCommand, ReadlinkCommand, ResolveCommand,
    RmCommand, StatCommand, TouchCommand,
};
use crate::utils::parse_threshold;
use clap::{Parser, Subcommand};
use longfs::path::extended::DEFAULT_THRESHOLD;

/// Filesystem operations that tolerate long paths.
#[derive(Parser)]
#[command(name = "longfs")]
#[command(version, about = "Filesystem operations that tolerate long paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path length at which the extended-length rewrite applies
    #[arg(
        long,
        value_name = "N",
        global = true,
        env = "LONGFS_THRESHOLD",
        default_value_t = DEFAULT_THRESHOLD,
        value_parser = parse_threshold
    )]
    pub threshold: usize,

    /// Preview resolution as on a host with a path-length limit
    #[arg(long, global = true)]
    pub long_paths: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show how paths resolve
    Resolve(ResolveCommand),

    /// Create directories
    Mkdir(MkdirCommand),

    /// Remove files or directories
    Rm(RmCommand),

    /// Rename a file or directory
    Mv(MvCommand),

    /// Create a hard or symbolic link
    Ln(LnCommand),

    /// Show file metadata
    Stat(StatCommand),

    /// Print the target of a symbolic link
    Readlink(ReadlinkCommand),

    /// Update timestamps, creating missing files
    Touch(TouchCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
