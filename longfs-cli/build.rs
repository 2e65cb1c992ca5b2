//! Build script for longfs-cli.
//!
//! Generates the `longfs.1` man page into OUT_DIR with clap_mangen.
//!
//! Note: The command structure is rebuilt here by hand, since build scripts
//! cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("longfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filesystem operations that tolerate long paths")
        .long_about(
            "Run filesystem operations through longfs, rewriting paths that reach the \
             host length limit into extended-length form",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .help("Path length at which the extended-length rewrite applies")
                .value_name("N")
                .global(true)
                .env("LONGFS_THRESHOLD"),
        )
        .arg(
            Arg::new("long-paths")
                .long("long-paths")
                .help("Preview resolution as on a host with a path-length limit")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Show how paths resolve")
                .long_about("Print the absolute and rewritten form of each path"),
            Command::new("mkdir")
                .about("Create directories")
                .long_about("Create directories, optionally with parents and a mode"),
            Command::new("rm")
                .about("Remove files or directories")
                .long_about("Remove entries, optionally with everything beneath them"),
            Command::new("mv")
                .about("Rename a file or directory"),
            Command::new("ln")
                .about("Create a hard or symbolic link"),
            Command::new("stat")
                .about("Show file metadata"),
            Command::new("readlink")
                .about("Print the target of a symbolic link"),
            Command::new("touch")
                .about("Update timestamps, creating missing files"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("longfs.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
