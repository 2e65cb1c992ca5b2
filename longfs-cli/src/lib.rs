//! Library exports for longfs-cli.
//!
//! This module exports the CLI structure so it can be inspected outside the
//! binary, e.g. to generate documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
