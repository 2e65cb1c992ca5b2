//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Show absolute and rewritten forms of paths
//! - `mkdir`: Create directories
//! - `rm`: Remove files or directory trees
//! - `mv`: Rename entries
//! - `ln`: Create hard or symbolic links
//! - `stat`: Show metadata
//! - `readlink`: Print symlink targets
//! - `touch`: Update timestamps, creating missing files
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod ln;
pub mod mkdir;
pub mod mv;
pub mod readlink;
pub mod resolve;
pub mod rm;
pub mod stat;
pub mod touch;

pub use completions::CompletionsCommand;
pub use ln::LnCommand;
pub use mkdir::MkdirCommand;
pub use mv::MvCommand;
pub use readlink::ReadlinkCommand;
pub use resolve::ResolveCommand;
pub use rm::RmCommand;
pub use stat::StatCommand;
pub use touch::TouchCommand;
