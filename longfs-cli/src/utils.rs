//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command, the
//! resolver selection behind them, and argument parsers.

use std::path::Path;

use longfs::path::extended::DEFAULT_THRESHOLD;
use longfs::{Fs, LongPathResolver, PassthroughResolver, PathResolver, ResolutionError, ResolvedPath};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Rewrite threshold for the long-path resolver.
    pub threshold: usize,

    /// Use the long-path resolver for previews on any host.
    pub long_paths: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            threshold: DEFAULT_THRESHOLD,
            long_paths: false,
        }
    }
}

impl GlobalOptions {
    /// The resolver for `resolve` previews.
    pub fn preview_resolver(&self) -> CliResolver {
        self.resolver(self.long_paths)
    }

    /// A facade for real filesystem operations. The long-path resolver is
    /// only used where the host needs it.
    pub fn fs(&self) -> Fs<CliResolver> {
        Fs::with_resolver(self.resolver(false))
    }

    fn resolver(&self, force_long: bool) -> CliResolver {
        if force_long || cfg!(windows) {
            CliResolver::Long(LongPathResolver::new().with_threshold(self.threshold))
        } else {
            CliResolver::Passthrough(PassthroughResolver::new())
        }
    }
}

/// Resolver picked at runtime from the global options.
#[derive(Debug, Clone)]
pub enum CliResolver {
    /// Extended-length rewriting.
    Long(LongPathResolver),
    /// Absolutize only, leaving `..` to the OS.
    Passthrough(PassthroughResolver),
}

impl PathResolver for CliResolver {
    fn resolve(&self, input: &Path) -> Result<ResolvedPath, ResolutionError> {
        match self {
            Self::Long(r) => r.resolve(input),
            Self::Passthrough(r) => r.resolve(input),
        }
    }
}

/// Parse a rewrite threshold. Zero is rejected.
pub fn parse_threshold(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("threshold must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid threshold '{s}': {e}")),
    }
}

/// Parse an octal permission mode such as `755` or `0o644`.
pub fn parse_mode(s: &str) -> Result<u32, String> {
    let digits = s.trim_start_matches("0o");
    match u32::from_str_radix(digits, 8) {
        Ok(mode) if mode <= 0o7777 => Ok(mode),
        Ok(_) => Err(format!("mode '{s}' is out of range")),
        Err(_) => Err(format!("invalid octal mode '{s}'")),
    }
}
