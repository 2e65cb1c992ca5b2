//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use std::io;

use longfs::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Not found
    /// - 2: Permission denied
    /// - 3: Already exists
    /// - 4: Invalid input, e.g. a path that cannot be rewritten
    /// - 5: Other I/O error
    ///
    /// Argument errors are reported by clap, which exits with 2 itself.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(e) => exit_code_for(e.kind()),
        }
    }
}

fn exit_code_for(kind: io::ErrorKind) -> i32 {
    match kind {
        io::ErrorKind::NotFound => 1,
        io::ErrorKind::PermissionDenied => 2,
        io::ErrorKind::AlreadyExists => 3,
        io::ErrorKind::InvalidInput => 4,
        _ => 5,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}
