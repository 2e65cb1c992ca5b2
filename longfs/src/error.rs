//! Error types for the longfs library.
//!
//! Every failure is a value returned to the caller. The OS-level error that
//! caused it always stays reachable through [`Error::kind`] and
//! [`Error::io_error`], so callers can still test for not-found,
//! permission-denied or already-exists after the diagnostic context has been
//! attached.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::failure::{LinkFailure, PathFailure};

/// Result type alias for longfs operations.
///
/// # Examples
///
/// ```
/// use longfs::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the longfs library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be turned into an absolute path.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A single-path operation failed.
    #[error(transparent)]
    Path(#[from] Box<PathFailure>),

    /// A two-path operation (link, rename, symlink) failed.
    #[error(transparent)]
    Link(#[from] Box<LinkFailure>),
}

impl From<PathFailure> for Error {
    fn from(failure: PathFailure) -> Self {
        Self::Path(Box::new(failure))
    }
}

impl From<LinkFailure> for Error {
    fn from(failure: LinkFailure) -> Self {
        Self::Link(Box::new(failure))
    }
}

impl Error {
    /// The OS-level error kind behind this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::ErrorKind;
    ///
    /// let err = longfs::stat("/definitely/not/here/at/all").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Resolution(e) => e.kind(),
            Self::Path(f) => f.kind(),
            Self::Link(f) => f.kind(),
        }
    }

    /// The underlying I/O error, when there is one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Resolution(e) => e.io_error(),
            Self::Path(f) => Some(f.io_error()),
            Self::Link(f) => Some(f.io_error()),
        }
    }

    /// Check if the error indicates a path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    /// Check if the error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.kind() == io::ErrorKind::PermissionDenied
    }

    /// Check if the error indicates the target already exists.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        self.kind() == io::ErrorKind::AlreadyExists
    }
}

impl From<Error> for io::Error {
    /// Keeps the OS error kind and carries the full diagnostic as the inner
    /// error, so `?` into `io::Result` loses nothing.
    fn from(err: Error) -> Self {
        io::Error::new(err.kind(), err)
    }
}

/// Failure to compute an absolute path for an input.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The process working directory could not be read.
    #[error("cannot resolve {}: cannot read working directory: {source}", path.display())]
    WorkingDir {
        /// The relative path that needed the working directory.
        path: PathBuf,
        /// The error reported while reading the working directory.
        #[source]
        source: io::Error,
    },

    /// The path needs an extended-length rewrite but is not valid Unicode.
    #[error("cannot rewrite {}: path contains invalid Unicode", path.display())]
    InvalidUnicode {
        /// The offending path.
        path: PathBuf,
    },
}

impl ResolutionError {
    /// The input path that failed to resolve.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::WorkingDir { path, .. } | Self::InvalidUnicode { path } => path,
        }
    }

    /// The error kind, forwarded from the working-directory read.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::WorkingDir { source, .. } => source.kind(),
            Self::InvalidUnicode { .. } => io::ErrorKind::InvalidInput,
        }
    }

    /// The underlying I/O error, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::WorkingDir { source, .. } => Some(source),
            Self::InvalidUnicode { .. } => None,
        }
    }
}

impl From<ResolutionError> for io::Error {
    fn from(err: ResolutionError) -> Self {
        io::Error::new(err.kind(), err)
    }
}
