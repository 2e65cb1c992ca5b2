//! Read-only access to the working directory used for relative paths.

use std::env;
use std::io;
use std::path::PathBuf;

/// Source of the directory that relative paths are resolved against.
///
/// Implementations must not cache: the process working directory can change
/// between calls and resolution has to see the current value.
#[cfg_attr(test, mockall::automock)]
pub trait WorkingDir {
    /// Read the current working directory.
    ///
    /// # Errors
    ///
    /// Returns the I/O error reported by the host, for example when the
    /// directory was deleted out from under the process.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// The process-wide working directory owned by the host OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }
}

/// A fixed working directory, independent of the process state.
///
/// Useful for previewing resolution against a directory other than the
/// current one, and for tests.
///
/// # Examples
///
/// ```
/// use longfs::path::{FixedWorkingDir, WorkingDir};
/// use std::path::Path;
///
/// let wd = FixedWorkingDir::new("/srv/data");
/// assert_eq!(wd.current_dir().unwrap(), Path::new("/srv/data"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWorkingDir {
    dir: Result<PathBuf, io::ErrorKind>,
}

impl FixedWorkingDir {
    /// Always report `dir` as the working directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Ok(dir.into()),
        }
    }

    /// Always fail with an error of the given kind.
    #[must_use]
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self { dir: Err(kind) }
    }
}

impl WorkingDir for FixedWorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        match &self.dir {
            Ok(dir) => Ok(dir.clone()),
            Err(kind) => Err(io::Error::new(*kind, "working directory unavailable")),
        }
    }
}
