//! Diagnostic wrappers for failed filesystem operations.
//!
//! A [`PathFailure`] keeps the path the caller supplied next to the path that
//! was actually handed to the OS, so a failure caused by the long-path rewrite
//! can be told apart from an ordinary I/O failure. A [`LinkFailure`] does the
//! same job for operations that take two paths.
//!
//! Both are built only at the moment an operation fails and are never
//! mutated afterwards.

use std::fmt;
use std::io;
use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::Error;
use crate::path::ResolvedPath;

/// Records the source location of the macro invocation as a [`Site`].
macro_rules! site {
    () => {
        $crate::failure::Site::new(file!(), line!(), column!())
    };
}
pub(crate) use site;

/// The filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Create or truncate a file for writing.
    Create,
    /// Open a file for reading.
    Open,
    /// Open a file with explicit options.
    OpenFile,
    /// Remove a file or empty directory.
    Remove,
    /// Remove a path and everything beneath it.
    RemoveAll,
    /// Create a single directory.
    Mkdir,
    /// Create a directory and any missing parents.
    MkdirAll,
    /// Rename a path.
    Rename,
    /// Create a hard link.
    Link,
    /// Create a symbolic link.
    Symlink,
    /// Read the target of a symbolic link.
    Readlink,
    /// Query metadata, following symlinks.
    Stat,
    /// Query metadata without following symlinks.
    Lstat,
    /// Change permission bits.
    Chmod,
    /// Change ownership, following symlinks.
    Chown,
    /// Change ownership of a symlink itself.
    Lchown,
    /// Change access and modification times.
    Chtimes,
    /// Change the process working directory.
    Chdir,
}

impl Op {
    /// The operation's name as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Open => "open",
            Self::OpenFile => "open_file",
            Self::Remove => "remove",
            Self::RemoveAll => "remove_all",
            Self::Mkdir => "mkdir",
            Self::MkdirAll => "mkdir_all",
            Self::Rename => "rename",
            Self::Link => "link",
            Self::Symlink => "symlink",
            Self::Readlink => "readlink",
            Self::Stat => "stat",
            Self::Lstat => "lstat",
            Self::Chmod => "chmod",
            Self::Chown => "chown",
            Self::Lchown => "lchown",
            Self::Chtimes => "chtimes",
            Self::Chdir => "chdir",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A source location, rendered as `file:line:column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Site {
    /// Create a site from its parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// The source file.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The line number, starting at 1.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The column number, starting at 1.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for Site {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// The two frames recorded for a failure: the facade function that built it
/// and the code that called that function.
///
/// Purely informational. Nothing in this crate branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSites {
    function: Site,
    caller: Site,
}

impl CallSites {
    /// Capture call sites, or `None` when the `call-sites` feature is off.
    #[must_use]
    pub fn capture(function: Site, caller: impl Into<Site>) -> Option<Self> {
        cfg!(feature = "call-sites").then(|| Self {
            function,
            caller: caller.into(),
        })
    }

    /// Where inside the library the failure was built.
    #[must_use]
    pub const fn function(&self) -> Site {
        self.function
    }

    /// The code that invoked the failing operation.
    #[must_use]
    pub const fn caller(&self) -> Site {
        self.caller
    }
}

/// Prints `-` for a missing value.
struct OrDash<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrDash<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("-"),
        }
    }
}

/// A single-path operation failed.
///
/// Renders as a multi-line report, one field per line:
///
/// ```text
/// fs: mkdir_all failed
///   Error: Permission denied (os error 13)
///   Original Path: data/out
///   Modified Path: /home/user/data/out
///   Working Directory: /home/user
///   Caller: src/main.rs:12:5
///   Function: longfs/src/fs/mod.rs:210:9
/// ```
#[derive(Debug, Error)]
#[error(
    "fs: {op} failed\n  Error: {source}\n  Original Path: {}\n  Modified Path: {}\n  Working Directory: {}\n  Caller: {}\n  Function: {}",
    original.display(),
    OrDash(resolved.as_deref().map(Path::display)),
    OrDash(working_dir.as_deref().map(Path::display)),
    OrDash(sites.map(|s| s.caller)),
    OrDash(sites.map(|s| s.function))
)]
pub struct PathFailure {
    op: Op,
    source: io::Error,
    original: PathBuf,
    resolved: Option<PathBuf>,
    working_dir: Option<PathBuf>,
    sites: Option<CallSites>,
}

impl PathFailure {
    /// Wrap `source` with the paths involved in the failed operation.
    ///
    /// `resolved` is `None` when the failure happened before a path could be
    /// resolved.
    #[must_use]
    pub fn new(
        op: Op,
        original: impl Into<PathBuf>,
        resolved: Option<PathBuf>,
        working_dir: Option<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self {
            op,
            source,
            original: original.into(),
            resolved,
            working_dir,
            sites: None,
        }
    }

    /// Attach captured call sites.
    #[must_use]
    pub fn with_sites(mut self, sites: Option<CallSites>) -> Self {
        self.sites = sites;
        self
    }

    /// The operation that failed.
    #[must_use]
    pub fn op(&self) -> Op {
        self.op
    }

    /// The path as the caller supplied it.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// The path submitted to the OS, if resolution got that far.
    #[must_use]
    pub fn resolved(&self) -> Option<&Path> {
        self.resolved.as_deref()
    }

    /// The working directory used to absolutize a relative input.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Captured call sites, if enabled.
    #[must_use]
    pub fn sites(&self) -> Option<CallSites> {
        self.sites
    }

    /// The wrapped OS error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// The kind of the wrapped OS error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Unwrap into the OS error.
    #[must_use]
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

/// A two-path operation failed.
///
/// `old` and `new` are kept exactly as the caller supplied them.
#[derive(Debug, Error)]
#[error("fs: {op} {} {}: {source}", old.display(), new.display())]
pub struct LinkFailure {
    op: Op,
    old: PathBuf,
    new: PathBuf,
    source: io::Error,
}

impl LinkFailure {
    /// Wrap `source` with both path operands.
    #[must_use]
    pub fn new(op: Op, old: impl Into<PathBuf>, new: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            old: old.into(),
            new: new.into(),
            source,
        }
    }

    /// The operation that failed.
    #[must_use]
    pub fn op(&self) -> Op {
        self.op
    }

    /// The first operand as supplied.
    #[must_use]
    pub fn old(&self) -> &Path {
        &self.old
    }

    /// The second operand as supplied.
    #[must_use]
    pub fn new_path(&self) -> &Path {
        &self.new
    }

    /// The wrapped OS error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// The kind of the wrapped OS error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Unwrap into the OS error.
    #[must_use]
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

/// One in-flight facade call: which operation, and who called it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Call {
    op: Op,
    caller: &'static Location<'static>,
}

impl Call {
    /// Must be invoked from a `#[track_caller]` facade function so the
    /// recorded location is the user's call site.
    #[track_caller]
    pub(crate) fn new(op: Op) -> Self {
        Self {
            op,
            caller: Location::caller(),
        }
    }

    pub(crate) fn path_failure(
        &self,
        function: Site,
        original: &Path,
        resolved: Option<&ResolvedPath>,
        source: io::Error,
    ) -> Error {
        log::trace!("{} failed for {}: {source}", self.op, original.display());
        let (rewritten, working_dir) = match resolved {
            Some(r) => (Some(r.rewritten().to_path_buf()), r.working_dir().map(Path::to_path_buf)),
            None => (None, None),
        };
        PathFailure::new(self.op, original, rewritten, working_dir, source)
            .with_sites(CallSites::capture(function, self.caller))
            .into()
    }

    pub(crate) fn link_failure(&self, old: &Path, new: &Path, source: io::Error) -> Error {
        log::trace!(
            "{} failed for {} -> {}: {source}",
            self.op,
            old.display(),
            new.display()
        );
        LinkFailure::new(self.op, old, new, source).into()
    }
}
