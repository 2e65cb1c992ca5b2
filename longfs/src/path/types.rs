//! Core types for path resolution.

use std::path::{Path, PathBuf};

/// The outcome of resolving one input path.
///
/// `absolute` is always the faithful cleaned absolute form of the input and
/// never carries a marker. `rewritten` is what gets handed to the OS: equal
/// to `absolute`, or `absolute` behind the extended-length marker when the
/// length threshold was reached.
///
/// # Examples
///
/// ```
/// use longfs::path::ResolvedPath;
/// use std::path::PathBuf;
///
/// let resolved = ResolvedPath::new(
///     PathBuf::from("data/out.txt"),
///     PathBuf::from("/home/user/data/out.txt"),
///     PathBuf::from("/home/user/data/out.txt"),
///     Some(PathBuf::from("/home/user")),
/// );
/// assert!(!resolved.is_rewritten());
/// assert_eq!(resolved.working_dir(), Some(PathBuf::from("/home/user").as_path()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The input exactly as supplied.
    original: PathBuf,
    /// Cleaned absolute form, no marker.
    absolute: PathBuf,
    /// The form submitted to the OS.
    rewritten: PathBuf,
    /// Working directory read for relative input.
    working_dir: Option<PathBuf>,
}

impl ResolvedPath {
    /// Create a resolved path.
    #[must_use]
    pub fn new(
        original: PathBuf,
        absolute: PathBuf,
        rewritten: PathBuf,
        working_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            original,
            absolute,
            rewritten,
            working_dir,
        }
    }

    /// The input path before resolution.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// The cleaned absolute path.
    #[must_use]
    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// The path to submit to the OS.
    #[must_use]
    pub fn rewritten(&self) -> &Path {
        &self.rewritten
    }

    /// The working directory used, if the input was relative.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Check if the extended-length rewrite was applied.
    #[must_use]
    pub fn is_rewritten(&self) -> bool {
        self.rewritten != self.absolute
    }

    /// Convert into the path to submit to the OS.
    #[must_use]
    pub fn into_rewritten(self) -> PathBuf {
        self.rewritten
    }
}
