//! Path resolvers.
//!
//! Two interchangeable variants sit behind the [`PathResolver`] trait:
//! [`LongPathResolver`] for hosts with a path-length limit and
//! [`PassthroughResolver`] for hosts without one. [`PlatformResolver`] picks
//! the right one at build time.

use std::path::Path;

use crate::error::ResolutionError;
use crate::path::extended::{self, DEFAULT_THRESHOLD};
use crate::path::normalize::{absolutize, absolutize_keep_parents};
use crate::path::types::ResolvedPath;
use crate::path::working_dir::{ProcessWorkingDir, WorkingDir};

/// Turns caller-supplied paths into paths that are safe to hand to the OS.
pub trait PathResolver {
    /// Resolve `input` into its absolute and OS-ready forms.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if the input cannot be made absolute.
    fn resolve(&self, input: &Path) -> Result<ResolvedPath, ResolutionError>;
}

impl<R: PathResolver + ?Sized> PathResolver for &R {
    fn resolve(&self, input: &Path) -> Result<ResolvedPath, ResolutionError> {
        (**self).resolve(input)
    }
}

/// The resolver for the host this crate was built for.
#[cfg(windows)]
pub type PlatformResolver = LongPathResolver;

/// The resolver for the host this crate was built for.
#[cfg(not(windows))]
pub type PlatformResolver = PassthroughResolver;

/// Resolver for hosts with a path-length limit.
///
/// Paths whose cleaned absolute form is at least `threshold` UTF-16 units
/// long are rewritten with the extended-length marker.
///
/// # Examples
///
/// ```
/// use longfs::path::{FixedWorkingDir, LongPathResolver, PathResolver};
/// use std::path::Path;
///
/// let resolver = LongPathResolver::new()
///     .with_threshold(16)
///     .with_working_dir(FixedWorkingDir::new("/srv"));
///
/// let short = resolver.resolve(Path::new("a")).unwrap();
/// assert!(!short.is_rewritten());
///
/// let long = resolver.resolve(Path::new("a/much/longer/path")).unwrap();
/// assert!(long.is_rewritten());
/// assert!(long.rewritten().to_string_lossy().starts_with(r"\\?\"));
/// ```
#[derive(Debug, Clone)]
pub struct LongPathResolver<W = ProcessWorkingDir> {
    threshold: usize,
    working_dir: W,
}

impl Default for LongPathResolver {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            working_dir: ProcessWorkingDir,
        }
    }
}

impl LongPathResolver {
    /// Create a resolver with the default threshold that reads the process
    /// working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WorkingDir> LongPathResolver<W> {
    /// Set the length at or above which paths are rewritten.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Resolve relative paths against `working_dir` instead.
    #[must_use]
    pub fn with_working_dir<V: WorkingDir>(self, working_dir: V) -> LongPathResolver<V> {
        LongPathResolver {
            threshold: self.threshold,
            working_dir,
        }
    }

    /// The configured threshold.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl<W: WorkingDir> PathResolver for LongPathResolver<W> {
    fn resolve(&self, input: &Path) -> Result<ResolvedPath, ResolutionError> {
        let (absolute, working_dir) = absolutize(input, &self.working_dir)?;

        // Measured after cleaning: stray `..` segments would skew the length.
        let length = extended::path_len(&absolute);
        let rewritten = if length >= self.threshold {
            let marked = extended::add_marker(&absolute).ok_or_else(|| {
                ResolutionError::InvalidUnicode {
                    path: input.to_path_buf(),
                }
            })?;
            log::debug!(
                "rewrote {} ({length} >= {}) to {}",
                absolute.display(),
                self.threshold,
                marked.display()
            );
            marked
        } else {
            absolute.clone()
        };

        Ok(ResolvedPath::new(
            input.to_path_buf(),
            absolute,
            rewritten,
            working_dir,
        ))
    }
}

/// Resolver for hosts without a path-length limit.
///
/// Only absolutizes and drops `.` components. `..` is left for the OS to
/// resolve, so a path through a symlinked directory names the same entry it
/// would without this crate. The rewritten form is always the absolute form.
#[derive(Debug, Clone, Default)]
pub struct PassthroughResolver<W = ProcessWorkingDir> {
    working_dir: W,
}

impl PassthroughResolver {
    /// Create a resolver that reads the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WorkingDir> PassthroughResolver<W> {
    /// Resolve relative paths against `working_dir` instead.
    #[must_use]
    pub fn with_working_dir<V: WorkingDir>(self, working_dir: V) -> PassthroughResolver<V> {
        PassthroughResolver { working_dir }
    }
}

impl<W: WorkingDir> PathResolver for PassthroughResolver<W> {
    fn resolve(&self, input: &Path) -> Result<ResolvedPath, ResolutionError> {
        let (absolute, working_dir) = absolutize_keep_parents(input, &self.working_dir)?;
        Ok(ResolvedPath::new(
            input.to_path_buf(),
            absolute.clone(),
            absolute,
            working_dir,
        ))
    }
}
