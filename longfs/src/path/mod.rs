//! Path resolution with extended-length rewriting.
//!
//! Every facade operation runs its path arguments through a [`PathResolver`]
//! before touching the OS.
//!
//! # Key Concepts
//!
//! ## Absolutization
//!
//! Relative inputs are joined onto the working directory, which is read
//! fresh through a [`WorkingDir`] accessor on every call. Absolute inputs
//! never read it.
//!
//! ## Cleaning
//!
//! [`LongPathResolver`] removes `.` and `..` components and redundant
//! separators lexically, without following symlinks, before the length is
//! measured. [`PassthroughResolver`] only drops `.` and keeps `..`, so the
//! OS resolves it across symlinked directories as it normally would.
//!
//! ## Extended-length rewrite
//!
//! On hosts with a path-length limit, a cleaned path whose length reaches the
//! threshold ([`extended::DEFAULT_THRESHOLD`] by default) is prefixed with
//! the `\\?\` marker. The marker never leaks back to callers: values read
//! from the OS go through [`extended::strip_marker`].
//!
//! # Examples
//!
//! ```
//! use longfs::path::{FixedWorkingDir, LongPathResolver, PathResolver};
//! use std::path::Path;
//!
//! let resolver = LongPathResolver::new().with_working_dir(FixedWorkingDir::new("/home/user"));
//! let resolved = resolver.resolve(Path::new("data/../data/out.txt")).unwrap();
//!
//! assert!(resolved.absolute().ends_with("data/out.txt"));
//! assert!(!resolved.is_rewritten());
//! ```

pub mod extended;
pub mod normalize;
pub mod resolver;
mod types;
mod working_dir;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::{LongPathResolver, PassthroughResolver, PathResolver, PlatformResolver};
pub use types::ResolvedPath;
pub use working_dir::{FixedWorkingDir, ProcessWorkingDir, WorkingDir};

#[cfg(test)]
pub(crate) use working_dir::MockWorkingDir;
