#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # longfs
//!
//! Filesystem operations that keep working when paths exceed the host's
//! path-length limit.
//!
//! Each operation absolutizes its path arguments. On hosts with a
//! path-length limit it also cleans them and rewrites them with the `\\?\`
//! extended-length marker once they reach a length threshold. The result
//! goes to the OS. Failures are reported with both the path the caller
//! supplied and the path the OS saw.
//!
//! ## Core Types
//!
//! - [`Fs`]: the operation facade, generic over a [`PathResolver`]
//! - [`LongPathResolver`] and [`PassthroughResolver`]: the two resolver variants
//! - [`PathFailure`] and [`LinkFailure`]: single- and two-path diagnostics
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use longfs::path::{FixedWorkingDir, LongPathResolver, PathResolver};
//!
//! let resolver = LongPathResolver::new()
//!     .with_threshold(20)
//!     .with_working_dir(FixedWorkingDir::new("/projects"));
//!
//! let resolved = resolver.resolve("alpha/beta/gamma".as_ref()).unwrap();
//! assert!(resolved.is_rewritten());
//! assert!(resolved.absolute().ends_with("alpha/beta/gamma"));
//! ```
//!
//! ## Features
//!
//! - `call-sites` (default): record the caller and facade source locations
//!   in every [`PathFailure`].
//! - `property-tests`: run the heavier property-based test suite.

pub mod error;
pub mod failure;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, ResolutionError, Result};
pub use failure::{CallSites, LinkFailure, Op, PathFailure, Site};
pub use fs::{
    chdir, chmod, chown, chtimes, create, lchown, link, lstat, mkdir, mkdir_all, open, open_file,
    readlink, remove, remove_all, rename, resolve, stat, symlink, Fs,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    FixedWorkingDir, LongPathResolver, PassthroughResolver, PathResolver, PlatformResolver,
    ProcessWorkingDir, ResolvedPath, WorkingDir,
};
