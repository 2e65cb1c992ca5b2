//! Filesystem operations that tolerate long paths.
//!
//! Every operation here mirrors a standard-library filesystem call. Path
//! arguments are resolved through a [`PathResolver`] first, the resolved
//! form goes to the OS, and any failure comes back wrapped in a
//! [`PathFailure`](crate::PathFailure) or [`LinkFailure`](crate::LinkFailure)
//! that still names the path the caller supplied.
//!
//! The free functions use the host's [`PlatformResolver`]. Use [`Fs`] to
//! plug in a different resolver, threshold or working directory.
//!
//! # Examples
//!
//! ```no_run
//! use longfs::fs;
//!
//! fs::mkdir_all("build/out", 0o755)?;
//! let meta = fs::stat("build/out")?;
//! assert!(meta.is_dir());
//! fs::remove_all("build")?;
//! # Ok::<(), longfs::Error>(())
//! ```

mod sys;

use std::borrow::Cow;
use std::fs::{File, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use filetime::FileTime;

use crate::error::Result;
use crate::failure::{site, Call, Op, Site};
use crate::path::extended::strip_marker;
use crate::path::{PathResolver, PlatformResolver, ResolvedPath};

/// A filesystem facade bound to one path resolver.
///
/// # Examples
///
/// ```
/// use longfs::fs::Fs;
/// use longfs::path::{FixedWorkingDir, LongPathResolver};
///
/// let fs = Fs::with_resolver(
///     LongPathResolver::new()
///         .with_threshold(200)
///         .with_working_dir(FixedWorkingDir::new("/srv")),
/// );
/// let resolved = fs.resolve("logs/today.txt").unwrap();
/// assert!(!resolved.is_rewritten());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fs<R = PlatformResolver> {
    resolver: R,
}

impl Fs {
    /// Create a facade using the host's resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: PathResolver> Fs<R> {
    /// Create a facade with a specific resolver.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// The resolver in use.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolve a path without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolution`](crate::Error::Resolution) if the working
    /// directory cannot be read or the path cannot be rewritten.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<ResolvedPath> {
        Ok(self.resolver.resolve(path.as_ref())?)
    }

    /// Resolve `original` and run `op` on the result.
    fn run<T>(
        &self,
        call: Call,
        function: Site,
        original: &Path,
        op: impl FnOnce(&Path) -> io::Result<T>,
    ) -> Result<T> {
        let resolved = self
            .resolver
            .resolve(original)
            .map_err(|e| call.path_failure(function, original, None, e.into()))?;

        op(resolved.rewritten()).map_err(|e| call.path_failure(function, original, Some(&resolved), e))
    }

    /// Resolve both operands and run `op` on the results.
    fn run_pair<T>(
        &self,
        call: Call,
        old: &Path,
        new: &Path,
        op: impl FnOnce(&Path, &Path) -> io::Result<T>,
    ) -> Result<T> {
        let resolve = |path: &Path| {
            self.resolver
                .resolve(path)
                .map_err(|e| call.link_failure(old, new, e.into()))
        };
        let from = resolve(old)?;
        let to = resolve(new)?;

        op(from.rewritten(), to.rewritten()).map_err(|e| call.link_failure(old, new, e))
    }

    /// Create or truncate a file for writing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn create(&self, path: impl AsRef<Path>) -> Result<File> {
        self.run(Call::new(Op::Create), site!(), path.as_ref(), |p| File::create(p))
    }

    /// Open a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn open(&self, path: impl AsRef<Path>) -> Result<File> {
        self.run(Call::new(Op::Open), site!(), path.as_ref(), |p| File::open(p))
    }

    /// Open a file with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn open_file(&self, path: impl AsRef<Path>, options: &OpenOptions) -> Result<File> {
        self.run(Call::new(Op::OpenFile), site!(), path.as_ref(), |p| options.open(p))
    }

    /// Remove a file, symlink or empty directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn remove(&self, path: impl AsRef<Path>) -> Result<()> {
        self.run(Call::new(Op::Remove), site!(), path.as_ref(), |p| sys::remove(p))
    }

    /// Remove a path and everything beneath it.
    ///
    /// A path that does not exist is not an error. A symlink is removed
    /// without touching its target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn remove_all(&self, path: impl AsRef<Path>) -> Result<()> {
        self.run(Call::new(Op::RemoveAll), site!(), path.as_ref(), |p| {
            sys::remove_all(p)
        })
    }

    /// Create a single directory. `mode` is ignored on hosts without Unix
    /// permission bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails, including when the directory already exists.
    #[track_caller]
    pub fn mkdir(&self, path: impl AsRef<Path>, mode: u32) -> Result<()> {
        self.run(Call::new(Op::Mkdir), site!(), path.as_ref(), |p| {
            sys::mkdir(p, mode, false)
        })
    }

    /// Create a directory and any missing parents. An existing directory is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn mkdir_all(&self, path: impl AsRef<Path>, mode: u32) -> Result<()> {
        self.run(Call::new(Op::MkdirAll), site!(), path.as_ref(), |p| {
            sys::mkdir(p, mode, true)
        })
    }

    /// Rename `old` to `new`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Link`](crate::Error::Link) naming both operands as
    /// supplied.
    #[track_caller]
    pub fn rename(&self, old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
        self.run_pair(Call::new(Op::Rename), old.as_ref(), new.as_ref(), |a, b| {
            std::fs::rename(a, b)
        })
    }

    /// Create a hard link `new` pointing at `old`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Link`](crate::Error::Link) naming both operands as
    /// supplied.
    #[track_caller]
    pub fn link(&self, old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
        self.run_pair(Call::new(Op::Link), old.as_ref(), new.as_ref(), |a, b| {
            std::fs::hard_link(a, b)
        })
    }

    /// Create a symbolic link at `link` pointing at `target`.
    ///
    /// A relative target is stored as given, so it stays relative to the
    /// link's directory. An absolute target is resolved like any other path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Link`](crate::Error::Link) naming both operands as
    /// supplied.
    #[track_caller]
    pub fn symlink(&self, target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
        let call = Call::new(Op::Symlink);
        let (target, link) = (target.as_ref(), link.as_ref());
        let resolve = |path: &Path| {
            self.resolver
                .resolve(path)
                .map_err(|e| call.link_failure(target, link, e.into()))
        };

        let stored: Cow<'_, Path> = if target.is_absolute() {
            Cow::Owned(resolve(target)?.into_rewritten())
        } else {
            Cow::Borrowed(target)
        };
        let at = resolve(link)?;

        sys::symlink(&stored, at.rewritten()).map_err(|e| call.link_failure(target, link, e))
    }

    /// Read the target of a symbolic link. The extended-length marker is
    /// stripped from the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn readlink(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.run(Call::new(Op::Readlink), site!(), path.as_ref(), |p| {
            std::fs::read_link(p).map(|target| strip_marker(&target).into_owned())
        })
    }

    /// Query metadata, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn stat(&self, path: impl AsRef<Path>) -> Result<Metadata> {
        self.run(Call::new(Op::Stat), site!(), path.as_ref(), |p| std::fs::metadata(p))
    }

    /// Query metadata without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn lstat(&self, path: impl AsRef<Path>) -> Result<Metadata> {
        self.run(Call::new(Op::Lstat), site!(), path.as_ref(), |p| {
            std::fs::symlink_metadata(p)
        })
    }

    /// Change permission bits. Without Unix permissions only the owner-write
    /// bit is honored, as the read-only attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn chmod(&self, path: impl AsRef<Path>, mode: u32) -> Result<()> {
        self.run(Call::new(Op::Chmod), site!(), path.as_ref(), |p| sys::chmod(p, mode))
    }

    /// Change owner and group, following symlinks. `None` leaves that id
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails. Hosts without Unix ownership report
    /// [`io::ErrorKind::Unsupported`].
    #[track_caller]
    pub fn chown(&self, path: impl AsRef<Path>, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
        self.run(Call::new(Op::Chown), site!(), path.as_ref(), |p| {
            sys::chown(p, uid, gid)
        })
    }

    /// Change owner and group of a symlink itself.
    ///
    /// # Errors
    ///
    /// Same as [`Fs::chown`].
    #[track_caller]
    pub fn lchown(&self, path: impl AsRef<Path>, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
        self.run(Call::new(Op::Lchown), site!(), path.as_ref(), |p| {
            sys::lchown(p, uid, gid)
        })
    }

    /// Set access and modification times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn chtimes(
        &self,
        path: impl AsRef<Path>,
        accessed: SystemTime,
        modified: SystemTime,
    ) -> Result<()> {
        self.run(Call::new(Op::Chtimes), site!(), path.as_ref(), |p| {
            filetime::set_file_times(
                p,
                FileTime::from_system_time(accessed),
                FileTime::from_system_time(modified),
            )
        })
    }

    /// Change the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Path`](crate::Error::Path) if resolution or the OS
    /// call fails.
    #[track_caller]
    pub fn chdir(&self, path: impl AsRef<Path>) -> Result<()> {
        self.run(Call::new(Op::Chdir), site!(), path.as_ref(), |p| {
            std::env::set_current_dir(p)
        })
    }
}

/// Resolve a path with the host's resolver.
///
/// # Errors
///
/// See [`Fs::resolve`].
pub fn resolve(path: impl AsRef<Path>) -> Result<ResolvedPath> {
    Fs::new().resolve(path)
}

/// See [`Fs::create`].
///
/// # Errors
///
/// See [`Fs::create`].
#[track_caller]
pub fn create(path: impl AsRef<Path>) -> Result<File> {
    Fs::new().create(path)
}

/// See [`Fs::open`].
///
/// # Errors
///
/// See [`Fs::open`].
#[track_caller]
pub fn open(path: impl AsRef<Path>) -> Result<File> {
    Fs::new().open(path)
}

/// See [`Fs::open_file`].
///
/// # Errors
///
/// See [`Fs::open_file`].
#[track_caller]
pub fn open_file(path: impl AsRef<Path>, options: &OpenOptions) -> Result<File> {
    Fs::new().open_file(path, options)
}

/// See [`Fs::remove`].
///
/// # Errors
///
/// See [`Fs::remove`].
#[track_caller]
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    Fs::new().remove(path)
}

/// See [`Fs::remove_all`].
///
/// # Errors
///
/// See [`Fs::remove_all`].
#[track_caller]
pub fn remove_all(path: impl AsRef<Path>) -> Result<()> {
    Fs::new().remove_all(path)
}

/// See [`Fs::mkdir`].
///
/// # Errors
///
/// See [`Fs::mkdir`].
#[track_caller]
pub fn mkdir(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    Fs::new().mkdir(path, mode)
}

/// See [`Fs::mkdir_all`].
///
/// # Errors
///
/// See [`Fs::mkdir_all`].
#[track_caller]
pub fn mkdir_all(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    Fs::new().mkdir_all(path, mode)
}

/// See [`Fs::rename`].
///
/// # Errors
///
/// See [`Fs::rename`].
#[track_caller]
pub fn rename(old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
    Fs::new().rename(old, new)
}

/// See [`Fs::link`].
///
/// # Errors
///
/// See [`Fs::link`].
#[track_caller]
pub fn link(old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
    Fs::new().link(old, new)
}

/// See [`Fs::symlink`].
///
/// # Errors
///
/// See [`Fs::symlink`].
#[track_caller]
pub fn symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    Fs::new().symlink(target, link)
}

/// See [`Fs::readlink`].
///
/// # Errors
///
/// See [`Fs::readlink`].
#[track_caller]
pub fn readlink(path: impl AsRef<Path>) -> Result<PathBuf> {
    Fs::new().readlink(path)
}

/// See [`Fs::stat`].
///
/// # Errors
///
/// See [`Fs::stat`].
#[track_caller]
pub fn stat(path: impl AsRef<Path>) -> Result<Metadata> {
    Fs::new().stat(path)
}

/// See [`Fs::lstat`].
///
/// # Errors
///
/// See [`Fs::lstat`].
#[track_caller]
pub fn lstat(path: impl AsRef<Path>) -> Result<Metadata> {
    Fs::new().lstat(path)
}

/// See [`Fs::chmod`].
///
/// # Errors
///
/// See [`Fs::chmod`].
#[track_caller]
pub fn chmod(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    Fs::new().chmod(path, mode)
}

/// See [`Fs::chown`].
///
/// # Errors
///
/// See [`Fs::chown`].
#[track_caller]
pub fn chown(path: impl AsRef<Path>, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
    Fs::new().chown(path, uid, gid)
}

/// See [`Fs::lchown`].
///
/// # Errors
///
/// See [`Fs::lchown`].
#[track_caller]
pub fn lchown(path: impl AsRef<Path>, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
    Fs::new().lchown(path, uid, gid)
}

/// See [`Fs::chtimes`].
///
/// # Errors
///
/// See [`Fs::chtimes`].
#[track_caller]
pub fn chtimes(path: impl AsRef<Path>, accessed: SystemTime, modified: SystemTime) -> Result<()> {
    Fs::new().chtimes(path, accessed, modified)
}

/// See [`Fs::chdir`].
///
/// # Errors
///
/// See [`Fs::chdir`].
#[track_caller]
pub fn chdir(path: impl AsRef<Path>) -> Result<()> {
    Fs::new().chdir(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::{FixedWorkingDir, LongPathResolver, MockWorkingDir};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::tempdir;

    fn failing_fs() -> Fs<LongPathResolver<FixedWorkingDir>> {
        Fs::with_resolver(
            LongPathResolver::new().with_working_dir(FixedWorkingDir::failing(io::ErrorKind::NotFound)),
        )
    }

    /// A facade whose resolver rewrites everything.
    fn always_rewrite(dir: &Path) -> Fs<LongPathResolver<FixedWorkingDir>> {
        Fs::with_resolver(
            LongPathResolver::new()
                .with_threshold(1)
                .with_working_dir(FixedWorkingDir::new(dir)),
        )
    }

    #[test]
    fn test_create_write_open() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("hello.txt");

        fs.create(&file).unwrap().write_all(b"hi").unwrap();
        let meta = fs.open(&file).unwrap().metadata().unwrap();
        assert_eq!(meta.len(), 2);
    }

    #[test]
    fn test_open_file_with_options() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("log.txt");
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        fs.open_file(&file, &options).unwrap().write_all(b"a").unwrap();
        fs.open_file(&file, &options).unwrap().write_all(b"b").unwrap();
        assert_eq!(std::fs::read(&file).unwrap(), b"ab");
    }

    #[test]
    fn test_open_missing_wraps_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = Fs::new().open(&missing).unwrap_err();
        assert!(err.is_not_found());
        match err {
            Error::Path(failure) => {
                assert_eq!(failure.op(), Op::Open);
                assert_eq!(failure.original(), missing.as_path());
                assert!(failure.resolved().is_some());
                assert!(failure.working_dir().is_none());
            }
            other => panic!("expected a path failure, got {other:?}"),
        }
    }

    #[test]
    fn test_mkdir_all_existing_is_ok() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        fs.mkdir_all(dir.path(), 0o755).unwrap();
        fs.mkdir_all(dir.path().join("x/y"), 0o755).unwrap();
        fs.mkdir_all(dir.path().join("x/y"), 0o755).unwrap();
        assert!(dir.path().join("x/y").is_dir());
    }

    #[test]
    fn test_mkdir_existing_already_exists() {
        let dir = tempdir().unwrap();
        let err = Fs::new().mkdir(dir.path(), 0o755).unwrap_err();
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_remove_all_missing_is_ok() {
        let dir = tempdir().unwrap();
        Fs::new().remove_all(dir.path().join("nope")).unwrap();
    }

    #[test]
    fn test_remove_all_tree() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let top = dir.path().join("top");
        fs.mkdir_all(top.join("a/b"), 0o755).unwrap();
        fs.create(top.join("a/b/f")).unwrap();

        fs.remove_all(&top).unwrap();
        assert!(fs.stat(&top).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove_single_entries() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("f");
        let sub = dir.path().join("d");
        fs.create(&file).unwrap();
        fs.mkdir(&sub, 0o755).unwrap();

        fs.remove(&file).unwrap();
        fs.remove(&sub).unwrap();
        assert!(fs.lstat(&file).unwrap_err().is_not_found());
        assert!(fs.lstat(&sub).unwrap_err().is_not_found());
    }

    #[test]
    fn test_rename_moves_file() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let old = dir.path().join("old");
        let new = dir.path().join("new");
        fs.create(&old).unwrap();

        fs.rename(&old, &new).unwrap();
        assert!(fs.stat(&old).is_err());
        assert!(fs.stat(&new).unwrap().is_file());
    }

    #[test]
    fn test_link_existing_destination() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let old = dir.path().join("a");
        let new = dir.path().join("b");
        fs.create(&old).unwrap();
        fs.create(&new).unwrap();

        let err = fs.link(&old, &new).unwrap_err();
        assert!(err.is_already_exists());
        match err {
            Error::Link(failure) => {
                assert_eq!(failure.op(), Op::Link);
                assert_eq!(failure.old(), old.as_path());
                assert_eq!(failure.new_path(), new.as_path());
                assert!(failure.to_string().starts_with("fs: link "));
            }
            other => panic!("expected a link failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_relative_target_kept() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        fs.create(dir.path().join("target")).unwrap();
        let link = dir.path().join("link");

        fs.symlink("target", &link).unwrap();
        assert_eq!(fs.readlink(&link).unwrap(), PathBuf::from("target"));
        assert!(fs.stat(&link).unwrap().is_file());
        assert!(fs.lstat(&link).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_absolute_target_resolved() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let target = dir.path().join("t");
        fs.create(&target).unwrap();
        let link = dir.path().join("l");

        fs.symlink(dir.path().join("./t"), &link).unwrap();
        assert_eq!(fs.readlink(&link).unwrap(), target);
    }

    #[cfg(windows)]
    #[test]
    fn test_readlink_strips_marker_from_rewritten_target() {
        let dir = tempdir().unwrap();
        let fs = always_rewrite(dir.path());
        let target = dir.path().join("target.txt");
        fs.create(&target).unwrap();

        // Creating symlinks needs a privilege the test account may lack
        if fs.symlink(&target, "link").is_err() {
            return;
        }

        let stored = std::fs::read_link(dir.path().join("link")).unwrap();
        assert!(stored.to_string_lossy().starts_with(r"\\?\"));

        let read = fs.readlink("link").unwrap();
        assert!(!read.to_string_lossy().starts_with(r"\\?\"));
        assert_eq!(read, target);
    }

    #[test]
    fn test_readlink_on_regular_file_fails() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("f");
        fs.create(&file).unwrap();

        let err = fs.readlink(&file).unwrap_err();
        match err {
            Error::Path(failure) => assert_eq!(failure.op(), Op::Readlink),
            other => panic!("expected a path failure, got {other:?}"),
        }
    }

    #[test]
    fn test_chmod_read_only() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("f");
        fs.create(&file).unwrap();

        fs.chmod(&file, 0o444).unwrap();
        assert!(fs.stat(&file).unwrap().permissions().readonly());
        fs.chmod(&file, 0o644).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_chown_to_self_is_ok() {
        use std::os::unix::fs::MetadataExt;

        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("f");
        fs.create(&file).unwrap();
        let meta = fs.stat(&file).unwrap();

        fs.chown(&file, Some(meta.uid()), Some(meta.gid())).unwrap();
        fs.lchown(&file, None, None).unwrap();
    }

    #[test]
    fn test_chtimes_sets_modified() {
        let dir = tempdir().unwrap();
        let fs = Fs::new();
        let file = dir.path().join("f");
        fs.create(&file).unwrap();
        let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);

        fs.chtimes(&file, when, when).unwrap();
        assert_eq!(fs.stat(&file).unwrap().modified().unwrap(), when);
    }

    #[test]
    fn test_resolution_failure_skips_os_call() {
        let err = failing_fs().mkdir("relative/dir", 0o755).unwrap_err();
        assert!(err.is_not_found());
        match err {
            Error::Path(failure) => {
                assert_eq!(failure.op(), Op::Mkdir);
                assert_eq!(failure.original(), Path::new("relative/dir"));
                assert!(failure.resolved().is_none());
                assert!(failure.working_dir().is_none());
            }
            other => panic!("expected a path failure, got {other:?}"),
        }
    }

    #[test]
    fn test_resolution_failure_on_pair() {
        let err = failing_fs().rename("a", "b").unwrap_err();
        match err {
            Error::Link(failure) => {
                assert_eq!(failure.op(), Op::Rename);
                assert_eq!(failure.old(), Path::new("a"));
                assert_eq!(failure.new_path(), Path::new("b"));
            }
            other => panic!("expected a link failure, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_surfaces_resolution_error() {
        let err = failing_fs().resolve("x").unwrap_err();
        assert!(matches!(err, Error::Resolution(_)));
    }

    #[test]
    fn test_relative_failure_reports_working_dir() {
        let dir = tempdir().unwrap();
        let fs = Fs::with_resolver(
            LongPathResolver::new().with_working_dir(FixedWorkingDir::new(dir.path())),
        );

        let err = fs.stat("missing").unwrap_err();
        match err {
            Error::Path(failure) => {
                assert_eq!(failure.working_dir(), Some(dir.path()));
                assert_eq!(failure.resolved(), Some(dir.path().join("missing").as_path()));
            }
            other => panic!("expected a path failure, got {other:?}"),
        }
    }

    #[test]
    fn test_absolute_input_never_reads_working_dir() {
        let dir = tempdir().unwrap();
        let mut wd = MockWorkingDir::new();
        wd.expect_current_dir().never();
        let fs = Fs::with_resolver(LongPathResolver::new().with_working_dir(wd));

        fs.create(dir.path().join("f")).unwrap();
        fs.stat(dir.path().join("f")).unwrap();
    }

    #[test]
    fn test_rewritten_path_reported_on_failure() {
        let dir = tempdir().unwrap();
        let err = always_rewrite(dir.path()).stat("missing").unwrap_err();
        match err {
            Error::Path(failure) => {
                let resolved = failure.resolved().unwrap().to_string_lossy().into_owned();
                assert!(resolved.starts_with(r"\\?\"));
                assert_eq!(failure.original(), Path::new("missing"));
            }
            other => panic!("expected a path failure, got {other:?}"),
        }
    }

    #[cfg(feature = "call-sites")]
    #[test]
    fn test_failure_records_caller_site() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let expected_line = line!() + 1;
        let err = Fs::new().stat(&missing).unwrap_err();
        let Error::Path(failure) = err else {
            panic!("expected a path failure");
        };
        let sites = failure.sites().unwrap();
        assert_eq!(sites.caller().file(), file!());
        assert_eq!(sites.caller().line(), expected_line);
        assert!(sites.function().file().ends_with("mod.rs"));

        let report = failure.to_string();
        assert!(report.starts_with("fs: stat failed"));
        assert!(report.contains(&format!("Caller: {}", sites.caller())));
    }

    #[cfg(feature = "call-sites")]
    #[test]
    fn test_free_function_records_caller_site() {
        let expected_line = line!() + 1;
        let err = stat("/definitely/not/here/at/all").unwrap_err();
        let Error::Path(failure) = err else {
            panic!("expected a path failure");
        };
        assert_eq!(failure.sites().unwrap().caller().line(), expected_line);
    }
}
