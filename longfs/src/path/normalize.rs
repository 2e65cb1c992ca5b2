//! Lexical path normalization.
//!
//! Nothing here touches the filesystem: symlinks are not followed and the
//! paths do not need to exist.

use std::path::{Component, Path, PathBuf};

use crate::error::ResolutionError;
use crate::path::working_dir::WorkingDir;

/// Resolve `.` and `..` components and collapse redundant separators.
///
/// `..` directly below the root stays at the root, and a leading `..` on a
/// relative path is kept. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use longfs::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("/a/b/../../c")), PathBuf::from("/c"));
/// assert_eq!(clean(Path::new("/..")), PathBuf::from("/"));
/// assert_eq!(clean(Path::new("a//b/")), PathBuf::from("a/b"));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                result.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::ParentDir) | None => result.push(".."),
                // Already at the root
                Some(_) => {}
            },
            Component::Normal(c) => result.push(c),
        }
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }

    result
}

/// Drop `.` components and redundant separators, keeping every `..`.
///
/// Unlike [`clean`], the result names the same entry as the input even when
/// a component is a symlink, since the OS still resolves each `..` itself.
/// An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use longfs::path::normalize::tidy;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(tidy(Path::new("/a/./link/../b")), PathBuf::from("/a/link/../b"));
/// assert_eq!(tidy(Path::new("a//b/")), PathBuf::from("a/b"));
/// ```
#[must_use]
pub fn tidy(path: &Path) -> PathBuf {
    let mut result: PathBuf = path
        .components()
        .filter(|component| *component != Component::CurDir)
        .collect();

    if result.as_os_str().is_empty() {
        result.push(".");
    }

    result
}

/// Make `path` absolute and [`clean`] it.
///
/// Returns the cleaned absolute path and, for relative input, the working
/// directory that was read to absolutize it. The working directory is read
/// fresh on every call.
///
/// # Errors
///
/// Returns [`ResolutionError::WorkingDir`] if `path` is relative and the
/// working directory cannot be read.
pub fn absolutize<W: WorkingDir + ?Sized>(
    path: &Path,
    working_dir: &W,
) -> Result<(PathBuf, Option<PathBuf>), ResolutionError> {
    absolutize_with(path, working_dir, clean)
}

/// Make `path` absolute and [`tidy`] it, leaving `..` for the OS.
///
/// # Errors
///
/// Same as [`absolutize`].
pub fn absolutize_keep_parents<W: WorkingDir + ?Sized>(
    path: &Path,
    working_dir: &W,
) -> Result<(PathBuf, Option<PathBuf>), ResolutionError> {
    absolutize_with(path, working_dir, tidy)
}

fn absolutize_with<W: WorkingDir + ?Sized>(
    path: &Path,
    working_dir: &W,
    normalize: fn(&Path) -> PathBuf,
) -> Result<(PathBuf, Option<PathBuf>), ResolutionError> {
    if path.is_absolute() {
        return Ok((normalize(path), None));
    }

    let cwd = working_dir
        .current_dir()
        .map_err(|source| ResolutionError::WorkingDir {
            path: path.to_path_buf(),
            source,
        })?;
    let absolute = normalize(&cwd.join(path));
    Ok((absolute, Some(cwd)))
}
