//! Host primitives that need per-platform handling.
//!
//! Everything here receives already-resolved paths.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

/// Create a directory, optionally with its parents. `mode` is applied on
/// Unix and ignored elsewhere.
pub(crate) fn mkdir(path: &Path, mode: u32, recursive: bool) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(recursive);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }

    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)
}

/// Whether an entry has to be removed as a directory.
fn removes_as_dir(meta: &Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::FileTypeExt;
        if meta.file_type().is_symlink_dir() {
            return true;
        }
    }

    meta.is_dir()
}

/// Remove a file, symlink or empty directory.
pub(crate) fn remove(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if removes_as_dir(&meta) {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Remove a path and everything beneath it. A missing path is not an error.
pub(crate) fn remove_all(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        remove(path)
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Set permission bits. Elsewhere than Unix only the owner-write bit
/// matters: clearing it makes the entry read-only.
pub(crate) fn chmod(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    #[cfg(not(unix))]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_readonly(mode & 0o200 == 0);
        fs::set_permissions(path, perms)
    }
}

#[cfg(unix)]
pub(crate) fn chown(path: &Path, uid: Option<u32>, gid: Option<u32>) -> io::Result<()> {
    std::os::unix::fs::chown(path, uid, gid)
}

#[cfg(unix)]
pub(crate) fn lchown(path: &Path, uid: Option<u32>, gid: Option<u32>) -> io::Result<()> {
    std::os::unix::fs::lchown(path, uid, gid)
}

#[cfg(not(unix))]
pub(crate) fn chown(_path: &Path, _uid: Option<u32>, _gid: Option<u32>) -> io::Result<()> {
    Err(unsupported("chown"))
}

#[cfg(not(unix))]
pub(crate) fn lchown(_path: &Path, _uid: Option<u32>, _gid: Option<u32>) -> io::Result<()> {
    Err(unsupported("lchown"))
}

#[cfg(not(unix))]
fn unsupported(op: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{op} is not supported on this platform"),
    )
}

/// Create a symbolic link at `link` pointing to `target`.
pub(crate) fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};

        // Relative targets are relative to the link's directory
        let probe = match link.parent() {
            Some(parent) if target.is_relative() => parent.join(target),
            _ => target.to_path_buf(),
        };
        if probe.is_dir() {
            symlink_dir(target, link)
        } else {
            symlink_file(target, link)
        }
    }
}
