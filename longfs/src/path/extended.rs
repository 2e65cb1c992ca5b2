//! Extended-length path markers.
//!
//! On Windows, paths handed to the Win32 file APIs are limited to `MAX_PATH`
//! characters unless they carry the `\\?\` marker, which switches off the
//! limit together with the API's own path normalization. A marked path must
//! therefore already be absolute and clean before the marker is added.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Marker for drive-letter paths (`\\?\C:\...`).
pub const MARKER: &str = r"\\?\";

/// Marker for UNC paths (`\\?\UNC\server\share\...`).
pub const UNC_MARKER: &str = r"\\?\UNC\";

/// Device namespace prefix (`\\.\`), passed through untouched.
const DEVICE_PREFIX: &str = r"\\.\";

/// Length at or above which a path is rewritten.
///
/// The host's documented component limit is 255; the margin leaves room for
/// expansion the OS performs on its side (for example when it resolves a
/// trailing component). Verify against the target host before relying on
/// the exact value.
pub const DEFAULT_THRESHOLD: usize = 245;

/// Length of `path` in the unit the host limit is counted in (UTF-16 code
/// units).
///
/// ASCII case folding never changes the result, so two spellings of the same
/// path on a case-insensitive filesystem always get the same rewrite decision.
#[must_use]
pub fn path_len(path: &Path) -> usize {
    #[cfg(windows)]
    {
        use std::os::windows::ffi::OsStrExt;
        path.as_os_str().encode_wide().count()
    }

    #[cfg(not(windows))]
    {
        path.to_string_lossy().encode_utf16().count()
    }
}

/// Check if `path` already carries an extended-length or device prefix.
///
/// # Examples
///
/// ```
/// use longfs::path::extended::has_marker;
/// use std::path::Path;
///
/// assert!(has_marker(Path::new(r"\\?\C:\data")));
/// assert!(has_marker(Path::new(r"\\.\PhysicalDrive0")));
/// assert!(!has_marker(Path::new(r"C:\data")));
/// ```
#[must_use]
pub fn has_marker(path: &Path) -> bool {
    let text = path.to_string_lossy();
    text.starts_with(MARKER) || text.starts_with(DEVICE_PREFIX)
}

/// Prefix a clean absolute path with the extended-length marker.
///
/// UNC paths get the `UNC` form. Paths that are already marked come back
/// unchanged. On Windows, `/` separators become `\`. Returns `None` if
/// the path is not valid Unicode and so cannot be rewritten faithfully.
///
/// # Examples
///
/// ```
/// use longfs::path::extended::add_marker;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     add_marker(Path::new(r"C:\data")),
///     Some(PathBuf::from(r"\\?\C:\data"))
/// );
/// assert_eq!(
///     add_marker(Path::new(r"\\server\share\data")),
///     Some(PathBuf::from(r"\\?\UNC\server\share\data"))
/// );
/// ```
#[must_use]
pub fn add_marker(absolute: &Path) -> Option<PathBuf> {
    if has_marker(absolute) {
        return Some(absolute.to_path_buf());
    }

    let text = absolute.to_str()?;

    // The extended form turns off separator normalization
    #[cfg(windows)]
    let text = &text.replace('/', "\\");

    let marked = match text.strip_prefix(r"\\") {
        Some(unc) => format!("{UNC_MARKER}{unc}"),
        None => format!("{MARKER}{text}"),
    };
    Some(PathBuf::from(marked))
}

/// Remove an extended-length marker so the path can be shown to a caller.
///
/// Device paths and unmarked paths come back unchanged.
///
/// # Examples
///
/// ```
/// use longfs::path::extended::strip_marker;
/// use std::path::Path;
///
/// assert_eq!(strip_marker(Path::new(r"\\?\C:\data")), Path::new(r"C:\data"));
/// assert_eq!(
///     strip_marker(Path::new(r"\\?\UNC\server\share")),
///     Path::new(r"\\server\share")
/// );
/// assert_eq!(strip_marker(Path::new("/plain")), Path::new("/plain"));
/// ```
#[must_use]
pub fn strip_marker(path: &Path) -> Cow<'_, Path> {
    let Some(text) = path.to_str() else {
        return Cow::Borrowed(path);
    };

    if let Some(unc) = text.strip_prefix(UNC_MARKER) {
        Cow::Owned(PathBuf::from(format!(r"\\{unc}")))
    } else if let Some(rest) = text.strip_prefix(MARKER) {
        Cow::Borrowed(Path::new(rest))
    } else {
        Cow::Borrowed(path)
    }
}
