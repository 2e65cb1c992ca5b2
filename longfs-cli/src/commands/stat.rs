//! Command to show metadata.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::fs::Metadata;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

/// Show file metadata.
///
/// One line per path: kind, size in bytes, permissions and modification
/// time in seconds since the epoch.
#[derive(Args)]
pub struct StatCommand {
    /// Paths to inspect
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Describe a symbolic link itself rather than its target
    #[arg(long)]
    pub no_follow: bool,
}

impl StatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = global.fs();

        for path in &self.paths {
            let meta = if self.no_follow {
                fs.lstat(path)?
            } else {
                fs.stat(path)?
            };
            println!("{}: {}", path.display(), describe(&meta));
        }

        Ok(())
    }
}

fn describe(meta: &Metadata) -> String {
    let file_type = meta.file_type();
    let kind = if file_type.is_symlink() {
        "symlink"
    } else if file_type.is_dir() {
        "directory"
    } else if file_type.is_file() {
        "file"
    } else {
        "other"
    };

    let modified = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map_or_else(|| "-".to_string(), |d| d.as_secs().to_string());

    format!("{kind} {} {} {modified}", meta.len(), permissions(meta))
}

#[cfg(unix)]
fn permissions(meta: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    format!("{:o}", meta.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn permissions(meta: &Metadata) -> String {
    if meta.permissions().readonly() {
        "readonly".to_string()
    } else {
        "writable".to_string()
    }
}
