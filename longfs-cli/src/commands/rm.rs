//! Command to remove files and directories.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;

/// Remove files or directories.
///
/// Without `--recursive` only files, symlinks and empty directories can be
/// removed. With it, whole trees go and missing paths are skipped.
#[derive(Args)]
pub struct RmCommand {
    /// Paths to remove
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Remove directories and their contents
    #[arg(short, long)]
    pub recursive: bool,
}

impl RmCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = global.fs();

        for path in &self.paths {
            if self.recursive {
                fs.remove_all(path)?;
            } else {
                fs.remove(path)?;
            }

            log::info!("removed {}", path.display());
        }

        Ok(())
    }
}
