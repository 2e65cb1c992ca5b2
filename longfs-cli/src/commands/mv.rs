//! Command to rename entries.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;

/// Rename a file or directory.
#[derive(Args)]
pub struct MvCommand {
    /// Existing path
    pub old: PathBuf,

    /// New path
    pub new: PathBuf,
}

impl MvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.fs().rename(&self.old, &self.new)?;

        log::info!("renamed {} -> {}", self.old.display(), self.new.display());

        Ok(())
    }
}
