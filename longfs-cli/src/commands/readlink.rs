//! Command to print symlink targets.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;

/// Print the target of a symbolic link.
#[derive(Args)]
pub struct ReadlinkCommand {
    /// Symbolic link to read
    pub path: PathBuf,
}

impl ReadlinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = global.fs().readlink(&self.path)?;
        println!("{}", target.display());
        Ok(())
    }
}
