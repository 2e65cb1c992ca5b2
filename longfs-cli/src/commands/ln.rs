//! Command to create links.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::PathBuf;

/// Create a hard link, or a symbolic link with `--symbolic`.
///
/// A relative symlink target is stored as given, relative to the link.
#[derive(Args)]
pub struct LnCommand {
    /// Path the link points at
    pub target: PathBuf,

    /// Path of the new link
    pub link: PathBuf,

    /// Create a symbolic link instead of a hard link
    #[arg(short, long)]
    pub symbolic: bool,
}

impl LnCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = global.fs();

        if self.symbolic {
            fs.symlink(&self.target, &self.link)?;
        } else {
            fs.link(&self.target, &self.link)?;
        }

        log::info!("linked {} -> {}", self.link.display(), self.target.display());

        Ok(())
    }
}
