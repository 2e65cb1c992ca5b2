//! Command to create directories.

use crate::error::CliError;
use crate::utils::{parse_mode, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Create directories.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directories to create
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Create missing parents; an existing directory is not an error
    #[arg(short, long)]
    pub parents: bool,

    /// Permission bits in octal (ignored without Unix permissions)
    #[arg(short, long, default_value = "755", value_parser = parse_mode)]
    pub mode: u32,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = global.fs();

        for path in &self.paths {
            if self.parents {
                fs.mkdir_all(path, self.mode)?;
            } else {
                fs.mkdir(path, self.mode)?;
            }

            log::info!("created {}", path.display());
        }

        Ok(())
    }
}
