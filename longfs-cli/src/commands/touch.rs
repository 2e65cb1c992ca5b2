//! Command to update timestamps.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

/// Set access and modification times to now, creating missing files.
#[derive(Args)]
pub struct TouchCommand {
    /// Files to touch
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Do not create missing files
    #[arg(short = 'c', long)]
    pub no_create: bool,
}

impl TouchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fs = global.fs();
        let mut options = OpenOptions::new();
        options.write(true).create(true);

        for path in &self.paths {
            // Existing entries, directories included, only get new times
            if !self.no_create && fs.lstat(path).is_err() {
                fs.open_file(path, &options)?;
                log::info!("created {}", path.display());
            }

            let now = SystemTime::now();
            match fs.chtimes(path, now, now) {
                Err(e) if self.no_create && e.is_not_found() => continue,
                other => other?,
            }
        }

        Ok(())
    }
}
