//! Command to show how paths resolve.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use longfs::PathResolver;
use std::path::PathBuf;

/// Print the absolute and rewritten form of each path.
///
/// Output is one tab-separated line per path. With `--verbose` the
/// original input and the working directory are printed as well.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = global.preview_resolver();

        for path in &self.paths {
            let resolved = resolver.resolve(path).map_err(longfs::Error::from)?;

            if global.verbose {
                println!("original:  {}", resolved.original().display());
                if let Some(wd) = resolved.working_dir() {
                    println!("cwd:       {}", wd.display());
                }
                println!("absolute:  {}", resolved.absolute().display());
                println!("rewritten: {}", resolved.rewritten().display());
            } else {
                println!(
                    "{}\t{}",
                    resolved.absolute().display(),
                    resolved.rewritten().display()
                );
            }
        }

        Ok(())
    }
}
