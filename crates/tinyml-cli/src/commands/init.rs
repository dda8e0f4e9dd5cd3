//! Init - Write a Default Configuration File
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use super::utils::print_success;
use crate::cli::InitArgs;
use crate::config::TinymlConfig;
use crate::error::{CliError, CliResult};

/// Execute the init command
pub fn execute(args: InitArgs, quiet: bool) -> CliResult<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    TinymlConfig::default().save(&args.path)?;
    tracing::debug!(path = %args.path.display(), "wrote default configuration");

    if !quiet {
        print_success(&format!("Created {}", args.path.display()));
    }
    Ok(())
}
