//! CLI commands.

pub mod list;
pub mod maintain;
pub mod navigate;

use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use ucd_core::{Config, Locations, UcdError};

/// What the calling shell should do.
#[derive(Debug)]
pub enum Outcome {
    /// cd into this path (or `-` for the previous directory).
    Cd(PathBuf),
    /// Stay in the current directory.
    Stay,
}

/// Locates the user's files and loads the configuration.
pub fn load_environment() -> Result<(Locations, Config)> {
    let locations = Locations::discover()?;
    let config = Config::load(&locations.config_file).context("Failed to load configuration")?;
    Ok((locations, config))
}

/// Prints an error and any recovery hint to stderr.
pub fn report_error(err: &anyhow::Error) {
    let core = err.chain().find_map(|e| e.downcast_ref::<UcdError>());
    match core {
        Some(core) => eprintln!("{} {}", style("error:").red().bold().for_stderr(), core),
        None => eprintln!("{} {:#}", style("error:").red().bold().for_stderr(), err),
    }
    if let Some(hint) = core.and_then(UcdError::recovery_suggestion) {
        eprintln!("  {} {}", style("hint:").cyan().for_stderr(), hint);
    }
}
