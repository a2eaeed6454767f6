//! Resolve a target directory and record the visit.

use super::Outcome;
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;
use ucd_core::{
    Config, Locations, NavRequest, Navigator, ProcessDir, Resolution, StoreFile, PREVIOUS_DIR,
};

/// Navigate according to `request`, persisting the updated store.
pub fn run(locations: &Locations, config: Config, request: &NavRequest) -> Result<Outcome> {
    let navigator = Navigator::new(config, &locations.home);
    let mut txn = StoreFile::new(&locations.store_file).begin();

    let resolution = navigator.navigate(&mut txn, request, &mut ProcessDir)?;
    txn.commit().context("Failed to save history")?;

    match resolution {
        Resolution::Previous => Ok(Outcome::Cd(PathBuf::from(PREVIOUS_DIR))),
        Resolution::Entered(resolved) => {
            if let Some(from) = &resolved.fallback_from {
                eprintln!("path `{}` is not a valid path", from.display());
                eprintln!(
                    "{} Falling back to parent directory {}",
                    style("→").yellow().for_stderr(),
                    resolved.path.display()
                );
            }
            Ok(Outcome::Cd(resolved.path))
        }
    }
}
