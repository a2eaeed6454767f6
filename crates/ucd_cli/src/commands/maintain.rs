//! Store maintenance: clearing collections and re-aliasing stash entries.

use super::list;
use anyhow::{Context, Result};
use console::style;
use ucd_core::{Config, Locations, Maintenance, Navigator, StoreFile};

/// Apply `action` to the store and report what changed.
pub fn run(locations: &Locations, config: Config, action: Maintenance) -> Result<()> {
    let navigator = Navigator::new(config, &locations.home);
    let mut txn = StoreFile::new(&locations.store_file).begin();

    let report = navigator.maintain(&mut txn, &action)?;
    txn.commit().context("Failed to save history")?;

    let done = style("✓").green().for_stderr();
    match &action {
        Maintenance::ClearHistory => {
            eprintln!("{} Cleared {} history entries", done, report.removed.len());
        }
        Maintenance::ClearToLimit => {
            eprintln!(
                "{} Trimmed {} history entries beyond the display limit",
                done,
                report.removed.len()
            );
        }
        Maintenance::ClearStash => {
            eprintln!("{} Cleared {} stash entries", done, report.removed.len());
        }
        Maintenance::Realias { alias, .. } => {
            if let Some(path) = &report.realiased {
                if alias.is_empty() {
                    eprintln!("{} Removed alias from {}", done, path);
                } else {
                    eprintln!("{} {} is now aliased `{}`", done, path, alias);
                }
            }
            list::stash(locations, navigator.config());
        }
    }
    Ok(())
}
