//! Configuration and on-disk locations.

use crate::error::{Result, UcdError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the store document under the home directory.
pub const STORE_FILE_NAME: &str = ".ucd-cache";

/// Configuration file location relative to the home directory.
pub const CONFIG_RELATIVE_PATH: &str = ".config/ucd/ucd.conf";

/// User configuration, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rows shown by listings and size of the visit history after each
    /// visit. Negative means unbounded (default: 10).
    #[serde(rename = "MaxMRUDisplay", default = "default_max_history_display")]
    pub max_history_display: i64,

    /// Enter the parent directory when the target is not valid
    /// (default: false).
    #[serde(rename = "FileFallbackBehavior", default)]
    pub fallback_to_parent: bool,
}

fn default_max_history_display() -> i64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_history_display: default_max_history_display(),
            fallback_to_parent: false,
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// A missing or empty file is replaced by the defaults, which are
    /// written back so the user has something to edit. A file that does not
    /// decode is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(UcdError::Io(e)),
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            let config = Config::default();
            config.save(path)?;
            debug!(path = %path.display(), "wrote default configuration");
            return Ok(config);
        }

        serde_json::from_slice(&content).map_err(|e| UcdError::ConfigDecode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Writes the configuration to `path`, creating its directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            create_private_dir(dir)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| UcdError::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// History bound; `None` when unbounded.
    pub fn history_limit(&self) -> Option<usize> {
        usize::try_from(self.max_history_display).ok()
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Where ucd keeps its files, derived from a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// The user's home directory, also the default navigation target.
    pub home: PathBuf,
    /// The store document.
    pub store_file: PathBuf,
    /// The configuration file.
    pub config_file: PathBuf,
}

impl Locations {
    /// Locations under `home`.
    pub fn from_home(home: impl AsRef<Path>) -> Self {
        let home = home.as_ref().to_path_buf();
        Self {
            store_file: home.join(STORE_FILE_NAME),
            config_file: home.join(CONFIG_RELATIVE_PATH),
            home,
        }
    }

    /// Locations under the current user's home directory.
    pub fn discover() -> Result<Self> {
        dirs::home_dir()
            .map(Self::from_home)
            .ok_or(UcdError::NoHomeDirectory)
    }
}
