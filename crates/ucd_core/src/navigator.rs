//! One invocation: resolve, record, evict.

use crate::config::Config;
use crate::error::{Result, UcdError};
use crate::resolve::{NavRequest, Resolution, Resolver};
use crate::store::StoreTransaction;
use crate::types::{format_timestamp, Collection};
use crate::workdir::WorkingDir;
use crate::TimeProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Store maintenance commands. Each one mutates the store and ends the
/// invocation without navigating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maintenance {
    /// Forget every visited path.
    ClearHistory,
    /// Trim the history to the configured display limit.
    ClearToLimit,
    /// Forget every stashed path.
    ClearStash,
    /// Re-label the stash entry at a 1-based rank.
    Realias {
        /// Stash rank, most recent first.
        rank: usize,
        /// New alias; empty removes it.
        alias: String,
    },
}

/// What a maintenance command changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceReport {
    /// Paths removed from a collection.
    pub removed: Vec<String>,
    /// Path whose alias was changed.
    pub realiased: Option<String>,
}

/// Applies navigation requests and maintenance commands to a store.
pub struct Navigator {
    config: Config,
    home: PathBuf,
    time_provider: Option<Arc<dyn TimeProvider>>,
}

impl Navigator {
    /// Creates a navigator; `home` is the target when no argument is given.
    pub fn new(config: Config, home: impl AsRef<Path>) -> Self {
        Self {
            config,
            home: home.as_ref().to_path_buf(),
            time_provider: None,
        }
    }

    /// Sets a custom time provider for testing.
    pub fn with_time_provider(mut self, provider: impl TimeProvider + 'static) -> Self {
        self.time_provider = Some(Arc::new(provider));
        self
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn now(&self) -> String {
        let secs = match &self.time_provider {
            Some(provider) => provider.now(),
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or_default(),
        };
        format_timestamp(secs)
    }

    /// Resolves `request` and records the visit.
    ///
    /// On success the resolved directory is recorded (and stashed if asked),
    /// then the history is trimmed to the configured limit. The fresh visit
    /// keeps its slot under any limit of at least 1, even when older records
    /// share its timestamp. Any error leaves the store untouched.
    pub fn navigate<W: WorkingDir>(
        &self,
        txn: &mut StoreTransaction,
        request: &NavRequest,
        workdir: &mut W,
    ) -> Result<Resolution> {
        let mode = request.mode()?;
        let resolution = Resolver::new(
            txn.store(),
            workdir,
            &self.home,
            self.config.fallback_to_parent,
        )
        .resolve(&mode)?;

        let resolved = match &resolution {
            Resolution::Entered(resolved) => resolved,
            Resolution::Previous => return Ok(Resolution::Previous),
        };
        let key = resolved
            .path
            .to_str()
            .ok_or_else(|| UcdError::NonUtf8Path(resolved.path.clone()))?
            .to_string();

        if let Some(alias) = &request.stash_as {
            txn.store().check_alias_available(alias, &key)?;
        }

        let now = self.now();
        let store = txn.store_mut();
        let visits = store.record_visit(&key, now.clone()).visit_count;
        if let Some(alias) = &request.stash_as {
            store.stash_path(&key, alias, now)?;
        }
        store.enforce_limit_keeping(self.config.history_limit(), &key);

        debug!(path = %key, visits, stashed = request.stash_as.is_some(), "recorded visit");
        Ok(resolution)
    }

    /// Runs a maintenance command.
    pub fn maintain(
        &self,
        txn: &mut StoreTransaction,
        action: &Maintenance,
    ) -> Result<MaintenanceReport> {
        let mut report = MaintenanceReport::default();
        match action {
            Maintenance::ClearHistory => {
                let store = txn.store_mut();
                report.removed = store.visited.keys().cloned().collect();
                store.clear_visited();
            }
            Maintenance::ClearToLimit => {
                report.removed = txn.store_mut().enforce_limit(self.config.history_limit());
            }
            Maintenance::ClearStash => {
                let store = txn.store_mut();
                report.removed = store.stashed.keys().cloned().collect();
                store.clear_stashed();
            }
            Maintenance::Realias { rank, alias } => {
                let path = txn.store().path_at(Collection::Stash, *rank)?.to_string();
                txn.store().check_alias_available(alias, &path)?;
                report.realiased = Some(txn.store_mut().set_alias(*rank, alias)?);
            }
        }
        debug!(?action, removed = report.removed.len(), "maintenance applied");
        Ok(report)
    }
}
