//! The persisted store document and its load/mutate/write-back cycle.

use crate::error::{Result, UcdError};
use crate::types::RecordStore;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The JSON file holding the [`RecordStore`].
///
/// The whole document is read and written at once. Writes are atomic using
/// temp file + rename, so a crash never leaves a half-written store.
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Creates a handle for the store at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the store document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store, starting empty if the file is missing, empty or
    /// cannot be decoded.
    pub fn load(&self) -> RecordStore {
        match self.try_load() {
            Ok(store) => store,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "starting with an empty store");
                RecordStore::new()
            }
        }
    }

    /// Loads the store, reporting why it could not be decoded.
    ///
    /// Timestamps written with a numeric offset are rewritten in UTC.
    pub fn try_load(&self) -> Result<RecordStore> {
        let bytes = fs::read(&self.path)?;
        let mut store: RecordStore =
            serde_json::from_slice(&bytes).map_err(|e| UcdError::StoreDecode(e.to_string()))?;
        let migrated = store.normalize_timestamps();
        if migrated > 0 {
            debug!(path = %self.path.display(), migrated, "normalized legacy timestamps");
        }
        Ok(store)
    }

    /// Writes the whole store atomically.
    pub fn save(&self, store: &RecordStore) -> Result<()> {
        let json =
            serde_json::to_vec(store).map_err(|e| UcdError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            path = %self.path.display(),
            visited = store.visited.len(),
            stashed = store.stashed.len(),
            "store saved"
        );
        Ok(())
    }

    /// Opens a transaction over this file.
    pub fn begin(&self) -> StoreTransaction {
        StoreTransaction::open(self.clone())
    }
}

/// One invocation's exclusive view of the store.
///
/// The store is loaded on open and mutated in memory. Asking for
/// [`store_mut`](Self::store_mut) marks the transaction dirty; a dirty
/// transaction is written back on [`commit`](Self::commit), or on drop if it
/// was never committed. A transaction that was only read never touches the
/// file.
pub struct StoreTransaction {
    file: StoreFile,
    store: RecordStore,
    dirty: bool,
}

impl StoreTransaction {
    /// Loads `file` into a new transaction.
    pub fn open(file: StoreFile) -> Self {
        let store = file.load();
        Self {
            file,
            store,
            dirty: false,
        }
    }

    /// Read access to the loaded store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Write access; the store will be persisted.
    pub fn store_mut(&mut self) -> &mut RecordStore {
        self.dirty = true;
        &mut self.store
    }

    /// Whether the store has been handed out for mutation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persists the store if it was mutated.
    ///
    /// A failed save is reported here only; drop does not retry it.
    pub fn commit(mut self) -> Result<()> {
        if std::mem::take(&mut self.dirty) {
            self.file.save(&self.store)?;
        }
        Ok(())
    }
}

impl Drop for StoreTransaction {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(err) = self.file.save(&self.store) {
                warn!(path = %self.file.path().display(), error = %err, "failed to save store");
            }
        }
    }
}
