//! Stash alias registry.
//!
//! Non-empty aliases are unique across the stash. The empty string means
//! "no alias" and may appear on any number of entries.

use crate::error::{Result, UcdError};
use crate::types::{Collection, RecordStore};

impl RecordStore {
    /// Returns true if any stash entry carries `alias`.
    ///
    /// Always false for the empty alias.
    pub fn alias_exists(&self, alias: &str) -> bool {
        self.alias_owner(alias).is_some()
    }

    /// Returns the stashed path labelled `alias`.
    pub fn alias_owner(&self, alias: &str) -> Option<&str> {
        if alias.is_empty() {
            return None;
        }
        self.stashed
            .iter()
            .find(|(_, rec)| rec.alias == alias)
            .map(|(path, _)| path.as_str())
    }

    /// Resolves an alias to its stashed path.
    pub fn lookup_alias(&self, alias: &str) -> Result<&str> {
        self.alias_owner(alias)
            .ok_or_else(|| UcdError::AliasNotFound(alias.to_string()))
    }

    /// Re-labels the stash entry at 1-based recency `rank`.
    ///
    /// Returns the path that was re-labelled. Fails without modifying the
    /// store if the rank is out of range or `alias` belongs to another path.
    pub fn set_alias(&mut self, rank: usize, alias: &str) -> Result<String> {
        let path = self.path_at(Collection::Stash, rank)?.to_string();
        self.check_alias_available(alias, &path)?;

        if let Some(rec) = self.stashed.get_mut(&path) {
            rec.alias = alias.to_string();
        }
        Ok(path)
    }

    pub(crate) fn check_alias_available(&self, alias: &str, path: &str) -> Result<()> {
        match self.alias_owner(alias) {
            Some(owner) if owner != path => Err(UcdError::AliasCollision {
                alias: alias.to_string(),
                path: owner.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
