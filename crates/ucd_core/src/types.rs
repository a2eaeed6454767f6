//! Core data types for ucd.

use crate::error::{Result, UcdError};
use crate::ordering::recency_order;
use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used for every record.
///
/// Zero-padded, most significant field first and always UTC, so plain
/// string comparison orders timestamps chronologically.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Formats Unix seconds with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .unwrap_or_default()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Rewrites a timestamp carrying a numeric offset or `GMT` into the UTC
/// layout.
///
/// Returns `None` when the stamp is already UTC or its zone cannot be
/// interpreted (named zones other than GMT), leaving it to compare as a
/// plain string.
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    let (local, zone) = raw.rsplit_once(' ')?;
    let utc = match zone {
        "UTC" => return None,
        "GMT" => NaiveDateTime::parse_from_str(local, "%Y-%m-%d %H:%M:%S")
            .ok()?
            .and_utc(),
        _ => DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %#z")
            .ok()?
            .with_timezone(&Utc),
    };
    Some(utc.format(TIMESTAMP_FORMAT).to_string())
}

/// A record that can be ordered by recency.
pub trait Timestamped {
    /// The record's timestamp in its sortable string encoding.
    fn timestamp(&self) -> &str;
}

/// The two record collections kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Visited paths, bounded by the history limit.
    History,
    /// User-pinned paths.
    Stash,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::History => f.write_str("history"),
            Self::Stash => f.write_str("stash"),
        }
    }
}

/// One directory that has been navigated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Number of visits, at least 1.
    #[serde(rename = "count")]
    pub visit_count: u64,
    /// Time of the most recent visit.
    #[serde(rename = "ts")]
    pub last_visited_at: String,
}

impl Timestamped for VisitRecord {
    fn timestamp(&self) -> &str {
        &self.last_visited_at
    }
}

/// One user-pinned path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashRecord {
    /// When the path was stashed.
    #[serde(rename = "ts")]
    pub stashed_at: String,
    /// Optional label; empty means no alias.
    #[serde(default)]
    pub alias: String,
}

impl Timestamped for StashRecord {
    fn timestamp(&self) -> &str {
        &self.stashed_at
    }
}

/// Visit history and stash, keyed by absolute path.
///
/// This is the whole persisted document. A path may appear in both maps
/// independently. Each map is kept in write order: a record that is
/// rewritten moves to the end, and the document round-trips that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStore {
    /// Visited paths.
    #[serde(rename = "paths", default)]
    pub visited: IndexMap<String, VisitRecord>,
    /// Stashed paths.
    #[serde(rename = "stash", default)]
    pub stashed: IndexMap<String, StashRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit: a new path starts at count 1, a known path has its
    /// count incremented and timestamp refreshed.
    pub fn record_visit(&mut self, path: &str, timestamp: String) -> &VisitRecord {
        let mut record = self.visited.shift_remove(path).unwrap_or(VisitRecord {
            visit_count: 0,
            last_visited_at: String::new(),
        });
        record.visit_count += 1;
        record.last_visited_at = timestamp;
        let (index, _) = self.visited.insert_full(path.to_string(), record);
        &self.visited[index]
    }

    /// Stashes `path` under `alias` (empty for none).
    ///
    /// Fails with `AliasCollision` if another path already holds the alias;
    /// the store is left untouched in that case.
    pub fn stash_path(&mut self, path: &str, alias: &str, timestamp: String) -> Result<()> {
        self.check_alias_available(alias, path)?;
        self.stashed.shift_remove(path);
        self.stashed.insert(
            path.to_string(),
            StashRecord {
                stashed_at: timestamp,
                alias: alias.to_string(),
            },
        );
        Ok(())
    }

    /// Removes every visited path, keeping the stash.
    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }

    /// Removes every stashed path, keeping the history.
    pub fn clear_stashed(&mut self) {
        self.stashed.clear();
    }

    /// Number of records in a collection.
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::History => self.visited.len(),
            Collection::Stash => self.stashed.len(),
        }
    }

    /// Paths of a collection, most recent first.
    ///
    /// Records sharing a timestamp rank in reverse write order, so the one
    /// written last comes first.
    pub fn ordered(&self, collection: Collection) -> Vec<&str> {
        let keys = match collection {
            Collection::History => recency_order(self.visited.iter().rev()),
            Collection::Stash => recency_order(self.stashed.iter().rev()),
        };
        keys.into_iter().map(String::as_str).collect()
    }

    /// Path at a 1-based recency rank.
    pub fn path_at(&self, collection: Collection, rank: usize) -> Result<&str> {
        let ordered = self.ordered(collection);
        if rank == 0 || rank > ordered.len() {
            return Err(UcdError::IndexOutOfRange {
                collection,
                index: rank,
                len: ordered.len(),
            });
        }
        Ok(ordered[rank - 1])
    }

    /// Rewrites legacy offset timestamps into the UTC layout so they rank
    /// against new records. Returns how many records changed.
    pub fn normalize_timestamps(&mut self) -> usize {
        let mut changed = 0;
        for rec in self.visited.values_mut() {
            if let Some(ts) = normalize_timestamp(&rec.last_visited_at) {
                rec.last_visited_at = ts;
                changed += 1;
            }
        }
        for rec in self.stashed.values_mut() {
            if let Some(ts) = normalize_timestamp(&rec.stashed_at) {
                rec.stashed_at = ts;
                changed += 1;
            }
        }
        changed
    }
}
