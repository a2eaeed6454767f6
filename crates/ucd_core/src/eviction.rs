//! Capacity bound on the visit history.

use crate::types::{Collection, RecordStore};
use tracing::debug;

impl RecordStore {
    /// Drops visited paths ranked beyond `limit`, oldest first.
    ///
    /// `None` means unbounded and is a no-op. The stash is never evicted.
    /// Returns the evicted paths.
    pub fn enforce_limit(&mut self, limit: Option<usize>) -> Vec<String> {
        self.evict_beyond(limit, None)
    }

    /// Like [`enforce_limit`](Self::enforce_limit), but `pinned` always
    /// holds one of the `limit` slots whatever its rank. A zero limit still
    /// empties the history.
    pub fn enforce_limit_keeping(&mut self, limit: Option<usize>, pinned: &str) -> Vec<String> {
        self.evict_beyond(limit, Some(pinned))
    }

    fn evict_beyond(&mut self, limit: Option<usize>, pinned: Option<&str>) -> Vec<String> {
        let Some(limit) = limit else {
            return Vec::new();
        };

        let ordered = self.ordered(Collection::History);
        let evicted: Vec<String> = match pinned {
            Some(pinned) if limit > 0 && self.visited.contains_key(pinned) => ordered
                .into_iter()
                .filter(|path| *path != pinned)
                .skip(limit - 1)
                .map(str::to_string)
                .collect(),
            _ => ordered.into_iter().skip(limit).map(str::to_string).collect(),
        };

        for path in &evicted {
            self.visited.shift_remove(path);
        }

        if !evicted.is_empty() {
            debug!(limit, evicted = evicted.len(), "trimmed visit history");
        }
        evicted
    }
}
