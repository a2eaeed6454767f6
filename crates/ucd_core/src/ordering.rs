//! Most-recent-first ordering over record collections.

use crate::types::Timestamped;

/// Returns the keys of `records` sorted by timestamp, newest first.
///
/// The sort is stable: keys whose records share a timestamp keep the order
/// in which `records` yielded them.
pub fn recency_order<'a, K, R, I>(records: I) -> Vec<&'a K>
where
    I: IntoIterator<Item = (&'a K, &'a R)>,
    K: ?Sized + 'a,
    R: Timestamped + 'a,
{
    let mut entries: Vec<(&K, &R)> = records.into_iter().collect();
    entries.sort_by(|a, b| b.1.timestamp().cmp(a.1.timestamp()));
    entries.into_iter().map(|(key, _)| key).collect()
}
