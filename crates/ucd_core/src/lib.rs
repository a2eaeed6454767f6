//! ucd core library
//!
//! Directory navigation with memory, providing:
//! - A recency-ranked history of visited directories
//! - A user-curated stash of (optionally aliased) directories
//! - Resolution of a navigation request into one validated directory
//!
//! # Quick Start
//!
//! ```
//! use ucd_core::{Config, NavRequest, Navigator, ProcessDir, Resolution, StoreFile};
//! use tempfile::TempDir;
//!
//! let home = TempDir::new().unwrap();
//! let project = home.path().join("project");
//! std::fs::create_dir(&project).unwrap();
//!
//! let file = StoreFile::new(home.path().join(".ucd-cache"));
//! let navigator = Navigator::new(Config::default(), home.path());
//!
//! let mut txn = file.begin();
//! let request = NavRequest::plain(Some(project.to_str().unwrap()));
//! let resolution = navigator.navigate(&mut txn, &request, &mut ProcessDir).unwrap();
//! txn.commit().unwrap();
//!
//! assert!(matches!(resolution, Resolution::Entered(_)));
//! assert_eq!(file.load().visited.len(), 1);
//! ```
//!
//! # Features
//!
//! ## Recency ordering
//!
//! Both collections are ranked newest first; rank 1 is the latest entry:
//!
//! ```
//! use ucd_core::{format_timestamp, Collection, RecordStore};
//!
//! let mut store = RecordStore::new();
//! store.record_visit("/srv/old", format_timestamp(1_000));
//! store.record_visit("/srv/new", format_timestamp(2_000));
//!
//! assert_eq!(store.path_at(Collection::History, 1).unwrap(), "/srv/new");
//! ```
//!
//! ## Bounded history
//!
//! ```
//! use ucd_core::{format_timestamp, RecordStore};
//!
//! let mut store = RecordStore::new();
//! for i in 0..5 {
//!     store.record_visit(&format!("/p{}", i), format_timestamp(i));
//! }
//! store.enforce_limit(Some(2));
//! assert_eq!(store.visited.len(), 2);
//! ```

mod alias;
mod config;
mod error;
mod eviction;
mod navigator;
mod ordering;
mod resolve;
mod store;
mod types;
mod workdir;

pub use config::{Config, Locations, CONFIG_RELATIVE_PATH, STORE_FILE_NAME};
pub use error::{Result, UcdError};
pub use navigator::{Maintenance, MaintenanceReport, Navigator};
pub use ordering::recency_order;
pub use resolve::{
    repeat_segment, swap_ancestor, NavMode, NavRequest, Resolution, ResolvedPath, Resolver,
    SwappedPath, PREVIOUS_DIR,
};
pub use store::{StoreFile, StoreTransaction};
pub use types::*;
pub use workdir::{ProcessDir, WorkingDir};

/// Time provider trait for testing.
///
/// Allows injecting controlled time so visit timestamps are deterministic.
/// This is always available but only used when explicitly set via `with_time_provider()`.
pub trait TimeProvider: Send + Sync {
    /// Returns the current Unix timestamp in seconds.
    fn now(&self) -> i64;
}

impl<F> TimeProvider for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now(&self) -> i64 {
        self()
    }
}
