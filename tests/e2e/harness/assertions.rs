use anyhow::Result;
use ucd_core::RecordStore;

/// Declarative assertions on navigation results and store state.
///
/// Paths are relative to the workspace home; `~` names the home itself.
pub enum Assertion {
    // Last invocation
    Cwd(String),
    LastWasPrevious,
    FellBackFrom(String),

    // History
    HistoryOrder(Vec<String>),
    HistoryLen(usize),
    VisitCount { path: String, count: u64 },
    NotInHistory(String),

    // Stash
    StashOrder(Vec<String>),
    StashLen(usize),
    AliasResolvesTo { alias: String, path: String },
    NoAlias(String),

    // Persistence
    StoreFileExists,
    NoStoreFile,
    StoreFileContains(String),

    // Custom
    Custom(Box<dyn Fn(&RecordStore) -> Result<()> + Send + Sync>),
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cwd(p) => write!(f, "Cwd({:?})", p),
            Self::LastWasPrevious => write!(f, "LastWasPrevious"),
            Self::FellBackFrom(p) => write!(f, "FellBackFrom({:?})", p),
            Self::HistoryOrder(paths) => write!(f, "HistoryOrder({:?})", paths),
            Self::HistoryLen(n) => write!(f, "HistoryLen({})", n),
            Self::VisitCount { path, count } => {
                write!(f, "VisitCount {{ path: {:?}, count: {} }}", path, count)
            }
            Self::NotInHistory(p) => write!(f, "NotInHistory({:?})", p),
            Self::StashOrder(paths) => write!(f, "StashOrder({:?})", paths),
            Self::StashLen(n) => write!(f, "StashLen({})", n),
            Self::AliasResolvesTo { alias, path } => {
                write!(f, "AliasResolvesTo {{ alias: {:?}, path: {:?} }}", alias, path)
            }
            Self::NoAlias(a) => write!(f, "NoAlias({:?})", a),
            Self::StoreFileExists => write!(f, "StoreFileExists"),
            Self::NoStoreFile => write!(f, "NoStoreFile"),
            Self::StoreFileContains(s) => write!(f, "StoreFileContains({:?})", s),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}
