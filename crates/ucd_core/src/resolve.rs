//! Turning a navigation request into one validated directory.

use crate::error::{Result, UcdError};
use crate::types::{Collection, RecordStore};
use crate::workdir::WorkingDir;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Target that defers to the shell's previous directory.
pub const PREVIOUS_DIR: &str = "-";

/// Everything a single invocation asked for.
///
/// Navigation modes are meant to be exclusive; when several are set,
/// [`NavRequest::mode`] picks one by fixed precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavRequest {
    /// Positional argument: a path, or the replacement name for a swap.
    pub target: Option<String>,
    /// How many times to repeat `target` (values below 1 mean 1).
    pub repeat: usize,
    /// Number of levels to climb before swapping in `target`.
    pub swap_up: Option<usize>,
    /// Navigate to the stashed path with this alias.
    pub alias: Option<String>,
    /// Navigate to the n-th most recent visited path (1-based).
    pub history_index: Option<usize>,
    /// Navigate to the n-th most recent stashed path (1-based).
    pub stash_index: Option<usize>,
    /// Also stash the resolved path, under this alias (empty for none).
    pub stash_as: Option<String>,
}

impl NavRequest {
    /// A plain target, or the home directory when `None`.
    pub fn plain(target: Option<&str>) -> Self {
        Self {
            target: target.map(str::to_string),
            ..Self::default()
        }
    }

    /// Replace the ancestor `up_count + 1` levels up with `replacement`.
    pub fn swap(replacement: &str, up_count: usize) -> Self {
        Self {
            target: Some(replacement.to_string()),
            swap_up: Some(up_count),
            ..Self::default()
        }
    }

    /// Navigate to a stashed alias.
    pub fn alias(alias: &str) -> Self {
        Self {
            alias: Some(alias.to_string()),
            ..Self::default()
        }
    }

    /// Navigate by history rank.
    pub fn history(rank: usize) -> Self {
        Self {
            history_index: Some(rank),
            ..Self::default()
        }
    }

    /// Navigate by stash rank.
    pub fn stash(rank: usize) -> Self {
        Self {
            stash_index: Some(rank),
            ..Self::default()
        }
    }

    /// Sets the repeat count for a plain target.
    pub fn repeated(mut self, times: usize) -> Self {
        self.repeat = times;
        self
    }

    /// Stashes the resolved path as well.
    pub fn stashing(mut self, alias: &str) -> Self {
        self.stash_as = Some(alias.to_string());
        self
    }

    /// Selects the navigation mode.
    ///
    /// Precedence: ancestor swap, alias, history rank, stash rank, plain.
    pub fn mode(&self) -> Result<NavMode> {
        if let Some(up_count) = self.swap_up {
            let replacement = self.target.clone().ok_or_else(|| {
                UcdError::Usage("ancestor swap needs a replacement directory name".to_string())
            })?;
            if up_count == 0 {
                return Err(UcdError::Usage(
                    "ancestor swap count must be at least 1".to_string(),
                ));
            }
            return Ok(NavMode::AncestorSwap {
                replacement,
                up_count,
            });
        }
        if let Some(alias) = &self.alias {
            return Ok(NavMode::Alias(alias.clone()));
        }
        if let Some(rank) = self.history_index {
            return Ok(NavMode::HistoryIndex(rank));
        }
        if let Some(rank) = self.stash_index {
            return Ok(NavMode::StashIndex(rank));
        }
        match self.target.as_deref() {
            Some(PREVIOUS_DIR) => Ok(NavMode::Previous),
            target => Ok(NavMode::Plain {
                target: target.map(str::to_string),
                times: self.repeat.max(1),
            }),
        }
    }
}

/// The single navigation mode of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMode {
    /// `-`: handed straight back to the shell.
    Previous,
    /// Replace an ancestor directory name, keeping the descendant suffix.
    AncestorSwap {
        /// New name for the ancestor.
        replacement: String,
        /// Levels climbed before the swapped segment.
        up_count: usize,
    },
    /// Stashed path with this alias.
    Alias(String),
    /// 1-based rank into the visit history.
    HistoryIndex(usize),
    /// 1-based rank into the stash.
    StashIndex(usize),
    /// Literal target repeated `times` times; home when absent.
    Plain {
        /// Literal argument.
        target: Option<String>,
        /// Repeat count, at least 1.
        times: usize,
    },
}

/// Joins `segment` with itself `times` times using `/`.
///
/// `repeat_segment("..", 3)` is `"../../.."`. A count below 1 yields the
/// segment once.
pub fn repeat_segment(segment: &str, times: usize) -> String {
    vec![segment; times.max(1)].join("/")
}

/// Result of an ancestor swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwappedPath {
    /// Directory the relative path hangs from.
    pub anchor: PathBuf,
    /// Replacement segment followed by the preserved descendants.
    pub relative: PathBuf,
}

impl SwappedPath {
    /// Absolute candidate path.
    pub fn full_path(&self) -> PathBuf {
        self.anchor.join(&self.relative)
    }
}

/// Climbs `up_count` levels from `cwd`, keeping the names passed on the way,
/// then replaces the next ancestor's name with `replacement`.
///
/// From `/x/y/z` with `up_count` 2 and replacement `w` the result is
/// `w/y/z` anchored at `/`. Climbing stops at the filesystem root.
pub fn swap_ancestor(cwd: &Path, replacement: &str, up_count: usize) -> SwappedPath {
    let mut anchor = cwd.to_path_buf();
    let mut kept: Vec<OsString> = Vec::with_capacity(up_count);

    for _ in 0..up_count {
        if let Some(name) = anchor.file_name() {
            kept.push(name.to_os_string());
        }
        anchor.pop();
    }
    anchor.pop();

    let mut relative = PathBuf::from(replacement);
    relative.extend(kept.iter().rev());

    SwappedPath { anchor, relative }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Defer to the shell's previous directory; nothing is recorded.
    Previous,
    /// A real directory the process is now in.
    Entered(ResolvedPath),
}

/// A validated directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Real working directory after entering.
    pub path: PathBuf,
    /// The rejected candidate, when the parent was used instead.
    pub fallback_from: Option<PathBuf>,
}

/// Computes and validates the target directory for a [`NavMode`].
pub struct Resolver<'a, W: WorkingDir> {
    store: &'a RecordStore,
    workdir: &'a mut W,
    home: &'a Path,
    fallback_to_parent: bool,
}

impl<'a, W: WorkingDir> Resolver<'a, W> {
    /// Creates a resolver over a loaded store.
    pub fn new(
        store: &'a RecordStore,
        workdir: &'a mut W,
        home: &'a Path,
        fallback_to_parent: bool,
    ) -> Self {
        Self {
            store,
            workdir,
            home,
            fallback_to_parent,
        }
    }

    /// Computes the unvalidated candidate path for `mode`.
    pub fn candidate(&self, mode: &NavMode) -> Result<PathBuf> {
        let path = match mode {
            NavMode::Previous => PathBuf::from(PREVIOUS_DIR),
            NavMode::AncestorSwap {
                replacement,
                up_count,
            } => {
                let cwd = self.workdir.current()?;
                swap_ancestor(&cwd, replacement, *up_count).full_path()
            }
            NavMode::Alias(alias) => PathBuf::from(self.store.lookup_alias(alias)?),
            NavMode::HistoryIndex(rank) => {
                PathBuf::from(self.store.path_at(Collection::History, *rank)?)
            }
            NavMode::StashIndex(rank) => {
                PathBuf::from(self.store.path_at(Collection::Stash, *rank)?)
            }
            NavMode::Plain {
                target: Some(target),
                times,
            } => PathBuf::from(repeat_segment(target, *times)),
            NavMode::Plain { target: None, .. } => self.home.to_path_buf(),
        };
        Ok(path)
    }

    /// Resolves `mode` to a real directory, entering it.
    pub fn resolve(&mut self, mode: &NavMode) -> Result<Resolution> {
        if *mode == NavMode::Previous {
            return Ok(Resolution::Previous);
        }
        let candidate = self.candidate(mode)?;
        self.validate(candidate).map(Resolution::Entered)
    }

    /// Enters `candidate`, falling back to its parent when enabled.
    pub fn validate(&mut self, candidate: PathBuf) -> Result<ResolvedPath> {
        let err = match self.workdir.enter(&candidate) {
            Ok(path) => {
                return Ok(ResolvedPath {
                    path,
                    fallback_from: None,
                })
            }
            Err(err) => err,
        };
        debug!(candidate = %candidate.display(), error = %err, "candidate rejected");

        if !self.fallback_to_parent {
            return Err(UcdError::InvalidPath(candidate));
        }

        let parent = parent_of(&candidate);
        match self.workdir.enter(&parent) {
            Ok(path) => {
                info!(from = %candidate.display(), to = %path.display(), "falling back to parent directory");
                Ok(ResolvedPath {
                    path,
                    fallback_from: Some(candidate),
                })
            }
            Err(_) => Err(UcdError::InvalidFallback {
                path: candidate,
                parent,
            }),
        }
    }
}

/// Lexical parent; a bare relative name's parent is `.`.
fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}
