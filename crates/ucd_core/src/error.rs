//! Error types for ucd_core operations.

use crate::types::Collection;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ucd_core operations.
#[derive(Error, Debug)]
pub enum UcdError {
    /// The persisted store document could not be decoded.
    ///
    /// Callers loading the store recover from this by starting empty.
    #[error("store decode error: {0}")]
    StoreDecode(String),

    /// The configuration file exists but is not valid.
    #[error("error decoding configuration at {}: {}", path.display(), reason)]
    ConfigDecode {
        /// Path to the configuration file
        path: PathBuf,
        /// Decoder message
        reason: String,
    },

    /// A 1-based rank exceeded the size of a collection.
    #[error("invalid #{index}, there are only {len} {collection} records")]
    IndexOutOfRange {
        /// Which collection was indexed
        collection: Collection,
        /// The requested rank
        index: usize,
        /// Number of records in the collection
        len: usize,
    },

    /// No stash entry carries the requested alias.
    #[error("unable to cd -- alias `{0}` not found")]
    AliasNotFound(String),

    /// The alias is already attached to another stashed path.
    #[error("alias `{alias}` already exists on {path}")]
    AliasCollision {
        /// The rejected alias
        alias: String,
        /// Path currently holding the alias
        path: String,
    },

    /// The target could not be entered and fallback is disabled.
    #[error("path `{}` is not a valid path", .0.display())]
    InvalidPath(PathBuf),

    /// Neither the target nor its parent could be entered.
    #[error("path `{}` is not a valid path, and neither is its parent `{}`", path.display(), parent.display())]
    InvalidFallback {
        /// The original candidate
        path: PathBuf,
        /// The parent that was tried
        parent: PathBuf,
    },

    /// The request combination cannot be resolved.
    #[error("usage error: {0}")]
    Usage(String),

    /// The user's home directory could not be determined.
    #[error("unable to determine home directory")]
    NoHomeDirectory,

    /// Store keys are JSON strings, so paths must be valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Serialization error while writing a document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UcdError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::IndexOutOfRange {
                collection: Collection::History,
                ..
            } => Some("Run 'ucd -l' to see the numbered history."),
            Self::IndexOutOfRange {
                collection: Collection::Stash,
                ..
            } => Some("Run 'ucd --ls' to see the numbered stash."),
            Self::AliasNotFound(_) => Some("Run 'ucd --ls' to see which aliases are stashed."),
            Self::AliasCollision { .. } => {
                Some("Pick another alias, or rename the existing one with 'ucd --ma <#> <alias>'.")
            }
            Self::ConfigDecode { .. } => {
                Some("Fix the JSON in ~/.config/ucd/ucd.conf, or delete it to regenerate defaults.")
            }
            Self::InvalidPath(_) => {
                Some("Set \"FileFallbackBehavior\": true in ~/.config/ucd/ucd.conf to fall back to the parent.")
            }
            _ => None,
        }
    }
}

/// Convenience Result type for ucd_core operations.
pub type Result<T> = std::result::Result<T, UcdError>;
