//! Access to the process working directory.

use std::io;
use std::path::{Path, PathBuf};

/// The working directory the resolver validates candidates against.
///
/// `enter` must leave the working directory at `path` on success and return
/// the real directory it ended up in (as `getcwd` reports it), which is how
/// relative segments and symlinks get normalised.
pub trait WorkingDir {
    /// Current working directory.
    fn current(&self) -> io::Result<PathBuf>;

    /// Changes into `path` and returns the resulting working directory.
    fn enter(&mut self, path: &Path) -> io::Result<PathBuf>;
}

/// The real process working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDir;

impl WorkingDir for ProcessDir {
    fn current(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn enter(&mut self, path: &Path) -> io::Result<PathBuf> {
        std::env::set_current_dir(path)?;
        std::env::current_dir()
    }
}
