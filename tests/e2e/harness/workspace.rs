use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ucd_core::{Locations, WorkingDir};

/// An isolated home directory backed by tempfile
pub struct TestWorkspace {
    dir: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    /// Create an empty home directory
    pub fn empty() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp directory")?;
        // Resolved directories come back canonical, so the root must be too
        let root = fs::canonicalize(dir.path()).context("Failed to canonicalize temp directory")?;
        Ok(Self { dir, root })
    }

    /// Load a home directory from the fixtures directory
    pub fn from_fixture(name: &str) -> Result<Self> {
        let workspace = Self::empty()?;
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name);

        if !fixture_path.exists() {
            anyhow::bail!("Fixture not found: {}", fixture_path.display());
        }

        copy_dir_recursive(&fixture_path, workspace.path())?;

        Ok(workspace)
    }

    /// Home directory path
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Store and config locations under this home
    pub fn locations(&self) -> Locations {
        Locations::from_home(&self.root)
    }

    /// Absolute form of a home-relative path; `~` is the home itself
    pub fn abs(&self, path: &str) -> PathBuf {
        match path.strip_prefix('~') {
            Some("") => self.root.clone(),
            Some(rest) => self.root.join(rest.trim_start_matches('/')),
            None if Path::new(path).is_absolute() => PathBuf::from(path),
            None => self.root.join(path),
        }
    }

    /// Store key for a home-relative path
    pub fn key(&self, path: &str) -> String {
        self.abs(path).to_string_lossy().into_owned()
    }

    /// Create a directory (and its parents)
    pub fn create_dir(&self, path: &str) -> Result<()> {
        fs::create_dir_all(self.abs(path))
            .with_context(|| format!("Failed to create directory: {}", path))
    }

    /// Remove a directory and everything under it
    pub fn remove_dir(&self, path: &str) -> Result<()> {
        fs::remove_dir_all(self.abs(path))
            .with_context(|| format!("Failed to remove directory: {}", path))
    }

    /// Write file into the home directory
    pub fn write_file(&self, path: &str, content: &[u8]) -> Result<()> {
        let full_path = self.abs(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directories for {}", path))?;
        }

        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write file: {}", path))?;

        Ok(())
    }

    /// Read file from the home directory
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.abs(path)).with_context(|| format!("Failed to read file: {}", path))
    }

    /// Check if file exists
    pub fn file_exists(&self, path: &str) -> bool {
        self.abs(path).exists()
    }
}

/// A working directory that lives only in the harness.
///
/// Tests run in parallel inside one process, so scenarios cannot share the
/// real process working directory.
pub struct SandboxDir {
    cwd: PathBuf,
}

impl SandboxDir {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self { cwd: start.into() }
    }
}

impl WorkingDir for SandboxDir {
    fn current(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn enter(&mut self, path: &Path) -> io::Result<PathBuf> {
        let real = fs::canonicalize(self.cwd.join(path))?;
        if !real.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", real.display()),
            ));
        }
        self.cwd = real.clone();
        Ok(real)
    }
}

/// Recursively copy directory contents
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
