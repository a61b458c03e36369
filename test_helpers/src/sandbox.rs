//! Temporary directory trees for tests that probe the filesystem.
//!
//! Paths are handed out as [`camino::Utf8PathBuf`] so they can be passed
//! straight to APIs taking `&str` values.
//!
//! # Examples
//!
//! ```
//! use test_helpers::sandbox::Sandbox;
//!
//! # fn main() -> anyhow::Result<()> {
//! let sandbox = Sandbox::new()?;
//! let file = sandbox.create_file("config.json", "{}")?;
//! assert!(file.is_file());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory removed when dropped.
#[must_use = "dropping the sandbox deletes its directory"]
pub struct Sandbox {
    root: Utf8PathBuf,
    _dir: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temporary directory {path:?} is not UTF-8"))?;
        Ok(Self { root, _dir: dir })
    }

    /// Root of the sandbox.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path for `relative` without creating anything.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be written.
    pub fn create_file(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Creates the directory `relative` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_dir(&self, relative: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).with_context(|| format!("create {path}"))?;
        Ok(path)
    }
}
