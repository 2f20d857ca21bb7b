//! Enumeration of every file beneath the store root

use passdex_core::{Error, IoResultExt, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists all non-directory entries under a root directory, at any depth.
///
/// Entries are classified without following symbolic links: only real
/// directories are descended into, anything else is reported as a file.
#[derive(Debug, Clone)]
pub struct StoreWalker {
    root: PathBuf,
}

impl StoreWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the whole tree. Order of the returned paths is unspecified.
    ///
    /// Fails with `StoreUnavailable` if the root, or any directory below it,
    /// cannot be read.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(&self.root).store_context(&self.root)?;
        if !metadata.is_dir() {
            return Err(Error::store_unavailable(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }

        let mut files = Vec::new();
        let mut directories = 0usize;

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                Error::store_unavailable(path, std::io::Error::from(e))
            })?;

            if entry.file_type().is_dir() {
                directories += 1;
            } else {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            directories,
            files = files.len(),
            "walked store"
        );

        Ok(files)
    }
}
