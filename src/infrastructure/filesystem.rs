//! Filesystem access used to provision the journals directory

use crate::error::{AbbrevError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// File name of the managed custom abbreviation list.
pub const CUSTOM_LIST_FILENAME: &str = "custom.csv";

/// Filesystem operations needed by the preference store
pub trait FileSystem {
    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a new empty file, failing if it already exists
    fn create_file(&self, path: &Path) -> io::Result<()>;
}

/// `std::fs` backed implementation of FileSystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_| ())
    }
}

/// Ensure `dir` exists and holds a `custom.csv`, creating an empty one if missing.
///
/// Returns the path of the custom list.
pub fn provision_journals_dir(fs: &dyn FileSystem, dir: &Path) -> Result<PathBuf> {
    fs.create_dir_all(dir)
        .map_err(|source| AbbrevError::Provisioning {
            path: dir.to_path_buf(),
            source,
        })?;

    let custom_list = dir.join(CUSTOM_LIST_FILENAME);
    if !fs.exists(&custom_list) {
        fs.create_file(&custom_list)
            .map_err(|source| AbbrevError::Provisioning {
                path: custom_list.clone(),
                source,
            })?;
    }

    Ok(custom_list)
}
