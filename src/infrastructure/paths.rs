//! Default directory and preferences file resolution

use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Name of the folder holding abbreviation lists inside the data directory.
pub const JOURNALS_SUBDIR: &str = "journal-abbreviations";

/// Supplies the journals directory used when none is configured.
pub trait DirectoryResolver {
    fn journal_abbreviations_dir(&self) -> PathBuf;
}

/// Resolves directories from the platform conventions, honouring the
/// `JABBREV_DATA_DIR` and `JABBREV_CONFIG` overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirectories;

impl PlatformDirectories {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "jabbrev", "jabbrev")
    }

    /// Base directory for application data
    pub fn data_dir() -> PathBuf {
        if let Ok(dir) = env::var("JABBREV_DATA_DIR") {
            return PathBuf::from(dir);
        }

        Self::project_dirs()
            .map(|proj| proj.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".jabbrev"))
    }

    /// Location of preferences.toml
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = env::var("JABBREV_CONFIG") {
            return PathBuf::from(path);
        }

        Self::project_dirs()
            .map(|proj| proj.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".jabbrev"))
            .join("preferences.toml")
    }
}

impl DirectoryResolver for PlatformDirectories {
    fn journal_abbreviations_dir(&self) -> PathBuf {
        Self::data_dir().join(JOURNALS_SUBDIR)
    }
}

/// Always resolves to the same directory.
#[derive(Debug, Clone)]
pub struct FixedDirectory(pub PathBuf);

impl DirectoryResolver for FixedDirectory {
    fn journal_abbreviations_dir(&self) -> PathBuf {
        self.0.clone()
    }
}
