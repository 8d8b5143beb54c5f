//! Infrastructure layer - Filesystem access, directory resolution and persistence

pub mod config;
pub mod filesystem;
pub mod paths;

pub use config::PreferencesFile;
pub use filesystem::{provision_journals_dir, FileSystem, LocalFileSystem, CUSTOM_LIST_FILENAME};
pub use paths::{DirectoryResolver, FixedDirectory, PlatformDirectories};
