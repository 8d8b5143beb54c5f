//! Preferences file persistence

use crate::domain::JournalAbbreviationPreferences;
use crate::error::{AbbrevError, Result};
use crate::infrastructure::{DirectoryResolver, FileSystem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk form of the journal abbreviation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesFile {
    #[serde(default)]
    pub external_journal_lists: Vec<String>,
    #[serde(default)]
    pub use_fjournal_field: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journals_dir: Option<String>,
    pub created: DateTime<Utc>,
}

impl PreferencesFile {
    /// Create empty preferences; the journals directory is left to the default
    pub fn new() -> Self {
        PreferencesFile {
            external_journal_lists: Vec::new(),
            use_fjournal_field: false,
            journals_dir: None,
            created: Utc::now(),
        }
    }

    /// Load preferences from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| {
            AbbrevError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load preferences, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No preferences at {}, using defaults", path.display());
            return Ok(Self::new());
        }
        Self::load_from(path)
    }

    /// Save preferences, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        log::debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Build a live store from these preferences
    pub fn into_store(
        self,
        resolver: Box<dyn DirectoryResolver>,
        fs: Box<dyn FileSystem>,
    ) -> JournalAbbreviationPreferences {
        JournalAbbreviationPreferences::with_collaborators(
            self.external_journal_lists,
            self.use_fjournal_field,
            self.journals_dir,
            resolver,
            fs,
        )
    }

    /// Snapshot a store, keeping the given creation time
    pub fn from_store(store: &JournalAbbreviationPreferences, created: DateTime<Utc>) -> Self {
        PreferencesFile {
            external_journal_lists: store.external_journal_lists().to_vec(),
            use_fjournal_field: store.should_use_fjournal_field(),
            journals_dir: Some(store.journal_abbreviation_dir().to_string()),
            created,
        }
    }
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self::new()
    }
}
