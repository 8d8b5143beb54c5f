//! Preference management use cases

use crate::domain::{parse_flag, JournalAbbreviationPreferences, PreferenceKey};
use crate::error::{AbbrevError, Result};
use crate::infrastructure::{
    provision_journals_dir, DirectoryResolver, FileSystem, LocalFileSystem, PlatformDirectories,
    PreferencesFile,
};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Loads, mutates and saves the preferences file.
///
/// Every mutation goes through a live [`JournalAbbreviationPreferences`] so the
/// journals directory reconciliation runs exactly as it does in-process.
pub struct PreferencesService<R = PlatformDirectories, F = LocalFileSystem> {
    path: PathBuf,
    resolver: R,
    fs: F,
}

impl PreferencesService {
    /// Create a service using platform directories and the local filesystem
    pub fn new(path: PathBuf) -> Self {
        PreferencesService::with_collaborators(path, PlatformDirectories, LocalFileSystem)
    }
}

impl<R, F> PreferencesService<R, F>
where
    R: DirectoryResolver + Clone + 'static,
    F: FileSystem + Clone + 'static,
{
    pub fn with_collaborators(path: PathBuf, resolver: R, fs: F) -> Self {
        PreferencesService { path, resolver, fs }
    }

    /// Location of the preferences file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<(JournalAbbreviationPreferences, DateTime<Utc>)> {
        let file = PreferencesFile::load_or_default(&self.path)?;
        let created = file.created;
        let store = file.into_store(Box::new(self.resolver.clone()), Box::new(self.fs.clone()));
        Ok((store, created))
    }

    fn save(&self, store: &JournalAbbreviationPreferences, created: DateTime<Utc>) -> Result<()> {
        PreferencesFile::from_store(store, created).save_to(&self.path)
    }

    /// Write a fresh preferences file and provision the default journals directory
    pub fn init(&self) -> Result<PreferencesFile> {
        if self.path.exists() {
            return Err(AbbrevError::Config(format!(
                "Preferences already initialized: {}",
                self.path.display()
            )));
        }

        let created = Utc::now();
        let mut store = PreferencesFile::new()
            .into_store(Box::new(self.resolver.clone()), Box::new(self.fs.clone()));

        provision_journals_dir(&self.fs, Path::new(store.journal_abbreviation_dir()))?;
        store.resync_journals_dir();

        self.save(&store, created)?;
        log::info!(
            "Initialized preferences at {} with journals directory {}",
            self.path.display(),
            store.journal_abbreviation_dir()
        );

        Ok(PreferencesFile::from_store(&store, created))
    }

    /// Get a single preference value
    pub fn get(&self, key: &str) -> Result<String> {
        let key = PreferenceKey::from_str(key)?;
        let (store, created) = self.load()?;

        let value = match key {
            PreferenceKey::JournalsDir => store.journal_abbreviation_dir().to_string(),
            PreferenceKey::UseFJournalField => store.should_use_fjournal_field().to_string(),
            PreferenceKey::ExternalLists => store.external_journal_lists().join(", "),
            PreferenceKey::Created => created.to_rfc3339(),
        };

        Ok(value)
    }

    /// Set a preference value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let key = PreferenceKey::from_str(key)?;
        let (mut store, created) = self.load()?;

        match key {
            PreferenceKey::JournalsDir => store.set_journal_abbreviation_dir(value),
            PreferenceKey::UseFJournalField => {
                store.set_use_fjournal_field(parse_flag(key, value)?)
            }
            PreferenceKey::ExternalLists | PreferenceKey::Created => {
                return Err(AbbrevError::Config(format!(
                    "Cannot modify '{}' (read-only)",
                    key
                )));
            }
        }

        self.save(&store, created)
    }

    /// External journal lists in order
    pub fn lists(&self) -> Result<Vec<String>> {
        let (store, _) = self.load()?;
        Ok(store.external_journal_lists().to_vec())
    }

    /// Register an external list. Returns false if it was already present.
    pub fn add_list(&self, path: &str) -> Result<bool> {
        let (mut store, created) = self.load()?;

        let added = store.add_external_journal_list(path);
        if added {
            self.save(&store, created)?;
        }

        Ok(added)
    }

    /// Unregister an external list
    pub fn remove_list(&self, path: &str) -> Result<()> {
        let (mut store, created) = self.load()?;

        if !store.remove_external_journal_list(path) {
            return Err(AbbrevError::Config(format!(
                "Not an external journal list: {}",
                path
            )));
        }

        self.save(&store, created)
    }

    /// All preferences, with the journals directory resolved
    pub fn list(&self) -> Result<PreferencesFile> {
        let (store, created) = self.load()?;
        Ok(PreferencesFile::from_store(&store, created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FixedDirectory;
    use std::fs;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> PreferencesService<FixedDirectory, LocalFileSystem> {
        PreferencesService::with_collaborators(
            temp.path().join("config").join("preferences.toml"),
            FixedDirectory(temp.path().join("data").join("journal-abbreviations")),
            LocalFileSystem,
        )
    }

    fn custom_in(dir: &Path) -> String {
        dir.join("custom.csv").to_string_lossy().into_owned()
    }

    #[test]
    fn test_init_writes_file_and_provisions_default_dir() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let default = temp.path().join("data").join("journal-abbreviations");

        let prefs = service.init().unwrap();

        assert!(service.path().exists());
        assert!(default.join("custom.csv").is_file());
        assert_eq!(prefs.external_journal_lists, vec![custom_in(&default)]);
        assert_eq!(service.lists().unwrap(), vec![custom_in(&default)]);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.init().unwrap();
        let result = service.init();

        assert!(matches!(result, Err(AbbrevError::Config(_))));
    }

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let default = temp.path().join("data").join("journal-abbreviations");

        assert_eq!(
            service.get("journals-dir").unwrap(),
            default.to_string_lossy()
        );
        assert_eq!(service.get("use-fjournal-field").unwrap(), "false");
        assert_eq!(service.get("external-lists").unwrap(), "");
        assert!(!service.path().exists());
    }

    #[test]
    fn test_set_journals_dir_persists_and_reconciles() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.init().unwrap();
        service.add_list("/lists/medicus.csv").unwrap();
        let dir = temp.path().join("mine");

        service.set("journals-dir", &dir.to_string_lossy()).unwrap();

        assert_eq!(service.get("journals-dir").unwrap(), dir.to_string_lossy());
        assert_eq!(
            service.lists().unwrap(),
            vec!["/lists/medicus.csv".to_string(), custom_in(&dir)]
        );
        assert!(dir.join("custom.csv").is_file());
    }

    #[test]
    fn test_set_flag() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("use-fjournal-field", "yes").unwrap();
        assert_eq!(service.get("use-fjournal-field").unwrap(), "true");

        service.set("use-fjournal-field", "off").unwrap();
        assert_eq!(service.get("use-fjournal-field").unwrap(), "false");
    }

    #[test]
    fn test_set_flag_invalid_value() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let result = service.set("use-fjournal-field", "sometimes");

        assert!(matches!(result, Err(AbbrevError::InvalidValue { .. })));
        assert!(!service.path().exists());
    }

    #[test]
    fn test_read_only_keys_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.set("created", "2025-01-01T00:00:00Z"),
            Err(AbbrevError::Config(_))
        ));
        assert!(matches!(
            service.set("external-lists", "a.csv"),
            Err(AbbrevError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.get("editor"),
            Err(AbbrevError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_add_and_remove_lists() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.add_list("a.csv").unwrap());
        assert!(!service.add_list("a.csv").unwrap());
        assert!(service.add_list("b.csv").unwrap());
        service.remove_list("a.csv").unwrap();

        assert_eq!(service.lists().unwrap(), vec!["b.csv".to_string()]);
        assert!(matches!(
            service.remove_list("a.csv"),
            Err(AbbrevError::Config(_))
        ));
    }

    #[test]
    fn test_created_survives_mutation() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let prefs = service.init().unwrap();

        service.set("use-fjournal-field", "true").unwrap();

        assert_eq!(service.get("created").unwrap(), prefs.created.to_rfc3339());
        let saved = fs::read_to_string(service.path()).unwrap();
        assert!(saved.contains("use_fjournal_field = true"));
    }
}
