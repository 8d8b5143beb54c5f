//! Journal abbreviation preference store
//!
//! Holds the external abbreviation lists, the FJournal flag and the journals
//! directory. Changing the directory keeps exactly one `custom.csv` entry in
//! the list, pointing into the new directory, and provisions that directory on
//! disk. Provisioning failures are logged and never reach the caller.

use crate::infrastructure::{
    provision_journals_dir, DirectoryResolver, FileSystem, LocalFileSystem, PlatformDirectories,
    CUSTOM_LIST_FILENAME,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Handle returned when registering a change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

enum Listener {
    JournalsDir(Box<dyn FnMut(&str, &str)>),
    UseFJournalField(Box<dyn FnMut(bool)>),
    ExternalLists(Box<dyn FnMut(&[String])>),
}

pub struct JournalAbbreviationPreferences {
    external_journal_lists: Vec<String>,
    use_fjournal_field: bool,
    journals_dir: String,
    resolver: Box<dyn DirectoryResolver>,
    fs: Box<dyn FileSystem>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl JournalAbbreviationPreferences {
    /// Create a store backed by the platform directories and the local filesystem.
    ///
    /// An absent or empty `journals_dir` falls back to the platform default.
    pub fn new(
        external_journal_lists: Vec<String>,
        use_fjournal_field: bool,
        journals_dir: Option<String>,
    ) -> Self {
        Self::with_collaborators(
            external_journal_lists,
            use_fjournal_field,
            journals_dir,
            Box::new(PlatformDirectories),
            Box::new(LocalFileSystem),
        )
    }

    /// Create a store with explicit directory resolution and filesystem access.
    ///
    /// The list is taken as given: no `custom.csv` reconciliation happens until
    /// the directory changes.
    pub fn with_collaborators(
        external_journal_lists: Vec<String>,
        use_fjournal_field: bool,
        journals_dir: Option<String>,
        resolver: Box<dyn DirectoryResolver>,
        fs: Box<dyn FileSystem>,
    ) -> Self {
        let journals_dir = match journals_dir {
            Some(dir) if !dir.is_empty() => dir,
            _ => path_to_string(&resolver.journal_abbreviations_dir()),
        };

        JournalAbbreviationPreferences {
            external_journal_lists,
            use_fjournal_field,
            journals_dir,
            resolver,
            fs,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Snapshot of the external journal lists, in insertion order
    pub fn external_journal_lists(&self) -> &[String] {
        &self.external_journal_lists
    }

    /// Replace all external journal lists, keeping the given order
    pub fn set_external_journal_lists(&mut self, lists: Vec<String>) {
        self.external_journal_lists.clear();
        self.external_journal_lists.extend(lists);
        self.notify_external_lists();
    }

    /// Append a list unless it is already present. Returns whether it was added.
    pub fn add_external_journal_list(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.external_journal_lists.contains(&path) {
            return false;
        }

        self.external_journal_lists.push(path);
        self.notify_external_lists();
        true
    }

    /// Remove every occurrence of a list. Returns whether anything was removed.
    pub fn remove_external_journal_list(&mut self, path: &str) -> bool {
        let before = self.external_journal_lists.len();
        self.external_journal_lists.retain(|p| p != path);

        let removed = self.external_journal_lists.len() != before;
        if removed {
            self.notify_external_lists();
        }
        removed
    }

    pub fn should_use_fjournal_field(&self) -> bool {
        self.use_fjournal_field
    }

    pub fn set_use_fjournal_field(&mut self, use_fjournal_field: bool) {
        if self.use_fjournal_field == use_fjournal_field {
            return;
        }

        self.use_fjournal_field = use_fjournal_field;
        for (_, listener) in self.listeners.iter_mut() {
            if let Listener::UseFJournalField(callback) = listener {
                callback(use_fjournal_field);
            }
        }
    }

    /// Current journals directory
    pub fn journal_abbreviation_dir(&self) -> &str {
        &self.journals_dir
    }

    /// Path of the managed `custom.csv` inside the current journals directory
    pub fn custom_list_path(&self) -> PathBuf {
        Path::new(&self.journals_dir).join(CUSTOM_LIST_FILENAME)
    }

    /// Change the journals directory.
    ///
    /// Setting the current value again does nothing. An empty value resets to
    /// the default directory.
    pub fn set_journal_abbreviation_dir(&mut self, journals_dir: impl Into<String>) {
        let mut journals_dir = journals_dir.into();
        if journals_dir.is_empty() {
            journals_dir = path_to_string(&self.resolver.journal_abbreviations_dir());
        }
        if journals_dir == self.journals_dir {
            return;
        }

        let old = std::mem::replace(&mut self.journals_dir, journals_dir);
        log::debug!(
            "Journal abbreviation directory changed from {} to {}",
            old,
            self.journals_dir
        );

        self.update_journals_dir();

        let new = self.journals_dir.clone();
        for (_, listener) in self.listeners.iter_mut() {
            if let Listener::JournalsDir(callback) = listener {
                callback(&old, &new);
            }
        }
    }

    /// Run the directory reconciliation against the current directory without
    /// changing it: fix up the `custom.csv` entry and provision the directory.
    pub fn resync_journals_dir(&mut self) {
        self.update_journals_dir();
    }

    fn update_journals_dir(&mut self) {
        let dir = PathBuf::from(&self.journals_dir);
        let custom_list = path_to_string(&dir.join(CUSTOM_LIST_FILENAME));

        let before = self.external_journal_lists.clone();
        self.external_journal_lists
            .retain(|path| !path.ends_with(CUSTOM_LIST_FILENAME));
        if !self.external_journal_lists.contains(&custom_list) {
            self.external_journal_lists.push(custom_list);
        }
        if self.external_journal_lists != before {
            self.notify_external_lists();
        }

        if let Err(e) = provision_journals_dir(self.fs.as_ref(), &dir) {
            log::error!("Failed to create journal abbreviation directory: {}", e);
        }
    }

    /// Called with `(old, new)` after each directory change
    pub fn on_journals_dir_change(
        &mut self,
        callback: impl FnMut(&str, &str) + 'static,
    ) -> ListenerId {
        self.register(Listener::JournalsDir(Box::new(callback)))
    }

    /// Called with the new value whenever the FJournal flag flips
    pub fn on_use_fjournal_field_change(
        &mut self,
        callback: impl FnMut(bool) + 'static,
    ) -> ListenerId {
        self.register(Listener::UseFJournalField(Box::new(callback)))
    }

    /// Called with the full list after every change to it
    pub fn on_external_journal_lists_change(
        &mut self,
        callback: impl FnMut(&[String]) + 'static,
    ) -> ListenerId {
        self.register(Listener::ExternalLists(Box::new(callback)))
    }

    /// Unregister a listener. Returns false if the id is unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn register(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn notify_external_lists(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            if let Listener::ExternalLists(callback) = listener {
                callback(&self.external_journal_lists);
            }
        }
    }
}

impl fmt::Debug for JournalAbbreviationPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalAbbreviationPreferences")
            .field("external_journal_lists", &self.external_journal_lists)
            .field("use_fjournal_field", &self.use_fjournal_field)
            .field("journals_dir", &self.journals_dir)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
