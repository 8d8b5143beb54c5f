//! Preference keys exposed through `jabbrev config`

use crate::error::{AbbrevError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    /// Directory holding custom.csv
    JournalsDir,
    /// FJournal field toggle
    UseFJournalField,
    /// External abbreviation lists (read-only through config)
    ExternalLists,
    /// Creation time of the preferences file (read-only)
    Created,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 4] = [
        PreferenceKey::JournalsDir,
        PreferenceKey::UseFJournalField,
        PreferenceKey::ExternalLists,
        PreferenceKey::Created,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::JournalsDir => "journals-dir",
            PreferenceKey::UseFJournalField => "use-fjournal-field",
            PreferenceKey::ExternalLists => "external-lists",
            PreferenceKey::Created => "created",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceKey {
    type Err = AbbrevError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        PreferenceKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| AbbrevError::UnknownKey(s.to_string()))
    }
}

/// Parse a boolean preference value
pub fn parse_flag(key: PreferenceKey, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(AbbrevError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
