//! Error types for jabbrev

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jabbrev
#[derive(Debug, Error)]
pub enum AbbrevError {
    #[error("Failed to provision journal abbreviation directory {path}: {source}")]
    Provisioning {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown preference key: {0}")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for preference '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AbbrevError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AbbrevError::UnknownKey(_) => 2,
            AbbrevError::InvalidValue { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AbbrevError::UnknownKey(key) => {
                format!(
                    "Unknown preference key: '{}'\n\n\
                    Valid keys:\n\
                    • journals-dir\n\
                    • use-fjournal-field\n\
                    • external-lists (read-only, use 'jabbrev lists')\n\
                    • created (read-only)",
                    key
                )
            }
            AbbrevError::InvalidValue { key, value } if key == "use-fjournal-field" => {
                format!(
                    "Invalid value '{}' for preference '{}'\n\n\
                    Expected a boolean: true, false, yes, no, on, off, 1, 0\n\
                    Example: jabbrev config use-fjournal-field true",
                    value, key
                )
            }
            AbbrevError::Provisioning { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that you can write to {}\n\
                    • Choose another directory: jabbrev config journals-dir <path>",
                    self,
                    path.display()
                )
            }
            AbbrevError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Fix or remove the preferences file\n\
                    • Point to another file with --config or JABBREV_CONFIG",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AbbrevError
pub type Result<T> = std::result::Result<T, AbbrevError>;
