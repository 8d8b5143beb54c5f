//! Domain layer - Preference store and preference keys

pub mod key;
pub mod preferences;

pub use key::{parse_flag, PreferenceKey};
pub use preferences::{JournalAbbreviationPreferences, ListenerId};
