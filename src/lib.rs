//! jabbrev - Journal abbreviation preferences
//!
//! Keeps the list of journal abbreviation files, the FJournal flag and the
//! journals directory in sync with the `custom.csv` list provisioned on disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::JournalAbbreviationPreferences;
pub use error::AbbrevError;
