//! Application layer - Use cases and orchestration

pub mod manage_preferences;

pub use manage_preferences::PreferencesService;
