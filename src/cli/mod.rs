//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ListsCommand};
pub use output::{format_external_lists, format_preferences};
