//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jabbrev")]
#[command(about = "Manage journal abbreviation preferences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Preferences file (default: platform config dir, or JABBREV_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the preferences file and the default journals directory
    Init,

    /// View or modify preferences
    Config {
        /// Preference key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all preferences
        #[arg(short, long)]
        list: bool,
    },

    /// Show or edit external journal abbreviation lists
    Lists {
        #[command(subcommand)]
        action: Option<ListsCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListsCommand {
    /// Register an abbreviation list file
    Add { path: String },

    /// Unregister an abbreviation list file
    Remove { path: String },
}
