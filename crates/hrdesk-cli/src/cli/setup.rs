use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hrdesk", bin_name = "hrdesk", version)]
#[command(about = "Local record store for small HR apps", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the stored keys
    #[arg(long, global = true, env = "HRDESK_DATA_DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the JSON stored under a key
    Get { key: String },

    /// Store a JSON value under a key (primary and backup)
    Set { key: String, json: String },

    /// List stored keys
    #[command(alias = "ls")]
    Keys,

    /// Remove a key and its backup copy
    #[command(alias = "rm")]
    Remove { key: String },

    /// Print the next record id of a collection
    NextId { collection: String },

    /// Print the next employee code
    NextCode,

    /// Write a key to <key>_<YYYY-MM-DD>.json
    Export {
        key: String,

        /// Output directory (defaults to the configured export dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Replace a key with the contents of a JSON file
    Import { key: String, file: PathBuf },

    /// Store the session user
    Login { username: String, role: String },

    /// Drop the session user
    Logout,

    /// Show the session user
    Whoami,

    /// Set the first-run flag
    Init,

    /// Delete all stored data
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
