//! Command line configuration for the server.

use std::path::PathBuf;

use clap::Parser;

use crate::ledger::LoadPolicy;

/// A single-page web app for tracking income and expenses.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File path to the application SQLite database.
    #[arg(long)]
    pub db_path: PathBuf,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// The canonical timezone used to display entry dates, e.g. "Asia/Kolkata".
    #[arg(long, default_value = "Etc/UTC")]
    pub timezone: String,

    /// Discard stored entries and reset the categories when the server starts.
    #[arg(long)]
    pub reset_on_start: bool,

    /// Store the dark mode flag before serving. Leaves the stored flag as is when omitted.
    #[arg(long)]
    pub dark_mode: Option<bool>,

    /// File path for the debug log.
    #[arg(long, default_value = "debug.log")]
    pub log_path: PathBuf,

    /// Log the bodies of requests and responses.
    #[arg(long)]
    pub log_bodies: bool,
}

impl Config {
    /// How stored data should be treated when the ledger is opened.
    pub fn load_policy(&self) -> LoadPolicy {
        if self.reset_on_start {
            LoadPolicy::Reset
        } else {
            LoadPolicy::Restore
        }
    }
}
