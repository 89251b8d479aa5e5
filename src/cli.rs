//! Command-line argument parsing for txpeek.
//!
//! Every flag is optional: with no arguments the default database is opened
//! and the query is read interactively.

use clap::Parser;
use std::path::PathBuf;

/// Inspect a transactions database with an ad-hoc SQL query.
#[derive(Parser, Debug)]
#[command(name = "txpeek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file to open (default: tokenwise.db)
    #[arg(value_name = "DATABASE", env = "TXPEEK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Run this query instead of prompting for one
    #[arg(short = 'q', long, value_name = "SQL")]
    pub query: Option<String>,

    /// Column that selects the row color: an index, a name, or "none"
    #[arg(long, value_name = "INDEX|NAME")]
    pub category_column: Option<String>,

    /// Reject statements that modify the database
    #[arg(long)]
    pub read_only: bool,

    /// Print the table without colors
    #[arg(long)]
    pub no_color: bool,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
