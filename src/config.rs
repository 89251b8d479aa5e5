//! Configuration management for txpeek.
//!
//! Handles loading the optional TOML config file and merging it with
//! command-line flags into the settings a session runs with.

use crate::cli::Cli;
use crate::error::{PeekError, Result};
use crate::render::{CategoryColumn, Palette, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database opened when neither the command line nor the config names one.
pub const DEFAULT_DATABASE: &str = "tokenwise.db";

/// Main configuration structure, as read from the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Database file to open.
    pub database: Option<PathBuf>,

    /// Reject statements that modify the database.
    #[serde(default)]
    pub read_only: bool,

    /// Table display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Table display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Column that selects the row color.
    #[serde(default)]
    pub category_column: CategorySetting,

    /// Whether rows are painted at all.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Color names per tone.
    #[serde(default)]
    pub colors: ColorsConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            category_column: CategorySetting::default(),
            color: true,
            colors: ColorsConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Category column as written in TOML: `3`, `"type"`, or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategorySetting {
    Index(usize),
    Enabled(bool),
    Name(String),
}

impl Default for CategorySetting {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl CategorySetting {
    /// Converts the setting to a category column; `true` means the default.
    pub fn to_category_column(&self) -> Option<CategoryColumn> {
        match self {
            Self::Index(index) => Some(CategoryColumn::Index(*index)),
            Self::Enabled(true) => Some(CategoryColumn::default()),
            Self::Enabled(false) => None,
            Self::Name(name) => CategoryColumn::parse_setting(name),
        }
    }
}

/// Color names for each row tone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_positive")]
    pub positive: String,
    #[serde(default = "default_negative")]
    pub negative: String,
    #[serde(default = "default_neutral")]
    pub neutral: String,
}

fn default_positive() -> String {
    "green".to_string()
}

fn default_negative() -> String {
    "red".to_string()
}

fn default_neutral() -> String {
    "grey".to_string()
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            positive: default_positive(),
            negative: default_negative(),
            neutral: default_neutral(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Database connection configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,

    /// Open the file read-only and reject modifying statements.
    pub read_only: bool,
}

impl ConnectionConfig {
    /// Creates a read-write connection config for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_only: false,
        }
    }

    /// Returns the config with read-only mode set.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Returns the path as shown to the user.
    pub fn display_string(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: ConnectionConfig,
    pub render: RenderOptions,
    /// Query given up front; `None` means prompt for it.
    pub query: Option<String>,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Resolves settings from CLI arguments, environment, and config file.
    ///
    /// Precedence: CLI flags, then environment, then config file, then defaults.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::resolve_with(cli, config, no_color_env)
    }

    fn resolve_with(cli: &Cli, config: &Config, no_color_env: bool) -> Result<Self> {
        let path = cli
            .database
            .clone()
            .or_else(|| config.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
        let connection =
            ConnectionConfig::new(path).with_read_only(cli.read_only || config.read_only);

        let category_column = match &cli.category_column {
            Some(setting) => CategoryColumn::parse_setting(setting),
            None => config.display.category_column.to_category_column(),
        };
        let colors = &config.display.colors;
        let render = RenderOptions {
            category_column,
            palette: Palette::from_names(&colors.positive, &colors.negative, &colors.neutral)?,
            color: config.display.color && !cli.no_color && !no_color_env,
        };

        let logging = LoggingConfig {
            level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone()),
            file: cli.log_file.clone().or_else(|| config.logging.file.clone()),
        };

        Ok(Self {
            connection,
            render,
            query: cli.query.clone(),
            logging,
        })
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("txpeek")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file; a missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PeekError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            PeekError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
