//! Error types for txpeek.
//!
//! Connection failures are fatal; query failures and read-only rejections are
//! reported and the session still ends normally.

use thiserror::Error;

/// Main error type for txpeek operations.
#[derive(Error, Debug)]
pub enum PeekError {
    /// The database file could not be opened or is not a SQLite database.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors (syntax errors, missing tables, decode failures).
    #[error("Query error: {0}")]
    Query(String),

    /// A mutating statement was submitted while the session is read-only.
    #[error("Read-only violation: {0}")]
    ReadOnly(String),

    /// Configuration errors (invalid config file, bad flag values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The query could not be read from the input source.
    #[error("Input error: {0}")]
    Input(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PeekError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a read-only violation with the given message.
    pub fn read_only(msg: impl Into<String>) -> Self {
        Self::ReadOnly(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an input error with the given message.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::ReadOnly(_) => "Read-Only Violation",
            Self::Config(_) => "Configuration Error",
            Self::Input(_) => "Input Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Returns the underlying message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection(m)
            | Self::Query(m)
            | Self::ReadOnly(m)
            | Self::Config(m)
            | Self::Input(m)
            | Self::Internal(m) => m,
        }
    }

    /// Returns true if the session reports this error and still exits normally.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Query(_) | Self::ReadOnly(_))
    }
}

/// Result type alias using PeekError.
pub type Result<T> = std::result::Result<T, PeekError>;
