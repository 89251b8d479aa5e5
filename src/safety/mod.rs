//! Query safety classification module.
//!
//! Parses SQL and classifies statements as safe, mutating, or destructive.
//! The classification picks the execution path and backs the read-only mode.

mod parser;

pub use parser::{classify_sql, SqlClassifier};

use std::fmt;

/// Safety level classification for SQL statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SafetyLevel {
    /// Read-only statements (SELECT, EXPLAIN, PRAGMA reads).
    Safe,
    /// Data modification (INSERT, UPDATE, REPLACE, PRAGMA assignment).
    Mutating,
    /// Data loss or schema changes (DELETE, DROP, ALTER, CREATE).
    Destructive,
}

impl SafetyLevel {
    /// Returns true if this level changes the database.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Mutating | Self::Destructive)
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Mutating => write!(f, "Mutating"),
            Self::Destructive => write!(f, "Destructive"),
        }
    }
}

/// The type of SQL statement detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
    Drop,
    Alter,
    Create,
    Explain,
    Pragma,
    Attach,
    /// Multiple statements detected; contains the most dangerous type.
    Multiple(Box<StatementType>),
    /// Statement type could not be determined.
    Unknown,
}

impl StatementType {
    /// Returns true if the statement was recognized by the classifier.
    pub fn is_known(&self) -> bool {
        match self {
            Self::Unknown => false,
            Self::Multiple(inner) => inner.is_known(),
            _ => true,
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "SELECT"),
            Self::Insert => write!(f, "INSERT"),
            Self::Update => write!(f, "UPDATE"),
            Self::Delete => write!(f, "DELETE"),
            Self::Drop => write!(f, "DROP"),
            Self::Alter => write!(f, "ALTER"),
            Self::Create => write!(f, "CREATE"),
            Self::Explain => write!(f, "EXPLAIN"),
            Self::Pragma => write!(f, "PRAGMA"),
            Self::Attach => write!(f, "ATTACH"),
            Self::Multiple(inner) => write!(f, "Multiple ({})", inner),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result of classifying a SQL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// The determined safety level.
    pub level: SafetyLevel,
    /// The type of statement(s) detected.
    pub statement_type: StatementType,
    /// Optional note explaining the classification.
    pub warning: Option<String>,
    /// The statement hands back rows of its own (`RETURNING`).
    pub returns_rows: bool,
}

impl ClassificationResult {
    /// Creates a new classification result.
    pub fn new(level: SafetyLevel, statement_type: StatementType) -> Self {
        Self {
            level,
            statement_type,
            warning: None,
            returns_rows: false,
        }
    }

    /// Marks whether the statement produces rows through `RETURNING`.
    pub fn returning_rows(mut self, returns_rows: bool) -> Self {
        self.returns_rows = returns_rows;
        self
    }

    /// Creates a classification result with a warning message.
    pub fn with_warning(
        level: SafetyLevel,
        statement_type: StatementType,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            level,
            statement_type,
            warning: Some(warning.into()),
            returns_rows: false,
        }
    }

    /// Returns true if the statement is a recognized write.
    ///
    /// Unrecognized SQL is never reported as a known write; it is left to the
    /// driver (and the read-only connection flag) to decide.
    pub fn is_known_write(&self) -> bool {
        self.level.is_write() && self.statement_type.is_known()
    }
}
