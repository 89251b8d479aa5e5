//! Database abstraction layer for txpeek.
//!
//! Provides a trait-based interface for database operations so the session
//! can run against SQLite or an in-memory test double.

mod mock;
mod sqlite;
mod types;

pub use mock::{FailingDatabaseClient, MockDatabaseClient};
pub use sqlite::SqliteClient;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Reported when one input holds several statements.
pub const MULTIPLE_STATEMENTS_MESSAGE: &str = "You can only execute one statement at a time.";

/// Opens a database client for the given configuration.
///
/// This is the central factory function for database connections.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DatabaseClient>> {
    let client = SqliteClient::connect(config).await?;
    Ok(Box::new(client))
}

/// Trait defining the interface for database clients.
///
/// All database operations are async and return Results with PeekError.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a SQL query and returns the rows it produced.
    async fn execute_query(&self, sql: &str) -> Result<QueryResult>;

    /// Executes a SQL statement for its effect and returns the affected row count.
    async fn execute_statement(&self, sql: &str) -> Result<QueryResult>;

    /// Closes the database connection.
    async fn close(&self) -> Result<()>;
}
