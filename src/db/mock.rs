//! Mock database clients for testing.
//!
//! Provide in-memory `DatabaseClient` implementations so the session can be
//! exercised without a database file.

use super::{DatabaseClient, QueryResult};
use crate::error::{PeekError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A mock database client that returns a predefined result.
#[derive(Debug, Default)]
pub struct MockDatabaseClient {
    result: QueryResult,
    executed: Mutex<Vec<String>>,
    closed: AtomicBool,
}

impl MockDatabaseClient {
    /// Creates a mock client whose queries return no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock client whose queries return the given result.
    pub fn with_result(result: QueryResult) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    /// Returns every SQL string this client was asked to run, in order.
    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .map(|sql| sql.clone())
            .unwrap_or_default()
    }

    /// Returns true once `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn record(&self, sql: &str) {
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(sql.to_string());
        }
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        self.record(sql);
        Ok(self.result.clone())
    }

    async fn execute_statement(&self, sql: &str) -> Result<QueryResult> {
        self.record(sql);
        Ok(QueryResult::affected(self.result.row_count as u64))
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// A mock database client whose every query fails with the given message.
#[derive(Debug)]
pub struct FailingDatabaseClient {
    message: String,
    closed: AtomicBool,
}

impl FailingDatabaseClient {
    /// Creates a failing client that reports `message` as the driver error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            closed: AtomicBool::new(false),
        }
    }

    /// Returns true once `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Err(PeekError::query(self.message.clone()))
    }

    async fn execute_statement(&self, _sql: &str) -> Result<QueryResult> {
        Err(PeekError::query(self.message.clone()))
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
