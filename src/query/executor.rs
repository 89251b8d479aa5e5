//! Query execution with safety classification.
//!
//! Classification picks how a statement runs. Reads fetch rows. Recognized
//! writes report affected rows unless they carry RETURNING, in which case
//! their rows are fetched. In read-only mode recognized writes are rejected
//! before they reach the database, and input holding several statements is
//! always rejected.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::db::{DatabaseClient, QueryResult, MULTIPLE_STATEMENTS_MESSAGE};
use crate::error::{PeekError, Result};
use crate::safety::{ClassificationResult, SqlClassifier, StatementType};

/// Query executor that handles SQL classification and execution.
pub struct QueryExecutor<'a> {
    db: &'a dyn DatabaseClient,
    classifier: SqlClassifier,
    read_only: bool,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new query executor.
    pub fn new(db: &'a dyn DatabaseClient, read_only: bool) -> Self {
        Self {
            db,
            classifier: SqlClassifier::new(),
            read_only,
        }
    }

    /// Classifies and executes a query.
    pub async fn execute(&self, sql: &str) -> Result<QueryOutcome> {
        let classification = self.classifier.classify(sql);
        debug!(
            "Classified query as {} ({})",
            classification.statement_type, classification.level
        );

        if let StatementType::Multiple(_) = classification.statement_type {
            return Err(PeekError::query(MULTIPLE_STATEMENTS_MESSAGE));
        }

        let start = Instant::now();
        let result = if classification.is_known_write() {
            if self.read_only {
                warn!("Rejected {} in read-only mode", classification.statement_type);
                return Err(PeekError::read_only(format!(
                    "{} statements are not allowed in read-only mode",
                    classification.statement_type
                )));
            }
            warn!(
                "Executing {} statement ({})",
                classification.statement_type, classification.level
            );
            if classification.returns_rows {
                self.db.execute_query(sql).await?
            } else {
                self.db.execute_statement(sql).await?
            }
        } else {
            self.db.execute_query(sql).await?
        };
        let execution_time = start.elapsed();

        Ok(QueryOutcome {
            result,
            classification,
            execution_time,
        })
    }
}

/// Successful query execution outcome.
#[derive(Debug)]
pub struct QueryOutcome {
    /// The query result.
    pub result: QueryResult,
    /// How the statement was classified.
    pub classification: ClassificationResult,
    /// How long the query took to execute.
    pub execution_time: Duration,
}
