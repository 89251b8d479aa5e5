//! SQLite database client implementation.
//!
//! Provides the `SqliteClient` struct that implements the `DatabaseClient` trait
//! for local SQLite files using sqlx.

use crate::config::ConnectionConfig;
use crate::db::{ColumnInfo, DatabaseClient, QueryResult, Row, Value, MULTIPLE_STATEMENTS_MESSAGE};
use crate::error::{PeekError, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{Column as SqlxColumn, Row as SqlxRow, TypeInfo, ValueRef};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Reads the schema table so a file that is not a database fails at connect time.
const PROBE_SQL: &str = "SELECT count(*) FROM sqlite_master";

/// SQLite database client.
#[derive(Debug)]
pub struct SqliteClient {
    pool: SqlitePool,
}

impl SqliteClient {
    /// Opens the database file named by the configuration.
    ///
    /// The file must already exist. In read-only mode the connection is opened
    /// with SQLite's read-only flag.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(false)
            .read_only(config.read_only);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| PeekError::connection(driver_message(&e)))?;

        // SQLite validates the file header lazily, on the first read.
        if let Err(e) = sqlx::query(PROBE_SQL).fetch_one(&pool).await {
            pool.close().await;
            return Err(PeekError::connection(driver_message(&e)));
        }

        info!(
            "Opened {} ({})",
            config.path.display(),
            if config.read_only { "read-only" } else { "read-write" }
        );
        Ok(Self { pool })
    }

    /// Creates a SqliteClient from an existing connection pool.
    ///
    /// This is primarily useful for testing.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseClient for SqliteClient {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        let start = Instant::now();

        let result = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PeekError::query(driver_message(&e)))?;

        let execution_time = start.elapsed();
        debug!("Fetched {} rows in {:?}", result.len(), execution_time);

        // Rows from a second statement carry their own column set.
        if let Some(first) = result.first() {
            if result.iter().any(|row| !same_columns(row, first)) {
                return Err(PeekError::query(MULTIPLE_STATEMENTS_MESSAGE));
            }
        }

        let columns: Vec<ColumnInfo> = result
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
                    .collect()
            })
            .unwrap_or_default();

        let rows = result.iter().map(convert_row).collect::<Result<Vec<Row>>>()?;

        Ok(QueryResult::with_data(columns, rows).with_execution_time(execution_time))
    }

    async fn execute_statement(&self, sql: &str) -> Result<QueryResult> {
        let start = Instant::now();

        let done = sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(|e| PeekError::query(driver_message(&e)))?;

        let execution_time = start.elapsed();
        debug!(
            "Statement affected {} rows in {:?}",
            done.rows_affected(),
            execution_time
        );

        Ok(QueryResult::affected(done.rows_affected()).with_execution_time(execution_time))
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        info!("Database connection closed");
        Ok(())
    }
}

fn same_columns(row: &SqliteRow, first: &SqliteRow) -> bool {
    row.columns().len() == first.columns().len()
        && row
            .columns()
            .iter()
            .zip(first.columns())
            .all(|(a, b)| a.name() == b.name())
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Result<Row> {
    (0..row.len()).map(|i| convert_value(row, i)).collect()
}

/// Converts a single cell using the storage class of the stored value.
///
/// SQLite columns are dynamically typed, so the declared column type is not
/// consulted.
fn convert_value(row: &SqliteRow, index: usize) -> Result<Value> {
    let raw = row.try_get_raw(index).map_err(|e| decode_error(index, e))?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_uppercase();

    let value = match storage_class.as_str() {
        "INTEGER" => row.try_get::<i64, _>(index).map(Value::Int),
        "REAL" => row.try_get::<f64, _>(index).map(Value::Float),
        "BLOB" => row.try_get::<Vec<u8>, _>(index).map(Value::Bytes),
        _ => row.try_get::<String, _>(index).map(Value::String),
    };

    value.map_err(|e| decode_error(index, e))
}

fn decode_error(index: usize, error: sqlx::Error) -> PeekError {
    PeekError::query(format!("Failed to convert column {index}: {error}"))
}

/// Extracts the SQLite message from a driver error, without sqlx's prefix.
fn driver_message(error: &sqlx::Error) -> String {
    match error.as_database_error() {
        Some(db_error) => db_error.message().to_string(),
        None => error.to_string(),
    }
}
