//! Shared fixtures: a seeded transactions database in a temp directory.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

use txpeek::config::{ConnectionConfig, LoggingConfig, Settings};
use txpeek::render::RenderOptions;

/// A database file that lives as long as the fixture.
pub struct TestDatabase {
    _dir: TempDir,
    path: PathBuf,
}

impl TestDatabase {
    /// Creates `tokenwise.db` with the transactions schema and three trades.
    pub async fn seeded() -> Self {
        let db = Self::empty().await;
        db.exec(
            "INSERT INTO transactions
                (wallet_address, signature, type, amount, protocol, timestamp, price) VALUES
                ('W1', 'sig1', 'buy', 10.0, 'raydium', 1700000000, 0.5),
                ('W2', 'sig2', 'sell', 4.5, 'jupiter', 1700000060, 0.52),
                ('W3', 'sig3', 'transfer', 1.0, 'raydium', 1700000120, 0.51)",
        )
        .await;
        db
    }

    /// Creates `tokenwise.db` with the transactions schema and no rows.
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tokenwise.db");
        let db = Self { _dir: dir, path };
        db.exec(
            "CREATE TABLE transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                wallet_address TEXT NOT NULL,
                signature TEXT UNIQUE,
                type TEXT NOT NULL,
                amount REAL NOT NULL,
                protocol TEXT NOT NULL,
                timestamp INTEGER NOT NULL,
                price REAL NOT NULL
            )",
        )
        .await;
        db
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs setup SQL on a separate connection, creating the file if needed.
    pub async fn exec(&self, sql: &str) {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("open fixture database");
        sqlx::query(sql).execute(&pool).await.expect("run fixture SQL");
        pool.close().await;
    }

    /// Counts rows with a separate connection.
    pub async fn count(&self, table: &str) -> i64 {
        let options = SqliteConnectOptions::new().filename(&self.path);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("open fixture database");
        let count: i64 = sqlx::query_scalar(&format!("SELECT count(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .expect("count rows");
        pool.close().await;
        count
    }
}

/// Settings for a plain-text session against `path`.
pub fn settings_for(path: &Path, read_only: bool) -> Settings {
    Settings {
        connection: ConnectionConfig::new(path).with_read_only(read_only),
        render: RenderOptions {
            color: false,
            ..RenderOptions::default()
        },
        query: None,
        logging: LoggingConfig::default(),
    }
}
