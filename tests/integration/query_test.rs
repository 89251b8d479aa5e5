//! Query execution integration tests.
//!
//! Tests SQL execution and value conversion against a real SQLite file.

use txpeek::config::ConnectionConfig;
use txpeek::db::{self, DatabaseClient, SqliteClient, Value};
use txpeek::error::PeekError;
use txpeek::query::QueryExecutor;

use super::common::TestDatabase;

#[tokio::test]
async fn test_select_returns_columns_in_order() {
    let fixture = TestDatabase::seeded().await;
    let client = SqliteClient::connect(&ConnectionConfig::new(fixture.path()))
        .await
        .unwrap();

    let result = client
        .execute_query("SELECT id, wallet_address, signature, type, amount FROM transactions ORDER BY id")
        .await
        .unwrap();

    assert_eq!(
        result.column_names(),
        vec!["id", "wallet_address", "signature", "type", "amount"]
    );
    assert_eq!(result.row_count, 3);
    assert_eq!(result.rows[0][0], Value::Int(1));
    assert_eq!(result.rows[0][3], Value::from("buy"));
    assert_eq!(result.rows[1][4], Value::Float(4.5));

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_null_and_expression_columns() {
    let fixture = TestDatabase::seeded().await;
    let client = SqliteClient::connect(&ConnectionConfig::new(fixture.path()))
        .await
        .unwrap();

    let result = client
        .execute_query("SELECT NULL AS missing, amount * 2 AS doubled FROM transactions WHERE id = 1")
        .await
        .unwrap();

    assert_eq!(result.rows, vec![vec![Value::Null, Value::Float(20.0)]]);

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_query_error_carries_driver_message() {
    let fixture = TestDatabase::seeded().await;
    let client = SqliteClient::connect(&ConnectionConfig::new(fixture.path()))
        .await
        .unwrap();

    let err = client.execute_query("SELECT * FROM trades").await.unwrap_err();

    assert!(matches!(err, PeekError::Query(_)));
    assert!(err.message().contains("no such table: trades"));

    client.close().await.unwrap();
}

#[tokio::test]
async fn test_executor_applies_writes() {
    let fixture = TestDatabase::seeded().await;
    let client = db::connect(&ConnectionConfig::new(fixture.path())).await.unwrap();

    let outcome = QueryExecutor::new(client.as_ref(), false)
        .execute("DELETE FROM transactions WHERE type = 'transfer'")
        .await
        .unwrap();
    client.close().await.unwrap();

    assert_eq!(outcome.result.rows_affected, Some(1));
    assert_eq!(fixture.count("transactions").await, 2);
}

#[tokio::test]
async fn test_read_only_connection_refuses_writes() {
    let fixture = TestDatabase::seeded().await;
    let config = ConnectionConfig::new(fixture.path()).with_read_only(true);
    let client = db::connect(&config).await.unwrap();

    // Bypasses classification; the handle itself must refuse.
    let err = client
        .execute_statement("DELETE FROM transactions")
        .await
        .unwrap_err();
    client.close().await.unwrap();

    assert!(matches!(err, PeekError::Query(_)));
    assert!(err.message().contains("readonly"));
    assert_eq!(fixture.count("transactions").await, 3);
}

#[tokio::test]
async fn test_connect_to_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConnectionConfig::new(dir.path().join("absent.db"));

    let err = db::connect(&config).await.err().unwrap();

    assert!(matches!(err, PeekError::Connection(_)));
    assert!(!dir.path().join("absent.db").exists());
}
