//! End-to-end session tests: connect, prompt, execute, render, close.

use std::io::Cursor;

use crossterm::style::{style, Color, Stylize};
use pretty_assertions::assert_eq;
use txpeek::app::App;
use txpeek::error::PeekError;
use txpeek::input::{FixedQuery, PromptReader};
use txpeek::render::RenderOptions;

use super::common::{settings_for, TestDatabase};

async fn run_with_input(app: &App, input: &str) -> (Result<(), PeekError>, String) {
    let mut prompt = Vec::new();
    let mut out = Vec::new();
    let result = {
        let mut reader = PromptReader::new(Cursor::new(input.as_bytes()), &mut prompt);
        app.run(&mut reader, &mut out).await
    };
    assert_eq!(String::from_utf8(prompt).unwrap(), "Enter your query:\n");
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_prompted_query_renders_table() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) = run_with_input(
        &app,
        "SELECT id, wallet_address, signature, type FROM transactions ORDER BY id\n",
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(
        out,
        format!(
            "Connected to {}\n\
             Displaying all transactions:\n\
             id | wallet_address | signature | type    \n\
             ------------------------------------------\n\
             1  | W1             | sig1      | buy     \n\
             2  | W2             | sig2      | sell    \n\
             3  | W3             | sig3      | transfer\n",
            fixture.path().display()
        )
    );
}

#[tokio::test]
async fn test_rows_are_colored_by_type() {
    let fixture = TestDatabase::seeded().await;
    let mut settings = settings_for(fixture.path(), false);
    settings.render = RenderOptions::default();
    let app = App::new(settings);

    let mut out = Vec::new();
    app.run(
        &mut FixedQuery::new("SELECT id, wallet_address, signature, type FROM transactions ORDER BY id"),
        &mut out,
    )
    .await
    .unwrap();
    let out = String::from_utf8(out).unwrap();

    let green = style("buy     ").with(Color::Green).to_string();
    let red = style("sell    ").with(Color::Red).to_string();
    let grey = style("transfer").with(Color::Grey).to_string();
    assert!(out.contains(&green));
    assert!(out.contains(&red));
    assert!(out.contains(&grey));
    assert!(out.contains("id | wallet_address | signature | type    \n"));
}

#[tokio::test]
async fn test_empty_table_reports_no_transactions() {
    let fixture = TestDatabase::empty().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) = run_with_input(&app, "SELECT * FROM transactions\n").await;

    assert!(result.is_ok());
    assert!(out.ends_with("Displaying all transactions:\nNo transactions found.\n"));
}

#[tokio::test]
async fn test_sql_error_ends_session_normally() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) = run_with_input(&app, "SELECT * FROM trades\n").await;

    assert!(result.is_ok());
    assert!(out.ends_with("SQL error: no such table: trades\n"));
}

#[tokio::test]
async fn test_missing_database_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(settings_for(&dir.path().join("tokenwise.db"), false));

    let mut out = Vec::new();
    let result = app.run(&mut FixedQuery::new("SELECT 1"), &mut out).await;
    let out = String::from_utf8(out).unwrap();

    assert!(matches!(result, Err(PeekError::Connection(_))));
    assert!(out.starts_with("Error connecting to database: "));
    assert!(!out.contains("Displaying all transactions:"));
}

#[tokio::test]
async fn test_eof_reports_no_query() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) = run_with_input(&app, "").await;

    assert!(result.is_ok());
    assert!(out.ends_with("Displaying all transactions:\nNo query entered.\n"));
}

#[tokio::test]
async fn test_write_statement_reports_affected_rows() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) =
        run_with_input(&app, "UPDATE transactions SET type = 'sell' WHERE type = 'buy'\n").await;

    assert!(result.is_ok());
    assert!(out.ends_with("1 row affected.\n"));
    assert_eq!(fixture.count("transactions").await, 3);
}

#[tokio::test]
async fn test_read_only_session_rejects_writes() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), true));

    let (result, out) = run_with_input(&app, "DELETE FROM transactions\n").await;

    assert!(result.is_ok());
    assert!(out.ends_with("SQL error: DELETE statements are not allowed in read-only mode\n"));
    assert_eq!(fixture.count("transactions").await, 3);
}

#[tokio::test]
async fn test_returning_clause_renders_rows() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) = run_with_input(
        &app,
        "UPDATE transactions SET amount = amount WHERE id = 1 RETURNING id, wallet_address, signature, type\n",
    )
    .await;

    assert!(result.is_ok());
    assert!(out.ends_with(
        "Displaying all transactions:\n\
         id | wallet_address | signature | type\n\
         --------------------------------------\n\
         1  | W1             | sig1      | buy \n"
    ));
    assert!(!out.contains("affected"));
}

#[tokio::test]
async fn test_multiple_statements_are_reported() {
    let fixture = TestDatabase::seeded().await;
    let app = App::new(settings_for(fixture.path(), false));

    let (result, out) = run_with_input(
        &app,
        "SELECT 1 AS a; SELECT 2 AS b, 3 AS c, 4 AS d, 'buy' AS e\n",
    )
    .await;

    assert!(result.is_ok());
    assert!(out.ends_with("SQL error: You can only execute one statement at a time.\n"));
    assert!(!out.contains("\na\n"));
}

