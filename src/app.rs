//! Session pipeline for txpeek.
//!
//! Connect, print the banner, read one query, execute it, render the result,
//! close. Query failures are reported and the session ends normally;
//! connection failures end it with an error.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::db::{self, DatabaseClient};
use crate::error::{PeekError, Result};
use crate::input::QuerySource;
use crate::query::{QueryExecutor, QueryOutcome};
use crate::render::TableRenderer;

/// Printed after connecting, before the prompt.
pub const BANNER: &str = "Displaying all transactions:";

/// Printed when the input holds no query.
pub const NO_QUERY_MESSAGE: &str = "No query entered.";

/// One inspection session.
pub struct App {
    settings: Settings,
    renderer: TableRenderer,
}

impl App {
    /// Creates a session from resolved settings.
    pub fn new(settings: Settings) -> Self {
        let renderer = TableRenderer::new(settings.render.clone());
        Self { settings, renderer }
    }

    /// Opens the configured database and runs the session against it.
    ///
    /// A connection failure is printed to `out` and returned.
    pub async fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<()>
    where
        S: QuerySource,
        W: Write,
    {
        let connection = &self.settings.connection;
        let client = match db::connect(connection).await {
            Ok(client) => client,
            Err(e) => {
                writeln!(out, "Error connecting to database: {}", e.message())
                    .map_err(output_error)?;
                return Err(e);
            }
        };

        self.run_with_client(client.as_ref(), source, out).await
    }

    /// Reports the connection, runs the session against an open client, then
    /// closes it.
    ///
    /// The client is closed whether the session succeeds or fails, including
    /// when the connection line cannot be written.
    pub async fn run_with_client<S, W>(
        &self,
        client: &dyn DatabaseClient,
        source: &mut S,
        out: &mut W,
    ) -> Result<()>
    where
        S: QuerySource,
        W: Write,
    {
        let outcome = self.session(client, source, out).await;

        if let Err(e) = client.close().await {
            warn!("Failed to close database: {e}");
        }

        outcome
    }

    async fn session<S, W>(
        &self,
        client: &dyn DatabaseClient,
        source: &mut S,
        out: &mut W,
    ) -> Result<()>
    where
        S: QuerySource,
        W: Write,
    {
        writeln!(out, "Connected to {}", self.settings.connection.display_string())
            .map_err(output_error)?;
        writeln!(out, "{BANNER}").map_err(output_error)?;

        let query = match source.read_query()? {
            Some(query) if !query.trim().is_empty() => query,
            _ => {
                writeln!(out, "{NO_QUERY_MESSAGE}").map_err(output_error)?;
                return Ok(());
            }
        };

        let executor = QueryExecutor::new(client, self.settings.connection.read_only);
        match executor.execute(&query).await {
            Ok(outcome) => self.write_outcome(&outcome, out),
            Err(e) if e.is_recoverable() => {
                debug!("{}: {}", e.category(), e.message());
                writeln!(out, "SQL error: {}", e.message()).map_err(output_error)
            }
            Err(e) => Err(e),
        }
    }

    fn write_outcome<W: Write>(&self, outcome: &QueryOutcome, out: &mut W) -> Result<()> {
        debug!(
            "Query finished in {:?} ({} rows)",
            outcome.execution_time, outcome.result.row_count
        );

        match outcome.result.rows_affected {
            Some(count) => writeln!(
                out,
                "{count} row{} affected.",
                if count == 1 { "" } else { "s" }
            ),
            None => self.renderer.render_result(&outcome.result).write_to(out),
        }
        .map_err(output_error)
    }
}

fn output_error(error: io::Error) -> PeekError {
    PeekError::internal(format!("Failed to write output: {error}"))
}
