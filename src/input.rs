//! Sources for the query text a session runs.

use crate::error::{PeekError, Result};
use std::io::{self, BufRead, Write};

/// Prompt shown before reading a query interactively.
pub const PROMPT: &str = "Enter your query:\n";

/// Reads the one query a session runs.
pub trait QuerySource {
    /// Returns the next query, or `None` when the input is exhausted.
    fn read_query(&mut self) -> Result<Option<String>>;
}

/// Prompts on a writer and reads one line from a buffered reader.
pub struct PromptReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    /// Creates a prompt reader over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptReader<io::StdinLock<'static>, io::Stdout> {
    /// Creates a prompt reader over standard input and standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> QuerySource for PromptReader<R, W> {
    fn read_query(&mut self) -> Result<Option<String>> {
        self.output
            .write_all(PROMPT.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| PeekError::input(format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PeekError::input(format!("Failed to read query: {e}")))?;

        if read == 0 {
            return Ok(None);
        }

        let query = line.strip_suffix('\n').unwrap_or(&line);
        let query = query.strip_suffix('\r').unwrap_or(query);
        Ok(Some(query.to_string()))
    }
}

/// A query supplied up front, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct FixedQuery {
    query: Option<String>,
}

impl FixedQuery {
    /// Creates a source that yields `query` once.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

impl QuerySource for FixedQuery {
    fn read_query(&mut self) -> Result<Option<String>> {
        Ok(self.query.take())
    }
}
