//! Result types shared by the SQLite client, the executor and the renderer.

use std::fmt;
use std::time::Duration;

/// A fetched row: one value per result column, in column order.
pub type Row = Vec<Value>;

/// Outcome of one statement: the rows it produced, or the rows it changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Row>,
    pub execution_time: Duration,
    /// Equal to `rows.len()`.
    pub row_count: usize,
    /// Set only when the statement was executed for its effect.
    pub rows_affected: Option<u64>,
}

impl QueryResult {
    /// Wraps fetched rows.
    pub fn with_data(columns: Vec<ColumnInfo>, rows: Vec<Row>) -> Self {
        Self {
            row_count: rows.len(),
            columns,
            rows,
            ..Default::default()
        }
    }

    /// Result of an INSERT, UPDATE, DELETE and the like.
    pub fn affected(count: u64) -> Self {
        Self {
            rows_affected: Some(count),
            ..Default::default()
        }
    }

    pub fn with_execution_time(mut self, elapsed: Duration) -> Self {
        self.execution_time = elapsed;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in result order, as the renderer's header.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }
}

/// A result column and the type SQLite reported for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, or the storage class of the first value for expressions.
    pub data_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A cell, decoded from its SQLite storage class.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    /// Never produced by SQLite, which stores booleans as INTEGER.
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Text of the cell as printed in the table and used for row category
    /// matching.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::String(text) => text.clone(),
            Value::Int(n) => n.to_string(),
            Value::Float(x) => format_real(*x),
            Value::Bool(flag) => flag.to_string(),
            Value::Bytes(blob) => format!("<{} bytes>", blob.len()),
            Value::Null => "NULL".to_string(),
        }
    }
}

/// Whole REAL values keep a `.0` so amounts like `10.0` read as reals.
fn format_real(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}
