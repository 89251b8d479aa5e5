//! Row classification by the category column.

use crate::db::{Row, Value};

/// Which column carries the category tag that colors a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryColumn {
    /// Zero-based position within each row.
    Index(usize),
    /// Column name, matched exactly first and then case-insensitively.
    Name(String),
}

impl Default for CategoryColumn {
    /// The fourth column, where the `type` field sits in the transaction tables.
    fn default() -> Self {
        Self::Index(3)
    }
}

impl CategoryColumn {
    /// Parses a user-supplied setting: a number is an index, `none`/`off`
    /// disables classification, anything else is a column name.
    pub fn parse_setting(setting: &str) -> Option<Self> {
        let setting = setting.trim();
        if setting.is_empty()
            || setting.eq_ignore_ascii_case("none")
            || setting.eq_ignore_ascii_case("off")
        {
            return None;
        }
        match setting.parse::<usize>() {
            Ok(index) => Some(Self::Index(index)),
            Err(_) => Some(Self::Name(setting.to_string())),
        }
    }

    /// Resolves the setting to a position in a result with the given columns.
    ///
    /// Indexes resolve unconditionally; rows that are too short classify as neutral.
    pub fn resolve(&self, columns: &[String]) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(name) => columns
                .iter()
                .position(|c| c == name)
                .or_else(|| columns.iter().position(|c| c.eq_ignore_ascii_case(name))),
        }
    }
}

/// Display tone selected for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTone {
    /// A `buy` row.
    Positive,
    /// A `sell` row.
    Negative,
    /// Anything else.
    Neutral,
}

impl RowTone {
    /// Classifies a category tag; case and surrounding whitespace are ignored.
    pub fn classify(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "buy" => Self::Positive,
            "sell" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// Classifies a row by the cell at `category_index`.
    pub fn for_row(row: &Row, category_index: Option<usize>) -> Self {
        category_index
            .and_then(|i| row.get(i))
            .map(|value: &Value| Self::classify(&value.to_display_string()))
            .unwrap_or(Self::Neutral)
    }
}
