//! Result-set rendering for the terminal.
//!
//! Turns column names and rows into aligned text lines. Each row is painted
//! in the color of its category tag: `buy` rows positive, `sell` rows
//! negative, everything else neutral. Rendering is a pure function of its
//! input; writing the lines is left to the caller.

mod category;
mod palette;
mod table;

pub use category::{CategoryColumn, RowTone};
pub use palette::Palette;
pub use table::{column_widths, header_line, separator_line, COLUMN_SEPARATOR};

use crate::db::{QueryResult, Row};
use std::io::{self, Write};

/// Printed instead of a table when a query returns no rows.
pub const NO_RESULTS_MESSAGE: &str = "No transactions found.";

/// Options that control how rows are classified and painted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Column holding the category tag; `None` paints every row neutral.
    pub category_column: Option<CategoryColumn>,
    /// Colors for each tone.
    pub palette: Palette,
    /// Whether to emit color escapes at all.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            category_column: Some(CategoryColumn::default()),
            palette: Palette::default(),
            color: true,
        }
    }
}

/// Rendered form of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutput {
    /// The result had no rows.
    NoResults,
    /// Header, separator, then one line per row.
    Lines(Vec<String>),
}

impl TableOutput {
    /// Writes the output, one line per entry.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::NoResults => writeln!(out, "{NO_RESULTS_MESSAGE}"),
            Self::Lines(lines) => lines.iter().try_for_each(|line| writeln!(out, "{line}")),
        }
    }
}

/// Renders result sets as aligned, color-coded tables.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    options: RenderOptions,
}

impl TableRenderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders a query result.
    pub fn render_result(&self, result: &QueryResult) -> TableOutput {
        self.render(&result.column_names(), &result.rows)
    }

    /// Renders column names and rows.
    pub fn render(&self, columns: &[String], rows: &[Row]) -> TableOutput {
        if rows.is_empty() {
            return TableOutput::NoResults;
        }

        let widths = column_widths(columns, rows);
        let header = header_line(columns, &widths);
        let separator = separator_line(&header);
        let category_index = self
            .options
            .category_column
            .as_ref()
            .and_then(|c| c.resolve(columns));

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(header);
        lines.push(separator);
        lines.extend(
            rows.iter()
                .map(|row| self.render_row(row, &widths, RowTone::for_row(row, category_index))),
        );

        TableOutput::Lines(lines)
    }

    fn render_row(&self, row: &Row, widths: &[usize], tone: RowTone) -> String {
        table::padded_cells(row, widths)
            .into_iter()
            .map(|cell| {
                if self.options.color {
                    self.options.palette.paint(tone, &cell)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }
}
