//! Column layout for plain-text result tables.
//!
//! Widths are measured in characters, the same unit `format!` pads in.

use crate::db::Row;

/// Separator placed between cells in the header and in every row.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Computes the display width of each column.
///
/// A width is the longest of the header and every cell in that column.
/// Cells past the last column are not measured.
pub fn column_widths(columns: &[String], rows: &[Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();

    for row in rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.to_display_string().chars().count());
        }
    }

    widths
}

/// Left-justifies `text` to `width` characters.
pub fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Builds the header line from the column names.
pub fn header_line(columns: &[String], widths: &[usize]) -> String {
    columns
        .iter()
        .zip(widths)
        .map(|(name, &width)| pad(name, width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Builds the dashed rule under a header line, matching its length.
pub fn separator_line(header: &str) -> String {
    "-".repeat(header.chars().count())
}

/// Produces the padded cell texts of a row, one per column.
///
/// Missing cells are blank so short rows stay aligned.
pub fn padded_cells(row: &Row, widths: &[usize]) -> Vec<String> {
    widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let text = row.get(i).map(|v| v.to_display_string()).unwrap_or_default();
            pad(&text, width)
        })
        .collect()
}
