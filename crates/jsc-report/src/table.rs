//! # Table Utility
//!
//! A small ordered-column table with two renderings: a width-padded
//! Markdown pipe table for humans, and a JSON array of objects carrying
//! each cell's raw value for downstream tooling.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("row has {actual} cells, table has {expected} columns")]
    ColumnMismatch { expected: usize, actual: usize },
}

/// One cell: display text plus the raw JSON value behind it.
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    value: Value,
}

impl Cell {
    /// A plain text cell whose JSON value is the same string.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = Value::String(text.clone());
        Self { text, value }
    }

    /// A cell with distinct display text and machine value.
    pub fn new(text: impl Into<String>, value: Value) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    pub fn display(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::new(n.to_string(), Value::from(n))
    }
}

/// Ordered headers plus rows of cells.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) -> Result<(), ReportError> {
        if cells.len() != self.headers.len() {
            return Err(ReportError::ColumnMismatch {
                expected: self.headers.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Render a padded Markdown pipe table.
    pub fn to_markdown(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].display().len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        render_row(&mut out, &widths, |col| self.headers[col].as_str());

        out.push('|');
        for width in &widths {
            out.push_str(&"-".repeat((width + 2).max(3)));
            out.push('|');
        }
        out.push('\n');

        for row in &self.rows {
            render_row(&mut out, &widths, |col| row[col].display());
        }
        out
    }

    /// Render a JSON array of header-keyed objects with raw cell values.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    self.headers
                        .iter()
                        .zip(row)
                        .map(|(header, cell)| (header.clone(), cell.value().clone()))
                        .collect::<serde_json::Map<_, _>>()
                        .into()
                })
                .collect(),
        )
    }
}

fn render_row<'a>(out: &mut String, widths: &[usize], cell: impl Fn(usize) -> &'a str) {
    out.push('|');
    for (col, width) in widths.iter().enumerate() {
        out.push(' ');
        let text = cell(col);
        out.push_str(text);
        out.push_str(&" ".repeat(width - text.len()));
        out.push_str(" |");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["suite", "pass"]);
        table
            .add_row(vec![Cell::text("type.json"), Cell::from(12)])
            .expect("row");
        table
            .add_row(vec![Cell::text("ref.json"), Cell::from(7)])
            .expect("row");
        table
    }

    #[test]
    fn test_markdown_is_padded() {
        let markdown = sample().to_markdown();
        let expected = "\
| suite     | pass |
|-----------|------|
| type.json | 12   |
| ref.json  | 7    |
";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_json_carries_raw_values() {
        let json = sample().to_json();
        assert_eq!(json[0]["suite"], "type.json");
        assert_eq!(json[0]["pass"], 12);
        assert_eq!(json[1]["pass"], 7);
    }

    #[test]
    fn test_column_mismatch_rejected() {
        let mut table = Table::new(["a", "b"]);
        let err = table.add_row(vec![Cell::text("only one")]).unwrap_err();
        assert!(matches!(
            err,
            ReportError::ColumnMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_narrow_columns_keep_minimum_divider() {
        let mut table = Table::new(["a"]);
        table.add_row(vec![Cell::text("x")]).expect("row");
        let markdown = table.to_markdown();
        assert!(markdown.contains("|---|"));
    }
}
