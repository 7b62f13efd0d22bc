//! Table rendering utilities for CLI outputs.
//!
//! Cells may span several lines; every row is as tall as its tallest cell.

use crate::utils::formatting::{pad_right, truncate};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// A cell: raw text plus an optional ANSI color applied after padding.
#[derive(Clone, Default)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&truncate(&col.header, col.width), col.width));
            out.push(' ');
        }
        out.push('\n');

        let total_width: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let height = row
                .iter()
                .map(|c| c.text.lines().count().max(1))
                .max()
                .unwrap_or(1);

            for line in 0..height {
                for (i, col) in self.columns.iter().enumerate() {
                    let cell = row.get(i);
                    let text = cell
                        .and_then(|c| c.text.lines().nth(line))
                        .unwrap_or("");
                    let padded = pad_right(&truncate(text, col.width), col.width);
                    match cell.and_then(|c| c.color) {
                        Some(color) if !text.is_empty() => {
                            out.push_str(&crate::utils::colors::paint(&padded, color))
                        }
                        _ => out.push_str(&padded),
                    }
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
