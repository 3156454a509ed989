// SPDX-License-Identifier: MIT

//! Minimal column-aligned table for list output.

use std::io::Write;

use crate::color;

#[derive(Clone, Copy)]
enum ColumnKind {
    Left,
    Muted,
}

#[derive(Clone, Copy)]
pub struct Column {
    header: &'static str,
    kind: ColumnKind,
}

impl Column {
    pub fn left(header: &'static str) -> Self {
        Self {
            header,
            kind: ColumnKind::Left,
        }
    }

    /// Secondary column (ids, timestamps) rendered in the muted color.
    pub fn muted(header: &'static str) -> Self {
        Self {
            header,
            kind: ColumnKind::Muted,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render with two-space gutters. Width is computed from raw cell
    /// text; color codes are applied after padding so they don't skew
    /// alignment.
    pub fn render(&self, out: &mut (impl Write + ?Sized)) {
        let mut widths: Vec<usize> =
            self.columns.iter().map(|c| c.header.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| pad(c.header, widths[i]))
            .collect();
        let _ = writeln!(out, "{}", color::context(header.join("  ").trim_end()));

        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let padded = pad(cell, widths.get(i).copied().unwrap_or(0));
                    match self.columns.get(i).map(|c| c.kind) {
                        Some(ColumnKind::Muted) => color::muted(&padded),
                        _ => padded,
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", line.join("  ").trim_end());
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
