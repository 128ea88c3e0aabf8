//! The matrix table: ordered preset rows keyed by chart id.
//!
//! Parsing is pure and idempotent: the same source text always yields the
//! same table, and the table never changes after `parse` returns.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::choice::ChoiceDescriptor;
use crate::error::{MatrixError, Result};
use crate::grammar::{detect_delimiter, parse_header_cell, split_cells, ID_COLUMN};

/// One data row: a chart id plus the row's non-blank choice cells.
///
/// Blank cells are not stored; a missing entry is the wildcard described in
/// the matching rules of the selection engine.
#[derive(Debug, Clone)]
pub struct MatrixRow {
    chart_id: i64,
    cells: IndexMap<String, String>,
}

impl MatrixRow {
    /// The external chart-configuration handle this row selects.
    pub fn chart_id(&self) -> i64 {
        self.chart_id
    }

    /// The row's value for a choice group, or `None` for a blank cell.
    pub fn value(&self, group: &str) -> Option<&str> {
        self.cells.get(group).map(String::as_str)
    }
}

/// An immutable parsed decision-matrix table.
#[derive(Debug, Clone)]
pub struct MatrixTable {
    rows: Vec<MatrixRow>,
    choices: Vec<ChoiceDescriptor>,
}

impl MatrixTable {
    /// Parses delimited matrix text into a table.
    ///
    /// The first non-blank line is the header and must contain the `chartId`
    /// column. Blank lines anywhere in the source are skipped. Data rows
    /// shorter than the header are padded with blank cells, longer ones are
    /// truncated. Rows whose id cell is not an integer are skipped with a
    /// warning.
    ///
    /// Empty text is a valid empty table with zero choice groups.
    ///
    /// # Errors
    ///
    /// Fails fast, returning no partial table, when the header lacks the id
    /// column, contains a blank cell, or names the same group twice.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let Some(header) = lines.next() else {
            return Ok(MatrixTable { rows: Vec::new(), choices: Vec::new() });
        };

        let delimiter = detect_delimiter(header);
        let header_cells = split_cells(header, delimiter);
        let id_index = header_cells
            .iter()
            .position(|cell| cell == ID_COLUMN)
            .ok_or(MatrixError::MissingIdColumn)?;

        // (column index, group name, explicit kind) for every non-id column
        let mut columns = Vec::new();
        let mut seen = IndexSet::new();
        for (index, cell) in header_cells.iter().enumerate() {
            if index == id_index {
                continue;
            }
            let (name, kind) = parse_header_cell(cell);
            if name.is_empty() {
                return Err(MatrixError::UnnamedColumn(index));
            }
            if !seen.insert(name.clone()) {
                return Err(MatrixError::DuplicateChoiceGroup(name));
            }
            columns.push((index, name, kind));
        }

        let mut rows = Vec::new();
        for (row_number, line) in lines.enumerate() {
            let mut cells = split_cells(line, delimiter);
            cells.resize(header_cells.len(), String::new());

            let id_cell = &cells[id_index];
            let chart_id = match id_cell.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    warn!(event = "row_skipped", row = row_number + 1, id = %id_cell);
                    continue;
                }
            };

            let mut row_cells = IndexMap::new();
            for (index, name, _) in &columns {
                let cell = &cells[*index];
                if !cell.is_empty() {
                    row_cells.insert(name.clone(), cell.clone());
                }
            }
            rows.push(MatrixRow { chart_id, cells: row_cells });
        }

        let choices = columns
            .into_iter()
            .map(|(_, name, kind)| {
                let options: IndexSet<String> = rows
                    .iter()
                    .filter_map(|row| row.value(&name))
                    .map(str::to_string)
                    .collect();
                ChoiceDescriptor::new(name, kind, options)
            })
            .collect();

        Ok(MatrixTable { rows, choices })
    }

    /// Data rows in table order.
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Choice-group descriptors in header order.
    pub fn choices(&self) -> &[ChoiceDescriptor] {
        &self.choices
    }

    /// Looks up a choice group by name.
    pub fn choice(&self, name: &str) -> Option<&ChoiceDescriptor> {
        self.choices.iter().find(|choice| choice.name() == name)
    }
}

/// Extracts the ordered, de-duplicated chart ids from raw matrix text.
///
/// This works straight off the source so callers can prefetch chart
/// configurations without building the full table. Text without an id
/// column yields no ids.
pub fn required_chart_ids(text: &str) -> Vec<i64> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let delimiter = detect_delimiter(header);
    let Some(id_index) = split_cells(header, delimiter).iter().position(|cell| cell == ID_COLUMN)
    else {
        return Vec::new();
    };

    let ids: IndexSet<i64> = lines
        .filter_map(|line| {
            split_cells(line, delimiter)
                .get(id_index)
                .and_then(|cell| cell.parse::<i64>().ok())
        })
        .collect();
    ids.into_iter().collect()
}
