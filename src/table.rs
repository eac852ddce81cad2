//! Row-oriented table produced by flattening API payloads.
//!
//! A [`Table`] is an ordered list of rows; each row maps a column name to a
//! cell value. There is no fixed schema: the column set is whatever keys the
//! rows carry, and [`Table::columns`] computes the union on demand.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as TextTable};
use serde::Serialize;
use serde_json::{Map, Value};
use std::{collections::HashSet, io::Write};

use crate::Result;


/// One flattened record. Keys keep the order they were first seen in.
pub type Row = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of column names across all rows, in first-seen order.
    pub fn columns(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }

    /// One entry per row; `None` where the row lacks the column.
    pub fn column(&self, name: &str) -> Vec<Option<&Value>> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row)?.get(column)
    }

    pub fn to_json_value(&self) -> Value {
        Value::Array(self.rows.iter().cloned().map(Value::Object).collect())
    }

    /// Write the table as CSV with a header of [`Table::columns`].
    ///
    /// Missing and null cells are written as empty fields.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let columns = self.columns();
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(&columns)?;
        for row in &self.rows {
            let record: Vec<String> = columns
                .iter()
                .map(|c| row.get(c).map(cell_to_string).unwrap_or_default())
                .collect();
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render as a text table for terminal output.
    pub fn render(&self) -> String {
        let columns = self.columns();
        let mut table = TextTable::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(
            columns
                .iter()
                .map(|c| Cell::new(c).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

        for row in &self.rows {
            let cells: Vec<String> = columns
                .iter()
                .map(|c| match row.get(c) {
                    Some(Value::Null) => "NULL".to_string(),
                    Some(v) => cell_to_string(v),
                    None => String::new(),
                })
                .collect();
            table.add_row(cells);
        }

        table.to_string()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Plain-text form of a cell: strings unquoted, everything else as JSON.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
