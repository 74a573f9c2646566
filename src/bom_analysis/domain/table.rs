//! In-memory tabular dataset
//!
//! Every feed the tool consumes (BOM partitions, dispensing, raw materials)
//! is loaded into a [`Table`]: an ordered header plus rectangular rows of
//! [`CellValue`]s. Rows shorter than the header are padded with
//! [`CellValue::Missing`].

use serde::Serialize;

/// A single cell of a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Builds a cell from raw text; empty or whitespace-only text is `Missing`
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric view of the cell. Text is parsed leniently; unparsable text is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Missing => None,
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        }
    }

    /// Grouping-key view of the cell. Numbers are rendered without a
    /// trailing `.0` so `1001` read as a number groups with `"1001"`.
    pub fn as_key(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => Some(format_number_key(*n)),
        }
    }
}

fn format_number_key(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Named rectangular dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Creates an empty table with the given header
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from rows, padding or truncating each row to the header width
    pub fn from_rows(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let mut table = Self::new(name, columns);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(row);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of a column, trying an exact match first and then a trimmed,
    /// case-insensitive comparison
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.column_index(name).or_else(|| {
            let wanted = name.trim();
            self.columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(wanted))
        })
    }

    /// First column found among `candidates`, in priority order
    pub fn find_any_column(&self, candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|name| self.find_column(name))
    }

    /// Cell at (`row`, `column`); out-of-range lookups are `Missing`
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&MISSING)
    }

    /// Mutable access used by the normalizer
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<CellValue>] {
        &mut self.rows
    }

    /// Iterates over the values of one column; an out-of-range column
    /// yields `Missing` for every row
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &CellValue> + '_ {
        (0..self.rows.len()).map(move |row| self.cell(row, column))
    }
}
