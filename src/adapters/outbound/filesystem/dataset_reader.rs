use crate::bom_analysis::domain::{CellValue, Table};
use crate::ports::outbound::DatasetReader;
use crate::shared::error::BomError;
use crate::shared::security::validate_dataset_file;
use crate::shared::Result;
use anyhow::Context;
use calamine::{open_workbook_auto, DataType, Reader};
use std::fs;
use std::path::Path;

/// Supported dataset encodings, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetFormat {
    Csv,
    Spreadsheet,
}

impl DatasetFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(DatasetFormat::Csv),
            "xlsx" | "xls" => Some(DatasetFormat::Spreadsheet),
            _ => None,
        }
    }
}

/// FileSystemDatasetReader adapter loading CSV and Excel exports
///
/// Header names are trimmed and empty cells become [`CellValue::Missing`].
/// Excel workbooks are read from their first worksheet; numeric Excel cells
/// stay numeric, everything else is kept as text.
pub struct FileSystemDatasetReader;

impl FileSystemDatasetReader {
    pub fn new() -> Self {
        Self
    }

    fn read_csv(&self, path: &Path, dataset: &str) -> Result<Table> {
        let data = fs::read(path).map_err(|e| BomError::DatasetReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_slice());

        let columns = Self::header(
            path,
            reader
                .headers()
                .map_err(|e| BomError::DatasetReadError {
                    path: path.to_path_buf(),
                    details: format!("Failed to read CSV headers: {}", e),
                })?
                .iter(),
        )?;

        let mut table = Table::new(dataset, columns);
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| BomError::DatasetReadError {
                path: path.to_path_buf(),
                // header is line 1
                details: format!("Row {}: {}", idx + 2, e),
            })?;
            table.push_row(record.iter().map(CellValue::from_raw).collect());
        }
        Ok(table)
    }

    fn read_spreadsheet(&self, path: &Path, dataset: &str) -> Result<Table> {
        let mut workbook = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| BomError::DatasetReadError {
                path: path.to_path_buf(),
                details: "No sheets found in workbook".to_string(),
            })?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .context("Failed to read worksheet")??;

        let mut rows = range.rows();
        let header_row = rows.next().ok_or_else(|| BomError::DatasetReadError {
            path: path.to_path_buf(),
            details: format!("Worksheet '{}' is empty", sheet_name),
        })?;
        let header_text: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
        let columns = Self::header(path, header_text.iter().map(String::as_str))?;

        let mut table = Table::new(dataset, columns);
        for row in rows {
            table.push_row(row.iter().map(Self::cell_from_excel).collect());
        }
        Ok(table)
    }

    fn cell_from_excel(cell: &DataType) -> CellValue {
        match cell {
            DataType::Empty => CellValue::Missing,
            DataType::Float(f) => CellValue::Number(*f),
            DataType::Int(i) => CellValue::Number(*i as f64),
            DataType::String(s) => CellValue::from_raw(s),
            other => CellValue::from_raw(&other.to_string()),
        }
    }

    /// Trims header names and rejects a header row with no names at all
    fn header<'a>(path: &Path, names: impl Iterator<Item = &'a str>) -> Result<Vec<String>> {
        let columns: Vec<String> = names
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        if columns.iter().all(|c| c.is_empty()) {
            return Err(BomError::DatasetReadError {
                path: path.to_path_buf(),
                details: "Missing header row".to_string(),
            }
            .into());
        }
        Ok(columns)
    }
}

impl Default for FileSystemDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for FileSystemDatasetReader {
    fn read_table(&self, path: &Path, dataset: &str) -> Result<Table> {
        let format = DatasetFormat::from_path(path).ok_or_else(|| BomError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        validate_dataset_file(path, dataset)?;

        let table = match format {
            DatasetFormat::Csv => self.read_csv(path, dataset)?,
            DatasetFormat::Spreadsheet => self.read_spreadsheet(path, dataset)?,
        };
        tracing::debug!(
            dataset,
            ?format,
            columns = table.columns().len(),
            rows = table.row_count(),
            "read dataset"
        );
        Ok(table)
    }
}
