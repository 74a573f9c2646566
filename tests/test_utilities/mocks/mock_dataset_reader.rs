use bom_analyzer::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DatasetReader serving in-memory tables keyed by path
#[derive(Default, Clone)]
pub struct MockDatasetReader {
    tables: HashMap<PathBuf, (Vec<String>, Vec<Vec<CellValue>>)>,
}

impl MockDatasetReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table whose cells are parsed the way a CSV field would be
    pub fn with_table(mut self, path: &str, columns: &[&str], rows: &[&[&str]]) -> Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| CellValue::from_raw(cell)).collect())
            .collect();
        self.tables.insert(PathBuf::from(path), (columns, rows));
        self
    }
}

impl DatasetReader for MockDatasetReader {
    fn read_table(&self, path: &Path, dataset: &str) -> Result<Table> {
        let (columns, rows) = self
            .tables
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Dataset file not found: {}", path.display()))?;
        Ok(Table::from_rows(dataset, columns.clone(), rows.clone()))
    }
}
