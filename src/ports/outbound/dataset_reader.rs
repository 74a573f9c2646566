use crate::bom_analysis::domain::Table;
use crate::shared::Result;
use std::path::Path;

/// DatasetReader port for loading tabular input
///
/// This port abstracts the file system operations needed to turn a
/// spreadsheet export into a [`Table`].
pub trait DatasetReader {
    /// Reads the dataset at `path`
    ///
    /// # Arguments
    /// * `path` - Location of the dataset file
    /// * `dataset` - Logical name given to the resulting table (e.g. "BOM (A-L)")
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The format is not supported
    /// - The file has no header row or cannot be parsed
    fn read_table(&self, path: &Path, dataset: &str) -> Result<Table>;
}
