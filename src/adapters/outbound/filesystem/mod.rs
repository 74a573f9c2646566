/// Filesystem adapters for file I/O operations
mod dataset_reader;
mod file_writer;
mod sheet_exporter;

pub use dataset_reader::FileSystemDatasetReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use sheet_exporter::{
    SheetExporter, COMPONENT_USAGE_SHEET, COST_DISTRIBUTION_SHEET, PRODUCT_COMPLEXITY_SHEET,
    PRODUCT_METRICS_SHEET,
};
