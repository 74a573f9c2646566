/// Outbound adapters - dataset ingestion, report rendering and console output
pub mod console;
pub mod filesystem;
pub mod formatters;
