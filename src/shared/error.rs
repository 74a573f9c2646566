use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems and planning scripts to distinguish between
/// a clean run, a detected stock shortage and a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed, or requirements fully covered by stock
    Success = 0,
    /// At least one component is short and shortage checking was requested
    ShortageDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, schema, missing column, config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ShortageDetected => write!(f, "Shortage Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint-style messages consistent across the tool.
#[derive(Debug, Error)]
pub enum BomError {
    /// A required grouping or join key is absent from a dataset.
    /// Aborts the whole analysis; no partial aggregates are returned.
    #[error("Required column '{column}' is missing from the {dataset} dataset\n\n💡 Hint: Check the header row of the {dataset} file")]
    MissingColumn { dataset: String, column: String },

    /// The dataset layout cannot be interpreted (no key columns, or no
    /// alias matched a required logical column).
    #[error("Schema error: {details}\n\n💡 Hint: Rename the columns or add aliases under 'column_aliases' in the config file")]
    Schema { details: String },

    #[error("Failed to read dataset: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and is a valid CSV or XLSX file")]
    DatasetReadError { path: PathBuf, details: String },

    #[error("Unsupported dataset format: {path}\n\n💡 Hint: Supported extensions are .csv, .xlsx and .xls")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl BomError {
    pub fn missing_column(dataset: impl Into<String>, column: impl Into<String>) -> Self {
        BomError::MissingColumn {
            dataset: dataset.into(),
            column: column.into(),
        }
    }

    pub fn schema(details: impl Into<String>) -> Self {
        BomError::Schema {
            details: details.into(),
        }
    }
}
