//! bom-analyzer - bill-of-materials analysis tool
//!
//! This library aggregates partitioned BOM exports and their dispensing and
//! raw-materials feeds into product metrics, complexity scores, component
//! usage statistics and stock-sufficiency reports, following hexagonal
//! architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_analysis`): Tables, aggregation and requirements logic
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_analyzer::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = CalculateRequirementsUseCase::new(
//!     FileSystemDatasetReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let analysis = AnalysisRequest::new(PathBuf::from("bom_a_l.csv"), PathBuf::from("bom_m_z.csv"))
//!     .with_raw_materials(Some(PathBuf::from("raw_materials.csv")));
//! let request = RequirementsRequest::new(analysis, "P1".to_string(), 10.0);
//! let response = use_case.execute(request)?;
//!
//! let output = MarkdownFormatter::new().format_requirements(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_analysis;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDatasetReader, FileSystemWriter, SheetExporter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, OutputFormat, RequirementsRequest,
        RequirementsResponse, RequirementsStrategy,
    };
    pub use crate::application::use_cases::{AnalyzeBomUseCase, CalculateRequirementsUseCase};
    pub use crate::bom_analysis::domain::{
        AnalysisResult, CellValue, ComponentUsage, CostDistribution, ProductComplexity,
        ProductMetrics, ReportMetadata, RequirementLine, Table,
    };
    pub use crate::bom_analysis::policies::{ColumnAliases, MatchStrategy, ProductMatcher};
    pub use crate::bom_analysis::services::{
        AggregationEngine, BomCombiner, InsightGenerator, InsightOptions, RequirementsResolver,
        RowNormalizer,
    };
    pub use crate::ports::outbound::{
        DatasetReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{BomError, ExitCode};
    pub use crate::shared::Result;
}
