pub mod analysis_result;
pub mod bom_columns;
pub mod report_metadata;
pub mod requirement_line;
pub mod table;

pub use analysis_result::{
    AnalysisResult, ComponentUsage, CostDistribution, CostPercentiles, ProductComplexity,
    ProductMetrics,
};
pub use report_metadata::ReportMetadata;
pub use requirement_line::RequirementLine;
pub use table::{CellValue, Table};
