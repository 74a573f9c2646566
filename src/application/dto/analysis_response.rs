use crate::bom_analysis::domain::{AnalysisResult, ReportMetadata};
use serde::Serialize;

/// AnalysisResponse - Output of the BOM analysis use case
///
/// Formatters and the sheet exporter only read from it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub metadata: ReportMetadata,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub insights: Vec<String>,
}

impl AnalysisResponse {
    pub fn new(result: AnalysisResult, insights: Vec<String>, metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            result,
            insights,
        }
    }
}
