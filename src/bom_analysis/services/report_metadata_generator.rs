use crate::bom_analysis::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Name written into report metadata and the export headers
pub const TOOL_NAME: &str = "bom-analyzer";

/// ReportMetadataGenerator service stamping reports with provenance
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates metadata for this build of bom-analyzer
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
