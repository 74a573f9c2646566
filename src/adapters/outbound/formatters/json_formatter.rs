use crate::application::dto::{AnalysisResponse, RequirementsResponse};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter rendering responses as pretty-printed JSON
///
/// Field names follow the serde derives on the domain types: snake_case,
/// except `TOTCOST`, `SOH`, `MIN_QTY_TO_PRODUCE` and `MAX_QTY_TO_PRODUCE`
/// which keep their dataset spelling. Absent values are `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_analysis(&self, response: &AnalysisResponse) -> Result<String> {
        serde_json::to_string_pretty(response).context("Failed to serialize analysis report")
    }

    fn format_requirements(&self, response: &RequirementsResponse) -> Result<String> {
        serde_json::to_string_pretty(response).context("Failed to serialize requirements report")
    }
}
