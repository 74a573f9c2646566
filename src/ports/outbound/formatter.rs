use crate::application::dto::{AnalysisResponse, RequirementsResponse};
use crate::shared::Result;

/// ReportFormatter port for rendering use case responses
///
/// This port abstracts the formatting logic for the different report
/// formats (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats an analysis report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_analysis(&self, response: &AnalysisResponse) -> Result<String>;

    /// Formats a requirements report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_requirements(&self, response: &RequirementsResponse) -> Result<String>;
}
