use crate::application::dto::RequirementsStrategy;
use crate::bom_analysis::domain::{ReportMetadata, RequirementLine};
use serde::Serialize;

/// RequirementsResponse - Output of the requirements use case
#[derive(Debug, Clone, Serialize)]
pub struct RequirementsResponse {
    pub metadata: ReportMetadata,
    pub product_id: String,
    pub desired_quantity: f64,
    pub strategy: RequirementsStrategy,
    pub requirements: Vec<RequirementLine>,
    /// Whether at least one line lacks sufficient stock.
    /// Used to determine exit code for CI integration
    pub has_shortage: bool,
}

impl RequirementsResponse {
    pub fn new(
        product_id: String,
        desired_quantity: f64,
        strategy: RequirementsStrategy,
        requirements: Vec<RequirementLine>,
        metadata: ReportMetadata,
    ) -> Self {
        let has_shortage = requirements.iter().any(|line| !line.sufficient);
        Self {
            metadata,
            product_id,
            desired_quantity,
            strategy,
            requirements,
            has_shortage,
        }
    }
}
