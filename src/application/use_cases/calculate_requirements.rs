use crate::application::dto::{RequirementsRequest, RequirementsResponse, RequirementsStrategy};
use crate::application::use_cases::dataset_loader::load_datasets;
use crate::bom_analysis::domain::RequirementLine;
use crate::bom_analysis::services::{
    AggregationEngine, ReportMetadataGenerator, RequirementsResolver,
};
use crate::ports::outbound::{DatasetReader, ProgressReporter};
use crate::shared::error::BomError;
use crate::shared::Result;

/// CalculateRequirementsUseCase - Stock sufficiency for a production run
///
/// Runs the analysis pipeline, then the requested requirements strategy.
/// A header that cannot be resolved by the `bom` strategy is reported as a
/// warning and yields an empty requirement list.
///
/// # Type Parameters
/// * `R` - DatasetReader implementation
/// * `P` - ProgressReporter implementation
pub struct CalculateRequirementsUseCase<R, P> {
    dataset_reader: R,
    progress_reporter: P,
}

impl<R, P> CalculateRequirementsUseCase<R, P>
where
    R: DatasetReader,
    P: ProgressReporter,
{
    pub fn new(dataset_reader: R, progress_reporter: P) -> Self {
        Self {
            dataset_reader,
            progress_reporter,
        }
    }

    /// # Errors
    /// Fails on unreadable datasets and on columns the analysis itself
    /// requires. A product that matches nothing is not an error.
    pub fn execute(&self, request: RequirementsRequest) -> Result<RequirementsResponse> {
        if !request.desired_quantity.is_finite() || request.desired_quantity < 0.0 {
            return Err(BomError::InvalidArgument {
                message: format!(
                    "desired quantity must be a non-negative number, got {}",
                    request.desired_quantity
                ),
            }
            .into());
        }

        let datasets = load_datasets(
            &self.dataset_reader,
            &self.progress_reporter,
            &request.analysis,
        )?;
        let result = AggregationEngine::analyze_combined(
            &datasets.bom,
            datasets.dispensing.as_ref(),
            datasets.raw_materials.as_ref(),
        )?;

        let lines = match request.strategy {
            RequirementsStrategy::Usage => RequirementsResolver::calculate_requirements(
                &request.product_id,
                request.desired_quantity,
                &result.product_metrics,
                &result.component_usage,
                datasets.raw_materials.as_ref(),
            )?,
            RequirementsStrategy::Bom => self.custom_requirements_or_empty(
                RequirementsResolver::calculate_custom_requirements(
                    &request.product_id,
                    request.desired_quantity,
                    &datasets.bom,
                    Some(&result.component_usage),
                    &request.column_aliases,
                ),
            )?,
        };

        self.report_outcome(&request, &lines);

        Ok(RequirementsResponse::new(
            request.product_id,
            request.desired_quantity,
            request.strategy,
            lines,
            ReportMetadataGenerator::generate_default_metadata(),
        ))
    }

    /// Turns an unresolvable header into an empty result plus a warning
    fn custom_requirements_or_empty(
        &self,
        outcome: std::result::Result<Vec<RequirementLine>, BomError>,
    ) -> Result<Vec<RequirementLine>> {
        match outcome {
            Ok(lines) => Ok(lines),
            Err(BomError::Schema { details }) => {
                tracing::warn!(%details, "requirements lookup skipped");
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", details));
                Ok(Vec::new())
            }
            Err(other) => Err(other.into()),
        }
    }

    fn report_outcome(&self, request: &RequirementsRequest, lines: &[RequirementLine]) {
        if lines.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No requirement data found for product '{}'.",
                request.product_id
            ));
            return;
        }

        let short = lines.iter().filter(|line| !line.sufficient).count();
        self.progress_reporter.report_completion(&format!(
            "Resolved {} component(s) for {} x {} ({} short)",
            lines.len(),
            request.desired_quantity,
            request.product_id,
            short
        ));
    }
}
