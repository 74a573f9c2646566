use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::application::use_cases::dataset_loader::load_datasets;
use crate::bom_analysis::services::{AggregationEngine, InsightGenerator, ReportMetadataGenerator};
use crate::ports::outbound::{DatasetReader, ProgressReporter};
use crate::shared::Result;

/// AnalyzeBomUseCase - Core use case for BOM analysis
///
/// Loads the BOM partitions and optional feeds, aggregates them and derives
/// the textual insights.
///
/// # Type Parameters
/// * `R` - DatasetReader implementation
/// * `P` - ProgressReporter implementation
pub struct AnalyzeBomUseCase<R, P> {
    dataset_reader: R,
    progress_reporter: P,
}

impl<R, P> AnalyzeBomUseCase<R, P>
where
    R: DatasetReader,
    P: ProgressReporter,
{
    /// Creates a new AnalyzeBomUseCase with injected dependencies
    pub fn new(dataset_reader: R, progress_reporter: P) -> Self {
        Self {
            dataset_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Fails if a dataset cannot be read, the partitions share no key column,
    /// or a required column is missing. No partial result is returned.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Read, normalize and combine the datasets
        self.progress_reporter.report(&format!(
            "📖 Loading {} dataset(s)...",
            request.dataset_count()
        ));
        let datasets = load_datasets(&self.dataset_reader, &self.progress_reporter, &request)?;

        // Step 2: Aggregate
        let result = AggregationEngine::analyze_combined(
            &datasets.bom,
            datasets.dispensing.as_ref(),
            datasets.raw_materials.as_ref(),
        )?;

        // Step 3: Insights and metadata
        let insights = InsightGenerator::generate(&result, &request.insight_options);
        let metadata = ReportMetadataGenerator::generate_default_metadata();

        self.progress_reporter.report_completion(&format!(
            "Analyzed {} product(s) and {} component(s)",
            result.product_metrics.len(),
            result.component_usage.len()
        ));

        Ok(AnalysisResponse::new(result, insights, metadata))
    }
}
