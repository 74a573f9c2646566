mod aggregation_engine;
mod bom_combiner;
mod insight_generator;
mod report_metadata_generator;
mod requirements_resolver;
mod row_normalizer;

pub use aggregation_engine::AggregationEngine;
pub use bom_combiner::{BomCombiner, COMBINED_BOM};
pub use insight_generator::{
    InsightGenerator, InsightOptions, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TOP_N,
};
pub use report_metadata_generator::{ReportMetadataGenerator, TOOL_NAME};
pub use requirements_resolver::RequirementsResolver;
pub use row_normalizer::RowNormalizer;
