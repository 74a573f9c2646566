use crate::bom_analysis::services::InsightOptions;
use std::path::PathBuf;

/// AnalysisRequest - Input of the BOM analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// BOM partition holding products A to L
    pub bom_a_l: PathBuf,
    /// BOM partition holding products M to Z
    pub bom_m_z: PathBuf,
    /// Optional dispensing feed (`Qty`, `Value` per component)
    pub dispensing: Option<PathBuf>,
    /// Optional raw-materials feed (`SOH` per component)
    pub raw_materials: Option<PathBuf>,
    pub insight_options: InsightOptions,
}

impl AnalysisRequest {
    pub fn new(bom_a_l: PathBuf, bom_m_z: PathBuf) -> Self {
        Self {
            bom_a_l,
            bom_m_z,
            dispensing: None,
            raw_materials: None,
            insight_options: InsightOptions::default(),
        }
    }

    pub fn with_dispensing(mut self, path: Option<PathBuf>) -> Self {
        self.dispensing = path;
        self
    }

    pub fn with_raw_materials(mut self, path: Option<PathBuf>) -> Self {
        self.raw_materials = path;
        self
    }

    pub fn with_insight_options(mut self, options: InsightOptions) -> Self {
        self.insight_options = options;
        self
    }

    /// Number of files the request will load
    pub fn dataset_count(&self) -> usize {
        2 + usize::from(self.dispensing.is_some()) + usize::from(self.raw_materials.is_some())
    }
}
