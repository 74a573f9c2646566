use crate::bom_analysis::domain::AnalysisResult;
use crate::shared::error::BomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PRODUCT_METRICS_SHEET: &str = "product_metrics.csv";
pub const PRODUCT_COMPLEXITY_SHEET: &str = "product_complexity.csv";
pub const COMPONENT_USAGE_SHEET: &str = "component_usage.csv";
pub const COST_DISTRIBUTION_SHEET: &str = "cost_distribution.csv";

#[derive(Serialize)]
struct MetricRow<'a> {
    #[serde(rename = "Metric")]
    metric: &'a str,
    #[serde(rename = "Value")]
    value: Option<f64>,
}

/// SheetExporter adapter writing one CSV sheet per analysis artifact
///
/// Absent values become empty cells. Sheets are re-readable through
/// [`super::FileSystemDatasetReader`].
pub struct SheetExporter {
    directory: PathBuf,
}

impl SheetExporter {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Writes every sheet, creating the directory if needed
    ///
    /// # Returns
    /// Paths of the written sheets, in a fixed order
    pub fn export(&self, result: &AnalysisResult) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.directory).map_err(|e| BomError::FileWriteError {
            path: self.directory.clone(),
            details: format!("Failed to create export directory: {}", e),
        })?;

        let dist = &result.cost_distribution;
        let percentiles = dist.cost_percentiles;
        let distribution = [
            MetricRow { metric: "total_bom_cost", value: Some(dist.total_bom_cost) },
            MetricRow { metric: "avg_product_cost", value: dist.avg_product_cost },
            MetricRow { metric: "p25", value: percentiles.map(|p| p.p25) },
            MetricRow { metric: "p50", value: percentiles.map(|p| p.p50) },
            MetricRow { metric: "p75", value: percentiles.map(|p| p.p75) },
        ];

        let written = vec![
            self.write_sheet(PRODUCT_METRICS_SHEET, &result.product_metrics)?,
            self.write_sheet(PRODUCT_COMPLEXITY_SHEET, &result.product_complexity)?,
            self.write_sheet(COMPONENT_USAGE_SHEET, &result.component_usage)?,
            self.write_sheet(COST_DISTRIBUTION_SHEET, &distribution)?,
        ];
        tracing::debug!(directory = %self.directory.display(), sheets = written.len(), "exported sheets");
        Ok(written)
    }

    fn write_sheet<T: Serialize>(&self, file_name: &str, records: &[T]) -> Result<PathBuf> {
        let path = self.directory.join(file_name);
        validate_not_symlink(&path)?;

        let write_error = |details: String| BomError::FileWriteError {
            path: path.clone(),
            details,
        };
        let mut writer = csv::Writer::from_path(&path).map_err(|e| write_error(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| write_error(e.to_string()))?;
        }
        writer.flush().map_err(|e| write_error(e.to_string()))?;
        Ok(path)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
