use crate::application::dto::AnalysisRequest;
use crate::bom_analysis::domain::bom_columns::{
    BOM_NUMERIC_COLUMNS, DISPENSING_NUMERIC_COLUMNS, RAW_MATERIALS_NUMERIC_COLUMNS,
};
use crate::bom_analysis::domain::Table;
use crate::bom_analysis::services::{BomCombiner, RowNormalizer};
use crate::ports::outbound::{DatasetReader, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

pub(crate) const BOM_A_L: &str = "BOM (A-L)";
pub(crate) const BOM_M_Z: &str = "BOM (M-Z)";
pub(crate) const DISPENSING: &str = "Dispensing";
pub(crate) const RAW_MATERIALS: &str = "Raw Materials";

/// Normalized inputs of one analysis, with the BOM partitions combined
pub(crate) struct LoadedDatasets {
    pub bom: Table,
    pub dispensing: Option<Table>,
    pub raw_materials: Option<Table>,
}

/// Reads, normalizes and combines every dataset named by `request`,
/// reporting progress after each file
pub(crate) fn load_datasets<R, P>(
    reader: &R,
    reporter: &P,
    request: &AnalysisRequest,
) -> Result<LoadedDatasets>
where
    R: DatasetReader,
    P: ProgressReporter,
{
    let total = request.dataset_count();
    let mut loaded = 0;
    let mut load = |path: &Path, dataset: &str, numeric: &[&str]| -> Result<Table> {
        let table = RowNormalizer::normalize(reader.read_table(path, dataset)?, numeric);
        loaded += 1;
        reporter.report_progress(loaded, total, Some(dataset));
        tracing::debug!(
            dataset,
            path = %path.display(),
            rows = table.row_count(),
            "dataset loaded"
        );
        Ok(table)
    };

    let bom_a_l = load(&request.bom_a_l, BOM_A_L, BOM_NUMERIC_COLUMNS)?;
    let bom_m_z = load(&request.bom_m_z, BOM_M_Z, BOM_NUMERIC_COLUMNS)?;
    let dispensing = request
        .dispensing
        .as_deref()
        .map(|path| load(path, DISPENSING, DISPENSING_NUMERIC_COLUMNS))
        .transpose()?;
    let raw_materials = request
        .raw_materials
        .as_deref()
        .map(|path| load(path, RAW_MATERIALS, RAW_MATERIALS_NUMERIC_COLUMNS))
        .transpose()?;

    let bom = BomCombiner::combine(&bom_a_l, &bom_m_z)?;
    reporter.report(&format!(
        "🔗 Combined BOM: {} row(s) from {} + {}",
        bom.row_count(),
        bom_a_l.row_count(),
        bom_m_z.row_count()
    ));

    Ok(LoadedDatasets {
        bom,
        dispensing,
        raw_materials,
    })
}
