use crate::bom_analysis::domain::bom_columns::{BOM_COLUMN_ALIAS_GROUPS, BOM_KEY_COLUMNS};
use crate::bom_analysis::domain::{CellValue, Table};
use crate::shared::error::BomError;

/// Name given to the concatenated BOM table
pub const COMBINED_BOM: &str = "BOM";

/// BomCombiner service joining the A-L and M-Z BOM partitions
///
/// The result holds every row of `first` followed by every row of `second`,
/// over the union of both headers (first-table order, then new columns of
/// the second table). Headers of the second partition that differ only in
/// case or surrounding whitespace, or that are another spelling from
/// [`BOM_COLUMN_ALIAS_GROUPS`], land in the existing column. No
/// deduplication happens here: repeated `FG Code`/`L2 Code` pairs are
/// aggregated together downstream.
pub struct BomCombiner;

impl BomCombiner {
    /// Concatenates two BOM partitions
    ///
    /// # Errors
    /// Returns `BomError::Schema` when neither partition carries any of the
    /// key columns (`FG Code`, `L2 Code`).
    pub fn combine(first: &Table, second: &Table) -> std::result::Result<Table, BomError> {
        let has_key = |t: &Table| BOM_KEY_COLUMNS.iter().any(|k| t.find_column(k).is_some());
        if !has_key(first) && !has_key(second) {
            return Err(BomError::schema(format!(
                "neither '{}' nor '{}' contains any of the key columns: {}",
                first.name(),
                second.name(),
                BOM_KEY_COLUMNS.join(", ")
            )));
        }

        let mut columns: Vec<String> = first.columns().to_vec();
        let first_targets: Vec<usize> = (0..columns.len()).collect();
        let second_targets: Vec<usize> = second
            .columns()
            .iter()
            .map(|col| {
                Self::matching_column(&columns, col).unwrap_or_else(|| {
                    columns.push(col.clone());
                    columns.len() - 1
                })
            })
            .collect();

        let width = columns.len();
        let mut combined = Table::new(COMBINED_BOM, columns);
        for (source, targets) in [(first, &first_targets), (second, &second_targets)] {
            for row in source.rows() {
                let mut mapped = vec![CellValue::Missing; width];
                for (cell, &target) in row.iter().zip(targets) {
                    // several source spellings may feed one column; first present value wins
                    if mapped[target].is_missing() {
                        mapped[target] = cell.clone();
                    }
                }
                combined.push_row(mapped);
            }
        }

        tracing::debug!(
            first_rows = first.row_count(),
            second_rows = second.row_count(),
            columns = combined.columns().len(),
            "combined BOM partitions"
        );
        Ok(combined)
    }

    /// Index of the column in `columns` that `name` should be merged into
    fn matching_column(columns: &[String], name: &str) -> Option<usize> {
        let same = |a: &str, b: &str| a.trim().eq_ignore_ascii_case(b.trim());
        if let Some(idx) = columns
            .iter()
            .position(|c| c == name)
            .or_else(|| columns.iter().position(|c| same(c, name)))
        {
            return Some(idx);
        }
        let group = BOM_COLUMN_ALIAS_GROUPS
            .iter()
            .find(|group| group.iter().any(|alias| same(alias, name)))?;
        columns
            .iter()
            .position(|c| group.iter().any(|alias| same(alias, c)))
    }
}
