use crate::bom_analysis::domain::{CellValue, Table};

/// RowNormalizer service for coercing designated numeric columns
///
/// Feeds exported from spreadsheets carry blanks, text placeholders and the
/// occasional negative correction in quantity and cost columns. After
/// normalization every present cell of a designated column is a non-negative
/// `CellValue::Number`; anything unparsable becomes `0.0`. Blank cells stay
/// `CellValue::Missing` so aggregations can skip them.
pub struct RowNormalizer;

impl RowNormalizer {
    /// Normalizes the designated numeric columns that exist in `table`
    ///
    /// Columns listed in `numeric_columns` but absent from the table are ignored.
    pub fn normalize(mut table: Table, numeric_columns: &[&str]) -> Table {
        let mut indices: Vec<usize> = numeric_columns
            .iter()
            .filter_map(|name| table.find_column(name))
            .collect();
        indices.sort_unstable();
        indices.dedup();

        if indices.is_empty() {
            return table;
        }

        let mut coerced = 0usize;
        for row in table.rows_mut() {
            for &idx in &indices {
                if row[idx].is_missing() {
                    continue;
                }
                let value = Self::coerce(&row[idx]);
                if !matches!(row[idx], CellValue::Number(n) if n == value) {
                    coerced += 1;
                }
                row[idx] = CellValue::Number(value);
            }
        }

        tracing::debug!(
            dataset = table.name(),
            columns = indices.len(),
            cells = coerced,
            "normalized numeric columns"
        );
        table
    }

    fn coerce(cell: &CellValue) -> f64 {
        match cell.as_f64() {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => 0.0,
        }
    }
}
