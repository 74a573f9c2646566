use crate::bom_analysis::domain::{ComponentUsage, ProductMetrics, RequirementLine, Table};
use crate::bom_analysis::policies::{ColumnAliases, ProductMatcher};
use crate::bom_analysis::services::AggregationEngine;
use crate::shared::error::BomError;
use std::collections::{HashMap, HashSet};

type ResolverResult<T> = std::result::Result<T, BomError>;

/// RequirementsResolver service mapping a production run to component needs
///
/// Two strategies are offered:
/// - [`RequirementsResolver::calculate_requirements`] scales the average
///   per-row usage of every known component
/// - [`RequirementsResolver::calculate_custom_requirements`] reads the
///   product's own BOM rows through configurable column aliases
///
/// An unknown product yields an empty result in both cases.
pub struct RequirementsResolver;

impl RequirementsResolver {
    /// Usage-average strategy
    ///
    /// `product_id` only gates the calculation: when it names a known product
    /// every component of the usage table is returned, in usage order. Stock
    /// is the summed `SOH` of `stock` per component, or 0.
    ///
    /// # Errors
    /// Returns `BomError::MissingColumn` if `stock` lacks a component key or
    /// `SOH` column.
    pub fn calculate_requirements(
        product_id: &str,
        desired_qty: f64,
        product_metrics: &[ProductMetrics],
        usage: &[ComponentUsage],
        stock: Option<&Table>,
    ) -> ResolverResult<Vec<RequirementLine>> {
        let query = product_id.trim();
        if query.is_empty() || !product_metrics.iter().any(|m| m.fg_code.trim() == query) {
            tracing::debug!(product = product_id, "product not found in metrics");
            return Ok(Vec::new());
        }

        let stock_levels = match stock {
            Some(table) => AggregationEngine::stock_by_component(table)?,
            None => HashMap::new(),
        };

        Ok(usage
            .iter()
            .map(|record| {
                RequirementLine::new(
                    record.component.clone(),
                    None,
                    record.avg_quantity.unwrap_or(0.0),
                    desired_qty,
                    stock_levels.get(&record.component).copied().unwrap_or(0.0),
                )
            })
            .collect())
    }

    /// Direct BOM lookup strategy
    ///
    /// Rows of `bom` belonging to `product_id` are located with the
    /// [`ProductMatcher`] fallback. Each row becomes one line (first
    /// occurrence per component wins) with a missing unit quantity counted as
    /// 1. Stock comes from the `SOH` of the matching usage record. Lines are
    /// sorted by required quantity, largest first.
    ///
    /// # Errors
    /// Returns `BomError::Schema` when the assembly, component or quantity
    /// column cannot be resolved from `aliases`.
    pub fn calculate_custom_requirements(
        product_id: &str,
        desired_qty: f64,
        bom: &Table,
        usage: Option<&[ComponentUsage]>,
        aliases: &ColumnAliases,
    ) -> ResolverResult<Vec<RequirementLine>> {
        let columns = aliases.resolve(bom)?;

        let assembly_codes: Vec<Option<String>> = bom
            .column_values(columns.assembly)
            .map(|cell| cell.as_key())
            .collect();
        let Some((strategy, rows)) =
            ProductMatcher::find(assembly_codes.iter().map(|c| c.as_deref()), product_id)
        else {
            tracing::debug!(product = product_id, "no BOM rows matched");
            return Ok(Vec::new());
        };
        tracing::debug!(
            product = product_id,
            strategy = ?strategy,
            rows = rows.len(),
            "matched BOM rows"
        );

        let stock_levels: HashMap<&str, f64> = usage
            .unwrap_or_default()
            .iter()
            .filter_map(|u| u.soh.map(|soh| (u.component.as_str(), soh)))
            .collect();

        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for row in rows {
            let Some(component) = bom.cell(row, columns.component).as_key() else {
                continue;
            };
            if !seen.insert(component.clone()) {
                continue;
            }
            let unit_qty = bom.cell(row, columns.quantity).as_f64().unwrap_or(1.0);
            let description = columns
                .description
                .and_then(|col| bom.cell(row, col).as_key());
            let stock = stock_levels.get(component.as_str()).copied().unwrap_or(0.0);
            lines.push(RequirementLine::new(
                component,
                description,
                unit_qty,
                desired_qty,
                stock,
            ));
        }

        lines.sort_by(|a, b| b.required_quantity.total_cmp(&a.required_quantity));
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_analysis::domain::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|c| c.to_string()).collect()
    }

    fn bom() -> Table {
        Table::from_rows(
            "BOM",
            cols(&["FG Code", "L2 Code", "L2 Unit Qty", "L2 CostInBOM", "Description"]),
            vec![
                vec![text("P1"), text("C1"), num(2.0), num(5.0), text("Bolt")],
                vec![text("P1"), text("C2"), num(3.0), num(7.0), text("Nut")],
                vec![text("P2"), text("C1"), num(1.0), num(5.0), CellValue::Missing],
            ],
        )
    }

    fn usage(component: &str, avg_quantity: Option<f64>, soh: Option<f64>) -> ComponentUsage {
        ComponentUsage {
            component: component.to_string(),
            used_in_products: 1,
            avg_cost: None,
            avg_quantity,
            dispensed_qty: None,
            dispensed_value: None,
            soh,
        }
    }

    fn metrics(fg_code: &str) -> ProductMetrics {
        ProductMetrics {
            fg_code: fg_code.to_string(),
            total_cost: 0.0,
            component_count: 0,
            total_component_cost: 0.0,
            total_l2_unit_qty: 0.0,
            total_l3_unit_qty: 0.0,
            min_qty_to_produce: None,
            max_qty_to_produce: None,
        }
    }

    #[test]
    fn test_custom_requirements_sorted_by_required_quantity() {
        let stock = vec![usage("C1", None, Some(25.0)), usage("C2", None, Some(10.0))];
        let lines = RequirementsResolver::calculate_custom_requirements(
            "P1",
            10.0,
            &bom(),
            Some(&stock),
            &ColumnAliases::default(),
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].component, "C2");
        assert_eq!(lines[0].required_quantity, 30.0);
        assert!(!lines[0].sufficient);
        assert_eq!(lines[0].description.as_deref(), Some("Nut"));
        assert_eq!(lines[1].component, "C1");
        assert_eq!(lines[1].required_quantity, 20.0);
        assert!(lines[1].sufficient);
    }

    #[test]
    fn test_custom_requirements_case_and_whitespace_fallback() {
        let lines = RequirementsResolver::calculate_custom_requirements(
            "  p1 ",
            1.0,
            &bom(),
            None,
            &ColumnAliases::default(),
        )
        .unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.stock_quantity == 0.0));
    }

    #[test]
    fn test_custom_requirements_unknown_product_is_empty() {
        let lines = RequirementsResolver::calculate_custom_requirements(
            "ZZZ",
            5.0,
            &bom(),
            None,
            &ColumnAliases::default(),
        )
        .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_custom_requirements_deduplicates_components() {
        let table = Table::from_rows(
            "BOM",
            cols(&["Assembly Code", "Component", "Quantity"]),
            vec![
                vec![text("A1"), text("X"), num(2.0)],
                vec![text("A1"), text("X"), num(9.0)],
                vec![text("A1"), CellValue::Missing, num(4.0)],
                vec![text("A1"), text("Y"), CellValue::Missing],
            ],
        );
        let lines = RequirementsResolver::calculate_custom_requirements(
            "A1",
            3.0,
            &table,
            None,
            &ColumnAliases::default(),
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].component, "X");
        assert_eq!(lines[0].required_quantity, 6.0);
        // missing unit quantity counts as one
        assert_eq!(lines[1].component, "Y");
        assert_eq!(lines[1].required_quantity, 3.0);
    }

    #[test]
    fn test_custom_requirements_unresolvable_columns() {
        let table = Table::new("BOM", cols(&["Foo", "Bar"]));
        let err = RequirementsResolver::calculate_custom_requirements(
            "P1",
            1.0,
            &table,
            None,
            &ColumnAliases::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BomError::Schema { .. }));
    }

    #[test]
    fn test_usage_requirements_cover_every_component() {
        let usage = vec![usage("C1", Some(2.0), None), usage("C9", None, None)];
        let stock = Table::from_rows(
            "Raw Materials",
            cols(&["TRIMcode", "SOH"]),
            vec![vec![text("C1"), num(15.0)], vec![text("C1"), num(10.0)]],
        );
        let lines = RequirementsResolver::calculate_requirements(
            "P1",
            10.0,
            &[metrics("P1")],
            &usage,
            Some(&stock),
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].component, "C1");
        assert_eq!(lines[0].required_quantity, 20.0);
        assert_eq!(lines[0].stock_quantity, 25.0);
        assert!(lines[0].sufficient);
        assert_eq!(lines[1].component, "C9");
        assert_eq!(lines[1].required_quantity, 0.0);
        assert!(lines[1].sufficient);
    }

    #[test]
    fn test_usage_requirements_unknown_product_is_empty() {
        let usage = vec![usage("C1", Some(2.0), None)];
        let lines =
            RequirementsResolver::calculate_requirements("P2", 10.0, &[metrics("P1")], &usage, None)
                .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_usage_requirements_without_stock() {
        let usage = vec![usage("C1", Some(1.5), Some(100.0))];
        let lines = RequirementsResolver::calculate_requirements(
            " P1 ",
            2.0,
            &[metrics("P1")],
            &usage,
            None,
        )
        .unwrap();
        assert_eq!(lines[0].stock_quantity, 0.0);
        assert!(!lines[0].sufficient);
    }
}
