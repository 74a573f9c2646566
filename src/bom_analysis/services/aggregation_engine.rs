use crate::bom_analysis::domain::bom_columns::{
    DISPENSED_QTY, DISPENSED_VALUE, FEED_COMPONENT_ALIASES, FG_CODE, L2_CODE, L2_COST_IN_BOM,
    L2_UNIT_QTY_ALIASES, L3_CODE, L3_UNIT_QTY, L4_CODE, SOH, TOTCOST,
};
use crate::bom_analysis::domain::{
    AnalysisResult, ComponentUsage, CostDistribution, CostPercentiles, ProductComplexity,
    ProductMetrics, Table,
};
use crate::bom_analysis::services::BomCombiner;
use crate::shared::error::BomError;
use std::collections::{BTreeMap, HashMap, HashSet};

type EngineResult<T> = std::result::Result<T, BomError>;

/// Column positions of the combined BOM used by the aggregations
///
/// `FG Code`, `L2 Code` and `TOTCOST` are required. The remaining columns
/// are optional and behave as all-missing when absent.
#[derive(Debug, Clone, Copy)]
struct BomLayout {
    fg_code: usize,
    l2_code: usize,
    totcost: usize,
    l3_code: Option<usize>,
    l4_code: Option<usize>,
    l2_cost: Option<usize>,
    l2_qty: Option<usize>,
    l3_qty: Option<usize>,
}

impl BomLayout {
    fn resolve(bom: &Table) -> EngineResult<Self> {
        let required = |name: &str| {
            bom.find_column(name)
                .ok_or_else(|| BomError::missing_column(bom.name(), name))
        };
        Ok(Self {
            fg_code: required(FG_CODE)?,
            l2_code: required(L2_CODE)?,
            totcost: required(TOTCOST)?,
            l3_code: bom.find_column(L3_CODE),
            l4_code: bom.find_column(L4_CODE),
            l2_cost: bom.find_column(L2_COST_IN_BOM),
            l2_qty: bom.find_any_column(L2_UNIT_QTY_ALIASES),
            l3_qty: bom.find_column(L3_UNIT_QTY),
        })
    }
}

/// Running aggregates for one `FG Code` group
#[derive(Default)]
struct ProductAccumulator {
    total_cost: f64,
    component_count: usize,
    total_component_cost: f64,
    l2_qty_sum: f64,
    l3_qty_sum: f64,
    l2_qty_range: Option<(f64, f64)>,
    l3_qty_range: Option<(f64, f64)>,
    // a missing L2 code counts as one distinct value
    l2_codes: HashSet<Option<String>>,
    l3_codes: HashSet<String>,
    l4_codes: HashSet<String>,
}

/// Running aggregates for one `L2 Code` group
#[derive(Default)]
struct UsageAccumulator {
    products: HashSet<String>,
    cost_sum: f64,
    cost_count: usize,
    qty_sum: f64,
    qty_count: usize,
}

fn extend_range(range: Option<(f64, f64)>, value: f64) -> Option<(f64, f64)> {
    Some(match range {
        None => (value, value),
        Some((lo, hi)) => (lo.min(value), hi.max(value)),
    })
}

fn merge_optional(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(pick(x, y)),
        (x, None) => x,
        (None, y) => y,
    }
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Linear interpolation between closest ranks over ascending `sorted` values
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
}

/// AggregationEngine service turning BOM line items into analysis artifacts
///
/// Every operation is a pure function of its input tables. Grouping skips
/// rows whose grouping key is missing, and groups are visited in ascending
/// key order so results are deterministic.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Runs the full analysis: combine, product metrics, component usage
    /// (enriched with the optional feeds) and cost distribution
    ///
    /// # Errors
    /// Fails without partial results if the partitions cannot be combined or a
    /// required column is absent from the BOM or a supplied feed.
    pub fn analyze(
        bom_a_l: &Table,
        bom_m_z: &Table,
        dispensing: Option<&Table>,
        raw_materials: Option<&Table>,
    ) -> EngineResult<AnalysisResult> {
        let combined = BomCombiner::combine(bom_a_l, bom_m_z)?;
        Self::analyze_combined(&combined, dispensing, raw_materials)
    }

    /// Same as [`AggregationEngine::analyze`] for an already combined BOM
    pub fn analyze_combined(
        bom: &Table,
        dispensing: Option<&Table>,
        raw_materials: Option<&Table>,
    ) -> EngineResult<AnalysisResult> {
        let (product_metrics, product_complexity) = Self::compute_product_metrics(bom)?;
        let mut component_usage = Self::compute_component_usage(bom)?;
        if let Some(dispensing) = dispensing {
            Self::enrich_with_dispensing(&mut component_usage, dispensing)?;
        }
        if let Some(raw_materials) = raw_materials {
            Self::enrich_with_stock(&mut component_usage, raw_materials)?;
        }
        let cost_distribution = Self::compute_cost_distribution(bom)?;

        tracing::debug!(
            products = product_metrics.len(),
            components = component_usage.len(),
            "aggregation complete"
        );

        Ok(AnalysisResult {
            product_metrics,
            product_complexity,
            component_usage,
            cost_distribution,
        })
    }

    /// Groups the BOM by `FG Code` into per-product metrics and complexity
    /// scores
    ///
    /// # Returns
    /// Product metrics in ascending `FG Code` order, and complexity scores
    /// sorted descending (ties keep ascending key order)
    pub fn compute_product_metrics(
        bom: &Table,
    ) -> EngineResult<(Vec<ProductMetrics>, Vec<ProductComplexity>)> {
        let layout = BomLayout::resolve(bom)?;
        let mut groups: BTreeMap<String, ProductAccumulator> = BTreeMap::new();

        for row in 0..bom.row_count() {
            let Some(fg_code) = bom.cell(row, layout.fg_code).as_key() else {
                continue;
            };
            let acc = groups.entry(fg_code).or_default();
            let value = |col: Option<usize>| col.and_then(|c| bom.cell(row, c).as_f64());

            acc.total_cost += value(Some(layout.totcost)).unwrap_or(0.0);
            acc.total_component_cost += value(layout.l2_cost).unwrap_or(0.0);

            let l2_code = bom.cell(row, layout.l2_code).as_key();
            if l2_code.is_some() {
                acc.component_count += 1;
            }
            acc.l2_codes.insert(l2_code);

            if let Some(qty) = value(layout.l2_qty) {
                acc.l2_qty_sum += qty;
                acc.l2_qty_range = extend_range(acc.l2_qty_range, qty);
            }
            if let Some(qty) = value(layout.l3_qty) {
                acc.l3_qty_sum += qty;
                acc.l3_qty_range = extend_range(acc.l3_qty_range, qty);
            }
            if let Some(code) = layout.l3_code.and_then(|c| bom.cell(row, c).as_key()) {
                acc.l3_codes.insert(code);
            }
            if let Some(code) = layout.l4_code.and_then(|c| bom.cell(row, c).as_key()) {
                acc.l4_codes.insert(code);
            }
        }

        let mut metrics = Vec::with_capacity(groups.len());
        let mut complexity = Vec::with_capacity(groups.len());
        for (fg_code, acc) in groups {
            let l2_min = acc.l2_qty_range.map(|(lo, _)| lo);
            let l2_max = acc.l2_qty_range.map(|(_, hi)| hi);
            let l3_min = acc.l3_qty_range.map(|(lo, _)| lo);
            let l3_max = acc.l3_qty_range.map(|(_, hi)| hi);

            complexity.push(ProductComplexity {
                fg_code: fg_code.clone(),
                score: acc.l2_codes.len() + acc.l3_codes.len() + acc.l4_codes.len(),
            });
            metrics.push(ProductMetrics {
                fg_code,
                total_cost: acc.total_cost,
                component_count: acc.component_count,
                total_component_cost: acc.total_component_cost,
                total_l2_unit_qty: acc.l2_qty_sum,
                total_l3_unit_qty: acc.l3_qty_sum,
                min_qty_to_produce: merge_optional(l2_min, l3_min, f64::min),
                max_qty_to_produce: merge_optional(l2_max, l3_max, f64::max),
            });
        }

        // stable: equal scores stay in ascending FG Code order
        complexity.sort_by(|a, b| b.score.cmp(&a.score));

        Ok((metrics, complexity))
    }

    /// Groups the BOM by `L2 Code` into usage statistics, most widely used
    /// components first (ties in ascending component order)
    pub fn compute_component_usage(bom: &Table) -> EngineResult<Vec<ComponentUsage>> {
        let layout = BomLayout::resolve(bom)?;
        let mut groups: BTreeMap<String, UsageAccumulator> = BTreeMap::new();

        for row in 0..bom.row_count() {
            let Some(component) = bom.cell(row, layout.l2_code).as_key() else {
                continue;
            };
            let acc = groups.entry(component).or_default();

            if let Some(fg_code) = bom.cell(row, layout.fg_code).as_key() {
                acc.products.insert(fg_code);
            }
            if let Some(cost) = layout.l2_cost.and_then(|c| bom.cell(row, c).as_f64()) {
                acc.cost_sum += cost;
                acc.cost_count += 1;
            }
            if let Some(qty) = layout.l2_qty.and_then(|c| bom.cell(row, c).as_f64()) {
                acc.qty_sum += qty;
                acc.qty_count += 1;
            }
        }

        let mut usage: Vec<ComponentUsage> = groups
            .into_iter()
            .map(|(component, acc)| ComponentUsage {
                component,
                used_in_products: acc.products.len(),
                avg_cost: mean(acc.cost_sum, acc.cost_count),
                avg_quantity: mean(acc.qty_sum, acc.qty_count),
                dispensed_qty: None,
                dispensed_value: None,
                soh: None,
            })
            .collect();

        usage.sort_by(|a, b| b.used_in_products.cmp(&a.used_in_products));
        Ok(usage)
    }

    /// Left-joins summed dispensing `Qty`/`Value` onto the usage table.
    /// Components without dispensing rows keep `None`.
    pub fn enrich_with_dispensing(
        usage: &mut [ComponentUsage],
        dispensing: &Table,
    ) -> EngineResult<()> {
        let totals = Self::sum_by_component(dispensing, &[DISPENSED_QTY, DISPENSED_VALUE])?;
        for record in usage.iter_mut() {
            if let Some(sums) = totals.get(&record.component) {
                record.dispensed_qty = Some(sums[0]);
                record.dispensed_value = Some(sums[1]);
            }
        }
        Ok(())
    }

    /// Left-joins summed raw-materials `SOH` onto the usage table.
    /// Components without stock rows keep `None`.
    pub fn enrich_with_stock(
        usage: &mut [ComponentUsage],
        raw_materials: &Table,
    ) -> EngineResult<()> {
        let totals = Self::stock_by_component(raw_materials)?;
        for record in usage.iter_mut() {
            record.soh = totals.get(&record.component).copied();
        }
        Ok(())
    }

    /// Total `SOH` per component code of a raw-materials feed
    pub fn stock_by_component(raw_materials: &Table) -> EngineResult<HashMap<String, f64>> {
        Ok(Self::sum_by_component(raw_materials, &[SOH])?
            .into_iter()
            .map(|(code, sums)| (code, sums[0]))
            .collect())
    }

    /// Sums each of `measures` per component code of a feed
    fn sum_by_component(
        feed: &Table,
        measures: &[&str],
    ) -> EngineResult<HashMap<String, Vec<f64>>> {
        let key = feed
            .find_any_column(FEED_COMPONENT_ALIASES)
            .ok_or_else(|| BomError::missing_column(feed.name(), FEED_COMPONENT_ALIASES.join(" / ")))?;
        let measure_cols = measures
            .iter()
            .map(|m| {
                feed.find_column(m)
                    .ok_or_else(|| BomError::missing_column(feed.name(), *m))
            })
            .collect::<EngineResult<Vec<usize>>>()?;

        let mut totals: HashMap<String, Vec<f64>> = HashMap::new();
        for row in 0..feed.row_count() {
            let Some(code) = feed.cell(row, key).as_key() else {
                continue;
            };
            let sums = totals
                .entry(code)
                .or_insert_with(|| vec![0.0; measure_cols.len()]);
            for (sum, &col) in sums.iter_mut().zip(&measure_cols) {
                *sum += feed.cell(row, col).as_f64().unwrap_or(0.0);
            }
        }
        Ok(totals)
    }

    /// Total BOM cost plus mean and quartiles of the per-product cost totals
    pub fn compute_cost_distribution(bom: &Table) -> EngineResult<CostDistribution> {
        let fg_col = bom
            .find_column(FG_CODE)
            .ok_or_else(|| BomError::missing_column(bom.name(), FG_CODE))?;
        let cost_col = bom
            .find_column(TOTCOST)
            .ok_or_else(|| BomError::missing_column(bom.name(), TOTCOST))?;

        let mut total_bom_cost = 0.0;
        let mut per_product: BTreeMap<String, f64> = BTreeMap::new();
        for row in 0..bom.row_count() {
            let cost = bom.cell(row, cost_col).as_f64().unwrap_or(0.0);
            total_bom_cost += cost;
            if let Some(fg_code) = bom.cell(row, fg_col).as_key() {
                *per_product.entry(fg_code).or_insert(0.0) += cost;
            }
        }

        let mut totals: Vec<f64> = per_product.into_values().collect();
        if totals.is_empty() {
            return Ok(CostDistribution {
                total_bom_cost,
                avg_product_cost: None,
                cost_percentiles: None,
            });
        }
        totals.sort_by(f64::total_cmp);

        Ok(CostDistribution {
            total_bom_cost,
            avg_product_cost: mean(totals.iter().sum(), totals.len()),
            cost_percentiles: Some(CostPercentiles {
                p25: percentile(&totals, 0.25),
                p50: percentile(&totals, 0.5),
                p75: percentile(&totals, 0.75),
            }),
        })
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

    /// FG Code, L2 Code, L3 Code, L4 Code, TOTCOST, L2 CostInBOM, L2 Unit Qty, L3 Unit Qty
    fn bom() -> Table {
        let row = |fg: &str, l2: &str, l3: Option<&str>, l4: Option<&str>, cost: f64, l2c: f64, q2: f64, q3: f64| {
            vec![
                text(fg),
                text(l2),
                l3.map_or(CellValue::Missing, text),
                l4.map_or(CellValue::Missing, text),
                num(cost),
                num(l2c),
                num(q2),
                num(q3),
            ]
        };
        Table::from_rows(
            "BOM",
            cols(&[
                "FG Code",
                "L2 Code",
                "L3 Code",
                "L4 Code",
                "TOTCOST",
                "L2 CostInBOM",
                "L2 Unit Qty",
                "L3 Unit Qty",
            ]),
            vec![
                row("P1", "C1", Some("S1"), Some("T1"), 10.0, 5.0, 2.0, 1.0),
                row("P1", "C2", Some("S2"), None, 20.0, 7.0, 3.0, 6.0),
                row("P2", "C1", None, None, 30.0, 4.0, 4.0, 0.5),
                row("P3", "C3", None, None, 40.0, 1.0, 1.0, 1.0),
            ],
        )
    }

    #[test]
    fn test_product_metrics_sums_and_counts() {
        let (metrics, _) = AggregationEngine::compute_product_metrics(&bom()).unwrap();
        assert_eq!(metrics.len(), 3);

        let p1 = &metrics[0];
        assert_eq!(p1.fg_code, "P1");
        assert_eq!(p1.total_cost, 30.0);
        assert_eq!(p1.component_count, 2);
        assert_eq!(p1.total_component_cost, 12.0);
        assert_eq!(p1.total_l2_unit_qty, 5.0);
        assert_eq!(p1.total_l3_unit_qty, 7.0);
        assert_eq!(p1.min_qty_to_produce, Some(1.0));
        assert_eq!(p1.max_qty_to_produce, Some(6.0));

        let p2 = &metrics[1];
        assert_eq!(p2.min_qty_to_produce, Some(0.5));
        assert_eq!(p2.max_qty_to_produce, Some(4.0));
    }

    #[test]
    fn test_product_metrics_ascending_key_order() {
        let (metrics, _) = AggregationEngine::compute_product_metrics(&bom()).unwrap();
        let keys: Vec<&str> = metrics.iter().map(|m| m.fg_code.as_str()).collect();
        assert_eq!(keys, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_complexity_sorted_descending_with_stable_ties() {
        let (_, complexity) = AggregationEngine::compute_product_metrics(&bom()).unwrap();
        // P1: 2 L2 + 2 L3 + 1 L4 = 5; P2 and P3: 1 each
        assert_eq!(complexity[0].fg_code, "P1");
        assert_eq!(complexity[0].score, 5);
        assert_eq!(complexity[1].fg_code, "P2");
        assert_eq!(complexity[2].fg_code, "P3");
    }

    #[test]
    fn test_absent_quantity_column_does_not_win_min_max() {
        let table = Table::from_rows(
            "BOM",
            cols(&["FG Code", "L2 Code", "TOTCOST", "L2 Unit Qty"]),
            vec![
                vec![text("P1"), text("C1"), num(1.0), num(3.0)],
                vec![text("P1"), text("C2"), num(1.0), num(8.0)],
            ],
        );
        let (metrics, _) = AggregationEngine::compute_product_metrics(&table).unwrap();
        assert_eq!(metrics[0].min_qty_to_produce, Some(3.0));
        assert_eq!(metrics[0].max_qty_to_produce, Some(8.0));
        assert_eq!(metrics[0].total_l3_unit_qty, 0.0);
    }

    #[test]
    fn test_missing_cells_from_other_partition_are_ignored_for_min() {
        let table = Table::from_rows(
            "BOM",
            cols(&["FG Code", "L2 Code", "TOTCOST", "L2 Unit Qty", "L3 Unit Qty"]),
            vec![vec![text("P1"), text("C1"), num(1.0), num(3.0), CellValue::Missing]],
        );
        let (metrics, _) = AggregationEngine::compute_product_metrics(&table).unwrap();
        assert_eq!(metrics[0].min_qty_to_produce, Some(3.0));
    }

    #[test]
    fn test_legacy_quantity_header_is_used() {
        let table = Table::from_rows(
            "BOM",
            cols(&["FG Code", "L2 Code", "TOTCOST", "L2 Unti Qty"]),
            vec![vec![text("P1"), text("C1"), num(1.0), num(4.0)]],
        );
        let usage = AggregationEngine::compute_component_usage(&table).unwrap();
        assert_eq!(usage[0].avg_quantity, Some(4.0));
    }

    #[test]
    fn test_missing_l2_counts_once_in_complexity() {
        let table = Table::from_rows(
            "BOM",
            cols(&["FG Code", "L2 Code", "TOTCOST"]),
            vec![
                vec![text("P1"), CellValue::Missing, num(1.0)],
                vec![text("P1"), CellValue::Missing, num(1.0)],
                vec![text("P1"), text("C1"), num(1.0)],
            ],
        );
        let (metrics, complexity) = AggregationEngine::compute_product_metrics(&table).unwrap();
        assert_eq!(complexity[0].score, 2);
        assert_eq!(metrics[0].component_count, 1);
    }

    #[test]
    fn test_missing_required_column() {
        let table = Table::new("BOM", cols(&["FG Code", "TOTCOST"]));
        let err = AggregationEngine::compute_product_metrics(&table).unwrap_err();
        assert!(matches!(
            err,
            BomError::MissingColumn { ref column, .. } if column == "L2 Code"
        ));
    }

    #[test]
    fn test_component_usage_counts_distinct_products() {
        let usage = AggregationEngine::compute_component_usage(&bom()).unwrap();
        assert_eq!(usage[0].component, "C1");
        assert_eq!(usage[0].used_in_products, 2);
        assert_eq!(usage[0].avg_cost, Some(4.5));
        assert_eq!(usage[0].avg_quantity, Some(3.0));
        // ties broken by ascending component code
        assert_eq!(usage[1].component, "C2");
        assert_eq!(usage[2].component, "C3");
        assert!(usage.iter().all(|u| u.soh.is_none()));
    }

    #[test]
    fn test_enrich_with_dispensing_left_join() {
        let mut usage = AggregationEngine::compute_component_usage(&bom()).unwrap();
        let dispensing = Table::from_rows(
            "Dispensing",
            cols(&["TRIMcode", "Qty", "Value"]),
            vec![
                vec![text("C1"), num(5.0), num(50.0)],
                vec![text("C1"), num(2.0), num(20.0)],
                vec![text("C9"), num(1.0), num(1.0)],
            ],
        );
        AggregationEngine::enrich_with_dispensing(&mut usage, &dispensing).unwrap();

        let c1 = usage.iter().find(|u| u.component == "C1").unwrap();
        assert_eq!(c1.dispensed_qty, Some(7.0));
        assert_eq!(c1.dispensed_value, Some(70.0));
        let c2 = usage.iter().find(|u| u.component == "C2").unwrap();
        assert_eq!(c2.dispensed_qty, None);
        assert_eq!(c2.dispensed_value, None);
    }

    #[test]
    fn test_enrich_with_stock_left_join() {
        let mut usage = AggregationEngine::compute_component_usage(&bom()).unwrap();
        let raw = Table::from_rows(
            "Raw Materials",
            cols(&["TRIMcode", "SOH"]),
            vec![
                vec![text("C2"), num(10.0)],
                vec![text("C2"), num(5.0)],
            ],
        );
        AggregationEngine::enrich_with_stock(&mut usage, &raw).unwrap();

        let c2 = usage.iter().find(|u| u.component == "C2").unwrap();
        assert_eq!(c2.soh, Some(15.0));
        let c1 = usage.iter().find(|u| u.component == "C1").unwrap();
        assert_eq!(c1.soh, None);
    }

    #[test]
    fn test_enrich_with_feed_missing_key_column() {
        let mut usage = AggregationEngine::compute_component_usage(&bom()).unwrap();
        let raw = Table::new("Raw Materials", cols(&["Part", "SOH"]));
        let err = AggregationEngine::enrich_with_stock(&mut usage, &raw).unwrap_err();
        assert!(matches!(err, BomError::MissingColumn { .. }));
    }

    #[test]
    fn test_cost_distribution() {
        let dist = AggregationEngine::compute_cost_distribution(&bom()).unwrap();
        assert_eq!(dist.total_bom_cost, 100.0);
        // per-product totals: P1=30, P2=30, P3=40
        let avg = dist.avg_product_cost.unwrap();
        assert!((avg - 100.0 / 3.0).abs() < 1e-9);
        let q = dist.cost_percentiles.unwrap();
        assert_eq!(q.p25, 30.0);
        assert_eq!(q.p50, 30.0);
        assert_eq!(q.p75, 35.0);
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&values, 0.25), 17.5);
        assert_eq!(percentile(&values, 0.5), 25.0);
        assert_eq!(percentile(&values, 0.75), 32.5);
        assert_eq!(percentile(&[7.0], 0.5), 7.0);
    }

    #[test]
    fn test_cost_distribution_empty_bom() {
        let table = Table::new("BOM", cols(&["FG Code", "L2 Code", "TOTCOST"]));
        let dist = AggregationEngine::compute_cost_distribution(&table).unwrap();
        assert_eq!(dist.total_bom_cost, 0.0);
        assert!(dist.avg_product_cost.is_none());
        assert!(dist.cost_percentiles.is_none());
    }

    #[test]
    fn test_analyze_conserves_total_cost() {
        let a = bom();
        let m = Table::from_rows(
            "BOM (M-Z)",
            cols(&["FG Code", "L2 Code", "TOTCOST"]),
            vec![vec![text("M1"), text("C1"), num(5.0)]],
        );
        let result = AggregationEngine::analyze(&a, &m, None, None).unwrap();
        let sum: f64 = result.product_metrics.iter().map(|p| p.total_cost).sum();
        assert_eq!(sum, 105.0);
        assert_eq!(result.cost_distribution.total_bom_cost, 105.0);
        assert_eq!(result.component("C1").unwrap().used_in_products, 3);
    }
}
