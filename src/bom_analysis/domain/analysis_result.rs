use serde::Serialize;

/// Aggregated metrics for one finished good
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMetrics {
    pub fg_code: String,
    #[serde(rename = "TOTCOST")]
    pub total_cost: f64,
    pub component_count: usize,
    pub total_component_cost: f64,
    pub total_l2_unit_qty: f64,
    pub total_l3_unit_qty: f64,
    #[serde(rename = "MIN_QTY_TO_PRODUCE")]
    pub min_qty_to_produce: Option<f64>,
    #[serde(rename = "MAX_QTY_TO_PRODUCE")]
    pub max_qty_to_produce: Option<f64>,
}

/// Structural complexity score of one finished good
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductComplexity {
    pub fg_code: String,
    pub score: usize,
}

/// Usage statistics for one L2 component, optionally enriched from the
/// dispensing and raw-materials feeds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentUsage {
    pub component: String,
    pub used_in_products: usize,
    pub avg_cost: Option<f64>,
    pub avg_quantity: Option<f64>,
    pub dispensed_qty: Option<f64>,
    pub dispensed_value: Option<f64>,
    #[serde(rename = "SOH")]
    pub soh: Option<f64>,
}

impl ComponentUsage {
    /// True when stock data was joined and on-hand stock is below average usage
    pub fn is_below_average_usage(&self) -> bool {
        match (self.soh, self.avg_quantity) {
            (Some(soh), Some(avg)) => soh < avg,
            _ => false,
        }
    }
}

/// Quartiles of the per-product total cost distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPercentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostDistribution {
    pub total_bom_cost: f64,
    /// Mean of per-product totals; `None` when the BOM has no products
    pub avg_product_cost: Option<f64>,
    pub cost_percentiles: Option<CostPercentiles>,
}

/// Everything the aggregation engine produces for one analysis invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub product_metrics: Vec<ProductMetrics>,
    pub product_complexity: Vec<ProductComplexity>,
    pub component_usage: Vec<ComponentUsage>,
    pub cost_distribution: CostDistribution,
}

impl AnalysisResult {
    pub fn product(&self, fg_code: &str) -> Option<&ProductMetrics> {
        self.product_metrics.iter().find(|m| m.fg_code == fg_code)
    }

    pub fn component(&self, code: &str) -> Option<&ComponentUsage> {
        self.component_usage.iter().find(|u| u.component == code)
    }

    /// Whether a raw-materials feed was joined onto the usage table
    pub fn has_stock_data(&self) -> bool {
        self.component_usage.iter().any(|u| u.soh.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_below_average_usage() {
        assert!(usage("C1", Some(5.0), Some(2.0)).is_below_average_usage());
        assert!(!usage("C1", Some(5.0), Some(5.0)).is_below_average_usage());
        assert!(!usage("C1", Some(5.0), None).is_below_average_usage());
        assert!(!usage("C1", None, Some(1.0)).is_below_average_usage());
    }

    #[test]
    fn test_product_metrics_serialized_field_names() {
        let metrics = ProductMetrics {
            fg_code: "P1".to_string(),
            total_cost: 10.0,
            component_count: 2,
            total_component_cost: 12.0,
            total_l2_unit_qty: 5.0,
            total_l3_unit_qty: 0.0,
            min_qty_to_produce: Some(2.0),
            max_qty_to_produce: None,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["TOTCOST"], 10.0);
        assert_eq!(json["MIN_QTY_TO_PRODUCE"], 2.0);
        assert!(json["MAX_QTY_TO_PRODUCE"].is_null());
        assert_eq!(json["component_count"], 2);
    }

    #[test]
    fn test_has_stock_data() {
        let result = AnalysisResult {
            product_metrics: vec![],
            product_complexity: vec![],
            component_usage: vec![usage("C1", Some(1.0), None)],
            cost_distribution: CostDistribution {
                total_bom_cost: 0.0,
                avg_product_cost: None,
                cost_percentiles: None,
            },
        };
        assert!(!result.has_stock_data());
        assert!(result.component("C1").is_some());
        assert!(result.component("C2").is_none());
    }
}
