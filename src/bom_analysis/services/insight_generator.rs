use crate::bom_analysis::domain::AnalysisResult;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

/// Knobs for the highlight lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightOptions {
    pub top_n: usize,
    pub currency_symbol: String,
}

impl Default for InsightOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// InsightGenerator service deriving short textual highlights from an
/// analysis
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn generate(result: &AnalysisResult, options: &InsightOptions) -> Vec<String> {
        let mut insights = Vec::new();

        let complex: Vec<&str> = result
            .product_complexity
            .iter()
            .take(options.top_n)
            .map(|c| c.fg_code.as_str())
            .collect();
        insights.push(format!("Most complex products: {}", join_or_none(&complex)));

        let avg_cost = match result.cost_distribution.avg_product_cost {
            Some(avg) => format!("{}{:.2}", options.currency_symbol, avg),
            None => "none".to_string(),
        };
        insights.push(format!("Average product cost: {avg_cost}"));

        let common: Vec<&str> = result
            .component_usage
            .iter()
            .take(options.top_n)
            .map(|u| u.component.as_str())
            .collect();
        insights.push(format!(
            "Most commonly used components: {}",
            join_or_none(&common)
        ));

        for metrics in &result.product_metrics {
            if let (Some(min), Some(max)) = (metrics.min_qty_to_produce, metrics.max_qty_to_produce) {
                insights.push(format!("FG Code {}: Min = {min}, Max = {max}", metrics.fg_code));
            }
        }

        if result.has_stock_data() {
            let low: Vec<&str> = result
                .component_usage
                .iter()
                .filter(|u| u.is_below_average_usage())
                .map(|u| u.component.as_str())
                .collect();
            if !low.is_empty() {
                insights.push(format!(
                    "Components with stock below average usage: {}",
                    low.join(", ")
                ));
            }
        }

        insights
    }
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
