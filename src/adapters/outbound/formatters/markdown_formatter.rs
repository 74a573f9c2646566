use crate::application::dto::{AnalysisResponse, RequirementsResponse};
use crate::bom_analysis::domain::{
    ComponentUsage, CostDistribution, ProductComplexity, ProductMetrics, ReportMetadata,
    RequirementLine,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const NOT_AVAILABLE: &str = "N/A";

const METRICS_TABLE_HEADER: &str = "| FG Code | TOTCOST | Components | Component Cost | L2 Unit Qty | L3 Unit Qty | Min Qty | Max Qty |\n";
const METRICS_TABLE_SEPARATOR: &str =
    "|---------|---------|------------|----------------|-------------|-------------|---------|---------|\n";

const COMPLEXITY_TABLE_HEADER: &str = "| FG Code | Complexity Score |\n";
const COMPLEXITY_TABLE_SEPARATOR: &str = "|---------|------------------|\n";

const USAGE_TABLE_HEADER: &str = "| Component | Used In Products | Avg Cost | Avg Quantity | Dispensed Qty | Dispensed Value | SOH |\n";
const USAGE_TABLE_SEPARATOR: &str =
    "|-----------|------------------|----------|--------------|---------------|-----------------|-----|\n";

const REQUIREMENTS_TABLE_HEADER: &str =
    "| Component | Description | Unit Quantity | Required Quantity | Stock Quantity | Sufficient Stock |\n";
const REQUIREMENTS_TABLE_SEPARATOR: &str =
    "|-----------|-------------|---------------|-------------------|----------------|------------------|\n";

/// MarkdownFormatter adapter rendering responses as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Whole numbers without decimals, everything else rounded to two places
    fn number(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }

    fn optional(value: Option<f64>) -> String {
        value.map_or_else(|| NOT_AVAILABLE.to_string(), Self::number)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_metadata(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str(&format!(
            "Generated by {} {} at {}\n\nReport ID: `{}`\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp(),
            metadata.report_id()
        ));
    }

    fn render_insights(&self, output: &mut String, insights: &[String]) {
        output.push_str("## Key Insights\n\n");
        for insight in insights {
            output.push_str(&format!("- {}\n", insight));
        }
        output.push('\n');
    }

    fn render_product_metrics(&self, output: &mut String, metrics: &[ProductMetrics]) {
        output.push_str("## Product Metrics\n\n");
        if metrics.is_empty() {
            output.push_str("*No products found.*\n\n");
            return;
        }
        output.push_str(METRICS_TABLE_HEADER);
        output.push_str(METRICS_TABLE_SEPARATOR);
        for m in metrics {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&m.fg_code),
                Self::number(m.total_cost),
                m.component_count,
                Self::number(m.total_component_cost),
                Self::number(m.total_l2_unit_qty),
                Self::number(m.total_l3_unit_qty),
                Self::optional(m.min_qty_to_produce),
                Self::optional(m.max_qty_to_produce),
            ));
        }
        output.push('\n');
    }

    fn render_complexity(&self, output: &mut String, complexity: &[ProductComplexity]) {
        output.push_str("## Product Complexity\n\n");
        if complexity.is_empty() {
            output.push_str("*No products found.*\n\n");
            return;
        }
        output.push_str(COMPLEXITY_TABLE_HEADER);
        output.push_str(COMPLEXITY_TABLE_SEPARATOR);
        for c in complexity {
            output.push_str(&format!("| {} | {} |\n", Self::escape_cell(&c.fg_code), c.score));
        }
        output.push('\n');
    }

    fn render_usage(&self, output: &mut String, usage: &[ComponentUsage]) {
        output.push_str("## Component Usage\n\n");
        if usage.is_empty() {
            output.push_str("*No components found.*\n\n");
            return;
        }
        output.push_str(USAGE_TABLE_HEADER);
        output.push_str(USAGE_TABLE_SEPARATOR);
        for u in usage {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&u.component),
                u.used_in_products,
                Self::optional(u.avg_cost),
                Self::optional(u.avg_quantity),
                Self::optional(u.dispensed_qty),
                Self::optional(u.dispensed_value),
                Self::optional(u.soh),
            ));
        }
        output.push('\n');
    }

    fn render_cost_distribution(&self, output: &mut String, dist: &CostDistribution) {
        output.push_str("## Cost Distribution\n\n");
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        let rows = [
            ("Total BOM cost", Some(dist.total_bom_cost)),
            ("Average product cost", dist.avg_product_cost),
            ("25th percentile", dist.cost_percentiles.map(|p| p.p25)),
            ("Median", dist.cost_percentiles.map(|p| p.p50)),
            ("75th percentile", dist.cost_percentiles.map(|p| p.p75)),
        ];
        for (label, value) in rows {
            output.push_str(&format!("| {} | {} |\n", label, Self::optional(value)));
        }
        output.push('\n');
    }

    fn render_requirements(&self, output: &mut String, lines: &[RequirementLine]) {
        if lines.is_empty() {
            output.push_str("*No requirement data found for this product.*\n");
            return;
        }
        output.push_str(REQUIREMENTS_TABLE_HEADER);
        output.push_str(REQUIREMENTS_TABLE_SEPARATOR);
        for line in lines {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&line.component),
                Self::escape_cell(line.description.as_deref().unwrap_or("")),
                Self::number(line.unit_quantity),
                Self::number(line.required_quantity),
                Self::number(line.stock_quantity),
                line.sufficiency_label(),
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_analysis(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str("# BOM Analysis Report\n\n");
        self.render_metadata(&mut output, &response.metadata);
        self.render_insights(&mut output, &response.insights);
        self.render_product_metrics(&mut output, &response.result.product_metrics);
        self.render_complexity(&mut output, &response.result.product_complexity);
        self.render_usage(&mut output, &response.result.component_usage);
        self.render_cost_distribution(&mut output, &response.result.cost_distribution);
        Ok(output)
    }

    fn format_requirements(&self, response: &RequirementsResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Component Requirements\n\n");
        self.render_metadata(&mut output, &response.metadata);
        output.push_str(&format!(
            "Product: **{}**, quantity: **{}**, strategy: `{}`\n\n",
            Self::escape_cell(&response.product_id),
            Self::number(response.desired_quantity),
            response.strategy
        ));
        self.render_requirements(&mut output, &response.requirements);

        let short = response.requirements.iter().filter(|l| !l.sufficient).count();
        if short > 0 {
            output.push_str(&format!(
                "\n**{} component(s) without sufficient stock.**\n",
                short
            ));
        }
        Ok(output)
    }
}
