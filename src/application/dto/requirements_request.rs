use crate::application::dto::AnalysisRequest;
use crate::bom_analysis::policies::ColumnAliases;
use serde::Serialize;

/// Which requirements calculation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementsStrategy {
    /// Average usage of every known component scaled by the desired quantity
    Usage,
    /// The product's own BOM rows, located by column aliases (default)
    #[default]
    Bom,
}

impl std::str::FromStr for RequirementsStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usage" => Ok(RequirementsStrategy::Usage),
            "bom" => Ok(RequirementsStrategy::Bom),
            _ => Err(format!(
                "Invalid strategy: {}. Please specify 'usage' or 'bom'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RequirementsStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequirementsStrategy::Usage => write!(f, "usage"),
            RequirementsStrategy::Bom => write!(f, "bom"),
        }
    }
}

/// RequirementsRequest - Input of the requirements use case
#[derive(Debug, Clone)]
pub struct RequirementsRequest {
    /// Datasets to analyze before resolving requirements
    pub analysis: AnalysisRequest,
    pub product_id: String,
    pub desired_quantity: f64,
    pub strategy: RequirementsStrategy,
    /// Header aliases used by the `bom` strategy
    pub column_aliases: ColumnAliases,
}

impl RequirementsRequest {
    pub fn new(analysis: AnalysisRequest, product_id: String, desired_quantity: f64) -> Self {
        Self {
            analysis,
            product_id,
            desired_quantity,
            strategy: RequirementsStrategy::default(),
            column_aliases: ColumnAliases::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: RequirementsStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_column_aliases(mut self, column_aliases: ColumnAliases) -> Self {
        self.column_aliases = column_aliases;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(RequirementsStrategy::from_str("usage").unwrap(), RequirementsStrategy::Usage);
        assert_eq!(RequirementsStrategy::from_str("BOM").unwrap(), RequirementsStrategy::Bom);
        assert!(RequirementsStrategy::from_str("average").is_err());
    }

    #[test]
    fn test_request_defaults_to_bom_strategy() {
        let analysis = AnalysisRequest::new(PathBuf::from("a.csv"), PathBuf::from("m.csv"));
        let request = RequirementsRequest::new(analysis, "P1".to_string(), 10.0);
        assert_eq!(request.strategy, RequirementsStrategy::Bom);
        assert_eq!(request.column_aliases, ColumnAliases::default());
    }
}
