use serde::{Serialize, Serializer};

/// Per-component need for a requested production run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementLine {
    pub component: String,
    pub description: Option<String>,
    /// Quantity per finished unit (average usage or BOM quantity, depending on strategy)
    pub unit_quantity: f64,
    pub required_quantity: f64,
    pub stock_quantity: f64,
    #[serde(serialize_with = "serialize_sufficiency")]
    pub sufficient: bool,
}

impl RequirementLine {
    pub fn new(
        component: String,
        description: Option<String>,
        unit_quantity: f64,
        desired_quantity: f64,
        stock_quantity: f64,
    ) -> Self {
        let required_quantity = unit_quantity * desired_quantity;
        Self {
            component,
            description,
            unit_quantity,
            required_quantity,
            stock_quantity,
            sufficient: stock_quantity >= required_quantity,
        }
    }

    /// Quantity still to be sourced; zero when stock covers the requirement
    pub fn shortfall(&self) -> f64 {
        (self.required_quantity - self.stock_quantity).max(0.0)
    }

    pub fn sufficiency_label(&self) -> &'static str {
        if self.sufficient {
            "Yes"
        } else {
            "No"
        }
    }
}

fn serialize_sufficiency<S: Serializer>(sufficient: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *sufficient { "Yes" } else { "No" })
}
