//! Well-known column names of the BOM, dispensing and raw-materials feeds

pub const FG_CODE: &str = "FG Code";
pub const L2_CODE: &str = "L2 Code";
pub const L3_CODE: &str = "L3 Code";
pub const L4_CODE: &str = "L4 Code";
pub const TOTCOST: &str = "TOTCOST";
pub const L2_COST_IN_BOM: &str = "L2 CostInBOM";
pub const L2_UNIT_QTY: &str = "L2 Unit Qty";
pub const L3_UNIT_QTY: &str = "L3 Unit Qty";

/// Misspelled header shipped by the production BOM exports
pub const L2_UNIT_QTY_LEGACY: &str = "L2 Unti Qty";

/// Accepted spellings of the L2 unit quantity column, in priority order
pub const L2_UNIT_QTY_ALIASES: &[&str] = &[L2_UNIT_QTY, L2_UNIT_QTY_LEGACY];

pub const DISPENSED_QTY: &str = "Qty";
pub const DISPENSED_VALUE: &str = "Value";
pub const SOH: &str = "SOH";

/// Component-code headers used by the dispensing and raw-materials feeds
pub const FEED_COMPONENT_ALIASES: &[&str] = &["TRIMcode", "Component Code", L2_CODE, "Code"];

/// Header spellings the combiner folds into a single column
pub const BOM_COLUMN_ALIAS_GROUPS: &[&[&str]] = &[L2_UNIT_QTY_ALIASES];

/// Key columns the combiner requires at least one of
pub const BOM_KEY_COLUMNS: &[&str] = &[FG_CODE, L2_CODE];

pub const BOM_NUMERIC_COLUMNS: &[&str] = &[
    TOTCOST,
    L2_COST_IN_BOM,
    L2_UNIT_QTY,
    L2_UNIT_QTY_LEGACY,
    L3_UNIT_QTY,
];

pub const DISPENSING_NUMERIC_COLUMNS: &[&str] = &[DISPENSED_QTY, DISPENSED_VALUE];

pub const RAW_MATERIALS_NUMERIC_COLUMNS: &[&str] = &[SOH];
