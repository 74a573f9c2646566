use crate::bom_analysis::domain::Table;
use crate::shared::error::BomError;
use serde::Deserialize;

/// ColumnAliases policy mapping logical BOM roles to accepted header names
///
/// Upstream exports name the same column differently ("FG Code" vs
/// "Assembly Code", "L2 Unit Qty" vs the legacy "L2 Unti Qty"). Each role
/// carries an ordered list of accepted names; the first name present in the
/// table wins.
///
/// Priority order within a role is the order of the list. Matching is exact
/// first, then trimmed and case-insensitive (see [`Table::find_column`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub assembly: Vec<String>,
    pub component: Vec<String>,
    pub quantity: Vec<String>,
    pub description: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            assembly: to_strings(&[
                "FG Code",
                "Assembly Code",
                "Assembly",
                "Parent Code",
                "Product Code",
            ]),
            component: to_strings(&[
                "L2 Code",
                "Component Code",
                "Component",
                "Child Code",
                "Item Code",
            ]),
            quantity: to_strings(&[
                "L2 Unit Qty",
                "L2 Unti Qty",
                "Unit Qty",
                "Qty Per",
                "Quantity",
            ]),
            description: to_strings(&[
                "Description",
                "L2 Description",
                "Component Description",
                "Desc",
            ]),
        }
    }
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Column indices resolved for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub assembly: usize,
    pub component: usize,
    pub quantity: usize,
    pub description: Option<usize>,
}

impl ColumnAliases {
    /// Resolves every logical role against the table header
    ///
    /// # Errors
    /// Returns `BomError::Schema` naming the role and the aliases tried when
    /// the assembly, component or quantity column cannot be found. The
    /// description column is optional.
    pub fn resolve(&self, table: &Table) -> std::result::Result<ResolvedColumns, BomError> {
        Ok(ResolvedColumns {
            assembly: Self::resolve_required(table, "assembly", &self.assembly)?,
            component: Self::resolve_required(table, "component", &self.component)?,
            quantity: Self::resolve_required(table, "quantity", &self.quantity)?,
            description: Self::resolve_role(table, &self.description),
        })
    }

    fn resolve_role(table: &Table, aliases: &[String]) -> Option<usize> {
        aliases.iter().find_map(|alias| table.find_column(alias))
    }

    fn resolve_required(
        table: &Table,
        role: &str,
        aliases: &[String],
    ) -> std::result::Result<usize, BomError> {
        Self::resolve_role(table, aliases).ok_or_else(|| {
            BomError::schema(format!(
                "cannot resolve the {} column of the {} dataset (tried: {})",
                role,
                table.name(),
                aliases.join(", ")
            ))
        })
    }
}
