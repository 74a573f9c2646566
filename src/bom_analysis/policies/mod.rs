mod column_aliases;
mod product_matcher;

pub use column_aliases::{ColumnAliases, ResolvedColumns};
pub use product_matcher::{MatchStrategy, ProductMatcher};
