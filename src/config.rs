//! Configuration file support for bom-analyzer.
//!
//! Provides YAML-based configuration through `bom-analyzer.config.yml` files,
//! including data structures, file loading, and validation. Values given on
//! the command line take precedence over the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::{OutputFormat, RequirementsStrategy};
use crate::bom_analysis::policies::ColumnAliases;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bom-analyzer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub top_n: Option<usize>,
    pub currency_symbol: Option<String>,
    pub strategy: Option<String>,
    pub fail_on_shortage: Option<bool>,
    pub column_aliases: Option<ColumnAliasesConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Per-role overrides of the BOM header aliases. Omitted roles keep the
/// built-in list.
#[derive(Debug, Deserialize, Default)]
pub struct ColumnAliasesConfig {
    pub assembly: Option<Vec<String>>,
    pub component: Option<Vec<String>>,
    pub quantity: Option<Vec<String>>,
    pub description: Option<Vec<String>>,
}

impl ConfigFile {
    /// Built-in aliases with the configured roles replaced
    pub fn column_aliases(&self) -> ColumnAliases {
        let mut aliases = ColumnAliases::default();
        if let Some(overrides) = &self.column_aliases {
            let roles = [
                (&mut aliases.assembly, &overrides.assembly),
                (&mut aliases.component, &overrides.component),
                (&mut aliases.quantity, &overrides.quantity),
                (&mut aliases.description, &overrides.description),
            ];
            for (target, configured) in roles {
                if let Some(list) = configured {
                    *target = list.iter().map(|alias| alias.trim().to_string()).collect();
                }
            }
        }
        aliases
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        parse_optional(self.format.as_deref(), "format")
    }

    pub fn requirements_strategy(&self) -> Result<Option<RequirementsStrategy>> {
        parse_optional(self.strategy.as_deref(), "strategy")
    }
}

fn parse_optional<T: FromStr<Err = String>>(value: Option<&str>, field: &str) -> Result<Option<T>> {
    value
        .map(|v| {
            T::from_str(v).map_err(|e| anyhow::anyhow!("Invalid config: {}: {}", field, e))
        })
        .transpose()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.top_n == Some(0) {
        bail!(
            "Invalid config: top_n must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of 5."
        );
    }

    config.output_format()?;
    config.requirements_strategy()?;

    if let Some(ref aliases) = config.column_aliases {
        let roles = [
            ("assembly", &aliases.assembly),
            ("component", &aliases.component),
            ("quantity", &aliases.quantity),
            ("description", &aliases.description),
        ];
        for (role, list) in roles {
            let Some(list) = list else { continue };
            if list.is_empty() {
                bail!(
                    "Invalid config: column_aliases.{} must not be empty.\n\n\
                     💡 Hint: List at least one header name, or remove the field to use the defaults.",
                    role
                );
            }
            if let Some(i) = list.iter().position(|alias| alias.trim().is_empty()) {
                bail!(
                    "Invalid config: column_aliases.{}[{}] must not be empty.",
                    role,
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: markdown
top_n: 3
currency_symbol: "$"
strategy: usage
fail_on_shortage: true
column_aliases:
  assembly:
    - Parent Item
  quantity:
    - Qty Per Assembly
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Markdown));
        assert_eq!(config.top_n, Some(3));
        assert_eq!(config.currency_symbol.as_deref(), Some("$"));
        assert_eq!(
            config.requirements_strategy().unwrap(),
            Some(RequirementsStrategy::Usage)
        );
        assert_eq!(config.fail_on_shortage, Some(true));

        let aliases = config.column_aliases();
        assert_eq!(aliases.assembly, vec!["Parent Item".to_string()]);
        assert_eq!(aliases.quantity, vec!["Qty Per Assembly".to_string()]);
        // roles that are not configured keep the defaults
        assert_eq!(aliases.component, ColumnAliases::default().component);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_top_n_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "top_n: 0\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("top_n must be at least 1"));
    }

    #[test]
    fn test_empty_alias_list_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "column_aliases:\n  component: []\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("column_aliases.component must not be empty"));
    }

    #[test]
    fn test_blank_alias_entry_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "column_aliases:\n  quantity:\n    - Qty\n    - \"  \"\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("column_aliases.quantity[1] must not be empty"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: xml\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Invalid format"));
    }

    #[test]
    fn test_invalid_strategy_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "strategy: fastest\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Invalid strategy"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: json\nunknown_field: true\nexclude_packages: [pip]\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("exclude_packages"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.top_n.is_none());
        assert!(config.strategy.is_none());
        assert!(config.fail_on_shortage.is_none());
        assert_eq!(config.column_aliases(), ColumnAliases::default());
        assert!(config.unknown_fields.is_empty());
    }
}
