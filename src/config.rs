//! Configuration file support for build-order.
//!
//! Provides YAML-based configuration through `build-order.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use build_order::application::dto::OutputFormat;
use build_order::shared::security::read_checked;
use build_order::shared::Result;

pub const CONFIG_FILENAME: &str = "build-order.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Dependency tool command line, e.g. `apt-rdepends --build-depends`
    pub tool: Option<String>,
    pub ignore_packages: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
    pub aggregate_file: Option<String>,
    pub format: Option<OutputFormat>,
    pub print_tree: Option<bool>,
    /// Keep `debconf` and `perl-base` in the ignore list (default: true)
    pub default_ignores: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
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
    if let Some(ref patterns) = config.ignore_packages {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_packages[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a package name or a pattern such as \"lib*-dev\".",
                    i
                );
            }
        }
    }

    if let Some(ref tool) = config.tool {
        if tool.trim().is_empty() {
            bail!(
                "Invalid config: tool must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default 'apt-rdepends'."
            );
        }
    }

    if let Some(ref name) = config.aggregate_file {
        validate_aggregate_file_name(name)?;
    }

    Ok(())
}

/// Rejects aggregate file names that would land outside the output directory.
/// Checked for the config value and again for the merged setting.
pub fn validate_aggregate_file_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        bail!(
            "Invalid aggregate file name '{}': it must be a plain file name.\n\n\
             💡 Hint: Choose the directory with output_dir or --output-dir.",
            name
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
