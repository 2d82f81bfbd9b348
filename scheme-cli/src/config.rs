//! Configuration: defaults, optional TOML file, environment, CLI flags

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the target table
pub const TABLE_ENV: &str = "SCHEME_CLI_TABLE";

/// Environment variable selecting the worksheet
pub const SHEET_ENV: &str = "SCHEME_CLI_SHEET";

/// `name` or `schema.name`
static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target table for the insert statements
    pub table: String,
    /// Second comment line of the generated script
    pub run_hint: String,
    /// Worksheet to read; the first sheet when unset
    pub sheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: "public.schemes".to_string(),
            run_hint: "Run in Supabase SQL Editor or psql".to_string(),
            sheet: None,
        }
    }
}

impl Config {
    /// Parse from TOML text
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Invalid config file")
    }

    /// Load the config file, then apply environment overrides.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        if let Ok(table) = std::env::var(TABLE_ENV) {
            config.table = table;
        }
        if let Ok(sheet) = std::env::var(SHEET_ENV) {
            config.sheet = Some(sheet);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&content).with_context(|| format!("In {}", path.display()))
    }

    /// Reject table names that are not plain SQL identifiers
    pub fn validate(&self) -> Result<()> {
        if !TABLE_NAME.is_match(&self.table) {
            bail!(
                "Invalid table name '{}': expected 'table' or 'schema.table'",
                self.table
            );
        }
        if self.run_hint.contains('\n') {
            bail!("run_hint must be a single line");
        }
        Ok(())
    }
}

/// `<config_dir>/scheme-cli/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scheme-cli").join("config.toml"))
}
