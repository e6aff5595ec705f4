//! `swiss-tax` configuration file.
//!
//! ```toml
//! tax_year = 2024
//! log_level = "warn"
//! output = "json"
//!
//! [engine]
//! marginal_increment = "100"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tax_core::{EngineConfig, TaxError};
use thiserror::Error;

pub const DEFAULT_TAX_YEAR: i32 = 2024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Engine(#[from] TaxError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub tax_year: i32,
    /// Any `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub log_level: Option<String>,
    /// Also append log records to this file.
    pub log_file: Option<PathBuf>,
    pub output: OutputFormat,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tax_year: DEFAULT_TAX_YEAR,
            log_level: None,
            log_file: None,
            output: OutputFormat::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.engine.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when given, the defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.tax_year, 2024);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn full_document() {
        let config = CliConfig::from_toml_str(
            r#"
tax_year = 2024
log_level = "debug"
log_file = "swiss-tax.log"
output = "json"

[engine]
marginal_increment = "100"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("swiss-tax.log")));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.engine.marginal_increment, dec!(100));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = CliConfig::from_toml_str("year = 2024");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_engine_config_is_rejected() {
        let result = CliConfig::from_toml_str("[engine]\nmarginal_increment = \"0\"");

        assert!(matches!(
            result,
            Err(ConfigError::Engine(TaxError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CliConfig::load(Path::new("/nonexistent/swiss-tax.toml")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/swiss-tax.toml"));
    }

    #[test]
    fn no_path_yields_defaults() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
