//! attrgen configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main attrgen configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrgenConfig {
    /// Field definitions used when none are given on the command line
    #[serde(default)]
    pub fields: Vec<String>,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// How each descriptor is printed
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

/// Descriptor output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented key/value listing
    #[default]
    Text,
    /// serde_json encoding of the descriptor
    Json,
    /// Normalized definition string
    Canonical,
}

impl AttrgenConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.fields.iter().position(|f| f.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "fields[{}] is an empty definition",
                index
            )));
        }
        Ok(())
    }
}
