use serde::Deserialize;
use thiserror::Error;

use crate::units::SpeedUnit;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    #[serde(default)]
    pub barbs: BarbsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BarbsConfig {
    /// Bin count used when a request does not ask for one.
    #[serde(default = "default_bins")]
    pub default_bins: usize,
    /// Output unit for averaged speeds.
    #[serde(default)]
    pub speed_unit: SpeedUnit,
}

fn default_bins() -> usize {
    20
}

impl Default for BarbsConfig {
    fn default() -> Self {
        BarbsConfig {
            default_bins: default_bins(),
            speed_unit: SpeedUnit::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
