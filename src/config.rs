//! TOML file configuration for the demo binary.

use crate::device::{DeviceKind, DiscoveryFilter, Position};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation and loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The discovery kind list is empty.
    #[error("discovery kinds must not be empty")]
    EmptyKinds,
    /// Status interval of zero.
    #[error("status interval must be at least 1 ms")]
    InvalidInterval,
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The config file could not be parsed.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Device discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Facing position to enumerate.
    pub position: Position,
    /// Lens kinds to enumerate, in display order.
    pub kinds: Vec<DeviceKind>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        let filter = DiscoveryFilter::default();
        Self {
            position: filter.position,
            kinds: filter.kinds,
        }
    }
}

impl DiscoveryConfig {
    /// Converts to the filter consumed by the session layer.
    pub fn filter(&self) -> DiscoveryFilter {
        DiscoveryFilter {
            kinds: self.kinds.clone(),
            position: self.position,
        }
    }
}

/// Demo preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Milliseconds between status-line prints while holding.
    pub status_interval_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            status_interval_ms: 1000,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Device discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Demo preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.kinds.is_empty() {
            return Err(ConfigError::EmptyKinds);
        }
        if self.preview.status_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_kinds_invalid() {
        let mut config = FileConfig::default();
        config.discovery.kinds.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyKinds)));
    }

    #[test]
    fn parses_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [discovery]
            position = "back"
            kinds = ["wide", "telephoto"]
            "#,
        )
        .unwrap();
        assert_eq!(config.discovery.kinds.len(), 2);
        assert_eq!(config.preview.status_interval_ms, 1000);
    }
}
