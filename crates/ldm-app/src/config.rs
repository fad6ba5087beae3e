//! Configuration management for ldm-checker
//!
//! Config stored at: ~/.config/ldm-checker/config.json

use std::path::{Path, PathBuf};

use ldm_domain::VehicleKind;
use ldm_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle evaluated when an order names none (bus, solówka, naczepa)
    #[serde(default = "default_vehicle")]
    pub default_vehicle: String,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Report each order analysis to the telemetry log target
    #[serde(default)]
    pub telemetry_enabled: bool,
}

fn default_vehicle() -> String {
    VehicleKind::Trailer.identifier().to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_vehicle: default_vehicle(),
            output_format: default_output_format(),
            telemetry_enabled: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ldm-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Vehicle class of [`Config::default_vehicle`]
    pub fn default_vehicle_kind(&self) -> VehicleKind {
        VehicleKind::from_identifier(&self.default_vehicle)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or create default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "LDM Checker Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Default vehicle: {} ({})",
            self.default_vehicle,
            self.default_vehicle_kind()
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Telemetry:       {}", self.telemetry_enabled)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_vehicle, "naczepa");
        assert_eq!(config.default_vehicle_kind(), VehicleKind::Trailer);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(!config.telemetry_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format": "json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_vehicle, "naczepa");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            default_vehicle: "solówka".to_string(),
            output_format: OutputFormat::Json,
            telemetry_enabled: true,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.default_vehicle_kind(), VehicleKind::Solo);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
