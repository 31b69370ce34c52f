//! Planner configuration
//!
//! Provides the configuration file of the planner. Supports JSON and TOML
//! files, validated on every load and save.
//!
//! Configuration is organized into sections:
//! - Overlay defaults (site size before a location is picked)
//! - Weather analysis (frost temperature, risk thresholds)
//! - Storage (where persisted planner state lives)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "gardenkit";
const CONFIG_FILE: &str = "config.toml";

/// Bed overlay defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Canvas size in meters when the location has no size yet
    pub default_site_size_in_meters: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            default_site_size_in_meters: 40.0,
        }
    }
}

/// Weather analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
    /// A daily minimum at or below this temperature (°C) counts as frost
    pub frost_temperature: f64,
    /// Frost probability below which a day is low risk
    pub low_risk_threshold: f64,
    /// Frost probability below which a day is high rather than certain risk
    pub high_risk_threshold: f64,
    /// Shortest annotated run of days
    pub min_window_days: usize,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            frost_temperature: 0.0,
            low_risk_threshold: 0.1,
            high_risk_threshold: 0.5,
            min_window_days: 3,
        }
    }
}

/// Storage location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one JSON file per persisted key
    pub data_directory: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_directory: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub overlay: OverlaySettings,
    pub weather: WeatherSettings,
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

impl PlannerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file path, e.g. `~/.config/gardenkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let size = self.overlay.default_site_size_in_meters;
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::out_of_range(
                "overlay.default_site_size_in_meters",
                size,
            ));
        }

        let weather = &self.weather;
        if !weather.frost_temperature.is_finite() {
            return Err(ConfigError::out_of_range(
                "weather.frost_temperature",
                weather.frost_temperature,
            ));
        }
        if !(0.0..=1.0).contains(&weather.low_risk_threshold) {
            return Err(ConfigError::out_of_range(
                "weather.low_risk_threshold",
                weather.low_risk_threshold,
            ));
        }
        if !(weather.low_risk_threshold..=1.0).contains(&weather.high_risk_threshold) {
            return Err(ConfigError::out_of_range(
                "weather.high_risk_threshold",
                weather.high_risk_threshold,
            ));
        }
        if weather.min_window_days == 0 {
            return Err(ConfigError::out_of_range("weather.min_window_days", 0));
        }

        Ok(())
    }
}
