use anyhow::{Context, Result};
use halo_dial::ClockMetric;
use halo_weather::{TemperatureUnit, WindUnit};
use halo_widgets::WidgetSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub dial: DialConfig,

    #[serde(default)]
    pub gauges: GaugesConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    #[serde(default)]
    pub wind_unit: WindUnit,

    #[serde(default)]
    pub dark_mode: bool,

    /// Value printed beside each hour of the clock face
    #[serde(default = "default_clock_metric")]
    pub clock_metric: ClockMetric,
}

fn default_clock_metric() -> ClockMetric {
    ClockMetric::Temperature
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Auto,
            wind_unit: WindUnit::MetersPerSecond,
            dark_mode: false,
            clock_metric: default_clock_metric(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialConfig {
    /// Slices per gradient ring
    #[serde(default = "default_segments")]
    pub segments: usize,

    /// Round the corners of value sectors
    #[serde(default = "default_rounded")]
    pub rounded: bool,
}

fn default_segments() -> usize {
    halo_dial::DEFAULT_SEGMENTS
}

fn default_rounded() -> bool {
    true
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            rounded: default_rounded(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugesConfig {
    /// Top of the AQI scale
    #[serde(default = "default_aqi_max")]
    pub aqi_max: f64,
}

fn default_aqi_max() -> f64 {
    halo_dial::gauge::DEFAULT_AQI_MAX
}

impl Default for GaugesConfig {
    fn default() -> Self {
        Self {
            aqi_max: default_aqi_max(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_size")]
    pub width: u32,

    #[serde(default = "default_size")]
    pub height: u32,

    /// Re-render interval in watch mode
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
}

fn default_size() -> u32 {
    320
}

fn default_tick_seconds() -> u64 {
    1
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            tick_seconds: default_tick_seconds(),
        }
    }
}

impl RenderConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_secs(self.tick_seconds.max(1))
    }
}

/// Highest AQI with its own color band; a smaller scale hides the hazardous band.
const AQI_TOP_BAND: f64 = 300.0;

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, writing defaults", path.display());
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        Self::load_validated_from(&Self::config_path()?)
    }

    pub fn load_validated_from(path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.dial.segments == 0 {
            result.add_error("dial.segments", "Segment count must be greater than 0");
        } else if self.dial.segments > 2000 {
            result.add_warning("dial.segments", "Segment count is unusually large (>2000)");
        }

        if !self.gauges.aqi_max.is_finite() || self.gauges.aqi_max <= 0.0 {
            result.add_error("gauges.aqi_max", "AQI maximum must be a positive number");
        } else if self.gauges.aqi_max < AQI_TOP_BAND {
            result.add_warning(
                "gauges.aqi_max",
                format!("AQI maximum below {AQI_TOP_BAND} hides the upper bands"),
            );
        }

        for (field, value) in [
            ("render.width", self.render.width),
            ("render.height", self.render.height),
        ] {
            if value == 0 {
                result.add_error(field, "Size must be greater than 0");
            } else if value > 10000 {
                result.add_warning(field, "Size is unusually large (>10000)");
            }
        }

        if self.render.tick_seconds == 0 {
            result.add_error("render.tick_seconds", "Tick interval must be at least 1 second");
        } else if self.render.tick_seconds > 3600 {
            result.add_warning(
                "render.tick_seconds",
                "Tick interval is more than an hour; the clock will lag",
            );
        }

        result
    }

    /// Render settings for the widget layer
    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            width: f64::from(self.render.width),
            height: f64::from(self.render.height),
            segments: self.dial.segments,
            rounded: self.dial.rounded,
            aqi_max: self.gauges.aqi_max,
            temperature_unit: self.display.temperature_unit,
            wind_unit: self.display.wind_unit,
            dark_mode: self.display.dark_mode,
            clock_metric: self.display.clock_metric,
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("halo");

        Ok(config_dir.join("config.toml"))
    }
}
