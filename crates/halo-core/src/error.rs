//! Centralized error types for Halo.
//!
//! Every crate keeps its own error enum; `AppError` gathers them for the
//! application shell and maps each to a short message fit for the display.

use halo_weather::WeatherError;
use halo_widgets::WidgetError;
use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather data error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(WeatherError::Io(_)) => {
                "Weather data could not be read. Please try again."
            }
            AppError::Weather(WeatherError::Parse(_)) => {
                "Weather data is malformed. Waiting for the next update."
            }
            AppError::Widget(WidgetError::MissingData(_)) => {
                "Weather data is incomplete. Waiting for the next update."
            }
            AppError::Widget(WidgetError::UnknownWidget(_)) => {
                "Unknown widget. Choose clock, sky, aqi, wind, humidity or rain."
            }
            AppError::Widget(WidgetError::Dial(_)) => {
                "A display setting is out of range. Check your settings."
            }
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}
