//! Widget composition for Halo
//!
//! Turns a [`WeatherSnapshot`] plus an explicit "now" into [`Scene`]s built
//! from the dial engine's drawables.

pub mod clock_face;
pub mod error;
pub mod gauges;
pub mod scene;
pub mod sky_track;
pub mod svg;
pub mod theme;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use halo_dial::ClockMetric;
use halo_weather::{TemperatureUnit, WeatherSnapshot, WindUnit};
use serde::{Deserialize, Serialize};

pub use clock_face::ClockFace;
pub use error::{Result, WidgetError};
pub use gauges::{AqiGauge, PercentDial, PercentKind, WindGauge};
pub use scene::Scene;
pub use sky_track::SkyTrack;
pub use theme::Palette;

/// Widgets that can be rendered by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Clock,
    Sky,
    Aqi,
    Wind,
    Humidity,
    Rain,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 6] = [
        WidgetKind::Clock,
        WidgetKind::Sky,
        WidgetKind::Aqi,
        WidgetKind::Wind,
        WidgetKind::Humidity,
        WidgetKind::Rain,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Clock => "clock",
            WidgetKind::Sky => "sky",
            WidgetKind::Aqi => "aqi",
            WidgetKind::Wind => "wind",
            WidgetKind::Humidity => "humidity",
            WidgetKind::Rain => "rain",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| WidgetError::UnknownWidget(s.to_string()))
    }
}

/// Render-time knobs, usually filled from the application config.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSettings {
    pub width: f64,
    pub height: f64,
    pub segments: usize,
    pub rounded: bool,
    pub aqi_max: f64,
    pub temperature_unit: TemperatureUnit,
    pub wind_unit: WindUnit,
    pub dark_mode: bool,
    pub clock_metric: ClockMetric,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 320.0,
            segments: halo_dial::DEFAULT_SEGMENTS,
            rounded: true,
            aqi_max: halo_dial::gauge::DEFAULT_AQI_MAX,
            temperature_unit: TemperatureUnit::default(),
            wind_unit: WindUnit::default(),
            dark_mode: false,
            clock_metric: ClockMetric::Temperature,
        }
    }
}

impl WidgetSettings {
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.dark_mode)
    }

    pub(crate) fn blank_scene(&self) -> Scene {
        Scene::new(self.width, self.height, self.palette().background)
    }
}

/// Inputs of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub now: NaiveDateTime,
    pub settings: &'a WidgetSettings,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        snapshot: &'a WeatherSnapshot,
        now: NaiveDateTime,
        settings: &'a WidgetSettings,
    ) -> Self {
        Self {
            snapshot,
            now,
            settings,
        }
    }
}

/// Build the scene for `kind`.
///
/// # Errors
///
/// [`WidgetError::MissingData`] when the snapshot lacks a record the widget
/// needs, and [`WidgetError::Dial`] for invalid settings.
pub fn render_widget(kind: WidgetKind, ctx: &RenderContext<'_>) -> Result<Scene> {
    tracing::debug!("Rendering {} widget at {}", kind, ctx.now);
    match kind {
        WidgetKind::Clock => ClockFace::from_context(ctx)?.scene(ctx.settings),
        WidgetKind::Sky => SkyTrack::from_context(ctx)?.scene(ctx.settings),
        WidgetKind::Aqi => AqiGauge::from_context(ctx)?.scene(ctx.settings),
        WidgetKind::Wind => WindGauge::from_context(ctx).scene(ctx.settings),
        WidgetKind::Humidity => {
            PercentDial::from_context(ctx, PercentKind::Humidity).scene(ctx.settings)
        }
        WidgetKind::Rain => PercentDial::from_context(ctx, PercentKind::Rain).scene(ctx.settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_kind_parse() {
        assert_eq!("clock".parse::<WidgetKind>().unwrap(), WidgetKind::Clock);
        assert_eq!(" Wind ".parse::<WidgetKind>().unwrap(), WidgetKind::Wind);
        for kind in WidgetKind::ALL {
            assert_eq!(kind.name().parse::<WidgetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_widget_kind_unknown() {
        let err = "radar".parse::<WidgetKind>().unwrap_err();
        assert!(matches!(err, WidgetError::UnknownWidget(ref name) if name == "radar"));
    }

    #[test]
    fn test_settings_default() {
        let settings = WidgetSettings::default();
        assert_eq!(settings.segments, 200);
        assert_eq!(settings.aqi_max, 500.0);
        assert_eq!(settings.palette(), Palette::LIGHT);
    }
}
