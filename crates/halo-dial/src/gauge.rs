//! Scalar-to-angle mapping for the indicator dials.
//!
//! Each metric keeps its own angular domain. The generic percent dial and the
//! AQI dial differ on purpose and are not unified.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ensure_finite, DialError, Result};

/// Angular domain a dial maps its value range onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialDomain {
    pub start: f64,
    pub end: f64,
}

impl DialDomain {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// Angle at fraction `t` of the sweep.
    pub fn at(&self, t: f64) -> f64 {
        self.start + t * self.sweep()
    }
}

/// 250° sweep with the gap at the bottom: humidity, rain chance.
pub const PERCENT_DIAL: DialDomain = DialDomain::new(55.0, 305.0);
/// 270° sweep for the AQI gauge.
pub const AQI_DIAL: DialDomain = DialDomain::new(45.0, 315.0);
pub const DEFAULT_AQI_MAX: f64 = 500.0;
pub const PERCENT_MAX: f64 = 100.0;

/// `clamp(value, 0, max) / max` across `domain`.
///
/// # Errors
///
/// [`DialError::InvalidDomainMax`] when `max <= 0`, [`DialError::NonFinite`]
/// for NaN or infinite input.
pub fn dial_angle(value: f64, max: f64, domain: DialDomain) -> Result<f64> {
    ensure_finite(value, "value")?;
    ensure_finite(max, "max")?;
    if max <= 0.0 {
        return Err(DialError::InvalidDomainMax(max));
    }
    Ok(domain.at(value.clamp(0.0, max) / max))
}

/// Percentage metrics (humidity, rain chance) on [`PERCENT_DIAL`].
///
/// # Errors
///
/// See [`dial_angle`].
pub fn percent_angle(value: f64) -> Result<f64> {
    dial_angle(value, PERCENT_MAX, PERCENT_DIAL)
}

/// AQI on [`AQI_DIAL`] with a configurable maximum.
///
/// # Errors
///
/// See [`dial_angle`].
pub fn aqi_angle(value: f64, max: f64) -> Result<f64> {
    dial_angle(value, max, AQI_DIAL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn label_key(&self) -> &'static str {
        match self {
            AqiLevel::Good => "aqi.good",
            AqiLevel::Moderate => "aqi.moderate",
            AqiLevel::UnhealthySensitive => "aqi.unhealthy_sensitive",
            AqiLevel::Unhealthy => "aqi.unhealthy",
            AqiLevel::VeryUnhealthy => "aqi.very_unhealthy",
            AqiLevel::Hazardous => "aqi.hazardous",
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            AqiLevel::Good => "aqi.good.description",
            AqiLevel::Moderate => "aqi.moderate.description",
            AqiLevel::UnhealthySensitive => "aqi.unhealthy_sensitive.description",
            AqiLevel::Unhealthy => "aqi.unhealthy.description",
            AqiLevel::VeryUnhealthy => "aqi.very_unhealthy.description",
            AqiLevel::Hazardous => "aqi.hazardous.description",
        }
    }

    /// Conventional EPA band color.
    pub fn color(&self) -> Rgb {
        match self {
            AqiLevel::Good => Rgb::new(0, 228, 0),
            AqiLevel::Moderate => Rgb::new(255, 255, 0),
            AqiLevel::UnhealthySensitive => Rgb::new(255, 126, 0),
            AqiLevel::Unhealthy => Rgb::new(255, 0, 0),
            AqiLevel::VeryUnhealthy => Rgb::new(143, 63, 151),
            AqiLevel::Hazardous => Rgb::new(126, 0, 35),
        }
    }
}

/// Inclusive upper bounds: 50, 100, 150, 200, 300.
///
/// # Errors
///
/// [`DialError::NonFinite`] for a NaN or infinite value.
pub fn classify_aqi(value: f64) -> Result<AqiLevel> {
    let level = match ensure_finite(value, "aqi")? {
        v if v <= 50.0 => AqiLevel::Good,
        v if v <= 100.0 => AqiLevel::Moderate,
        v if v <= 150.0 => AqiLevel::UnhealthySensitive,
        v if v <= 200.0 => AqiLevel::Unhealthy,
        v if v <= 300.0 => AqiLevel::VeryUnhealthy,
        _ => AqiLevel::Hazardous,
    };
    Ok(level)
}

pub const CALM_LIMIT_MPS: f64 = 6.0;
pub const ALERT_MIN_MPS: f64 = 35.0;
pub const ALERT_MAX_MPS: f64 = 40.0;
/// Speeds at or above this sit at the end of the normal band.
pub const NORMAL_SCALE_MAX_MPS: f64 = 35.0;
pub const BEAUFORT_COLOR_STEP_MPS: f64 = 3.3;

pub const CALM_DIAL: DialDomain = DialDomain::new(55.0, 120.0);
pub const NORMAL_DIAL: DialDomain = DialDomain::new(120.0, 305.0);
pub const ALERT_DIAL: DialDomain = DialDomain::new(240.0, 305.0);

pub const CALM_COLOR: Rgb = Rgb::WHITE;
pub const ALERT_COLOR: Rgb = Rgb::new(255, 59, 48);

pub const BEAUFORT_COLORS: [Rgb; 13] = [
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0xcc, 0xff, 0xff),
    Rgb::new(0x99, 0xff, 0xcc),
    Rgb::new(0x99, 0xff, 0x99),
    Rgb::new(0x99, 0xff, 0x66),
    Rgb::new(0x99, 0xff, 0x00),
    Rgb::new(0xcc, 0xff, 0x00),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0xff, 0xcc, 0x00),
    Rgb::new(0xff, 0x99, 0x00),
    Rgb::new(0xff, 0x66, 0x00),
    Rgb::new(0xff, 0x33, 0x00),
    Rgb::new(0xff, 0x00, 0x00),
];

/// Lower bounds (m/s) of Beaufort forces 1 through 12.
pub const BEAUFORT_LIMITS_MPS: [f64; 12] = [
    0.3, 1.6, 3.4, 5.5, 8.0, 10.8, 13.9, 17.2, 20.8, 24.5, 28.5, 32.7,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindBand {
    Calm,
    Normal,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindReading {
    pub band: WindBand,
    pub angle: f64,
    pub color: Rgb,
}

/// Banded color for a speed: `floor(speed / 3.3)` into [`BEAUFORT_COLORS`].
pub fn beaufort_color(speed_mps: f64) -> Rgb {
    let index = (speed_mps.max(0.0) / BEAUFORT_COLOR_STEP_MPS).floor() as usize;
    BEAUFORT_COLORS[index.min(BEAUFORT_COLORS.len() - 1)]
}

/// Beaufort force number 0..=12.
pub fn beaufort_force(speed_mps: f64) -> u8 {
    BEAUFORT_LIMITS_MPS
        .iter()
        .take_while(|&&limit| speed_mps >= limit)
        .count() as u8
}

/// Wind gauge position and color.
///
/// Calm speeds and the 35–40 m/s alert window have fixed colors and their
/// own sub-ranges; everything else is the normal band colored by the
/// Beaufort table.
///
/// # Errors
///
/// [`DialError::NonFinite`] for NaN or infinite speeds.
pub fn wind_gauge(speed_mps: f64) -> Result<WindReading> {
    let speed = ensure_finite(speed_mps, "wind_speed")?.max(0.0);

    let reading = if speed < CALM_LIMIT_MPS {
        WindReading {
            band: WindBand::Calm,
            angle: CALM_DIAL.at(speed / CALM_LIMIT_MPS),
            color: CALM_COLOR,
        }
    } else if (ALERT_MIN_MPS..=ALERT_MAX_MPS).contains(&speed) {
        WindReading {
            band: WindBand::Alert,
            angle: ALERT_DIAL.at((speed - ALERT_MIN_MPS) / (ALERT_MAX_MPS - ALERT_MIN_MPS)),
            color: ALERT_COLOR,
        }
    } else {
        let t = ((speed - CALM_LIMIT_MPS) / (NORMAL_SCALE_MAX_MPS - CALM_LIMIT_MPS)).min(1.0);
        WindReading {
            band: WindBand::Normal,
            angle: NORMAL_DIAL.at(t),
            color: beaufort_color(speed),
        }
    };

    Ok(reading)
}
