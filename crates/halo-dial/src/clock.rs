//! Rolling 24-hour clock face.
//!
//! Slot 0 is always the current hour, but every slot is drawn at the angle of
//! its raw hour value: the face is fixed and the data window rotates through it.

use serde::{Deserialize, Serialize};

use crate::error::{DialError, Result};
use crate::geometry::{point, Point};

pub const HOURS_PER_DAY: usize = 24;
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Half of one hour's angular width; the "now" wedge spans twice this.
pub const ACTIVE_HOUR_HALF_WIDTH: f64 = 7.5;

/// Hours after this one draw the past ring with a reduced slice count.
pub const LATE_HOUR_THRESHOLD: u32 = 17;
pub const LATE_HOUR_PAST_SEGMENTS: usize = 25;

/// Where each quadrant's tick run begins.
pub const CARDINAL_BASE_ANGLES: [f64; 4] = [12.0, 102.0, 192.0, 282.0];
/// Cardinal labels sit in the gaps between tick runs.
pub const CARDINAL_LABEL_ANGLES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
pub const CARDINAL_LABELS: [&str; 4] = ["N", "E", "S", "W"];
pub const TICK_STEP_DEGREES: f64 = 6.0;
pub const TICK_EMPHASIS: [bool; 12] = [
    false, false, false, true, false, false, false, false, true, false, false, false,
];

fn check_hour(hour: u32) -> Result<u32> {
    if hour as usize >= HOURS_PER_DAY {
        return Err(DialError::InvalidHour(hour));
    }
    Ok(hour)
}

/// `(current_hour + i) mod 24` for `i` in `0..24`.
///
/// # Errors
///
/// [`DialError::InvalidHour`] when `current_hour > 23`.
pub fn hour_marks(current_hour: u32) -> Result<[u32; HOURS_PER_DAY]> {
    let current_hour = check_hour(current_hour)?;
    let mut marks = [0; HOURS_PER_DAY];
    for (i, mark) in marks.iter_mut().enumerate() {
        *mark = (current_hour + i as u32) % HOURS_PER_DAY as u32;
    }
    Ok(marks)
}

/// Fixed face position of an hour value.
pub fn hour_angle(hour: u32) -> f64 {
    f64::from(hour) * DEGREES_PER_HOUR
}

/// Angle of the "now" needle, advancing smoothly through the hour.
///
/// # Errors
///
/// [`DialError::InvalidHour`] or [`DialError::InvalidMinute`] for out-of-range inputs.
pub fn hand_angle(hour: u32, minute: u32) -> Result<f64> {
    let hour = check_hour(hour)?;
    if minute >= 60 {
        return Err(DialError::InvalidMinute(minute));
    }
    Ok((f64::from(hour) + f64::from(minute) / 60.0) * DEGREES_PER_HOUR)
}

/// Slice count for the past ring.
///
/// Late in the day the past sweep approaches a full turn and the default
/// density misrenders, so a fixed lower count is used instead.
pub fn past_ring_segments(current_hour: u32, default_segments: usize) -> usize {
    if current_hour > LATE_HOUR_THRESHOLD {
        LATE_HOUR_PAST_SEGMENTS
    } else {
        default_segments
    }
}

/// One hour's wedge centered on the current hour.
pub fn active_hour_span(current_hour: u32) -> (f64, f64) {
    let center = hour_angle(current_hour);
    (center - ACTIVE_HOUR_HALF_WIDTH, center + ACTIVE_HOUR_HALF_WIDTH)
}

/// Per-hour values supplied by the data provider, already aligned so index 0
/// is the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HourReading {
    pub temperature: f64,
    pub wind_speed: f64,
    /// Degrees, meteorological: the direction the wind blows from.
    #[serde(default)]
    pub wind_direction: f64,
    #[serde(default)]
    pub precipitation_chance: u8,
    #[serde(default)]
    pub weather_code: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMetric {
    Temperature,
    Wind,
    Precipitation,
}

impl ClockMetric {
    pub fn value(&self, reading: &HourReading) -> f64 {
        match self {
            ClockMetric::Temperature => reading.temperature,
            ClockMetric::Wind => reading.wind_speed,
            ClockMetric::Precipitation => f64::from(reading.precipitation_chance),
        }
    }

    pub fn format(&self, reading: &HourReading) -> String {
        match self {
            ClockMetric::Temperature => format!("{:.0}°", reading.temperature),
            ClockMetric::Wind => format!("{:.0}", reading.wind_speed),
            ClockMetric::Precipitation => format!("{}%", reading.precipitation_chance),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourSlot {
    /// Position in the rolling window, 0 = now.
    pub index: usize,
    pub hour: u32,
    pub angle: f64,
    pub reading: HourReading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub hour: u32,
    pub angle: f64,
    pub position: Point,
    pub value: f64,
    pub text: String,
}

/// 24 hour slots anchored at the current hour.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFrame {
    current_hour: u32,
    current_minute: u32,
    readings: Vec<HourReading>,
}

impl ClockFrame {
    /// Only the first 24 readings are used.
    ///
    /// # Errors
    ///
    /// [`DialError::InvalidHour`] / [`DialError::InvalidMinute`] for a bad
    /// time and [`DialError::IncompleteFrame`] when fewer than 24 readings
    /// are supplied.
    pub fn new(current_hour: u32, current_minute: u32, readings: &[HourReading]) -> Result<Self> {
        hand_angle(current_hour, current_minute)?;
        if readings.len() < HOURS_PER_DAY {
            return Err(DialError::IncompleteFrame {
                expected: HOURS_PER_DAY,
                got: readings.len(),
            });
        }
        Ok(Self {
            current_hour,
            current_minute,
            readings: readings[..HOURS_PER_DAY].to_vec(),
        })
    }

    pub fn current_hour(&self) -> u32 {
        self.current_hour
    }

    pub fn current_minute(&self) -> u32 {
        self.current_minute
    }

    pub fn readings(&self) -> &[HourReading] {
        &self.readings
    }

    pub fn slots(&self) -> Vec<HourSlot> {
        (0..HOURS_PER_DAY)
            .zip(&self.readings)
            .map(|(index, reading)| {
                let hour = (self.current_hour + index as u32) % HOURS_PER_DAY as u32;
                HourSlot {
                    index,
                    hour,
                    angle: hour_angle(hour),
                    reading: *reading,
                }
            })
            .collect()
    }

    /// Label for every slot, placed on the circle of `radius` at the slot's hour angle.
    pub fn labels(&self, center: Point, radius: f64, metric: ClockMetric) -> Vec<LabelPlacement> {
        self.slots()
            .into_iter()
            .map(|slot| LabelPlacement {
                hour: slot.hour,
                angle: slot.angle,
                position: point(center, radius, slot.angle),
                value: metric.value(&slot.reading),
                text: metric.format(&slot.reading),
            })
            .collect()
    }

    pub fn active_hour_span(&self) -> (f64, f64) {
        active_hour_span(self.current_hour)
    }

    pub fn past_ring_segments(&self, default_segments: usize) -> usize {
        past_ring_segments(self.current_hour, default_segments)
    }

    pub fn hand_angle(&self) -> f64 {
        (f64::from(self.current_hour) + f64::from(self.current_minute) / 60.0) * DEGREES_PER_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub angle: f64,
    pub emphasized: bool,
    pub from: Point,
    pub to: Point,
}

/// 48 compass ticks: 12 per quadrant from each base angle in 6° steps.
pub fn direction_ticks(center: Point, inner_radius: f64, outer_radius: f64) -> Vec<Tick> {
    CARDINAL_BASE_ANGLES
        .iter()
        .flat_map(|&base| {
            TICK_EMPHASIS.iter().enumerate().map(move |(k, &emphasized)| {
                let angle = base + k as f64 * TICK_STEP_DEGREES;
                Tick {
                    angle,
                    emphasized,
                    from: point(center, inner_radius, angle),
                    to: point(center, outer_radius, angle),
                }
            })
        })
        .collect()
}

/// N/E/S/W positioned in the gaps between tick runs.
pub fn cardinal_labels(center: Point, radius: f64) -> Vec<(&'static str, Point)> {
    CARDINAL_LABELS
        .iter()
        .zip(CARDINAL_LABEL_ANGLES)
        .map(|(&label, angle)| (label, point(center, radius, angle)))
        .collect()
}
