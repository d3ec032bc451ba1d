//! Visibility and arc progress of the sun and moon between rise and set.
//!
//! Times are wall-clock instants on a reference day. A window whose set time
//! is not after its rise time crosses midnight; only [`WindowMode::AllowWrap`]
//! honours that.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::geometry::{point, Point};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Arc angles for progress 0 and 1: a left-to-right semicircle over the top.
pub const ARC_START_ANGLE: f64 = 180.0;
pub const ARC_END_ANGLE: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelestialWindow {
    pub rise: NaiveTime,
    pub set: NaiveTime,
}

impl CelestialWindow {
    pub const fn new(rise: NaiveTime, set: NaiveTime) -> Self {
        Self { rise, set }
    }

    /// Drop the calendar date from provider timestamps. A set on the
    /// following day becomes an earlier wall-clock time, i.e. a wrapping window.
    pub fn from_datetimes(rise: NaiveDateTime, set: NaiveDateTime) -> Self {
        Self::new(rise.time(), set.time())
    }

    pub fn crosses_midnight(&self) -> bool {
        self.rise >= self.set
    }
}

/// Which window semantics apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Sun: visible only inside a same-day window, never wraps.
    Daytime,
    /// Moon: a window with `rise >= set` spans midnight.
    AllowWrap,
}

impl WindowMode {
    pub fn from_daytime_check(is_daytime_check: bool) -> Self {
        if is_daytime_check {
            WindowMode::Daytime
        } else {
            WindowMode::AllowWrap
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialPosition {
    pub is_visible: bool,
    /// Normalised position along the arc, 0 at rise and 1 at set.
    pub progress: f64,
}

impl CelestialPosition {
    pub const HIDDEN: CelestialPosition = CelestialPosition {
        is_visible: false,
        progress: 0.0,
    };
}

fn seconds_of_day(t: NaiveTime) -> f64 {
    f64::from(t.num_seconds_from_midnight()) + f64::from(t.nanosecond()) / 1e9
}

pub fn celestial_position(
    current: NaiveTime,
    window: &CelestialWindow,
    mode: WindowMode,
) -> CelestialPosition {
    let now = seconds_of_day(current);
    let rise = seconds_of_day(window.rise);
    let set = seconds_of_day(window.set);

    let wraps = mode == WindowMode::AllowWrap && rise >= set;
    let is_visible = if wraps {
        now >= rise || now <= set
    } else {
        rise <= now && now <= set
    };

    if !is_visible {
        return CelestialPosition::HIDDEN;
    }

    let duration = if wraps { set + SECONDS_PER_DAY - rise } else { set - rise };
    let elapsed = if now >= rise {
        now - rise
    } else {
        now + SECONDS_PER_DAY - rise
    };

    let progress = if duration <= 0.0 {
        0.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    };

    CelestialPosition {
        is_visible,
        progress,
    }
}

/// Dial angle for a progress value: 180° at rise, 0° at set.
pub fn arc_angle(progress: f64) -> f64 {
    ARC_START_ANGLE - progress * (ARC_START_ANGLE - ARC_END_ANGLE)
}

pub fn arc_point(center: Point, radius: f64, progress: f64) -> Point {
    point(center, radius, arc_angle(progress))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Phase from the illuminated fraction of the disk and whether it is growing.
    pub fn from_illumination(illumination: f64, waxing: bool) -> Self {
        let lit = illumination.clamp(0.0, 1.0);
        match (lit, waxing) {
            (l, _) if l < 0.03 => MoonPhase::New,
            (l, _) if l > 0.97 => MoonPhase::Full,
            (l, true) if (0.47..=0.53).contains(&l) => MoonPhase::FirstQuarter,
            (l, false) if (0.47..=0.53).contains(&l) => MoonPhase::LastQuarter,
            (l, true) if l < 0.47 => MoonPhase::WaxingCrescent,
            (l, false) if l < 0.47 => MoonPhase::WaningCrescent,
            (_, true) => MoonPhase::WaxingGibbous,
            (_, false) => MoonPhase::WaningGibbous,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MoonPhase::New => "new_moon",
            MoonPhase::WaxingCrescent => "waxing_crescent",
            MoonPhase::FirstQuarter => "first_quarter",
            MoonPhase::WaxingGibbous => "waxing_gibbous",
            MoonPhase::Full => "full_moon",
            MoonPhase::WaningGibbous => "waning_gibbous",
            MoonPhase::LastQuarter => "last_quarter",
            MoonPhase::WaningCrescent => "waning_crescent",
        }
    }
}
