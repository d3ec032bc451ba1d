//! Radial geometry and color-interpolation engine for Halo
//!
//! Converts time-valued and scalar weather data into annular vector paths
//! with piecewise color gradients. Every function is pure: "now" is always an
//! explicit argument and nothing is cached between calls.

pub mod celestial;
pub mod clock;
pub mod color;
pub mod drawable;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod gradient;
pub mod path;

pub use celestial::{
    arc_point, celestial_position, CelestialPosition, CelestialWindow, MoonPhase, WindowMode,
};
pub use clock::{
    direction_ticks, hour_angle, hour_marks, ClockFrame, ClockMetric, HourReading, HourSlot,
    LabelPlacement, Tick,
};
pub use color::Rgb;
pub use drawable::Drawable;
pub use error::{DialError, Result};
pub use gauge::{
    aqi_angle, classify_aqi, dial_angle, wind_gauge, AqiLevel, DialDomain, WindBand, WindReading,
};
pub use geometry::{point, Point, RingSpec};
pub use gradient::{gradient_ring, resolve_color, GradientRange, GradientRing, DEFAULT_SEGMENTS};
pub use path::{format_number, full_ring, ring_sector, stroked_arc, Bounds, PathCommand, ShapePath};
