//! Polar helpers shared by every widget.
//!
//! Angles are degrees with 0 at 12 o'clock, growing clockwise. Surface
//! coordinates grow rightward and downward, so the conversion is
//! `(cx + r·sin θ, cy − r·cos θ)`.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, DialError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Point on the circle of `radius` around `center` at `angle_deg`.
pub fn point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    Point {
        x: center.x + radius * theta.sin(),
        y: center.y - radius * theta.cos(),
    }
}

/// Normalise an angle to the half-open range [0°, 360°).
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    angle_deg.rem_euclid(360.0)
}

/// Center and radii of an annulus. `inner_radius == 0` describes a disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingSpec {
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
}

impl RingSpec {
    /// # Errors
    ///
    /// Returns [`DialError::InvalidRadii`] unless `0 <= inner < outer`, and
    /// [`DialError::NonFinite`] for NaN or infinite inputs.
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Result<Self> {
        ensure_finite(center.x, "center.x")?;
        ensure_finite(center.y, "center.y")?;
        ensure_finite(inner_radius, "inner_radius")?;
        ensure_finite(outer_radius, "outer_radius")?;

        if inner_radius < 0.0 || inner_radius >= outer_radius {
            return Err(DialError::InvalidRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        Ok(Self {
            center,
            inner_radius,
            outer_radius,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Radius halfway through the band, where labels and bodies sit.
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    pub fn band_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}
