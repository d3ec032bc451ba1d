//! Piecewise angle-keyed color gradients rendered as many flat-colored
//! sectors.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::drawable::Drawable;
use crate::error::{ensure_finite, DialError, Result};
use crate::geometry::RingSpec;
use crate::path::ring_sector;

/// Slice count used when the caller does not pick one.
pub const DEFAULT_SEGMENTS: usize = 200;

/// Linear color ramp over `[start_angle, end_angle]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientRange {
    pub start_angle: f64,
    pub end_angle: f64,
    pub color_start: Rgb,
    pub color_end: Rgb,
}

impl GradientRange {
    pub const fn new(start_angle: f64, end_angle: f64, color_start: Rgb, color_end: Rgb) -> Self {
        Self {
            start_angle,
            end_angle,
            color_start,
            color_end,
        }
    }

    /// Single color over a span.
    pub const fn solid(start_angle: f64, end_angle: f64, color: Rgb) -> Self {
        Self::new(start_angle, end_angle, color, color)
    }

    /// The angle re-expressed inside this range, if the range contains it.
    ///
    /// Containment is tested as given first, then modulo 360 relative to
    /// `start_angle`, so `[300, 420]` contains 30.
    fn locate(&self, angle: f64) -> Option<f64> {
        if self.start_angle <= angle && angle <= self.end_angle {
            return Some(angle);
        }
        let wrapped = self.start_angle + (angle - self.start_angle).rem_euclid(360.0);
        (wrapped <= self.end_angle).then_some(wrapped)
    }

    /// Color of this range at `angle`, or `None` outside it.
    pub fn color_at(&self, angle: f64) -> Option<Rgb> {
        let local = self.locate(angle)?;
        let width = self.end_angle - self.start_angle;
        if width == 0.0 {
            return Some(self.color_start);
        }
        let t = (local - self.start_angle) / width;
        Some(self.color_start.lerp(self.color_end, t))
    }
}

/// First range in list order that contains `angle`, else `default_color`.
pub fn resolve_color(ranges: &[GradientRange], angle: f64, default_color: Rgb) -> Rgb {
    ranges
        .iter()
        .find_map(|range| range.color_at(angle))
        .unwrap_or(default_color)
}

/// An angular span of a ring painted with gradient ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRing {
    ring: RingSpec,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
    ranges: Vec<GradientRange>,
    default_color: Rgb,
    opacity: f64,
    rotation: f64,
}

impl GradientRing {
    pub fn new(ring: RingSpec, start_angle: f64, end_angle: f64) -> Self {
        Self {
            ring,
            start_angle,
            end_angle,
            segments: DEFAULT_SEGMENTS,
            ranges: Vec::new(),
            default_color: Rgb::WHITE,
            opacity: 1.0,
            rotation: 0.0,
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_ranges(mut self, ranges: Vec<GradientRange>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_default_color(mut self, color: Rgb) -> Self {
        self.default_color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Offset applied to slice geometry only; colors stay keyed to unrotated angles.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Emit exactly `segments` flat-colored sectors.
    ///
    /// # Errors
    ///
    /// [`DialError::InvalidSegments`] for a zero segment count,
    /// [`DialError::InvalidOpacity`] for opacity outside [0, 1], and
    /// [`DialError::NonFinite`] for non-finite angles.
    pub fn render(&self) -> Result<Vec<Drawable>> {
        if self.segments == 0 {
            return Err(DialError::InvalidSegments(self.segments));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(DialError::InvalidOpacity(self.opacity));
        }
        ensure_finite(self.start_angle, "start_angle")?;
        ensure_finite(self.end_angle, "end_angle")?;
        ensure_finite(self.rotation, "rotation")?;

        let step = (self.end_angle - self.start_angle) / self.segments as f64;
        tracing::trace!(
            segments = self.segments,
            start = self.start_angle,
            end = self.end_angle,
            "Rendering gradient ring"
        );

        let drawables = (0..self.segments)
            .map(|i| {
                let from = self.start_angle + step * i as f64;
                let to = from + step;
                let mid = from + step / 2.0;
                let color = resolve_color(&self.ranges, mid, self.default_color);
                Drawable::fill(
                    ring_sector(&self.ring, from, to, self.rotation, false),
                    color,
                    self.opacity,
                )
            })
            .collect();

        Ok(drawables)
    }
}

/// Free-function form of [`GradientRing`].
///
/// # Errors
///
/// See [`GradientRing::render`].
pub fn gradient_ring(
    ring: RingSpec,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
    ranges: &[GradientRange],
    default_color: Rgb,
    opacity: f64,
) -> Result<Vec<Drawable>> {
    GradientRing::new(ring, start_angle, end_angle)
        .with_segments(segments)
        .with_ranges(ranges.to_vec())
        .with_default_color(default_color)
        .with_opacity(opacity)
        .render()
}
