//! AQI, wind and percentage dials.

use halo_dial::clock::cardinal_labels;
use halo_dial::gauge::{
    beaufort_force, percent_angle, DialDomain, AQI_DIAL, CALM_DIAL, NORMAL_DIAL, PERCENT_DIAL,
};
use halo_dial::{
    aqi_angle, classify_aqi, direction_ticks, point, ring_sector, wind_gauge, AqiLevel, Drawable,
    GradientRange, GradientRing, Point, Rgb, RingSpec, WindReading,
};
use halo_weather::WindUnit;

use crate::error::{Result, WidgetError};
use crate::scene::Scene;
use crate::{RenderContext, WidgetSettings};

const INNER_RATIO: f64 = 0.78;
const TRACK_OPACITY: f64 = 0.3;

/// Upper bounds of each AQI band below the configured maximum.
const AQI_BAND_LIMITS: [(f64, AqiLevel); 5] = [
    (50.0, AqiLevel::Good),
    (100.0, AqiLevel::Moderate),
    (150.0, AqiLevel::UnhealthySensitive),
    (200.0, AqiLevel::Unhealthy),
    (300.0, AqiLevel::VeryUnhealthy),
];

fn gauge_ring(scene: &Scene) -> Result<RingSpec> {
    let outer = scene.radius();
    RingSpec::new(scene.center(), outer * INNER_RATIO, outer).map_err(Into::into)
}

/// Track, value sector and needle shared by every dial.
fn push_dial(
    scene: &mut Scene,
    ring: &RingSpec,
    domain: DialDomain,
    angle: f64,
    color: Rgb,
    settings: &WidgetSettings,
) {
    let palette = settings.palette();
    scene.push(Drawable::fill(
        ring_sector(ring, domain.start, domain.end, 0.0, settings.rounded),
        palette.track,
        TRACK_OPACITY,
    ));
    if angle > domain.start {
        scene.push(Drawable::fill(
            ring_sector(ring, domain.start, angle, 0.0, settings.rounded),
            color,
            1.0,
        ));
    }
    push_needle(scene, ring, angle, palette.text);
}

fn push_needle(scene: &mut Scene, ring: &RingSpec, angle: f64, color: Rgb) {
    let c = ring.center();
    scene.push(Drawable::Line {
        from: point(c, ring.inner_radius() * 0.55, angle),
        to: point(c, ring.outer_radius(), angle),
        color,
        width: 2.0,
        opacity: 1.0,
    });
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiGauge {
    value: f64,
    max: f64,
}

impl AqiGauge {
    pub fn new(value: f64, max: f64) -> Self {
        Self { value, max }
    }

    /// # Errors
    ///
    /// [`WidgetError::MissingData`] when the snapshot carries no air quality.
    pub fn from_context(ctx: &RenderContext<'_>) -> Result<Self> {
        let air = ctx
            .snapshot
            .air_quality
            .as_ref()
            .ok_or(WidgetError::MissingData("air quality"))?;
        Ok(Self::new(air.aqi, ctx.settings.aqi_max))
    }

    /// # Errors
    ///
    /// [`halo_dial::DialError::NonFinite`] for a NaN or infinite reading.
    pub fn level(&self) -> Result<AqiLevel> {
        classify_aqi(self.value).map_err(Into::into)
    }

    /// Solid band colors laid across the dial for this maximum.
    ///
    /// # Errors
    ///
    /// [`halo_dial::DialError::InvalidDomainMax`] when the maximum is not positive.
    pub fn band_ranges(&self) -> Result<Vec<GradientRange>> {
        let mut ranges = Vec::with_capacity(AQI_BAND_LIMITS.len() + 1);
        let mut lower = 0.0;
        for (upper, level) in AQI_BAND_LIMITS {
            ranges.push(GradientRange::solid(
                aqi_angle(lower, self.max)?,
                aqi_angle(upper, self.max)?,
                level.color(),
            ));
            lower = upper;
        }
        ranges.push(GradientRange::solid(
            aqi_angle(lower, self.max)?,
            AQI_DIAL.end,
            AqiLevel::Hazardous.color(),
        ));
        Ok(ranges)
    }

    /// # Errors
    ///
    /// Propagates an invalid maximum or segment count from the dial engine.
    pub fn scene(&self, settings: &WidgetSettings) -> Result<Scene> {
        let palette = settings.palette();
        let mut scene = settings.blank_scene();
        let ring = gauge_ring(&scene)?;
        let angle = aqi_angle(self.value, self.max)?;
        let level = self.level()?;

        let track = GradientRing::new(ring, AQI_DIAL.start, AQI_DIAL.end)
            .with_segments(settings.segments)
            .with_ranges(self.band_ranges()?)
            .with_default_color(palette.track)
            .with_opacity(TRACK_OPACITY)
            .render()?;
        scene.extend(track);

        if angle > AQI_DIAL.start {
            scene.push(Drawable::fill(
                ring_sector(&ring, AQI_DIAL.start, angle, 0.0, settings.rounded),
                level.color(),
                1.0,
            ));
        }
        push_needle(&mut scene, &ring, angle, palette.text);

        let c = scene.center();
        scene.label(c, format!("{:.0}", self.value), palette.text);
        scene.label(Point::new(c.x, c.y + 18.0), level.label_key(), palette.text);
        Ok(scene)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindGauge {
    speed_mps: f64,
    direction: f64,
    unit: WindUnit,
}

impl WindGauge {
    pub fn new(speed_mps: f64, direction: f64, unit: WindUnit) -> Self {
        Self {
            speed_mps,
            direction,
            unit,
        }
    }

    pub fn from_context(ctx: &RenderContext<'_>) -> Self {
        let current = &ctx.snapshot.current;
        Self::new(current.wind_speed, current.wind_direction, ctx.settings.wind_unit)
    }

    /// # Errors
    ///
    /// [`halo_dial::DialError::NonFinite`] for a NaN or infinite speed.
    pub fn reading(&self) -> Result<WindReading> {
        wind_gauge(self.speed_mps).map_err(Into::into)
    }

    /// # Errors
    ///
    /// See [`WindGauge::reading`].
    pub fn scene(&self, settings: &WidgetSettings) -> Result<Scene> {
        let palette = settings.palette();
        let mut scene = settings.blank_scene();
        let ring = gauge_ring(&scene)?;
        let reading = self.reading()?;
        let domain = DialDomain::new(CALM_DIAL.start, NORMAL_DIAL.end);
        push_dial(&mut scene, &ring, domain, reading.angle, reading.color, settings);

        let c = ring.center();
        let inner = ring.inner_radius();
        for tick in direction_ticks(c, inner * 0.62, inner * 0.7) {
            scene.push(Drawable::Line {
                from: tick.from,
                to: tick.to,
                color: palette.text,
                width: if tick.emphasized { 2.0 } else { 1.0 },
                opacity: if tick.emphasized { 0.9 } else { 0.5 },
            });
        }
        for (label, at) in cardinal_labels(c, inner * 0.66) {
            scene.label(at, label, palette.text);
        }

        // Meteorological direction is where the wind comes from; the arrow
        // points downwind.
        let head = point(c, inner * 0.45, self.direction + 180.0);
        scene.push(Drawable::Line {
            from: point(c, inner * 0.45, self.direction),
            to: head,
            color: palette.accent,
            width: 3.0,
            opacity: 1.0,
        });
        scene.push(Drawable::Dot {
            center: head,
            radius: 4.0,
            color: palette.accent,
            opacity: 1.0,
        });

        scene.label(
            Point::new(c.x, c.y + inner * 0.25),
            format!("{:.0} {}", self.unit.convert(self.speed_mps), self.unit.label()),
            palette.text,
        );
        scene.label(
            Point::new(c.x, c.y + inner * 0.38),
            format!("Bft {}", beaufort_force(self.speed_mps)),
            palette.text,
        );
        Ok(scene)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentKind {
    Humidity,
    Rain,
}

/// Humidity or rain chance on the generic percent dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentDial {
    kind: PercentKind,
    value: f64,
}

impl PercentDial {
    pub fn new(kind: PercentKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn from_context(ctx: &RenderContext<'_>, kind: PercentKind) -> Self {
        let current = &ctx.snapshot.current;
        let value = match kind {
            PercentKind::Humidity => current.humidity,
            PercentKind::Rain => current.precipitation_chance,
        };
        Self::new(kind, f64::from(value))
    }

    /// # Errors
    ///
    /// [`halo_dial::DialError::NonFinite`] for a NaN or infinite value.
    pub fn scene(&self, settings: &WidgetSettings) -> Result<Scene> {
        let palette = settings.palette();
        let mut scene = settings.blank_scene();
        let ring = gauge_ring(&scene)?;
        let angle = percent_angle(self.value)?;
        let color = match self.kind {
            PercentKind::Humidity => palette.accent,
            PercentKind::Rain => palette.rain,
        };
        push_dial(&mut scene, &ring, PERCENT_DIAL, angle, color, settings);
        scene.label(
            scene.center(),
            format!("{:.0}%", self.value.clamp(0.0, 100.0)),
            palette.text,
        );
        Ok(scene)
    }
}
