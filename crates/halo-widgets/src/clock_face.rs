//! 24-hour clock face.
//!
//! The face is fixed (hour `h` always sits at `h * 15°`) and the rolling
//! 24-hour window of readings is laid over it starting at the current hour.

use chrono::{NaiveTime, Timelike};
use halo_dial::clock::{DEGREES_PER_HOUR, HOURS_PER_DAY};
use halo_dial::{
    full_ring, point, ring_sector, ClockFrame, Drawable, GradientRange, GradientRing, HourReading,
    Point, Rgb, RingSpec,
};
use halo_weather::{HourlyForecast, WeatherCondition};

use crate::error::{Result, WidgetError};
use crate::scene::Scene;
use crate::{RenderContext, WidgetSettings};

/// Half-width of the color ramp around sunrise and sunset.
pub const TWILIGHT_HALF_WIDTH: f64 = 15.0;
/// Minimum chance of precipitation that earns an hour a rain dot.
/// Hours whose weather code is itself wet get one regardless.
pub const RAIN_DOT_THRESHOLD: u8 = 30;

const PAST_OPACITY: f64 = 0.45;
const INNER_RATIO: f64 = 0.8;
const LABEL_RATIO: f64 = 0.66;

/// Face angle of a time of day.
pub fn time_angle(time: NaiveTime) -> f64 {
    let hours = f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + f64::from(time.second()) / 3600.0;
    hours * DEGREES_PER_HOUR
}

/// Night-to-day ranges for the clock rings: a ramp across sunrise, solid day,
/// a ramp across sunset. Anything uncovered falls back to the night color.
pub fn daylight_ranges(
    sunrise_angle: f64,
    sunset_angle: f64,
    night: Rgb,
    day: Rgb,
) -> Vec<GradientRange> {
    vec![
        GradientRange::new(
            sunrise_angle - TWILIGHT_HALF_WIDTH,
            sunrise_angle + TWILIGHT_HALF_WIDTH,
            night,
            day,
        ),
        GradientRange::solid(
            sunrise_angle + TWILIGHT_HALF_WIDTH,
            sunset_angle - TWILIGHT_HALF_WIDTH,
            day,
        ),
        GradientRange::new(
            sunset_angle - TWILIGHT_HALF_WIDTH,
            sunset_angle + TWILIGHT_HALF_WIDTH,
            day,
            night,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    frame: ClockFrame,
    sunrise_angle: f64,
    sunset_angle: f64,
    current_temperature: f64,
    temperature_symbol: &'static str,
}

impl ClockFace {
    pub fn new(
        frame: ClockFrame,
        sunrise: NaiveTime,
        sunset: NaiveTime,
        current_temperature: f64,
        temperature_symbol: &'static str,
    ) -> Self {
        Self {
            frame,
            sunrise_angle: time_angle(sunrise),
            sunset_angle: time_angle(sunset),
            current_temperature,
            temperature_symbol,
        }
    }

    /// # Errors
    ///
    /// [`WidgetError::MissingData`] without a daily record or with fewer than
    /// 24 hourly entries from the current hour on.
    pub fn from_context(ctx: &RenderContext<'_>) -> Result<Self> {
        let settings = ctx.settings;
        let day = ctx
            .snapshot
            .day(ctx.now.date())
            .ok_or(WidgetError::MissingData("daily forecast"))?;
        let hours = ctx.snapshot.hours_from(ctx.now);
        if hours.len() < HOURS_PER_DAY {
            return Err(WidgetError::MissingData("24 hours of hourly forecast"));
        }

        let readings: Vec<HourReading> = hours
            .iter()
            .take(HOURS_PER_DAY)
            .map(|h| to_reading(h, settings))
            .collect();
        let frame = ClockFrame::new(ctx.now.hour(), ctx.now.minute(), &readings)?;

        Ok(Self::new(
            frame,
            day.sunrise,
            day.sunset,
            settings
                .temperature_unit
                .convert(ctx.snapshot.current.temperature),
            settings.temperature_unit.symbol(),
        ))
    }

    pub fn frame(&self) -> &ClockFrame {
        &self.frame
    }

    /// # Errors
    ///
    /// Propagates invalid ring or gradient settings from the dial engine.
    pub fn scene(&self, settings: &WidgetSettings) -> Result<Scene> {
        let palette = settings.palette();
        let mut scene = settings.blank_scene();
        let c = scene.center();
        let outer = scene.radius();
        let ring = RingSpec::new(c, outer * INNER_RATIO, outer)?;
        let ranges = daylight_ranges(
            self.sunrise_angle,
            self.sunset_angle,
            palette.night,
            palette.day,
        );

        scene.push(Drawable::Fill {
            path: full_ring(&ring),
            color: palette.track,
            opacity: 0.2,
            even_odd: true,
        });

        let (active_start, active_end) = self.frame.active_hour_span();
        if active_start > 0.0 {
            let past = GradientRing::new(ring, 0.0, active_start)
                .with_segments(self.frame.past_ring_segments(settings.segments))
                .with_ranges(ranges.clone())
                .with_default_color(palette.night)
                .with_opacity(PAST_OPACITY)
                .render()?;
            scene.extend(past);
        }
        if active_end < 360.0 {
            let future = GradientRing::new(ring, active_end, 360.0)
                .with_segments(settings.segments)
                .with_ranges(ranges)
                .with_default_color(palette.night)
                .render()?;
            scene.extend(future);
        }

        let active_ring = RingSpec::new(c, ring.inner_radius() * 0.96, outer)?;
        scene.push(Drawable::fill(
            ring_sector(&active_ring, active_start, active_end, 0.0, settings.rounded),
            palette.accent,
            1.0,
        ));

        push_hour_ticks(&mut scene, c, ring.inner_radius(), palette.text);
        self.push_rain_dots(&mut scene, &ring, palette.rain);

        for label in self.frame.labels(c, outer * LABEL_RATIO, settings.clock_metric) {
            let color = if label.hour == self.frame.current_hour() {
                palette.accent
            } else {
                palette.text
            };
            scene.label(label.position, label.text, color);
        }

        scene.push(Drawable::Line {
            from: c,
            to: point(c, outer, self.frame.hand_angle()),
            color: palette.accent,
            width: 2.0,
            opacity: 1.0,
        });
        scene.push(Drawable::Dot {
            center: c,
            radius: 3.0,
            color: palette.accent,
            opacity: 1.0,
        });
        scene.label(
            Point::new(c.x, c.y + outer * 0.2),
            format!("{:.0}{}", self.current_temperature, self.temperature_symbol),
            palette.text,
        );

        tracing::debug!(
            hour = self.frame.current_hour(),
            drawables = scene.drawables.len(),
            "Composed clock face"
        );
        Ok(scene)
    }

    fn push_rain_dots(&self, scene: &mut Scene, ring: &RingSpec, color: Rgb) {
        for slot in self.frame.slots() {
            let chance = slot.reading.precipitation_chance;
            let wet = WeatherCondition::from_wmo_code(slot.reading.weather_code).is_precipitation();
            if chance < RAIN_DOT_THRESHOLD && !wet {
                continue;
            }
            let floor = f64::from(RAIN_DOT_THRESHOLD) / 100.0;
            scene.push(Drawable::Dot {
                center: point(ring.center(), ring.mid_radius(), slot.angle),
                radius: ring.band_width() * 0.12,
                color,
                opacity: (f64::from(chance.min(100)) / 100.0).max(floor),
            });
        }
    }
}

fn push_hour_ticks(scene: &mut Scene, c: Point, inner: f64, color: Rgb) {
    for hour in 0..HOURS_PER_DAY as u32 {
        let angle = halo_dial::hour_angle(hour);
        let major = hour % 6 == 0;
        let length = if major { 0.1 } else { 0.05 };
        scene.push(Drawable::Line {
            from: point(c, inner * (0.98 - length), angle),
            to: point(c, inner * 0.98, angle),
            color,
            width: if major { 2.0 } else { 1.0 },
            opacity: 0.8,
        });
    }
}

fn to_reading(hour: &HourlyForecast, settings: &WidgetSettings) -> HourReading {
    HourReading {
        temperature: settings.temperature_unit.convert(hour.temperature),
        wind_speed: settings.wind_unit.convert(hour.wind_speed),
        wind_direction: hour.wind_direction,
        precipitation_chance: hour.precipitation_chance,
        weather_code: hour.weather_code,
    }
}
