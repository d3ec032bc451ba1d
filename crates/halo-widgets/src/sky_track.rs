//! Sun and moon on a half-circle horizon track.

use chrono::NaiveTime;
use halo_dial::celestial::{ARC_END_ANGLE, ARC_START_ANGLE};
use halo_dial::{
    arc_point, celestial_position, point, stroked_arc, CelestialPosition, CelestialWindow,
    Drawable, MoonPhase, Point, WindowMode,
};

use crate::error::{Result, WidgetError};
use crate::scene::Scene;
use crate::{RenderContext, WidgetSettings};

const TRACK_RATIO: f64 = 0.8;
const BODY_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkyTrack {
    sunrise: NaiveTime,
    sunset: NaiveTime,
    sun: CelestialPosition,
    moon: CelestialPosition,
    phase: Option<MoonPhase>,
    illumination: f64,
}

impl SkyTrack {
    /// Positions for `now`. The sun never wraps past midnight; the moon
    /// does, and stays hidden when either of its times is unknown.
    pub fn new(
        now: NaiveTime,
        sun: CelestialWindow,
        moon: Option<CelestialWindow>,
        phase: Option<MoonPhase>,
        illumination: f64,
    ) -> Self {
        let moon = moon
            .map(|window| celestial_position(now, &window, WindowMode::AllowWrap))
            .unwrap_or(CelestialPosition::HIDDEN);
        Self {
            sunrise: sun.rise,
            sunset: sun.set,
            sun: celestial_position(now, &sun, WindowMode::Daytime),
            moon,
            phase,
            illumination,
        }
    }

    /// # Errors
    ///
    /// [`WidgetError::MissingData`] without a daily record.
    pub fn from_context(ctx: &RenderContext<'_>) -> Result<Self> {
        let day = ctx
            .snapshot
            .day(ctx.now.date())
            .ok_or(WidgetError::MissingData("daily forecast"))?;
        let moon = match (day.moonrise, day.moonset) {
            (Some(rise), Some(set)) => Some(CelestialWindow::new(rise, set)),
            _ => None,
        };
        let illumination = day.moon_illumination.unwrap_or(0.0);
        let phase = day
            .moon_illumination
            .map(|lit| MoonPhase::from_illumination(lit, day.moon_waxing.unwrap_or(true)));

        Ok(Self::new(
            ctx.now.time(),
            CelestialWindow::new(day.sunrise, day.sunset),
            moon,
            phase,
            illumination,
        ))
    }

    pub fn sun(&self) -> CelestialPosition {
        self.sun
    }

    pub fn moon(&self) -> CelestialPosition {
        self.moon
    }

    /// # Errors
    ///
    /// Currently never fails.
    pub fn scene(&self, settings: &WidgetSettings) -> Result<Scene> {
        let palette = settings.palette();
        let mut scene = settings.blank_scene();
        let c = scene.center();
        let radius = scene.radius() * TRACK_RATIO;

        scene.push(Drawable::Stroke {
            path: stroked_arc(c, radius, ARC_START_ANGLE, ARC_END_ANGLE),
            color: palette.track,
            width: 3.0,
            opacity: 0.8,
        });

        let rise_at = point(c, radius, ARC_START_ANGLE);
        let set_at = point(c, radius, ARC_END_ANGLE);
        scene.label(
            Point::new(rise_at.x - 28.0, rise_at.y),
            self.sunrise.format("%H:%M").to_string(),
            palette.text,
        );
        scene.label(
            Point::new(set_at.x - 28.0, set_at.y),
            self.sunset.format("%H:%M").to_string(),
            palette.text,
        );

        if self.sun.is_visible {
            scene.push(Drawable::Dot {
                center: arc_point(c, radius, self.sun.progress),
                radius: BODY_RADIUS,
                color: palette.sun,
                opacity: 1.0,
            });
        } else if self.moon.is_visible {
            scene.push(Drawable::Dot {
                center: arc_point(c, radius, self.moon.progress),
                radius: BODY_RADIUS,
                color: palette.moon,
                opacity: self.illumination.clamp(0.25, 1.0),
            });
            if let Some(phase) = self.phase {
                scene.label(Point::new(c.x, c.y + 16.0), phase.key(), palette.text);
            }
        }

        Ok(scene)
    }
}
