use chrono::NaiveDateTime;
use halo_weather::{SnapshotSource, WeatherSnapshot};
use halo_widgets::{render_widget, svg, RenderContext, Scene, WidgetKind, WidgetSettings};

use crate::error::AppError;
use crate::Config;

/// Application state: the loaded config and the data source it renders from.
pub struct App {
    config: Config,
    settings: WidgetSettings,
    source: Box<dyn SnapshotSource>,
}

impl App {
    pub fn new(config: Config, source: Box<dyn SnapshotSource>) -> Self {
        tracing::info!("Creating app with snapshot source: {}", source.name());
        let settings = config.widget_settings();
        Self {
            config,
            settings,
            source,
        }
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Fetch the latest snapshot from the source
    pub fn load_snapshot(&self) -> Result<WeatherSnapshot, AppError> {
        let snapshot = self.source.load()?;
        tracing::debug!(
            "Snapshot for {} fetched at {}",
            snapshot.location.display_name(),
            snapshot.fetched_at
        );
        Ok(snapshot)
    }

    /// Compose one widget against an already loaded snapshot
    pub fn scene(
        &self,
        kind: WidgetKind,
        snapshot: &WeatherSnapshot,
        now: NaiveDateTime,
    ) -> Result<Scene, AppError> {
        let ctx = RenderContext::new(snapshot, now, &self.settings);
        Ok(render_widget(kind, &ctx)?)
    }

    /// Load, compose and serialize in one pass
    pub fn render_svg(&self, kind: WidgetKind, now: NaiveDateTime) -> Result<String, AppError> {
        let snapshot = self.load_snapshot()?;
        let scene = self.scene(kind, &snapshot, now)?;
        tracing::debug!("Rendered {} with {} drawables", kind, scene.drawables.len());
        Ok(svg::render(&scene))
    }
}
