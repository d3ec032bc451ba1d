//! Data-provider seam.
//!
//! Network providers live outside this workspace; the renderer only needs
//! something that can hand it a [`WeatherSnapshot`].

use std::path::{Path, PathBuf};

use crate::types::{WeatherError, WeatherSnapshot};

pub trait SnapshotSource: Send + Sync {
    /// Human-readable name, for logs
    fn name(&self) -> &str;

    /// Load the latest snapshot
    fn load(&self) -> Result<WeatherSnapshot, WeatherError>;
}

/// Snapshot stored as JSON on disk, re-read on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<WeatherSnapshot, WeatherError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let snapshot: WeatherSnapshot = serde_json::from_str(&contents)?;
        tracing::debug!(
            "Loaded snapshot from {} ({} hourly, {} daily)",
            self.path.display(),
            snapshot.hourly.len(),
            snapshot.daily.len()
        );
        Ok(snapshot)
    }
}

/// Fixed snapshot, for hosts that already hold the data in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    snapshot: WeatherSnapshot,
}

impl StaticSource {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<WeatherSnapshot, WeatherError> {
        Ok(self.snapshot.clone())
    }
}
