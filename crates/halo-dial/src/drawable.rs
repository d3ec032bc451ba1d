//! Surface-agnostic output of every widget.

use serde::Serialize;

use crate::color::Rgb;
use crate::geometry::Point;
use crate::path::ShapePath;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    /// Closed path filled with one color. `even_odd` selects the hole-cutting fill rule.
    Fill {
        path: ShapePath,
        color: Rgb,
        opacity: f64,
        even_odd: bool,
    },
    /// Open or closed path drawn as an outline.
    Stroke {
        path: ShapePath,
        color: Rgb,
        width: f64,
        opacity: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f64,
        opacity: f64,
    },
    Dot {
        center: Point,
        radius: f64,
        color: Rgb,
        opacity: f64,
    },
    Label {
        position: Point,
        text: String,
        color: Rgb,
        opacity: f64,
    },
}

impl Drawable {
    pub fn fill(path: ShapePath, color: Rgb, opacity: f64) -> Self {
        Drawable::Fill {
            path,
            color,
            opacity,
            even_odd: false,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Drawable::Fill { color, .. }
            | Drawable::Stroke { color, .. }
            | Drawable::Line { color, .. }
            | Drawable::Dot { color, .. }
            | Drawable::Label { color, .. } => *color,
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Drawable::Fill { opacity, .. }
            | Drawable::Stroke { opacity, .. }
            | Drawable::Line { opacity, .. }
            | Drawable::Dot { opacity, .. }
            | Drawable::Label { opacity, .. } => *opacity,
        }
    }

    pub fn path(&self) -> Option<&ShapePath> {
        match self {
            Drawable::Fill { path, .. } | Drawable::Stroke { path, .. } => Some(path),
            _ => None,
        }
    }
}
