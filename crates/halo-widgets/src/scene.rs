use halo_dial::{Drawable, Point, Rgb};
use serde::Serialize;

/// A finished widget: drawables in paint order on a fixed-size canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
    pub drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            drawables: Vec::new(),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the largest circle that fits with a small margin.
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 * 0.92
    }

    pub fn push(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn extend(&mut self, drawables: impl IntoIterator<Item = Drawable>) {
        self.drawables.extend(drawables);
    }

    pub fn label(&mut self, position: Point, text: impl Into<String>, color: Rgb) {
        self.push(Drawable::Label {
            position,
            text: text.into(),
            color,
            opacity: 1.0,
        });
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
