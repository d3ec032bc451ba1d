//! SVG output for scenes.

use halo_dial::{format_number, Drawable};
use svg::node::element::{Circle, Line, Path, Rectangle, Text};
use svg::{Document, Node};

use crate::scene::Scene;

/// Serialize a scene as a standalone SVG document.
pub fn render(scene: &Scene) -> String {
    document(scene).to_string()
}

/// Build the SVG document tree for a scene.
pub fn document(scene: &Scene) -> Document {
    let w = format_number(scene.width);
    let h = format_number(scene.height);
    let mut doc = Document::new()
        .set("width", w.as_str())
        .set("height", h.as_str())
        .set("viewBox", format!("0 0 {w} {h}"))
        .add(
            Rectangle::new()
                .set("width", w.as_str())
                .set("height", h.as_str())
                .set("fill", scene.background.to_hex()),
        );
    for drawable in &scene.drawables {
        append_drawable(&mut doc, drawable);
    }
    doc
}

fn faded<T: Node>(mut node: T, opacity: f64) -> T {
    if opacity < 1.0 {
        node.assign("opacity", format_number(opacity));
    }
    node
}

fn append_drawable(doc: &mut Document, drawable: &Drawable) {
    match drawable {
        Drawable::Fill {
            path,
            color,
            opacity,
            even_odd,
        } => {
            let mut node = Path::new()
                .set("d", path.to_svg_d())
                .set("fill", color.to_hex());
            if *even_odd {
                node = node.set("fill-rule", "evenodd");
            }
            doc.append(faded(node, *opacity));
        }
        Drawable::Stroke {
            path,
            color,
            width,
            opacity,
        } => {
            let node = Path::new()
                .set("d", path.to_svg_d())
                .set("fill", "none")
                .set("stroke", color.to_hex())
                .set("stroke-width", format_number(*width))
                .set("stroke-linecap", "round");
            doc.append(faded(node, *opacity));
        }
        Drawable::Line {
            from,
            to,
            color,
            width,
            opacity,
        } => {
            let node = Line::new()
                .set("x1", format_number(from.x))
                .set("y1", format_number(from.y))
                .set("x2", format_number(to.x))
                .set("y2", format_number(to.y))
                .set("stroke", color.to_hex())
                .set("stroke-width", format_number(*width));
            doc.append(faded(node, *opacity));
        }
        Drawable::Dot {
            center,
            radius,
            color,
            opacity,
        } => {
            let node = Circle::new()
                .set("cx", format_number(center.x))
                .set("cy", format_number(center.y))
                .set("r", format_number(*radius))
                .set("fill", color.to_hex());
            doc.append(faded(node, *opacity));
        }
        Drawable::Label {
            position,
            text,
            color,
            opacity,
        } => {
            let node = Text::new(text.as_str())
                .set("x", format_number(position.x))
                .set("y", format_number(position.y))
                .set("fill", color.to_hex())
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle");
            doc.append(faded(node, *opacity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_dial::{full_ring, Point, Rgb, RingSpec};

    fn scene_with(drawable: Drawable) -> Scene {
        let mut scene = Scene::new(100.0, 100.0, Rgb::WHITE);
        scene.push(drawable);
        scene
    }

    #[test]
    fn test_render_document_frame() {
        let svg = render(&Scene::new(320.0, 200.0, Rgb::new(16, 19, 28)));
        assert!(svg.contains("<svg "));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"viewBox="0 0 320 200""#));
        assert!(svg.contains("<rect "));
        assert!(svg.contains(r##"fill="#10131c""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_even_odd_fill() {
        let ring = RingSpec::new(Point::new(50.0, 50.0), 20.0, 40.0).unwrap();
        let svg = render(&scene_with(Drawable::Fill {
            path: full_ring(&ring),
            color: Rgb::BLACK,
            opacity: 0.5,
            even_odd: true,
        }));
        assert!(svg.contains(r#"fill-rule="evenodd""#));
        assert!(svg.contains(r#"opacity="0.5""#));
    }

    #[test]
    fn test_render_escapes_text() {
        let svg = render(&scene_with(Drawable::Label {
            position: Point::new(10.0, 10.0),
            text: "<5 & calm".into(),
            color: Rgb::BLACK,
            opacity: 1.0,
        }));
        assert!(svg.contains("&lt;5 &amp; calm"));
        assert!(!svg.contains("<5 & calm"));
        assert!(!svg.contains(" opacity="));
    }

    #[test]
    fn test_render_dot_and_line() {
        let mut scene = scene_with(Drawable::Dot {
            center: Point::new(1.5, 2.25),
            radius: 3.0,
            color: Rgb::new(255, 0, 0),
            opacity: 1.0,
        });
        scene.push(Drawable::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            color: Rgb::BLACK,
            width: 2.0,
            opacity: 0.25,
        });
        let doc = document(&scene);
        let svg = doc.to_string();
        assert!(svg.contains("<circle "));
        assert!(svg.contains(r#"cx="1.5""#));
        assert!(svg.contains(r#"cy="2.25""#));
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.contains("<line "));
        assert!(svg.contains(r#"x2="10""#));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.contains(r#"opacity="0.25""#));
    }
}
