//! Closed and open shape descriptions built from polar primitives.
//!
//! A [`ShapePath`] is an SVG-path-equivalent command list. It carries enough
//! information (arc centers included) to be handed to any vector surface, not
//! just SVG.

use serde::Serialize;

use crate::geometry::{normalize_degrees, point, Point, RingSpec};

/// Radius of the cosmetic corner arcs used by rounded sectors.
pub const CORNER_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        center: Point,
        radius: f64,
        large_arc: bool,
        /// `true` travels clockwise on screen.
        clockwise: bool,
        to: Point,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShapePath {
    commands: Vec<PathCommand>,
}

/// Axis-aligned bounds of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    fn around(p: Point) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// `true` if `self` lies inside `other`, allowing `tolerance` slack.
    pub fn within(&self, other: &Bounds, tolerance: f64) -> bool {
        self.min.x >= other.min.x - tolerance
            && self.min.y >= other.min.y - tolerance
            && self.max.x <= other.max.x + tolerance
            && self.max.y <= other.max.y + tolerance
    }
}

impl ShapePath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn arc_to(&mut self, center: Point, radius: f64, large_arc: bool, clockwise: bool, to: Point) {
        self.commands.push(PathCommand::ArcTo {
            center,
            radius,
            large_arc,
            clockwise,
            to,
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn start_point(&self) -> Option<Point> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Current point after the last command. `Close` returns to the start of
    /// its subpath.
    pub fn end_point(&self) -> Option<Point> {
        let mut subpath_start = None;
        let mut current = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(*p);
                    current = Some(*p);
                }
                PathCommand::LineTo(p) | PathCommand::ArcTo { to: p, .. } => current = Some(*p),
                PathCommand::Close => current = subpath_start,
            }
        }
        current
    }

    /// `true` when every subpath ends with `Close`.
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(_) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathCommand::Close => open = false,
                _ => {}
            }
        }
        !open && !self.commands.is_empty()
    }

    /// Bounds over every vertex plus the axis extremes each arc actually sweeps through.
    pub fn bounds(&self) -> Option<Bounds> {
        fn include(bounds: &mut Option<Bounds>, p: Point) {
            match bounds {
                Some(b) => b.include(p),
                None => *bounds = Some(Bounds::around(p)),
            }
        }

        let mut bounds: Option<Bounds> = None;
        let mut current = None;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    include(&mut bounds, *p);
                    current = Some(*p);
                }
                PathCommand::ArcTo {
                    center,
                    radius,
                    clockwise,
                    to,
                    ..
                } => {
                    if let Some(from) = current {
                        for extreme in arc_extremes(*center, *radius, from, *to, *clockwise) {
                            include(&mut bounds, extreme);
                        }
                    }
                    include(&mut bounds, *to);
                    current = Some(*to);
                }
                PathCommand::Close => {}
            }
        }
        bounds
    }

    /// Serialize as an SVG `d` attribute.
    pub fn to_svg_d(&self) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            parts.push(match cmd {
                PathCommand::MoveTo(p) => format!("M{} {}", format_number(p.x), format_number(p.y)),
                PathCommand::LineTo(p) => format!("L{} {}", format_number(p.x), format_number(p.y)),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    clockwise,
                    to,
                    ..
                } => format!(
                    "A{r} {r} 0 {} {} {} {}",
                    u8::from(*large_arc),
                    u8::from(*clockwise),
                    format_number(to.x),
                    format_number(to.y),
                    r = format_number(*radius),
                ),
                PathCommand::Close => "Z".to_string(),
            });
        }
        parts.join(" ")
    }
}

/// Angle of `p` around `center` in dial convention (0 up, clockwise).
fn dial_angle_of(center: Point, p: Point) -> f64 {
    normalize_degrees((p.x - center.x).atan2(center.y - p.y).to_degrees())
}

fn arc_extremes(center: Point, radius: f64, from: Point, to: Point, clockwise: bool) -> Vec<Point> {
    let a0 = dial_angle_of(center, from);
    let a1 = dial_angle_of(center, to);
    let extent = if clockwise {
        normalize_degrees(a1 - a0)
    } else {
        normalize_degrees(a0 - a1)
    };

    [0.0, 90.0, 180.0, 270.0]
        .into_iter()
        .filter(|&axis| {
            let offset = if clockwise {
                normalize_degrees(axis - a0)
            } else {
                normalize_degrees(a0 - axis)
            };
            offset <= extent
        })
        .map(|axis| point(center, radius, axis))
        .collect()
}

/// Three decimals, trailing zeros trimmed, never `-0`.
pub fn format_number(value: f64) -> String {
    let mut s = format!("{value:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Circle as two half arcs from the top, clockwise or counter-clockwise.
fn push_circle(path: &mut ShapePath, center: Point, radius: f64, clockwise: bool) {
    let top = point(center, radius, 0.0);
    let bottom = point(center, radius, 180.0);
    path.move_to(top);
    path.arc_to(center, radius, true, clockwise, bottom);
    path.arc_to(center, radius, true, clockwise, top);
    path.close();
}

/// Closed annulus: outer circle clockwise, inner circle counter-clockwise, so
/// either fill rule leaves the hole empty. A zero inner radius gives a disk.
pub fn full_ring(ring: &RingSpec) -> ShapePath {
    let mut path = ShapePath::default();
    push_circle(&mut path, ring.center(), ring.outer_radius(), true);
    if ring.inner_radius() > 0.0 {
        push_circle(&mut path, ring.center(), ring.inner_radius(), false);
    }
    path
}

/// Annular wedge from `start_deg` to `end_deg`, shifted by `rotation_deg`.
///
/// The large-arc flag is chosen from the unrotated sweep: rotation moves the
/// wedge, it does not reclassify it. With `inner_radius == 0` the wedge is a
/// pie slice. `rounded` swaps the four corners for small corner arcs; the
/// inset outer and inner arcs are then classified by the span each one
/// traverses after the corners are taken off.
pub fn ring_sector(
    ring: &RingSpec,
    start_deg: f64,
    end_deg: f64,
    rotation_deg: f64,
    rounded: bool,
) -> ShapePath {
    let sweep = end_deg - start_deg;
    let start = start_deg + rotation_deg;
    let end = end_deg + rotation_deg;

    if rounded {
        rounded_sector(ring, start, end, sweep)
    } else {
        sharp_sector(ring, start, end, sweep > 180.0)
    }
}

fn sharp_sector(ring: &RingSpec, start: f64, end: f64, large_arc: bool) -> ShapePath {
    let c = ring.center();
    let outer = ring.outer_radius();
    let inner = ring.inner_radius();

    let mut path = ShapePath::default();
    path.move_to(point(c, outer, start));
    path.arc_to(c, outer, large_arc, true, point(c, outer, end));
    if inner > 0.0 {
        path.line_to(point(c, inner, end));
        path.arc_to(c, inner, large_arc, false, point(c, inner, start));
    } else {
        path.line_to(c);
    }
    path.close();
    path
}

fn rounded_sector(ring: &RingSpec, start: f64, end: f64, sweep: f64) -> ShapePath {
    let c = ring.center();
    let outer = ring.outer_radius();
    let inner = ring.inner_radius();
    let corner = CORNER_RADIUS.min(ring.band_width() / 2.0);
    let half_sweep = sweep.abs() / 2.0;
    let outer_inset = (corner / outer).to_degrees().min(half_sweep);

    let mut path = ShapePath::default();
    path.move_to(point(c, outer - corner, start));
    path.arc_to(
        point(c, outer - corner, start + outer_inset),
        corner,
        false,
        true,
        point(c, outer, start + outer_inset),
    );
    let outer_large = sweep - 2.0 * outer_inset > 180.0;
    path.arc_to(c, outer, outer_large, true, point(c, outer, end - outer_inset));
    path.arc_to(
        point(c, outer - corner, end - outer_inset),
        corner,
        false,
        true,
        point(c, outer - corner, end),
    );

    if inner > 0.0 {
        let inner_inset = (corner / inner).to_degrees().min(half_sweep);
        path.line_to(point(c, inner + corner, end));
        path.arc_to(
            point(c, inner + corner, end - inner_inset),
            corner,
            false,
            true,
            point(c, inner, end - inner_inset),
        );
        let inner_large = sweep - 2.0 * inner_inset > 180.0;
        path.arc_to(c, inner, inner_large, false, point(c, inner, start + inner_inset));
        path.arc_to(
            point(c, inner + corner, start + inner_inset),
            corner,
            false,
            true,
            point(c, inner + corner, start),
        );
    } else {
        path.line_to(c);
    }
    path.close();
    path
}

/// Open arc for stroking. Sweeps of a full turn or more draw the whole circle.
pub fn stroked_arc(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> ShapePath {
    let (start, end) = if end_deg < start_deg {
        (end_deg, start_deg)
    } else {
        (start_deg, end_deg)
    };
    let sweep = end - start;

    let mut path = ShapePath::default();
    if sweep >= 360.0 {
        let from = point(center, radius, start);
        path.move_to(from);
        path.arc_to(center, radius, true, true, point(center, radius, start + 180.0));
        path.arc_to(center, radius, true, true, from);
        return path;
    }

    path.move_to(point(center, radius, start));
    path.arc_to(center, radius, sweep > 180.0, true, point(center, radius, end));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(inner: f64, outer: f64) -> RingSpec {
        RingSpec::new(Point::new(100.0, 100.0), inner, outer).unwrap()
    }

    fn arc_flags(path: &ShapePath) -> Vec<bool> {
        path.commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { large_arc, radius, .. } if *radius > CORNER_RADIUS => {
                    Some(*large_arc)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_full_ring_has_two_opposite_subpaths() {
        let path = full_ring(&ring(40.0, 50.0));
        let directions: Vec<bool> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { clockwise, .. } => Some(*clockwise),
                _ => None,
            })
            .collect();
        assert_eq!(directions, vec![true, true, false, false]);
        assert!(path.is_closed());
    }

    #[test]
    fn test_full_ring_disk_has_single_subpath() {
        let path = full_ring(&ring(0.0, 50.0));
        let moves = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        assert_eq!(moves, 1);
    }

    #[test]
    fn test_full_ring_bounds_cover_outer_circle() {
        let bounds = full_ring(&ring(40.0, 50.0)).bounds().unwrap();
        assert!((bounds.min.x - 50.0).abs() < 1e-9);
        assert!((bounds.max.x - 150.0).abs() < 1e-9);
        assert!((bounds.min.y - 50.0).abs() < 1e-9);
        assert!((bounds.max.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_sector_large_arc_uses_unrotated_sweep() {
        let r = ring(40.0, 50.0);
        assert_eq!(arc_flags(&ring_sector(&r, 0.0, 190.0, 0.0, false)), vec![true, true]);
        assert_eq!(arc_flags(&ring_sector(&r, 0.0, 170.0, 0.0, false)), vec![false, false]);
        // Rotation moves the wedge across 360 but keeps the classification.
        assert_eq!(arc_flags(&ring_sector(&r, 0.0, 170.0, 300.0, false)), vec![false, false]);
        assert_eq!(arc_flags(&ring_sector(&r, 0.0, 181.0, -90.0, false)), vec![true, true]);
    }

    #[test]
    fn test_rounded_sector_classifies_inset_arcs_separately() {
        let r = RingSpec::new(Point::new(160.0, 160.0), 115.0, 147.0).unwrap();
        // Corners take ~0.78° off the outer arc and ~1.0° off the inner one.
        let barely = ring_sector(&r, 55.0, 235.5, 0.0, true);
        assert_eq!(arc_flags(&barely), vec![false, false]);

        let split = ring_sector(&r, 55.0, 235.9, 0.0, true);
        assert_eq!(arc_flags(&split), vec![true, false]);

        let wide = ring_sector(&r, 55.0, 245.0, 0.0, true);
        assert_eq!(arc_flags(&wide), vec![true, true]);
    }

    #[test]
    fn test_sector_rotation_shifts_start() {
        let r = ring(40.0, 50.0);
        let plain = ring_sector(&r, 90.0, 120.0, 0.0, false);
        let rotated = ring_sector(&r, 0.0, 30.0, 90.0, false);
        let a = plain.start_point().unwrap();
        let b = rotated.start_point().unwrap();
        assert!(a.distance_to(b) < 1e-9);
    }

    #[test]
    fn test_degenerate_sector_is_finite() {
        for rounded in [false, true] {
            let path = ring_sector(&ring(40.0, 50.0), 30.0, 30.0, 0.0, rounded);
            assert!(path.is_closed());
            let bounds = path.bounds().unwrap();
            for v in [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y] {
                assert!(v.is_finite());
            }
            assert!(!path.to_svg_d().contains("NaN"));
        }
    }

    #[test]
    fn test_pie_slice_passes_through_center() {
        let path = ring_sector(&ring(0.0, 50.0), 0.0, 90.0, 0.0, false);
        assert!(path
            .commands()
            .contains(&PathCommand::LineTo(Point::new(100.0, 100.0))));
    }

    #[test]
    fn test_rounded_sector_adds_corner_arcs() {
        let path = ring_sector(&ring(40.0, 50.0), 0.0, 90.0, 0.0, true);
        let corners = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { radius, .. } if *radius == CORNER_RADIUS))
            .count();
        assert_eq!(corners, 4);
    }

    #[test]
    fn test_rounded_corner_shrinks_to_thin_band() {
        let path = ring_sector(&ring(49.0, 50.0), 0.0, 90.0, 0.0, true);
        assert!(path
            .commands()
            .iter()
            .any(|c| matches!(c, PathCommand::ArcTo { radius, .. } if (*radius - 0.5).abs() < 1e-12)));
    }

    #[test]
    fn test_stroked_arc_is_open() {
        let path = stroked_arc(Point::new(0.0, 0.0), 10.0, 180.0, 360.0);
        assert!(!path.is_closed());
        assert_eq!(path.commands().len(), 2);
    }

    #[test]
    fn test_stroked_arc_full_turn() {
        let path = stroked_arc(Point::new(0.0, 0.0), 10.0, 0.0, 400.0);
        assert_eq!(path.start_point(), path.end_point());
        assert_eq!(path.commands().len(), 3);
    }

    #[test]
    fn test_svg_d_formatting() {
        let path = ring_sector(&ring(0.0, 50.0), 0.0, 90.0, 0.0, false);
        assert_eq!(path.to_svg_d(), "M100 50 A50 50 0 0 1 150 100 L100 100 Z");
    }

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(1.23456), "1.235");
    }
}
