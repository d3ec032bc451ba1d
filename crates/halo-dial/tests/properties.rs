//! Behavioral properties of the dial engine, exercised through the public API.

use chrono::NaiveTime;
use halo_dial::gauge::{beaufort_color, ALERT_COLOR};
use halo_dial::path::{PathCommand, ShapePath, CORNER_RADIUS};
use halo_dial::{
    celestial_position, classify_aqi, full_ring, gradient_ring, hour_marks, resolve_color,
    ring_sector, wind_gauge, AqiLevel, Bounds, CelestialWindow, ClockFrame, ClockMetric,
    GradientRange, HourReading, Point, Rgb, RingSpec, WindBand, WindowMode,
};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn outer_box(ring: &RingSpec) -> Bounds {
    let c = ring.center();
    let r = ring.outer_radius();
    Bounds {
        min: Point::new(c.x - r, c.y - r),
        max: Point::new(c.x + r, c.y + r),
    }
}

#[test]
fn test_ring_sector_is_closed_and_bounded() {
    let rings = [
        RingSpec::new(Point::new(0.0, 0.0), 0.0, 10.0).unwrap(),
        RingSpec::new(Point::new(150.0, 150.0), 100.0, 120.0).unwrap(),
        RingSpec::new(Point::new(-20.0, 40.0), 29.5, 30.0).unwrap(),
    ];
    let spans = [
        (0.0, 15.0),
        (10.0, 190.0),
        (-45.0, 45.0),
        (300.0, 420.0),
        (0.0, 359.0),
    ];

    for ring in &rings {
        let limits = outer_box(ring);
        for &(start, end) in &spans {
            for rotation in [0.0, 90.0, -200.0] {
                for rounded in [false, true] {
                    let path = ring_sector(ring, start, end, rotation, rounded);
                    assert!(path.is_closed(), "{start}..{end} should be closed");

                    let first = path.start_point().unwrap();
                    let last = path.end_point().unwrap();
                    assert!(first.distance_to(last) < 1e-9);

                    let bounds = path.bounds().unwrap();
                    assert!(
                        bounds.within(&limits, 1e-6),
                        "{start}..{end} rot {rotation} rounded {rounded}: {bounds:?} outside {limits:?}"
                    );
                }
            }
        }
    }
}

/// Screen angle of `p` around `c`: 0 is up, clockwise positive.
fn screen_angle(c: Point, p: Point) -> f64 {
    (p.x - c.x).atan2(c.y - p.y).to_degrees()
}

/// Every band arc must carry the large-arc flag for the span it actually covers.
fn assert_arc_flags_match_span(path: &ShapePath, label: &str) {
    let mut current = None;
    for command in path.commands() {
        match command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => current = Some(*p),
            PathCommand::ArcTo {
                center,
                radius,
                large_arc,
                clockwise,
                to,
            } => {
                let from = current.unwrap();
                if *radius > CORNER_RADIUS {
                    let delta = screen_angle(*center, *to) - screen_angle(*center, from);
                    let delta = if *clockwise { delta } else { -delta };
                    let span = delta.rem_euclid(360.0);
                    if (span - 180.0).abs() > 1e-6 {
                        assert_eq!(
                            *large_arc,
                            span > 180.0,
                            "{label}: r={radius} large_arc={large_arc} span={span:.3}"
                        );
                    }
                }
                current = Some(*to);
            }
            PathCommand::Close => {}
        }
    }
}

#[test]
fn test_ring_sector_arc_flags_match_traversed_span() {
    let rings = [
        RingSpec::new(Point::new(160.0, 160.0), 115.0, 147.0).unwrap(),
        RingSpec::new(Point::new(100.0, 100.0), 40.0, 50.0).unwrap(),
        RingSpec::new(Point::new(50.0, 50.0), 0.0, 30.0).unwrap(),
    ];
    let sweeps = [
        10.0, 90.0, 179.0, 179.9, 180.3, 180.5, 180.9, 181.2, 182.0, 185.0, 270.0, 359.0,
    ];

    for ring in &rings {
        for &sweep in &sweeps {
            for rotation in [0.0, 37.0, -120.0] {
                for rounded in [false, true] {
                    let path = ring_sector(ring, 55.0, 55.0 + sweep, rotation, rounded);
                    let label = format!(
                        "r {}..{} sweep {sweep} rot {rotation} rounded {rounded}",
                        ring.inner_radius(),
                        ring.outer_radius()
                    );
                    assert_arc_flags_match_span(&path, &label);
                }
            }
        }
    }
}

#[test]
fn test_full_ring_is_bounded() {
    let ring = RingSpec::new(Point::new(60.0, 60.0), 30.0, 50.0).unwrap();
    let path = full_ring(&ring);
    assert!(path.is_closed());
    assert!(path.bounds().unwrap().within(&outer_box(&ring), 1e-6));
}

#[test]
fn test_gradient_channels_never_decrease() {
    let ranges = [GradientRange::new(0.0, 90.0, Rgb::BLACK, Rgb::WHITE)];
    let mut previous = Rgb::BLACK;
    for step in 0..=180 {
        let angle = f64::from(step) * 0.5;
        let color = resolve_color(&ranges, angle, Rgb::new(1, 2, 3));
        assert!(color.r >= previous.r && color.g >= previous.g && color.b >= previous.b);
        previous = color;
    }
    assert_eq!(previous, Rgb::WHITE);
}

#[test]
fn test_gradient_ring_yields_requested_segment_count() {
    let ring = RingSpec::new(Point::new(0.0, 0.0), 50.0, 60.0).unwrap();
    let ranges = [GradientRange::new(0.0, 180.0, Rgb::BLACK, Rgb::WHITE)];
    for n in [1, 50, 200] {
        let shapes = gradient_ring(ring, 0.0, 360.0, n, &ranges, Rgb::WHITE, 1.0).unwrap();
        assert_eq!(shapes.len(), n);
    }
}

#[test]
fn test_sun_at_noon_is_halfway() {
    let window = CelestialWindow::new(hm(6, 0), hm(18, 0));
    let pos = celestial_position(hm(12, 0), &window, WindowMode::Daytime);
    assert!(pos.is_visible);
    assert!((pos.progress - 0.5).abs() < 1e-12);
}

#[test]
fn test_moon_across_midnight_is_halfway() {
    let window = CelestialWindow::new(hm(22, 0), hm(6, 0));
    let pos = celestial_position(hm(2, 0), &window, WindowMode::AllowWrap);
    assert!(pos.is_visible);
    assert!((pos.progress - 0.5).abs() < 1e-12);
}

#[test]
fn test_sun_after_sunset_is_hidden() {
    let window = CelestialWindow::new(hm(6, 0), hm(18, 0));
    let pos = celestial_position(hm(20, 0), &window, WindowMode::Daytime);
    assert!(!pos.is_visible);
    assert_eq!(pos.progress, 0.0);
}

#[test]
fn test_hour_marks_wrap_from_late_evening() {
    let marks = hour_marks(23).unwrap();
    let expected: Vec<u32> = std::iter::once(23).chain(0..23).collect();
    assert_eq!(marks.to_vec(), expected);
}

#[test]
fn test_aqi_classification_boundaries() {
    let cases = [
        (50.0, AqiLevel::Good),
        (51.0, AqiLevel::Moderate),
        (100.0, AqiLevel::Moderate),
        (101.0, AqiLevel::UnhealthySensitive),
        (150.0, AqiLevel::UnhealthySensitive),
        (151.0, AqiLevel::Unhealthy),
        (200.0, AqiLevel::Unhealthy),
        (201.0, AqiLevel::VeryUnhealthy),
        (300.0, AqiLevel::VeryUnhealthy),
        (301.0, AqiLevel::Hazardous),
    ];
    for (value, level) in cases {
        assert_eq!(classify_aqi(value), Ok(level), "AQI {value}");
    }
}

#[test]
fn test_wind_alert_overrides_band_color() {
    let reading = wind_gauge(37.0).unwrap();
    assert_eq!(reading.band, WindBand::Alert);
    assert_eq!(reading.color, ALERT_COLOR);
    assert_ne!(beaufort_color(37.0), ALERT_COLOR);
    assert!((240.0..=305.0).contains(&reading.angle));
}

#[test]
fn test_repeated_calls_are_identical() {
    let ring = RingSpec::new(Point::new(100.0, 100.0), 70.0, 90.0).unwrap();
    let ranges = [
        GradientRange::new(0.0, 120.0, Rgb::new(20, 30, 80), Rgb::new(250, 200, 90)),
        GradientRange::new(120.0, 240.0, Rgb::new(250, 200, 90), Rgb::new(20, 30, 80)),
    ];
    let render = || gradient_ring(ring, -30.0, 300.0, 64, &ranges, Rgb::BLACK, 0.8).unwrap();
    let a = serde_json::to_string(&render()).unwrap();
    let b = serde_json::to_string(&render()).unwrap();
    assert_eq!(a, b);

    let window = CelestialWindow::new(hm(21, 10), hm(7, 45));
    assert_eq!(
        celestial_position(hm(3, 3), &window, WindowMode::AllowWrap),
        celestial_position(hm(3, 3), &window, WindowMode::AllowWrap)
    );

    let readings = vec![HourReading::default(); 24];
    let frame = ClockFrame::new(9, 41, &readings).unwrap();
    let center = Point::new(0.0, 0.0);
    assert_eq!(
        frame.labels(center, 50.0, ClockMetric::Temperature),
        frame.labels(center, 50.0, ClockMetric::Temperature)
    );
    assert_eq!(
        ring_sector(&ring, 10.0, 200.0, 15.0, true).to_svg_d(),
        ring_sector(&ring, 10.0, 200.0, 15.0, true).to_svg_d()
    );
}
