//! Widget scenes rendered from the shared snapshot fixture.

use chrono::{NaiveDate, NaiveDateTime};
use halo_dial::Drawable;
use halo_weather::{TemperatureUnit, WeatherSnapshot};
use halo_widgets::{render_widget, svg, RenderContext, WidgetError, WidgetKind, WidgetSettings};

const FIXTURE: &str = include_str!("../../halo-weather/tests/fixtures/snapshot.json");

fn snapshot() -> WeatherSnapshot {
    serde_json::from_str(FIXTURE).unwrap()
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn labels(kind: WidgetKind, snapshot: &WeatherSnapshot, now: NaiveDateTime) -> Vec<String> {
    let settings = WidgetSettings::default();
    let ctx = RenderContext::new(snapshot, now, &settings);
    render_widget(kind, &ctx)
        .unwrap()
        .labels()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_every_widget_renders_to_svg() {
    let snapshot = snapshot();
    let settings = WidgetSettings::default();
    let ctx = RenderContext::new(&snapshot, at(14, 17, 30), &settings);
    for kind in WidgetKind::ALL {
        let scene = render_widget(kind, &ctx).unwrap();
        assert!(!scene.drawables.is_empty(), "{kind} produced nothing");
        let doc = svg::render(&scene);
        assert!(doc.contains("<svg "), "{kind}");
        assert!(doc.trim_end().ends_with("</svg>"), "{kind}");
    }
}

#[test]
fn test_clock_labels_start_at_current_hour() {
    let labels = labels(WidgetKind::Clock, &snapshot(), at(14, 17, 30));
    assert_eq!(labels.len(), 25);
    assert_eq!(labels[0], "15°");
    assert_eq!(labels[24], "12°C");
}

#[test]
fn test_clock_in_fahrenheit() {
    let snapshot = snapshot();
    let settings = WidgetSettings {
        temperature_unit: TemperatureUnit::Fahrenheit,
        ..WidgetSettings::default()
    };
    let ctx = RenderContext::new(&snapshot, at(14, 17, 30), &settings);
    let scene = render_widget(WidgetKind::Clock, &ctx).unwrap();
    let labels: Vec<&str> = scene.labels().collect();
    assert_eq!(labels[0], "59°");
    assert_eq!(labels[24], "54°F");
}

#[test]
fn test_clock_needs_a_full_day_of_hours() {
    let snapshot = snapshot();
    let settings = WidgetSettings::default();
    let ctx = RenderContext::new(&snapshot, at(15, 12, 0), &settings);
    assert!(matches!(
        render_widget(WidgetKind::Clock, &ctx),
        Err(WidgetError::MissingData(_))
    ));
}

#[test]
fn test_stale_snapshot_does_not_borrow_another_day() {
    let snapshot = snapshot();
    let settings = WidgetSettings::default();
    let ctx = RenderContext::new(&snapshot, at(20, 9, 0), &settings);
    for kind in [WidgetKind::Sky, WidgetKind::Clock] {
        assert!(
            matches!(
                render_widget(kind, &ctx),
                Err(WidgetError::MissingData("daily forecast"))
            ),
            "{kind}"
        );
    }
}

#[test]
fn test_sky_shows_moon_after_sunset() {
    let snapshot = snapshot();
    let settings = WidgetSettings::default();

    let evening = RenderContext::new(&snapshot, at(14, 17, 30), &settings);
    let scene = render_widget(WidgetKind::Sky, &evening).unwrap();
    let dots: Vec<_> = scene
        .drawables
        .iter()
        .filter(|d| matches!(d, Drawable::Dot { .. }))
        .collect();
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0].color(), settings.palette().sun);

    let night = RenderContext::new(&snapshot, at(14, 22, 0), &settings);
    let scene = render_widget(WidgetKind::Sky, &night).unwrap();
    assert!(scene.labels().any(|l| l == "waning_gibbous"));
    assert!(scene
        .drawables
        .iter()
        .any(|d| matches!(d, Drawable::Dot { .. }) && d.color() == settings.palette().moon));
}

#[test]
fn test_gauge_labels() {
    let snapshot = snapshot();
    let now = at(14, 17, 30);
    assert_eq!(labels(WidgetKind::Aqi, &snapshot, now), vec!["42", "aqi.good"]);
    assert_eq!(labels(WidgetKind::Humidity, &snapshot, now), vec!["72%"]);
    assert_eq!(labels(WidgetKind::Rain, &snapshot, now), vec!["20%"]);
    let wind = labels(WidgetKind::Wind, &snapshot, now);
    assert!(wind.iter().any(|l| l == "4 m/s"));
    assert!(wind.iter().any(|l| l == "Bft 3"));
}

#[test]
fn test_aqi_without_air_quality() {
    let mut snapshot = snapshot();
    snapshot.air_quality = None;
    let settings = WidgetSettings::default();
    let ctx = RenderContext::new(&snapshot, at(14, 17, 30), &settings);
    assert!(matches!(
        render_widget(WidgetKind::Aqi, &ctx),
        Err(WidgetError::MissingData("air quality"))
    ));
}

#[test]
fn test_render_is_deterministic() {
    let snapshot = snapshot();
    let settings = WidgetSettings::default();
    let ctx = RenderContext::new(&snapshot, at(14, 9, 15), &settings);
    let a = svg::render(&render_widget(WidgetKind::Clock, &ctx).unwrap());
    let b = svg::render(&render_widget(WidgetKind::Clock, &ctx).unwrap());
    assert_eq!(a, b);
}
