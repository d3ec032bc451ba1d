use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use halo_core::{App, AppError, Config};
use halo_weather::JsonFileSource;
use halo_widgets::WidgetKind;

#[derive(Parser)]
#[command(name = "halo", about = "Render weather dial widgets to SVG")]
struct Cli {
    /// Weather snapshot JSON file
    snapshot: PathBuf,

    /// Widget to render: clock, sky, aqi, wind, humidity or rain
    #[arg(long, short, default_value = "clock")]
    widget: WidgetKind,

    /// Write the SVG here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Config file (defaults to <config dir>/halo/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Local time to render for, e.g. 2026-10-14T17:30:00
    #[arg(long, conflicts_with = "watch")]
    at: Option<NaiveDateTime>,

    /// Keep re-rendering on the configured tick
    #[arg(long)]
    watch: bool,
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn render_once(app: &App, cli: &Cli, now: NaiveDateTime) -> Result<(), AppError> {
    let svg = app.render_svg(cli.widget, now)?;
    match &cli.output {
        Some(path) => std::fs::write(path, svg)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    halo_core::init()?;
    let cli = Cli::parse();

    let (config, _) = match &cli.config {
        Some(path) => Config::load_validated_from(path)?,
        None => Config::load_validated()?,
    };
    let tick = config.render.tick();
    let app = App::new(config, Box::new(JsonFileSource::new(&cli.snapshot)));

    if !cli.watch {
        let now = cli.at.unwrap_or_else(local_now);
        return render_once(&app, &cli, now).with_context(|| {
            format!("Failed to render {} from {}", cli.widget, cli.snapshot.display())
        });
    }

    tracing::info!("Watching {} every {:?}", cli.snapshot.display(), tick);
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = render_once(&app, &cli, local_now()) {
                    tracing::warn!("{} ({})", e.user_message(), e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
