use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use clap::Parser;

use countdown_engine::coords::{Rect, Vec2};
use countdown_engine::logging::{init_logging, LoggingConfig};
use countdown_engine::paint::Color;
use countdown_engine::refresh::{PacedRefreshConfig, PacedRefreshSource};
use countdown_engine::scene::ShapeLayer;
use countdown_ui::{CircularCountdown, CountdownConfig};

mod snapshot;

/// Runs a circular countdown at a fixed frame rate and snapshots the wedge.
#[derive(Parser, Debug)]
#[command(name = "countdown-studio", version, about, long_about = None)]
struct Cli {
    /// Cycle length in seconds
    #[arg(long, default_value_t = 30.0)]
    interval: f64,
    /// Circle radius in pixels
    #[arg(long, default_value_t = 64.0)]
    radius: f32,
    /// Canvas edge in pixels (default: diameter plus stroke)
    #[arg(long)]
    size: Option<f32>,
    /// Fill color, #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#3b82f6", value_parser = parse_color)]
    fill: Color,
    /// Stroke color, #rrggbb or #rrggbbaa
    #[arg(long, value_parser = parse_color)]
    stroke: Option<Color>,
    #[arg(long, default_value_t = 0.0)]
    stroke_width: f32,
    /// Grow the wedge counterclockwise
    #[arg(long)]
    counterclockwise: bool,
    /// Measure cycles from launch instead of the Unix epoch
    #[arg(long)]
    from_now: bool,
    /// Target frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
    /// Frames to run before writing snapshots
    #[arg(long, default_value_t = 120)]
    frames: u64,
    /// Draw a fixed angle (degrees) instead of running the timer
    #[arg(long)]
    angle: Option<f32>,
    /// Write the final wedge as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Write the final wedge as PNG
    #[arg(long)]
    png: Option<PathBuf>,
    /// Log filter, e.g. "debug" or "countdown_ui=trace" (default: RUST_LOG, then info)
    #[arg(long)]
    log: Option<String>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("expected #rrggbb or #rrggbbaa, got '{s}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let config = CountdownConfig::default()
        .circle_radius(cli.radius)
        .fill_color(Some(cli.fill))
        .stroke_color(cli.stroke)
        .stroke_width(cli.stroke_width)
        .interval(cli.interval)
        .base_date(cli.from_now.then(SystemTime::now));

    let layer = Rc::new(RefCell::new(ShapeLayer::new()));
    let mut countdown = CircularCountdown::with_config(&layer, config).context("invalid countdown options")?;

    let size = cli
        .size
        .unwrap_or_else(|| (cli.radius.max(0.0) * 2.0 + cli.stroke_width.max(0.0)).ceil().max(1.0));
    countdown.set_bounds(Rect::new(0.0, 0.0, size, size));
    countdown.set_clockwise(!cli.counterclockwise);

    match cli.angle {
        Some(degrees) => {
            if !countdown.set_angle(degrees) {
                bail!("renderer unavailable");
            }
            log::info!("static wedge drawn at {:.1}°", countdown.angle());
        }
        None => run_timer(&mut countdown, &cli),
    }

    let layer = layer.borrow();
    if let Some(path) = &cli.svg {
        layer.write_svg(Vec2::new(size, size), path)?;
        log::info!("wrote {}", path.display());
    }
    if let Some(path) = &cli.png {
        let svg = layer.to_svg(Vec2::new(size, size));
        snapshot::write_png(&svg, size.ceil() as u32, path)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn run_timer(countdown: &mut CircularCountdown, cli: &Cli) {
    if cli.frames == 0 {
        return;
    }

    let refresh = Rc::new(PacedRefreshSource::new(PacedRefreshConfig { frames_per_second: cli.fps }));
    countdown.attach_refresh_source(refresh.clone());
    countdown.start();

    log::info!(
        "running {} frames at {:?}/frame, interval {}s",
        cli.frames,
        refresh.frame_period(),
        countdown.interval()
    );

    let report_every = (cli.fps.max(1.0) as u64).max(1);
    refresh.run_while(|ft| {
        if ft.frame_index % report_every == 0 {
            log::info!("frame {:>5}  angle {:6.1}°", ft.frame_index, countdown.angle());
        }
        ft.frame_index + 1 < cli.frames
    });

    countdown.stop();
    log::info!("final angle {:.1}°", countdown.angle());
}
