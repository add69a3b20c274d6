//! # Clock Face Application Entry Point
//!
//! Host for the clock model: loads `clock-config.toml`, configures a
//! [`ClockModel`], computes the static face once and then redraws the moving
//! parts on a fixed interval.
//!
//! Modes:
//! - `--stdout`: ASCII preview redrawn every tick (development mode)
//! - `--svg`: print one SVG document and exit
//! - `--json`: print the static geometry and one frame as JSON and exit
//! - default: log each frame's hand angles and digital text
//!
//! `--ticks N` stops after N redraws; `--config PATH` picks another file.

use anyhow::{bail, Context};
use clock_face_lib::{
    config::Config,
    renderer::draw_ascii,
    svg::render_svg,
    ClockModel, SystemClock, TimeSource,
};
use serde_json::json;
use std::env;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Log,
    Ascii,
    Svg,
    Json,
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    ticks: Option<u64>,
    config_path: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        mode: Mode::Log,
        ticks: None,
        config_path: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--stdout" => args.mode = Mode::Ascii,
            "--svg" => args.mode = Mode::Svg,
            "--json" => args.mode = Mode::Json,
            "--ticks" => {
                let value = iter.next().context("--ticks needs a count")?;
                args.ticks = Some(value.parse().context("--ticks must be a number")?);
            }
            "--config" => {
                args.config_path = Some(iter.next().context("--config needs a path")?);
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(args)
}

/// Build the model from the loaded configuration, including caption settings.
fn build_model(config: &Config) -> anyhow::Result<ClockModel> {
    let mut model =
        ClockModel::configure(&config.clock).context("clock configuration rejected")?;

    if let Some(caption) = &config.runtime.caption {
        let link = config.runtime.caption_link.clone().unwrap_or_default();
        model = model.set_caption(caption.clone(), link);
    }
    if config.runtime.digital_caption {
        model = model.enable_digital_caption();
    }

    Ok(model)
}

async fn run_loop(
    mut model: ClockModel,
    mode: Mode,
    period: Duration,
    max_ticks: Option<u64>,
) -> anyhow::Result<()> {
    let source = SystemClock;
    let geometry = model.static_geometry();
    log::info!(
        "Drawing {}x{} face: radius {}, {} ticks, {} range arcs",
        geometry.width,
        geometry.height,
        geometry.radius,
        geometry.ticks.len(),
        geometry.range_arcs.len()
    );

    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = timer.tick() => {}
            _ = &mut ctrl_c => {
                log::info!("Interrupted, stopping clock");
                break;
            }
        }

        let frame = model.tick_from(&source);
        match mode {
            Mode::Ascii => {
                // Clear screen and home the cursor before each redraw.
                print!("\x1b[2J\x1b[H");
                draw_ascii(&model, &geometry, &frame);
            }
            _ => log::info!(
                "hour {:.4} minute {:.4} second {:.4}{}",
                frame.hands.hour_rad,
                frame.hands.minute_rad,
                frame.hands.second_rad,
                frame
                    .digital_text
                    .as_deref()
                    .map(|t| format!(" [{t}]"))
                    .unwrap_or_default()
            ),
        }

        if max_ticks.is_some_and(|max| model.state().ticks_seen() >= max) {
            break;
        }
    }

    log::debug!("Clock stopped after {} ticks", model.state().ticks_seen());
    Ok(())
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let mut model = build_model(&config)?;

    match args.mode {
        Mode::Svg => {
            let geometry = model.static_geometry();
            let frame = model.tick(SystemClock.now());
            print!("{}", render_svg(&model, &geometry, &frame));
            Ok(())
        }
        Mode::Json => {
            let geometry = model.static_geometry();
            let frame = model.tick(SystemClock.now());
            let hands = model.hand_geometry(&frame.hands);
            let captions = model.caption_layout(&frame);
            let doc = json!({
                "geometry": geometry,
                "frame": frame,
                "hands": hands,
                "captions": captions,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        mode => {
            let period = Duration::from_millis(config.runtime.tick_interval_ms.max(1));
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(run_loop(model, mode, period, args.ticks))
        }
    }
}
