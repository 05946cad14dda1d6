// File: crates/clock-demo/src/main.rs
// Summary: Demo CLI renders the clock face at a given (or the current) time to one or more PNGs.

use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use clap::Parser;
use clock_core::style::{self, parse_color};
use clock_core::{
    init_logging, ClockRenderer, ClockSource, LoggingConfig, RenderOptions, SystemClock, TimeSample,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "clock-demo", about = "Render analog clock faces to PNG")]
struct Args {
    /// Time to show as HH:MM or HH:MM:SS; defaults to the local time.
    #[arg(long, value_parser = parse_time)]
    time: Option<NaiveTime>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 400)]
    width: i32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 400)]
    height: i32,

    /// Inset between the surface edge and the tick ring.
    #[arg(long, default_value_t = clock_core::types::DEFAULT_PADDING)]
    padding: f32,

    /// Style preset: classic, night, high-contrast, blueprint.
    #[arg(long, default_value = "classic")]
    preset: String,

    /// Style attribute override, e.g. `--attr secondColor=#ff0000` (repeatable).
    #[arg(long = "attr", value_name = "KEY=VALUE")]
    attrs: Vec<String>,

    /// Background color.
    #[arg(long, default_value = "white")]
    background: String,

    /// Number of frames to render.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Seconds between consecutive frames.
    #[arg(long, default_value_t = 1)]
    step_secs: u32,

    /// Output PNG (frame index is appended when rendering a sequence).
    #[arg(long)]
    out: Option<PathBuf>,

    /// -v for debug, -vv for trace logging.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let attrs = args
        .attrs
        .iter()
        .map(String::as_str)
        .map(split_attr)
        .collect::<Result<Vec<_>>>()?;
    let preset = style::find(&args.preset);
    if !preset.name.eq_ignore_ascii_case(&args.preset) {
        log::warn!("unknown preset '{}', using {}", args.preset, preset.name);
    }
    let style = preset
        .with_attributes(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .context("invalid style attribute")?;

    let renderer = ClockRenderer::new(style).with_padding(args.padding);
    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        background: parse_color("background", &args.background)?,
    };

    let start = match args.time {
        Some(t) => t,
        None => {
            let now = SystemClock.now();
            NaiveTime::from_hms_opt(now.hour(), now.minute(), now.second())
                .context("system clock returned an invalid time")?
        }
    };

    let geometry = renderer.derive_geometry(args.width.max(0) as u32, args.height.max(0) as u32);
    log::info!(
        "{}x{} surface, radius {}, style {}",
        args.width, args.height, geometry.radius, style.name
    );
    if geometry.is_degenerate() {
        log::warn!("surface too small for padding {}; output will be degenerate", args.padding);
    }

    for i in 0..args.frames.max(1) {
        let t = start + chrono::Duration::seconds(i as i64 * args.step_secs as i64);
        let sample = TimeSample::from_time(&t);
        let out = out_path(args.out.as_deref(), sample, i, args.frames);
        renderer
            .render_to_png(&opts, sample, &out)
            .with_context(|| format!("rendering {}", out.display()))?;
        println!("Wrote {} ({sample})", out.display());
    }

    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map(|t| t.with_nanosecond(0).unwrap_or(t))
        .map_err(|e| format!("expected HH:MM or HH:MM:SS ({e})"))
}

fn split_attr(raw: &str) -> Result<(String, String)> {
    let (k, v) = raw
        .split_once('=')
        .with_context(|| format!("attribute '{raw}' is not KEY=VALUE"))?;
    Ok((k.trim().to_string(), v.trim().to_string()))
}

/// Produce output file name like target/out/clock_<HHMMSS>.png, or
/// `<stem>_<index>.png` next to `--out` when rendering a sequence.
fn out_path(out: Option<&Path>, t: TimeSample, index: u32, frames: u32) -> PathBuf {
    let base = match out {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!(
            "target/out/clock_{:02}{:02}{:02}.png",
            t.hour(), t.minute(), t.second()
        )),
    };
    if frames <= 1 || out.is_none() {
        return base;
    }
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("clock");
    base.with_file_name(format!("{stem}_{index:03}.png"))
}
