// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a Polarmorph chart to SVG without a window.
//!
//! A single frame is written by default; `--frames` writes the whole morph
//! from speed view to coefficient view as a numbered sequence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueHint};
use core::time::Duration;
use kurbo::Rect;
use polarmorph_axis::AxisPreset;
use polarmorph_chart::{Chart, ChartConfig, Interpolation};
use polarmorph_physics::SpeedUnit;
use polarmorph_svg::frame_to_svg;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Render speed/coefficient charts to SVG", long_about = None)]
struct Cli {
    /// JSON chart configuration; defaults apply when omitted
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Flight data file containing a `stallpoint:` sample array (repeatable)
    #[arg(long = "dataset", value_hint = ValueHint::FilePath)]
    datasets: Vec<PathBuf>,

    /// Point in the morph to render, as a fraction of the transition time
    #[arg(long, default_value_t = 0.0, conflicts_with = "frames")]
    progress: f64,

    /// Write this many frames spanning the whole morph instead of one
    #[arg(long)]
    frames: Option<u32>,

    /// Speed unit (`mph` or `mps`), overriding the config
    #[arg(long, value_parser = parse_unit)]
    unit: Option<SpeedUnit>,

    /// Axis preset (`aligned`, `descent_up` or `drag_polar`), overriding the config
    #[arg(long, value_parser = parse_preset)]
    preset: Option<AxisPreset>,

    /// Morph blending (`linear` or `polar`), overriding the config
    #[arg(long, value_parser = parse_interpolation)]
    interpolation: Option<Interpolation>,

    /// Length of the morph in milliseconds, overriding the config
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Output size in pixels
    #[arg(long, default_value = "800x800", value_parser = parse_size)]
    size: (u32, u32),

    /// Output file, or directory when `--frames` is given
    #[arg(short, long, default_value = "chart.svg", value_hint = ValueHint::AnyPath)]
    out: PathBuf,

    /// Log verbosity when `RUST_LOG` is unset
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    if w == 0 || h == 0 {
        return Err("size must be non-zero".to_owned());
    }
    Ok((w, h))
}

fn parse_unit(s: &str) -> Result<SpeedUnit, String> {
    SpeedUnit::from_name(s).ok_or_else(|| format!("unknown speed unit `{s}`, expected mph or mps"))
}

fn parse_preset(s: &str) -> Result<AxisPreset, String> {
    AxisPreset::from_name(s).ok_or_else(|| {
        let names: Vec<_> = AxisPreset::ALL.iter().map(|p| p.name()).collect();
        format!("unknown axis preset `{s}`, expected one of {}", names.join(", "))
    })
}

fn parse_interpolation(s: &str) -> Result<Interpolation, String> {
    Interpolation::from_name(s).ok_or_else(|| {
        let names: Vec<_> = Interpolation::ALL.iter().map(|p| p.name()).collect();
        format!("unknown interpolation `{s}`, expected one of {}", names.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = match cli.verbose {
        0 => "polarmorph=info",
        1 => "polarmorph=debug",
        _ => "polarmorph=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ChartConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ChartConfig::default(),
    };

    let (width, height) = cli.size;
    let plot = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
    let mut chart = Chart::new(&config, plot).context("building chart")?;
    if let Some(unit) = cli.unit {
        chart.set_speed_unit(unit);
    }
    if let Some(preset) = cli.preset {
        chart.set_axis_preset(preset);
    }
    if let Some(interpolation) = cli.interpolation {
        chart.set_interpolation(interpolation);
    }
    if let Some(millis) = cli.duration_ms {
        chart.set_animation_duration(Duration::from_millis(millis));
    }

    for path in &cli.datasets {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading dataset {}", path.display()))?;
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
        let added = chart
            .add_dataset(name, &text)
            .with_context(|| format!("loading dataset {}", path.display()))?;
        if added.skipped > 0 {
            warn!(
                path = %path.display(),
                skipped = added.skipped,
                "dataset contained malformed samples"
            );
        }
    }

    match cli.frames {
        Some(0) => bail!("--frames must be at least 1"),
        Some(frames) => write_sequence(&mut chart, frames, &cli.out, width, height),
        None => {
            if !(0.0..=1.0).contains(&cli.progress) {
                return Err(anyhow!("--progress must lie in [0, 1], got {}", cli.progress));
            }
            advance(&mut chart, cli.progress);
            write_frame(&mut chart, &cli.out, width, height)
        }
    }
}

/// Starts a morph at time zero and ticks to `fraction` of its duration.
fn advance(chart: &mut Chart, fraction: f64) {
    if fraction <= 0.0 {
        return;
    }
    let duration = chart.animation().duration();
    chart.switch_view(Duration::ZERO);
    chart.tick(duration.mul_f64(fraction));
}

fn write_sequence(chart: &mut Chart, frames: u32, dir: &Path, width: u32, height: u32) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let duration = chart.animation().duration();
    chart.switch_view(Duration::ZERO);
    let last = frames.saturating_sub(1).max(1);
    for i in 0..frames {
        chart.tick(duration.mul_f64(f64::from(i) / f64::from(last)));
        let path = dir.join(format!("frame_{i:04}.svg"));
        write_frame(chart, &path, width, height)?;
    }
    info!(frames, dir = %dir.display(), "wrote frame sequence");
    Ok(())
}

fn write_frame(chart: &mut Chart, path: &Path, width: u32, height: u32) -> Result<()> {
    let frame = chart.render();
    let svg = frame_to_svg(&frame, width, height);
    fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        progress = frame.progress,
        polylines = frame.polylines.len(),
        markers = frame.markers.len(),
        "wrote frame"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use polarmorph_axis::AxisPreset;
    use polarmorph_chart::Interpolation;
    use polarmorph_physics::SpeedUnit;

    use super::{Cli, parse_interpolation, parse_preset, parse_size, parse_unit};

    #[test]
    fn sizes_parse() {
        assert_eq!(parse_size("640x480"), Ok((640, 480)), "lowercase separator");
        assert_eq!(parse_size("10X20"), Ok((10, 20)), "uppercase separator");
        assert!(parse_size("640").is_err(), "missing height");
        assert!(parse_size("0x10").is_err(), "zero width");
        assert!(parse_size("axb").is_err(), "not numbers");
    }

    #[test]
    fn names_parse() {
        assert_eq!(parse_unit("mps"), Ok(SpeedUnit::MetersPerSecond));
        assert!(parse_unit("knots").is_err());
        assert_eq!(parse_preset("descent_up"), Ok(AxisPreset::DescentUp));
        assert!(parse_preset("sideways").unwrap_err().contains("drag_polar"));
        assert_eq!(parse_interpolation("polar"), Ok(Interpolation::Polar));
        assert!(parse_interpolation("cubic").is_err());
    }

    #[test]
    fn overrides_are_optional() {
        let cli = Cli::try_parse_from(["polarmorph"]).unwrap();
        assert_eq!(cli.unit, None);
        assert_eq!(cli.duration_ms, None);

        let cli = Cli::try_parse_from([
            "polarmorph",
            "--unit",
            "mph",
            "--interpolation",
            "linear",
            "--duration-ms",
            "250",
        ])
        .unwrap();
        assert_eq!(cli.unit, Some(SpeedUnit::MilesPerHour));
        assert_eq!(cli.interpolation, Some(Interpolation::Linear));
        assert_eq!(cli.duration_ms, Some(250));
        assert!(Cli::try_parse_from(["polarmorph", "--preset", "upside_down"]).is_err());
    }
}
