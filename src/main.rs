//! Ring Escape headless runner
//!
//! Drives the simulation loop with a simulated display clock and logs the
//! outcome. Usage:
//!
//! ```text
//! ring-escape [--level <path>] [--settings <path>] [--seed <u64>]
//!             [--quality <low|medium|high>] [--frames <n>] [--fps <hz>]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ring_escape::renderer::{Frame, LogSink, RenderSink};
use ring_escape::settings::QualityPreset;
use ring_escape::sim::GameStatus;
use ring_escape::{LevelConfig, ManualScheduler, Settings, SimulationLoop};

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "ring-escape")]
#[command(about = "Run a ring escape level headless and report the outcome")]
struct Options {
    /// Level JSON file (defaults to the built-in five ring level)
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,
    /// Settings JSON file
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Jitter seed, overrides the settings file
    #[arg(long)]
    seed: Option<u64>,
    /// Tessellation quality, overrides the settings file
    #[arg(long, value_enum)]
    quality: Option<CliQuality>,
    /// Frame cap; the loop is torn down once it is reached
    #[arg(long, default_value_t = 60 * 600)]
    frames: u64,
    /// Simulated display refresh rate
    #[arg(long, value_name = "HZ", default_value_t = 60.0, value_parser = parse_fps)]
    fps: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CliQuality {
    Low,
    Medium,
    High,
}

impl From<CliQuality> for QualityPreset {
    fn from(value: CliQuality) -> Self {
        match value {
            CliQuality::Low => QualityPreset::Low,
            CliQuality::Medium => QualityPreset::Medium,
            CliQuality::High => QualityPreset::High,
        }
    }
}

fn parse_fps(raw: &str) -> Result<f64, String> {
    let fps: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if fps > 0.0 && fps.is_finite() {
        Ok(fps)
    } else {
        Err(format!("fps must be a positive number, got {raw}"))
    }
}

fn run(options: &Options) -> Result<GameStatus, String> {
    let mut settings = match &options.settings {
        Some(path) => Settings::load(path).map_err(|e| e.to_string())?,
        None => Settings::default(),
    };
    if let Some(seed) = options.seed {
        settings.seed = seed;
    }
    if let Some(quality) = options.quality {
        settings.quality = quality.into();
    }

    let level = match &options.level {
        Some(path) => LevelConfig::load(path).map_err(|e| e.to_string())?,
        None => LevelConfig::default(),
    };

    log::info!(
        "Game initialized with seed: {} ({} quality)",
        settings.seed,
        settings.quality.as_str()
    );

    let mut sim = SimulationLoop::from_settings(&level, &settings).map_err(|e| e.to_string())?;
    let mut scheduler = ManualScheduler::new();
    let mut sink = LogSink::default();

    let frame_time = 1.0 / options.fps;
    let mut now = 0.0;
    sim.start(&mut scheduler, now);

    let mut frames = 0;
    while let Some(request) = scheduler.next_due() {
        if frames >= options.frames {
            log::warn!("Frame limit {} reached, stopping", options.frames);
            sim.teardown(&mut scheduler);
            break;
        }
        now += frame_time;
        frames += 1;

        if sim.on_frame(&mut scheduler, request, now).is_some() {
            sink.present(&Frame::build(&sim.snapshot(), &settings));
        }
    }

    let state = sim.state();
    log::info!(
        "{:?} after {} frames / {} ticks: {} escapes, {} bounces, ball r={:.2}",
        state.status,
        frames,
        state.time_ticks,
        state.escapes,
        state.bounces,
        state.ball.radius
    );

    Ok(state.status)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ring Escape (headless) starting...");

    let options = Options::parse();

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
