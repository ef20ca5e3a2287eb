//! Board Demo - Headless Targeting Run
//!
//! Run with: `cargo run --bin board_demo -- --mode absolute --ticks 240`
//!
//! Drives the rig from a scripted pointer: the crosshair sweeps across the
//! board, a target is selected every so often, and the marble rolls toward
//! the latest target while a follower mirrors it. Scroll is scripted too, so
//! the camera zooms in and back out during the run.
//!
//! Set `RUST_LOG=marble_board_engine=debug` for per-tick crosshair logs.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glam::{Vec2, Vec3};
use marble_board_engine::crosshair::{InputMode, InstanceRegistry};
use marble_board_engine::input::{PointerSample, ScriptedSampler, ScriptedTick};
use marble_board_engine::{RigConfig, SceneBuilder};

/// Marble speed toward the target, world units per tick.
const MARBLE_SPEED: f32 = 0.2;

/// Ticks between select presses in the script.
const SELECT_PERIOD: u32 = 60;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Crosshair sits under the pointer
    Absolute,
    /// Crosshair is steered by pointer movement
    Delta,
}

impl From<Mode> for InputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Absolute => InputMode::Absolute,
            Mode::Delta => InputMode::Delta,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "board-demo")]
#[command(about = "Headless crosshair targeting demo", long_about = None)]
struct Cli {
    /// JSON rig config; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 240)]
    ticks: u32,

    /// Override the configured input mode
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let mut config = match &cli.config {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("failed to load rig config from {}", path.display()))?,
        None => RigConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.crosshair.input_mode = mode.into();
    }

    let registry = InstanceRegistry::new();
    let mut wiring = SceneBuilder::new(config)
        .build(&registry)
        .context("failed to build scene")?;

    let target = Rc::new(Cell::new(None::<Vec3>));
    let latest = Rc::clone(&target);
    wiring.subscribe(move |event| latest.set(Some(event.position)));
    let follower = wiring.add_follower(Some(wiring.marble()));

    let viewport = wiring.camera().viewport;
    let mut scene = wiring.start();
    let mut input = script(config.crosshair.input_mode, viewport.center(), cli.ticks);

    for _ in 0..cli.ticks {
        let tick = scene.tick_input(&mut input);

        if let Some(event) = tick.crosshair.selection {
            tracing::info!(tick = scene.tick_count(), position = ?event.position, "new target");
        }

        if let Some(goal) = target.get() {
            let marble = scene.marble();
            let mut marble = marble.borrow_mut();
            marble.position = step_toward(marble.position, goal, MARBLE_SPEED);
        }

        tracing::debug!(
            tick = scene.tick_count(),
            crosshair = ?scene.crosshair().crosshair().position,
            zoom = ?tick.zoom,
            follower = ?scene.followers()[follower].position(),
            "tick"
        );
    }

    tracing::info!(
        ticks = scene.tick_count(),
        phase = ?scene.crosshair().phase(),
        target = ?scene.crosshair().target().position,
        follower = ?scene.followers()[follower].position(),
        zoom = scene.camera().projection.zoom_parameter(),
        "demo finished"
    );

    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Pointer sweeps a circle around the viewport center, pressing select
/// periodically and scrolling in then out over the first half of the run.
fn script(mode: InputMode, center: Vec2, ticks: u32) -> ScriptedSampler {
    let radius = center.min_element() * 0.6;
    let mut previous = center;

    ScriptedSampler::new((0..ticks).map(|i| {
        let angle = i as f32 * std::f32::consts::TAU / ticks.max(1) as f32;
        let absolute = center + Vec2::new(angle.cos(), angle.sin()) * radius;
        let delta = absolute - previous;
        previous = absolute;

        let pointer = match mode {
            InputMode::Absolute => PointerSample::at(absolute),
            InputMode::Delta => PointerSample::moved_by(delta),
        };
        let zoom_axis = match i {
            20..40 => 30.0,
            60..80 => -30.0,
            _ => 0.0,
        };

        ScriptedTick {
            pointer: pointer.with_select(i % SELECT_PERIOD == SELECT_PERIOD - 1),
            zoom_axis,
        }
    }))
}

fn step_toward(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let offset = to - from;
    if offset.length() <= max_step {
        to
    } else {
        from + offset.normalize_or_zero() * max_step
    }
}
