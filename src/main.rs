//! Headless demo: sways a single node and logs its transform every frame.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use idle_sway::{init_logging, AnimationConfig, IdleSway, IdleSwayPlugin, SwayNode};
use log::info;

/// Idle sway animation preview
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON animation config; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 120)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const DEMO_POSITION: Vec2 = Vec2::new(100.0, 100.0);
const DEMO_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Converts a frame rate into the fixed time step fed to Bevy.
fn frame_step(fps: f32) -> Result<Duration> {
    ensure!(
        fps.is_finite() && fps > 0.0,
        "--fps must be a positive number, got {fps}"
    );
    let step = Duration::try_from_secs_f32(fps.recip())
        .with_context(|| format!("--fps {fps} is too small for a frame duration"))?;
    ensure!(!step.is_zero(), "--fps {fps} is too large for a frame duration");
    Ok(step)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => AnimationConfig::load(path)
            .with_context(|| format!("loading animation config from {}", path.display()))?,
        None => AnimationConfig::default(),
    };
    let step = frame_step(args.fps)?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(IdleSwayPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(step));
    let node = app
        .world_mut()
        .spawn((SwayNode::new(DEMO_POSITION, DEMO_SIZE), IdleSway::new(config)))
        .id();

    app.finish();
    app.cleanup();

    for frame in 0..args.frames {
        app.update();
        let Some(state) = app.world().get::<SwayNode>(node) else {
            break;
        };
        info!(
            "frame {frame:>4}: position=({:.2}, {:.2}) rotation={:.2} scale=({:.3}, {:.3})",
            state.position.x,
            state.position.y,
            state.rotation_degrees,
            state.scale.x,
            state.scale.y
        );
    }

    Ok(())
}
