//! Headless PC host for the rolling sphere demo.
//!
//! Single-threaded: loads the sphere mesh, replays a scripted input sequence
//! and runs the scene for a fixed number of frames, handing each frame to a
//! renderer that logs what it would have drawn.

mod entropy;
mod input;
mod renderer;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use rolling_sphere_core::render::Renderer;
use rolling_sphere_core::scene::config::{SceneConfig, DEFAULT_TICKS_PER_SEGMENT};
use rolling_sphere_core::Session;
use rolling_sphere_hal::InputSource;

use entropy::RandEntropy;
use input::ScriptedInput;
use renderer::LogRenderer;

#[derive(Parser, Debug)]
#[command(name = "rolling-sphere-pc")]
#[command(about = "Run the rolling sphere scene headless", long_about = None)]
struct Args {
    /// Sphere mesh file
    #[arg(short, long)]
    mesh: PathBuf,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Input script, e.g. "b wait:30 right menu:fog:2"
    #[arg(short, long, default_value = "b")]
    script: String,

    /// Ticks spent on each leg of the waypoint loop
    #[arg(long, default_value_t = DEFAULT_TICKS_PER_SEGMENT, value_parser = clap::value_parser!(u32).range(1..))]
    ticks_per_segment: u32,

    /// Window width in pixels
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Frame period in milliseconds of simulated time
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Pace frames against the wall clock instead of simulated time
    #[arg(long)]
    realtime: bool,

    /// Log a frame summary every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    log_every: u64,

    /// Seed for the firework colors and velocities
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.quiet {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("rolling-sphere-pc starting");

    let mesh = sphere_mesh::load(&args.mesh)
        .with_context(|| format!("failed to load mesh {}", args.mesh.display()))?;

    let config = SceneConfig {
        ticks_per_segment: args.ticks_per_segment,
        window: (args.width, args.height),
        ..SceneConfig::default()
    };
    let firework = config.firework;
    let mut session = Session::new(config, RandEntropy::new(args.seed))
        .map_err(|e| anyhow::anyhow!("invalid scene configuration: {e}"))?;

    let mut input = ScriptedInput::parse(&args.script)?;
    input.init();

    let mut renderer = LogRenderer::new(mesh, firework, args.log_every);

    let start = Instant::now();
    for frame in 0..args.frames {
        let now_ms = if args.realtime {
            start.elapsed().as_millis() as u64
        } else {
            frame * args.frame_ms
        };

        while let Some(event) = input.poll() {
            session.handle_input(event);
        }
        if session.should_quit() {
            break;
        }

        session.tick(now_ms);
        if let Err(e) = renderer.draw_frame(&session.frame()) {
            anyhow::bail!("frame {frame} failed: {e:?}");
        }

        if args.realtime {
            let next = Duration::from_millis((frame + 1) * args.frame_ms);
            if let Some(wait) = next.checked_sub(start.elapsed()) {
                std::thread::sleep(wait);
            }
        }
    }

    let motion = session.motion().state();
    log::info!(
        "done: {} frames, {} ticks, animation {:?}, sphere at ({:.2}, {:.2}, {:.2})",
        renderer.frames(),
        motion.tick,
        session.animation(),
        motion.position.x,
        motion.position.y,
        motion.position.z,
    );
    log::debug!("last frame: {:?}", renderer.last_summary());
    if input.remaining() > 0 {
        log::warn!("{} script steps were never delivered", input.remaining());
    }
    Ok(())
}
