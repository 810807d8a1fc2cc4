//! Headless `lakitu` runner: plays the demo course with scripted input.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lakitu::clock::FrameClock;
use lakitu::flow::{GameFlow, MenuCommand, Progress};
use lakitu::{init_logging, EngineConfig, InputScript, Level, RecordingSurface, Session};
use log::info;
use serde::Serialize;

/// Headless runner for the box renderer and platformer core
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// TOML file overriding the default settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,
    /// Scripted input to feed the player
    #[arg(short, long, value_enum, default_value_t = InputScript::Walk)]
    script: InputScript,
    /// Write the last frame's draw calls as JSON
    #[arg(long)]
    dump: Option<PathBuf>,
    /// Run as fast as possible instead of at the configured frame rate
    #[arg(long)]
    unpaced: bool,
}

#[derive(Serialize)]
struct Dump<'a> {
    frame: u64,
    progress: &'a Progress,
    surface: &'a RecordingSurface,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config.as_ref().map_or_else(
        || Ok(EngineConfig::default()),
        |path| {
            EngineConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))
        },
    )?;
    let level = Level::castle_grounds().context("building the demo course")?;
    let mut session = Session::new(level, &config).context("starting the session")?;

    let mut flow = GameFlow::new();
    flow.handle(MenuCommand::Confirm);
    flow.handle(MenuCommand::SelectFile(0));

    let mut clock = FrameClock::new(config.display.fps);
    let mut surface = RecordingSurface::new(config.display.width, config.display.height);
    for frame in 0..args.frames {
        let input = args.script.snapshot(frame);
        if let Some(report) = flow.frame(&mut session, &input) {
            for event in &report.events {
                info!("frame {}: {event:?}", report.frame);
            }
        }
        surface.clear();
        session.present(&mut surface);
        if !args.unpaced {
            clock.wait();
        }
    }

    let progress = flow.progress();
    info!(
        "finished {} frames at {} with {} stars, {} coins, {} lives",
        session.frame(),
        session.actor().position(),
        progress.stars,
        progress.coins,
        progress.lives
    );

    if let Some(path) = &args.dump {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let dump = Dump {
            frame: session.frame(),
            progress,
            surface: &surface,
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &dump)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote draw list to {}", path.display());
    }
    Ok(())
}
