//! Headless ghost simulation binary.
//!
//! Loads the engine configuration and maze, then drives the four ghosts
//! against a scripted player for a fixed number of frames.
//!
//! # Examples
//!
//! ```bash
//! # Two simulated minutes on the classic maze
//! cargo run -p ghost-sim
//!
//! # Custom tunables, fear every 20 s, verbose engine logs
//! GHOST_CONFIG=crates/ghost/content/data/ghosts.toml SIM_FEAR_EVERY_SECS=20 \
//!     RUST_LOG=ghost_core=debug cargo run -p ghost-sim
//! ```

use anyhow::{Context, Result};
use ghost_content::{ConfigLoader, MazeLoader};
use ghost_core::{EngineError, GhostConfig, MazeLayout};
use ghost_sim::{FrameDriver, SimConfig, SimReport, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let sim = SimConfig::from_env();
    let _guard = logging::setup_logging(sim.log_dir.as_deref())?;

    tracing::info!("Starting ghost simulation");
    match run(&sim) {
        Ok(report) => {
            log_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Simulation aborted: {:#}", e);
            Err(e)
        }
    }
}

fn run(sim: &SimConfig) -> Result<SimReport> {
    let mut config = match &sim.ghost_config {
        Some(path) => ConfigLoader::load(path)?,
        None => GhostConfig::default(),
    };
    if let Some(seed) = sim.seed {
        config.seed = seed;
    }
    tracing::info!(
        "Difficulty {}, seed {}, fear every {}s for {}s",
        config.difficulty,
        config.seed,
        sim.fear_every_secs,
        sim.fear_secs
    );

    let grid = match &sim.maze {
        Some(path) => MazeLoader::load(path)?,
        None => MazeLoader::classic()?,
    };
    MazeLoader::check_layout(&grid, &MazeLayout::CLASSIC).context("Maze does not fit layout")?;

    let mut driver = FrameDriver::new(grid, config, sim);
    driver.run(sim.frames()).map_err(|e| {
        tracing::error!("[{}] {}", e.error_code(), e);
        anyhow::Error::new(e)
    })
}

fn log_report(report: &SimReport) {
    tracing::info!(
        "Simulated {} frames ({:.1}s): {} captures, player caught {} times",
        report.frames,
        report.elapsed.as_secs_f64(),
        report.captures,
        report.player_caught
    );
    for ghost in &report.ghosts {
        tracing::info!(
            "  {:<11} {} at {} heading {:?}, mode {}",
            ghost.personality.to_string(),
            ghost.confinement,
            ghost.tile,
            ghost.heading,
            ghost.mode
        );
    }
}
