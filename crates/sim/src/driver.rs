//! Frame loop wiring the engine to a scripted player.
use std::time::Duration;

use ghost_core::{
    AStarPathfinder, ClockOracle, Confinement, Ghost, GhostConfig, GhostError, GhostSnapshot,
    ManualClock, MazeEnv, MazeLayout, PcgRng, Personality, TileGrid,
};
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::player::Wanderer;

/// Periodic fear signal: on for `duration` at the start of every `period`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FearSchedule {
    period: f64,
    duration: f64,
    active: bool,
}

impl FearSchedule {
    /// A zero `period` never raises fear.
    pub fn new(period_secs: f64, duration_secs: f64) -> Self {
        Self {
            period: period_secs,
            duration: duration_secs,
            active: false,
        }
    }

    /// Returns the new signal when it flips at `now`.
    pub fn update(&mut self, now: Duration) -> Option<bool> {
        let wanted = self.wanted(now);
        if wanted == self.active {
            return None;
        }
        self.active = wanted;
        Some(wanted)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn wanted(&self, now: Duration) -> bool {
        if self.period <= 0.0 || self.duration <= 0.0 {
            return false;
        }
        let now = now.as_secs_f64();
        now >= self.period && now % self.period < self.duration
    }
}

/// Outcome of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    pub frames: u64,
    pub elapsed: Duration,
    /// Frightened ghosts caught by the player.
    pub captures: u32,
    /// Times a roaming ghost caught the player.
    pub player_caught: u32,
    pub ghosts: Vec<GhostSnapshot>,
}

/// Owns the collaborators, the four agents and the player.
pub struct FrameDriver {
    grid: TileGrid,
    paths: AStarPathfinder,
    clock: ManualClock,
    rng: PcgRng,
    config: GhostConfig,
    layout: MazeLayout,
    frame_interval: Duration,
    fear: FearSchedule,
    player: Wanderer,
    ghosts: Vec<Ghost>,
    frames: u64,
    captures: u32,
    player_caught: u32,
    /// Whether a roaming ghost shared the player's tile last frame.
    in_contact: bool,
}

impl FrameDriver {
    /// Spawns the four agents in the pen at time zero.
    pub fn new(grid: TileGrid, config: GhostConfig, sim: &SimConfig) -> Self {
        let mut driver = Self {
            grid,
            paths: AStarPathfinder,
            clock: ManualClock::new(),
            rng: PcgRng,
            player: Wanderer::new(sim.player, config.seed),
            config,
            layout: MazeLayout::CLASSIC,
            frame_interval: sim.frame_interval(),
            fear: FearSchedule::new(sim.fear_every_secs, sim.fear_secs),
            ghosts: Vec::with_capacity(Personality::ALL.len()),
            frames: 0,
            captures: 0,
            player_caught: 0,
            in_contact: false,
        };
        let env = MazeEnv::new(
            &driver.grid,
            &driver.paths,
            &driver.clock,
            &driver.rng,
            &driver.config,
        )
        .with_layout(&driver.layout);
        driver.ghosts = Personality::ALL
            .into_iter()
            .map(|personality| Ghost::spawn(personality, &env))
            .collect();
        driver
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn player(&self) -> &Wanderer {
        &self.player
    }

    pub fn player_caught(&self) -> u32 {
        self.player_caught
    }

    pub fn is_fear_active(&self) -> bool {
        self.fear.is_active()
    }

    /// Runs one frame: fear schedule, player step, every agent, contacts.
    pub fn step(&mut self) -> Result<(), GhostError> {
        self.frames += 1;
        self.clock.advance(self.frame_interval);

        let env = MazeEnv::new(&self.grid, &self.paths, &self.clock, &self.rng, &self.config)
            .with_layout(&self.layout);

        if let Some(afraid) = self.fear.update(env.now()) {
            info!(
                "Fear {} at {:.2}s",
                if afraid { "starts" } else { "ends" },
                env.now().as_secs_f64()
            );
            for ghost in &mut self.ghosts {
                ghost.trigger_fear(afraid, &env);
            }
        }

        self.player.tick(&self.grid, &self.rng);
        let view = self.player.view();

        let mut caught = false;
        for ghost in &mut self.ghosts {
            ghost.advance(&env, view)?;
            if ghost.tile() != view.tile || ghost.confinement() != Confinement::Active {
                continue;
            }
            if ghost.is_frightened() {
                if ghost.trigger_capture() {
                    self.captures += 1;
                    info!("{} ghost captured at {}", ghost.personality(), view.tile);
                }
            } else {
                caught = true;
                debug!("{} ghost caught the player at {}", ghost.personality(), view.tile);
            }
        }

        // A ghost holding on the player's tile stays in contact; count it once.
        if caught && !self.in_contact {
            self.player_caught += 1;
            info!("Player caught at {}, restarting from its start tile", view.tile);
            self.player.reset();
        }
        self.in_contact = caught;
        Ok(())
    }

    /// Runs `frames` frames and reports the outcome. A fatal agent error stops
    /// the run.
    pub fn run(&mut self, frames: u64) -> Result<SimReport, GhostError> {
        info!(
            "Running {} frames at {:?} per frame",
            frames, self.frame_interval
        );
        for _ in 0..frames {
            self.step()?;
        }
        Ok(self.report())
    }

    pub fn report(&self) -> SimReport {
        SimReport {
            frames: self.frames,
            elapsed: self.clock.now(),
            captures: self.captures,
            player_caught: self.player_caught,
            ghosts: self.ghosts.iter().map(Ghost::snapshot).collect(),
        }
    }
}
