//! Behavior engine for the four maze-chase ghosts.
//!
//! `ghost-core` decides, tick by tick, where each ghost heads: waiting in and
//! leaving the pen, alternating chase and scatter, patrolling corners,
//! fleeing while frightened and walking back home after capture. The board,
//! the path search, the clock and the random source are collaborators
//! reached through the oracle traits bundled in [`MazeEnv`]; reference
//! implementations of each are provided so drivers and tests can run the
//! engine without any other crate.
//!
//! The driver owns every [`Ghost`] and calls [`Ghost::advance`] (or
//! [`Ghost::update_direction`] and [`Ghost::update_position`] separately)
//! once per frame.
pub mod clock;
pub mod config;
pub mod env;
pub mod error;
pub mod ghost;
pub mod layout;
pub mod maze;
pub mod rng;
pub mod target;

pub use clock::{ClockOracle, ManualClock, SteadyClock};
pub use config::{ConfigError, GhostConfig, SpeedTiers};
pub use env::MazeEnv;
pub use error::{EngineError, ErrorSeverity};
pub use ghost::{
    Confinement, Ghost, GhostError, GhostSnapshot, Mode, Personality, PixelPos, PlayerView,
    SpeedTier, SwitcherPhase,
};
pub use layout::{CorridorLock, MazeLayout, PatrolLoop, PatrolTurn, ReturnRoute, TunnelLayout};
pub use maze::{
    AStarPathfinder, GridError, Heading, MazeDimensions, MazeOracle, NoReversal, PathOracle,
    TileGrid, TileKind, TilePos,
};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use target::{ChaseBehavior, DirectPursuit, Interception, KeepAway, PhaseSwitching};
