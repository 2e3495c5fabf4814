//! Headless frame driver for the ghost behavior engine.
//!
//! # Architecture
//!
//! ```text
//! ghosts (binary)
//!   ├─→ SimConfig     (process environment, `.env`)
//!   ├─→ ghost-content (maze RON, engine TOML)
//!   └─→ FrameDriver   (clock, four agents, scripted player)
//!         └─→ ghost-core (per-frame `Ghost::advance`)
//! ```
//!
//! The driver owns every collaborator and lends them to the engine as a
//! [`MazeEnv`](ghost_core::MazeEnv) each frame. The clock is a
//! [`ManualClock`](ghost_core::ManualClock) advanced by one frame interval,
//! so a run is fully determined by its configuration and seed.

pub mod config;
pub mod driver;
pub mod logging;
pub mod player;

pub use config::{PlayerConfig, SimConfig};
pub use driver::{FearSchedule, FrameDriver, SimReport};
pub use player::Wanderer;
