//! Collaborators bundled for a tick.
//!
//! The engine never owns the board, the clock or the random source. A
//! [`MazeEnv`] borrows all of them for the duration of an update so that
//! every entry point takes a single, cheap-to-copy argument.

use core::time::Duration;

use crate::clock::ClockOracle;
use crate::config::GhostConfig;
use crate::layout::MazeLayout;
use crate::maze::{MazeOracle, PathOracle};
use crate::rng::RngOracle;

#[derive(Clone, Copy)]
pub struct MazeEnv<'a> {
    maze: &'a dyn MazeOracle,
    paths: &'a dyn PathOracle,
    clock: &'a dyn ClockOracle,
    rng: &'a dyn RngOracle,
    config: &'a GhostConfig,
    layout: &'a MazeLayout,
}

impl<'a> MazeEnv<'a> {
    /// Bundles the collaborators against the classic layout.
    pub fn new(
        maze: &'a dyn MazeOracle,
        paths: &'a dyn PathOracle,
        clock: &'a dyn ClockOracle,
        rng: &'a dyn RngOracle,
        config: &'a GhostConfig,
    ) -> Self {
        Self {
            maze,
            paths,
            clock,
            rng,
            config,
            layout: &MazeLayout::CLASSIC,
        }
    }

    pub fn with_layout(mut self, layout: &'a MazeLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn maze(&self) -> &'a dyn MazeOracle {
        self.maze
    }

    pub fn paths(&self) -> &'a dyn PathOracle {
        self.paths
    }

    pub fn clock(&self) -> &'a dyn ClockOracle {
        self.clock
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a GhostConfig {
        self.config
    }

    pub fn layout(&self) -> &'a MazeLayout {
        self.layout
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}

impl core::fmt::Debug for MazeEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MazeEnv")
            .field("dimensions", &self.maze.dimensions())
            .field("now", &self.clock.now())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
