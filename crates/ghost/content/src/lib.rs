//! Data-driven content definitions and loaders.
//!
//! This crate houses the bundled maze and provides loaders for RON/TOML data
//! files:
//! - Maze layouts (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Loaded content is handed to `ghost-core` as a [`TileGrid`](ghost_core::TileGrid)
//! and a [`GhostConfig`](ghost_core::GhostConfig); it never lives inside agent state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, MazeLoader};
