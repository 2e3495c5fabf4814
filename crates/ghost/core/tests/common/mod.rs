#![allow(dead_code)]

use ghost_core::{
    AStarPathfinder, GhostConfig, ManualClock, MazeEnv, MazeOracle, PathOracle, PcgRng, TileGrid,
    TilePos,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Classic board: `#` wall, `.` open, `-` pen door.
pub const CLASSIC_ROWS: [&str; 27] = [
    "#####################",
    "#.........#.........#",
    "#.###.###.#.###.###.#",
    "#.###.###.#.###.###.#",
    "#.###.###.#.###.###.#",
    "#...................#",
    "#.###.#.#####.#.###.#",
    "#.....#...#...#.....#",
    "#####.###.#.###.#####",
    "#####.#.......#.#####",
    "#####.#.......#.#####",
    "#####.#.##-##.#.#####",
    "#####.#.#...#.#.#####",
    "........#...#........",
    "#####.#.#####.#.#####",
    "#####.#.......#.#####",
    "#####.#.#####.#.#####",
    "#.........#.........#",
    "#.###.###.#.###.###.#",
    "#.###.###.#.###.###.#",
    "#.###...........###.#",
    "#.###.#.#####.#.###.#",
    "#.###.#.#####.#.###.#",
    "#.....#...#...#.....#",
    "#.#######.#.#######.#",
    "#...................#",
    "#####################",
];

pub fn classic_grid() -> TileGrid {
    TileGrid::from_rows(&CLASSIC_ROWS).unwrap()
}

/// Owns every collaborator so a test can borrow a [`MazeEnv`] from it.
pub struct World<P: PathOracle = AStarPathfinder> {
    pub grid: TileGrid,
    pub paths: P,
    pub clock: ManualClock,
    pub rng: PcgRng,
    pub config: GhostConfig,
}

impl World {
    pub fn classic() -> Self {
        Self::with_grid(classic_grid())
    }

    pub fn open() -> Self {
        Self::with_grid(TileGrid::open(21, 27))
    }

    pub fn with_grid(grid: TileGrid) -> Self {
        Self {
            grid,
            paths: AStarPathfinder,
            clock: ManualClock::new(),
            rng: PcgRng,
            config: GhostConfig::default(),
        }
    }
}

impl<P: PathOracle> World<P> {
    pub fn with_paths<Q: PathOracle>(self, paths: Q) -> World<Q> {
        World {
            grid: self.grid,
            paths,
            clock: self.clock,
            rng: self.rng,
            config: self.config,
        }
    }

    pub fn env(&self) -> MazeEnv<'_> {
        MazeEnv::new(&self.grid, &self.paths, &self.clock, &self.rng, &self.config)
    }

    /// One 60 Hz frame.
    pub fn tick(&self) {
        self.clock.advance_secs(1.0 / 60.0);
    }
}

/// Path oracle that counts its queries.
#[derive(Default)]
pub struct CountingPaths {
    calls: AtomicUsize,
}

impl CountingPaths {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl PathOracle for CountingPaths {
    fn find_path(&self, maze: &dyn MazeOracle, from: TilePos, to: TilePos) -> Vec<TilePos> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        AStarPathfinder.find_path(maze, from, to)
    }
}
