//! Maze geometry contracts consumed by the behavior engine.
//!
//! The engine never owns the board. It reads tile classes through
//! [`MazeOracle`], asks a [`PathOracle`] for shortest paths, and narrows the
//! board with [`NoReversal`] when an agent must not turn back.
mod grid;
mod path;
mod view;

pub use grid::{GridError, TileGrid};
pub use path::{AStarPathfinder, PathOracle};
pub use view::NoReversal;

use core::fmt;

/// Discrete tile coordinate. `y` grows downwards, so [`Heading::Up`] decrements it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePos {
    pub x: u32,
    pub y: u32,
}

impl TilePos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Neighbouring tile one step along `heading`, or `None` on coordinate underflow.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let (dx, dy) = heading.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Squared straight-line distance; exact, so ties compare equal.
    pub fn distance_sq(self, other: Self) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dy = u64::from(self.y.abs_diff(other.y));
        dx * dx + dy * dy
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Committed travel direction of an agent.
///
/// The absence of a heading (spawn, or no legal move) is `Option<Heading>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Enumeration order; also the tie-break order wherever headings compete.
    pub const ALL: [Heading; 4] = [Heading::Left, Heading::Right, Heading::Up, Heading::Down];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Heading::Left | Heading::Right)
    }

    /// Heading that leads from `from` to the orthogonally adjacent `to`.
    pub fn between(from: TilePos, to: TilePos) -> Option<Self> {
        Self::ALL.into_iter().find(|heading| from.step(*heading) == Some(to))
    }
}

/// Classification of a single maze tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Open,
    Wall,
    /// Pen gate. Scripted house movement crosses it; path search does not.
    Door,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeDimensions {
    pub width: u32,
    pub height: u32,
}

impl MazeDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}

/// Read-only view of the board.
pub trait MazeOracle: Send + Sync {
    fn dimensions(&self) -> MazeDimensions;

    /// Tile class at `pos`, or `None` outside the board.
    fn tile(&self, pos: TilePos) -> Option<TileKind>;

    fn is_passable(&self, pos: TilePos) -> bool {
        matches!(self.tile(pos), Some(TileKind::Open))
    }

    /// Whether an agent standing on `from` may take one step along `heading`.
    fn allows_step(&self, from: TilePos, heading: Heading) -> bool {
        from.step(heading)
            .is_some_and(|to| self.dimensions().contains(to) && self.is_passable(to))
    }
}
