//! Heading selection for roaming agents.
//!
//! Each personality's chase strategy implements [`ChaseBehavior`]; the
//! scatter patrol and frightened evasion are shared by every personality.
//! Selectors only *choose*: they return the heading to commit, or `None` to
//! hold, and the caller steps the tile.
mod ambusher;
pub(crate) mod evasion;
mod opportunist;
mod pursuer;
pub(crate) mod scatter;
mod switcher;

pub use ambusher::Interception;
pub use opportunist::KeepAway;
pub use pursuer::DirectPursuit;
pub use switcher::PhaseSwitching;

use crate::env::MazeEnv;
use crate::ghost::{Ghost, Personality, PlayerView};
use crate::maze::{Heading, NoReversal, TilePos};

/// A personality's chase-mode strategy.
pub trait ChaseBehavior: Send + Sync {
    /// Chooses the heading for this tick, or `None` when there is no move.
    ///
    /// Strategies may update the agent's own bookkeeping (sub-phase timers,
    /// a forced mode change) but never its tile or heading.
    fn select(&self, ghost: &mut Ghost, env: &MazeEnv<'_>, player: PlayerView) -> Option<Heading>;
}

/// Strategy used by `personality` in chase mode.
pub fn behavior_for(personality: Personality) -> &'static dyn ChaseBehavior {
    match personality {
        Personality::Pursuer => &DirectPursuit,
        Personality::Ambusher => &Interception,
        Personality::Switcher => &PhaseSwitching,
        Personality::Opportunist => &KeepAway,
    }
}

/// First step of the shortest path from the agent to `target`.
///
/// An agent that already has a heading searches without its reverse edge
/// first and only falls back to turning around when nothing else reaches
/// the target.
pub(crate) fn pursue(ghost: &Ghost, env: &MazeEnv<'_>, target: TilePos) -> Option<Heading> {
    let maze = env.maze();
    let paths = env.paths();

    let mut path = match ghost.heading() {
        Some(heading) => {
            let view = NoReversal::new(maze, heading, ghost.tile());
            paths.find_path(&view, ghost.tile(), target)
        }
        None => Vec::new(),
    };
    if path.is_empty() {
        path = paths.find_path(maze, ghost.tile(), target);
    }
    first_step(&path)
}

pub(crate) fn first_step(path: &[TilePos]) -> Option<Heading> {
    match path {
        [from, to, ..] => Heading::between(*from, *to),
        _ => None,
    }
}
