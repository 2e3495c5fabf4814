//! Frightened evasion.
//!
//! The agent finds the heading that would approach the player most directly
//! and then refuses it, along with turning back, picking whichever remaining
//! heading lands farthest from the player. When that leaves nothing, only
//! the no-reversal rule is kept and a heading is drawn at random.

use arrayvec::ArrayVec;
use tracing::trace;

use super::first_step;
use crate::env::MazeEnv;
use crate::ghost::{Ghost, PlayerView};
use crate::maze::Heading;
use crate::rng::compute_seed;

pub(crate) fn evade(ghost: &mut Ghost, env: &MazeEnv<'_>, player: PlayerView) -> Option<Heading> {
    let maze = env.maze();
    let tile = ghost.tile();
    let path = env.paths().find_path(maze, tile, player.tile);
    let toward = first_step(&path)?;

    let reverse = ghost.heading().map(Heading::reverse);
    let legal: ArrayVec<Heading, 4> = Heading::ALL
        .into_iter()
        .filter(|heading| Some(*heading) != reverse && maze.allows_step(tile, *heading))
        .collect();

    let mut best: Option<(Heading, u64)> = None;
    for heading in legal.iter().copied().filter(|heading| *heading != toward) {
        let Some(next) = tile.step(heading) else {
            continue;
        };
        let distance = next.distance_sq(player.tile);
        if best.is_none_or(|(_, farthest)| distance > farthest) {
            best = Some((heading, distance));
        }
    }
    if let Some((heading, _)) = best {
        return Some(heading);
    }

    if legal.is_empty() {
        return None;
    }
    let seed = compute_seed(
        env.config().seed,
        ghost.rng_nonce,
        ghost.personality().index() as u32,
        0,
    );
    ghost.rng_nonce += 1;
    let heading = legal[env.rng().pick_index(seed, legal.len())];
    trace!(
        "{} ghost cornered at {}, falling back to {}",
        ghost.personality(),
        tile,
        heading
    );
    Some(heading)
}
