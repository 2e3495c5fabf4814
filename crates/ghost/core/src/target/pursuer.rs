use super::{ChaseBehavior, pursue};
use crate::env::MazeEnv;
use crate::ghost::{Ghost, PlayerView};
use crate::maze::Heading;

/// Shortest path straight at the player's tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectPursuit;

impl ChaseBehavior for DirectPursuit {
    fn select(&self, ghost: &mut Ghost, env: &MazeEnv<'_>, player: PlayerView) -> Option<Heading> {
        pursue(ghost, env, player.tile)
    }
}
