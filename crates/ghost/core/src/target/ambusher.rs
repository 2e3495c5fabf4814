use super::{ChaseBehavior, pursue};
use crate::env::MazeEnv;
use crate::ghost::{Ghost, PlayerView};
use crate::maze::{Heading, MazeOracle, TileKind, TilePos};

/// Aims ahead of the player along its heading.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interception;

impl Interception {
    /// Tile up to `lookahead` steps ahead of the player, stopping short of
    /// walls, the pen door and the board edge.
    pub fn aim(maze: &dyn MazeOracle, player: PlayerView, lookahead: u32) -> TilePos {
        let Some(heading) = player.heading else {
            return player.tile;
        };

        let dimensions = maze.dimensions();
        let mut target = player.tile;
        for _ in 0..lookahead {
            let Some(next) = target.step(heading).filter(|next| dimensions.contains(*next))
            else {
                break;
            };
            if matches!(maze.tile(next), Some(TileKind::Wall | TileKind::Door)) {
                break;
            }
            target = next;
        }
        target
    }
}

impl ChaseBehavior for Interception {
    fn select(&self, ghost: &mut Ghost, env: &MazeEnv<'_>, player: PlayerView) -> Option<Heading> {
        let config = env.config();
        if ghost.tile().manhattan(player.tile) < config.ambush_close_range {
            return pursue(ghost, env, player.tile);
        }
        let target = Self::aim(env.maze(), player, config.ambush_lookahead);
        pursue(ghost, env, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::TileGrid;

    #[test]
    fn aims_four_tiles_ahead() {
        let grid = TileGrid::open(21, 27);
        let player = PlayerView::new(TilePos::new(10, 10), Some(Heading::Up));
        assert_eq!(Interception::aim(&grid, player, 4), TilePos::new(10, 6));
    }

    #[test]
    fn stops_at_walls_and_edges() {
        let grid = TileGrid::open(21, 27).with_tile(TilePos::new(13, 5), TileKind::Wall);
        let player = PlayerView::new(TilePos::new(10, 5), Some(Heading::Right));
        assert_eq!(Interception::aim(&grid, player, 4), TilePos::new(12, 5));

        let player = PlayerView::new(TilePos::new(19, 5), Some(Heading::Right));
        assert_eq!(Interception::aim(&grid, player, 4), TilePos::new(20, 5));

        let player = PlayerView::new(TilePos::new(1, 5), Some(Heading::Left));
        assert_eq!(Interception::aim(&grid, player, 4), TilePos::new(0, 5));
    }

    #[test]
    fn never_aims_through_the_pen_door() {
        let grid = TileGrid::open(21, 27).with_tile(TilePos::new(10, 11), TileKind::Door);
        let player = PlayerView::new(TilePos::new(10, 9), Some(Heading::Down));
        assert_eq!(Interception::aim(&grid, player, 4), TilePos::new(10, 10));
    }

    #[test]
    fn standing_player_is_its_own_target() {
        let grid = TileGrid::open(21, 27);
        let player = PlayerView::new(TilePos::new(7, 7), None);
        assert_eq!(Interception::aim(&grid, player, 4), TilePos::new(7, 7));
    }
}
