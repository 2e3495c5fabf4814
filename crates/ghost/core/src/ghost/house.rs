use tracing::{debug, warn};

use super::{Confinement, Ghost, GhostError, Mode};
use crate::env::MazeEnv;
use crate::maze::{Heading, TileKind, TilePos};

impl Ghost {
    /// Pen controller: bob between the two pen rows until the wait is over,
    /// then walk out through the door.
    pub(super) fn update_in_house(&mut self, env: &MazeEnv<'_>) -> Result<(), GhostError> {
        let waited = env.clock().elapsed_since(self.house_since);
        if waited < env.config().house_wait(self.personality) {
            return self.bob(env);
        }
        self.leave_house(env)
    }

    fn bob(&mut self, env: &MazeEnv<'_>) -> Result<(), GhostError> {
        if !self.pixel.is_aligned(env.config()) {
            return Ok(());
        }

        let layout = env.layout();
        if self.tile.y == layout.bob_up_row {
            self.commit(Some(Heading::Up))
        } else if self.tile.y == layout.bob_down_row {
            self.commit(Some(Heading::Down))
        } else {
            Ok(())
        }
    }

    fn leave_house(&mut self, env: &MazeEnv<'_>) -> Result<(), GhostError> {
        let layout = env.layout();
        if self.tile == layout.exit {
            self.confinement = Confinement::Active;
            self.mode = Mode::Unset;
            debug!(
                "{} ghost left the house after {:?}",
                self.personality,
                env.clock().elapsed_since(self.house_since)
            );
            self.evaluate_mode(env);
            return Ok(());
        }

        if self.tile.y == layout.bob_up_row {
            return self.commit(Some(Heading::Up));
        }

        let maze = env.maze();
        let is_door =
            |pos: Option<TilePos>| pos.and_then(|pos| maze.tile(pos)) == Some(TileKind::Door);
        let above = self.tile.step(Heading::Up);

        let heading = if is_door(Some(self.tile)) || is_door(above) {
            Heading::Up
        } else if is_door(above.and_then(|pos| pos.step(Heading::Right))) {
            Heading::Right
        } else if is_door(above.and_then(|pos| pos.step(Heading::Left))) {
            Heading::Left
        } else {
            warn!(
                "{} ghost at {} has no door in reach, holding",
                self.personality, self.tile
            );
            return self.commit(None);
        };
        self.commit(Some(heading))
    }
}
