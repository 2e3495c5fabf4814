use tracing::debug;

use super::{Confinement, Ghost, GhostError, Mode, PixelPos};
use crate::env::MazeEnv;
use crate::target;

impl Ghost {
    /// Sends a roaming agent back to the pen.
    ///
    /// Returns `false` (and changes nothing) when the agent is not roaming.
    pub fn trigger_capture(&mut self) -> bool {
        if self.confinement != Confinement::Active {
            return false;
        }

        self.heading = None;
        self.confinement = Confinement::Returning;
        self.mode = Mode::Unset;
        self.patrol_arrival = None;
        self.eaten_at = Some(self.pixel);
        debug!(
            "{} ghost captured at {} ({})",
            self.personality, self.tile, self.pixel
        );
        true
    }

    /// Puts the agent back on its home tile in the pen, as freshly spawned.
    pub fn respawn(&mut self, env: &MazeEnv<'_>) {
        let home = env.layout().spawn(self.personality);
        self.tile = home;
        self.pixel = PixelPos::tile_center(home, env.config());
        self.heading = None;
        self.confinement = Confinement::House;
        self.mode = Mode::Unset;
        self.in_tunnel = false;
        self.patrol_arrival = None;
        self.switcher = None;
        if env.config().rewait_after_capture {
            self.house_since = env.now();
        }
        debug!("{} ghost respawned at {}", self.personality, home);
    }

    /// Return controller: scripted through the door, searched elsewhere.
    pub(super) fn update_returning(&mut self, env: &MazeEnv<'_>) -> Result<(), GhostError> {
        self.mode = Mode::Unset;

        let layout = env.layout();
        if self.tile == layout.spawn(self.personality) {
            self.respawn(env);
            return Ok(());
        }

        let route = &layout.return_route;
        if let Some((_, heading)) = route.shared.iter().find(|(at, _)| *at == self.tile) {
            return self.commit(Some(*heading));
        }
        if self.tile == route.fork {
            return self.commit(Some(route.fork_headings[self.personality.index()]));
        }

        let heading = target::pursue(self, env, layout.exit);
        self.commit(heading)
    }
}
