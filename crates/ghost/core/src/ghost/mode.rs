use core::time::Duration;

use tracing::debug;

use super::{Confinement, Ghost, Mode};
use crate::env::MazeEnv;

impl Ghost {
    /// Runs the chase/scatter alternation.
    ///
    /// An unset mode becomes scatter at once; chase and scatter swap when
    /// their interval has elapsed since the last transition. Frightened is
    /// left alone. Calling it again within the same interval changes nothing,
    /// and it never acts on an agent that is not roaming.
    pub fn evaluate_mode(&mut self, env: &MazeEnv<'_>) {
        if self.confinement != Confinement::Active {
            return;
        }

        let now = env.now();
        let elapsed = now.saturating_sub(self.mode_since);
        let config = env.config();
        match self.mode {
            Mode::Unset => self.enter_mode(Mode::Scatter, now),
            Mode::Chase if elapsed >= config.chase_interval() => {
                self.enter_mode(Mode::Scatter, now);
            }
            Mode::Scatter if elapsed >= config.scatter_interval() => {
                self.patrol_arrival = None;
                self.enter_mode(Mode::Chase, now);
            }
            _ => {}
        }
    }

    /// Applies the external fear signal.
    ///
    /// Fear starting on a roaming agent drops its heading and patrol; fear
    /// ending sends it back to scatter with a fresh timer. Agents in the pen or
    /// on their way back ignore the signal.
    pub fn trigger_fear(&mut self, afraid: bool, env: &MazeEnv<'_>) {
        if self.confinement != Confinement::Active {
            return;
        }

        match (self.is_frightened(), afraid) {
            (false, true) => {
                self.heading = None;
                self.patrol_arrival = None;
                self.mode = Mode::Frightened;
                debug!("{} ghost is frightened at {}", self.personality, self.tile);
            }
            (true, false) => {
                self.heading = None;
                self.enter_mode(Mode::Scatter, env.now());
            }
            _ => {}
        }
    }

    pub(crate) fn enter_mode(&mut self, mode: Mode, now: Duration) {
        debug!(
            "{} ghost mode {} -> {} at {:?}",
            self.personality, self.mode, mode, now
        );
        self.mode = mode;
        self.mode_since = now;
    }
}
