use tracing::debug;

use super::{ChaseBehavior, DirectPursuit, Interception};
use crate::env::MazeEnv;
use crate::ghost::{Ghost, PlayerView, SwitcherPhase, SwitcherState};
use crate::maze::Heading;

/// Runs the pursuer strategy, then the ambusher strategy, on a sub-timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseSwitching;

impl PhaseSwitching {
    fn current_phase(ghost: &mut Ghost, env: &MazeEnv<'_>) -> SwitcherPhase {
        let now = env.now();
        let Some(state) = ghost.switcher else {
            ghost.switcher = Some(SwitcherState {
                phase: SwitcherPhase::Pursuer,
                since: now,
            });
            return SwitcherPhase::Pursuer;
        };

        let config = env.config();
        let elapsed = now.saturating_sub(state.since);
        let next = match state.phase {
            SwitcherPhase::Pursuer if elapsed >= config.switcher_pursuer_interval() => {
                SwitcherPhase::Ambusher
            }
            SwitcherPhase::Ambusher if elapsed >= config.switcher_ambusher_interval() => {
                SwitcherPhase::Pursuer
            }
            phase => return phase,
        };

        debug!(
            "{} ghost switches from {} to {} tactics",
            ghost.personality(),
            state.phase,
            next
        );
        ghost.switcher = Some(SwitcherState {
            phase: next,
            since: now,
        });
        next
    }
}

impl ChaseBehavior for PhaseSwitching {
    fn select(&self, ghost: &mut Ghost, env: &MazeEnv<'_>, player: PlayerView) -> Option<Heading> {
        match Self::current_phase(ghost, env) {
            SwitcherPhase::Pursuer => DirectPursuit.select(ghost, env, player),
            SwitcherPhase::Ambusher => Interception.select(ghost, env, player),
        }
    }
}
