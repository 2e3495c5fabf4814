use super::{ChaseBehavior, pursue, scatter};
use crate::env::MazeEnv;
use crate::ghost::{Ghost, Mode, PlayerView};
use crate::maze::Heading;

/// Pursues from a distance and breaks off to its corner once close.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepAway;

impl ChaseBehavior for KeepAway {
    fn select(&self, ghost: &mut Ghost, env: &MazeEnv<'_>, player: PlayerView) -> Option<Heading> {
        if ghost.tile().manhattan(player.tile) > env.config().opportunist_retreat_range {
            return pursue(ghost, env, player.tile);
        }

        if ghost.mode() != Mode::Scatter {
            ghost.enter_mode(Mode::Scatter, env.now());
        }
        scatter::patrol(ghost, env)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;
    use crate::config::GhostConfig;
    use crate::ghost::Personality;
    use crate::maze::{AStarPathfinder, TileGrid, TilePos};
    use crate::rng::PcgRng;

    #[test]
    fn pursues_from_afar() {
        let grid = TileGrid::open(21, 27);
        let clock = ManualClock::new();
        let config = GhostConfig::default();
        let env = MazeEnv::new(&grid, &AStarPathfinder, &clock, &PcgRng, &config);

        let mut ghost = Ghost::released_at(Personality::Opportunist, TilePos::new(10, 5), &env);
        ghost.mode = Mode::Chase;
        let player = PlayerView::new(TilePos::new(10, 15), None);
        assert_eq!(KeepAway.select(&mut ghost, &env, player), Some(Heading::Down));
        assert_eq!(ghost.mode(), Mode::Chase);
    }

    #[test]
    fn retreats_to_its_corner_when_close() {
        let grid = TileGrid::open(21, 27);
        let clock = ManualClock::starting_at(Duration::from_secs(40));
        let config = GhostConfig::default();
        let env = MazeEnv::new(&grid, &AStarPathfinder, &clock, &PcgRng, &config);

        let mut ghost = Ghost::released_at(Personality::Opportunist, TilePos::new(10, 15), &env);
        ghost.mode = Mode::Chase;
        ghost.mode_since = Duration::from_secs(35);
        // Player right above; the corner (1,25) is down and to the left.
        let player = PlayerView::new(TilePos::new(10, 10), None);
        let heading = KeepAway.select(&mut ghost, &env, player);

        assert_eq!(ghost.mode(), Mode::Scatter);
        assert_eq!(ghost.mode_since, Duration::from_secs(40));
        assert!(matches!(heading, Some(Heading::Left | Heading::Down)));

        // Already scattering: the timer is left alone.
        clock.advance(Duration::from_secs(2));
        KeepAway.select(&mut ghost, &env, player);
        assert_eq!(ghost.mode_since, Duration::from_secs(40));
    }
}
