//! Corner patrol.
//!
//! Before reaching its corner an agent paths there like any pursuit. On
//! arrival it records the heading it came in with, and from then on follows
//! the static turn table for that (corner, arrival) pair without consulting
//! the path oracle, until the mode machine clears the arrival.

use tracing::{debug, warn};

use super::pursue;
use crate::env::MazeEnv;
use crate::ghost::Ghost;
use crate::maze::Heading;

pub(crate) fn patrol(ghost: &mut Ghost, env: &MazeEnv<'_>) -> Option<Heading> {
    let layout = env.layout();
    let corner = layout.corner(ghost.personality());

    if ghost.tile() == corner && ghost.patrol_arrival.is_none() {
        debug!(
            "{} ghost reached its corner {} heading {:?}",
            ghost.personality(),
            corner,
            ghost.heading()
        );
        ghost.patrol_arrival = Some(ghost.heading());
    }

    let Some(arrival) = ghost.patrol_arrival else {
        return pursue(ghost, env, corner);
    };

    let Some(patrol) = arrival.and_then(|heading| layout.patrol_loop(ghost.personality(), heading))
    else {
        warn!(
            "{} ghost has no patrol loop for arrival heading {:?}, holding",
            ghost.personality(),
            arrival
        );
        return None;
    };

    let current = ghost.heading().unwrap_or(patrol.arrival);
    Some(patrol.turn_at(current, ghost.tile()).unwrap_or(current))
}
