//! Fixed coordinates the behavior engine is built around.
//!
//! Pen, door, tunnel and corner positions are properties of the maze design,
//! not of any particular grid instance. A [`MazeLayout`] must agree with the
//! [`MazeOracle`](crate::MazeOracle) it is paired with; the bundled classic
//! maze in `ghost-content` is checked against [`MazeLayout::CLASSIC`].

use crate::ghost::Personality;
use crate::maze::{Heading, TilePos};

use crate::maze::Heading::{Down as D, Left as L, Right as R, Up as U};

/// One turn point of a corner patrol: travelling along `heading` and standing
/// on `at`, turn to `turn_to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatrolTurn {
    pub heading: Heading,
    pub at: TilePos,
    pub turn_to: Heading,
}

/// Closed patrol route walked after reaching a corner with heading `arrival`.
///
/// Between turn points the agent keeps its heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatrolLoop {
    pub arrival: Heading,
    pub turns: &'static [PatrolTurn],
}

impl PatrolLoop {
    /// Heading to take on `at` while travelling along `heading`; `None` means
    /// keep going straight.
    pub fn turn_at(&self, heading: Heading, at: TilePos) -> Option<Heading> {
        self.turns
            .iter()
            .find(|turn| turn.heading == heading && turn.at == at)
            .map(|turn| turn.turn_to)
    }
}

/// The horizontal wrap-around corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TunnelLayout {
    pub row: u32,
    /// Leftmost column; stepping further left wraps to `east_col`.
    pub west_col: u32,
    /// Rightmost column; stepping further right wraps to `west_col`.
    pub east_col: u32,
    /// Columns `<= west_mouth` belong to the western half of the tunnel.
    pub west_mouth: u32,
    /// Columns `>= east_mouth` belong to the eastern half of the tunnel.
    pub east_mouth: u32,
}

/// Narrow overpass where agents cannot turn vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorridorLock {
    pub min_x: u32,
    pub max_x: u32,
    pub rows: &'static [u32],
}

impl CorridorLock {
    pub fn contains(&self, tile: TilePos) -> bool {
        (self.min_x..=self.max_x).contains(&tile.x) && self.rows.contains(&tile.y)
    }
}

/// Scripted route from outside the pen back to each home tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReturnRoute {
    /// Shared waypoints, each with the heading to leave it by.
    pub shared: &'static [(TilePos, Heading)],
    /// Waypoint after which the route forks per personality.
    pub fork: TilePos,
    /// Heading out of `fork`, indexed by [`Personality::index`].
    pub fork_headings: [Heading; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    pub width: u32,
    pub height: u32,
    /// Home tile per personality; also where each agent is constructed.
    pub spawns: [TilePos; 4],
    /// Tile just outside the door where agents leave and re-enter the pen.
    pub exit: TilePos,
    /// Pen row from which bobbing agents move up.
    pub bob_up_row: u32,
    /// Pen row from which bobbing agents move down.
    pub bob_down_row: u32,
    pub return_route: ReturnRoute,
    pub tunnel: TunnelLayout,
    pub corridor_lock: CorridorLock,
    pub corners: [TilePos; 4],
    pub patrols: [&'static [PatrolLoop]; 4],
}

impl MazeLayout {
    pub const CLASSIC: MazeLayout = MazeLayout {
        width: 21,
        height: 27,
        spawns: [
            TilePos::new(10, 10),
            TilePos::new(9, 12),
            TilePos::new(10, 13),
            TilePos::new(11, 12),
        ],
        exit: TilePos::new(10, 10),
        bob_up_row: 13,
        bob_down_row: 12,
        return_route: ReturnRoute {
            shared: &[(TilePos::new(10, 10), D), (TilePos::new(10, 11), D)],
            fork: TilePos::new(10, 12),
            fork_headings: [D, L, D, R],
        },
        tunnel: TunnelLayout {
            row: 13,
            west_col: 0,
            east_col: 20,
            west_mouth: 4,
            east_mouth: 16,
        },
        corridor_lock: CorridorLock {
            min_x: 8,
            max_x: 12,
            rows: &[10, 20],
        },
        corners: [
            TilePos::new(19, 1),
            TilePos::new(1, 1),
            TilePos::new(19, 25),
            TilePos::new(1, 25),
        ],
        patrols: [
            PURSUER_PATROLS,
            AMBUSHER_PATROLS,
            SWITCHER_PATROLS,
            OPPORTUNIST_PATROLS,
        ],
    };

    pub fn spawn(&self, personality: Personality) -> TilePos {
        self.spawns[personality.index()]
    }

    pub fn corner(&self, personality: Personality) -> TilePos {
        self.corners[personality.index()]
    }

    /// Agents may only ever stand inside the border rows.
    pub fn is_playable(&self, tile: TilePos) -> bool {
        tile.x < self.width && tile.y >= 1 && tile.y + 1 < self.height
    }

    pub fn patrol_loop(&self, personality: Personality, arrival: Heading) -> Option<&PatrolLoop> {
        self.patrols[personality.index()]
            .iter()
            .find(|patrol| patrol.arrival == arrival)
    }
}

impl Default for MazeLayout {
    fn default() -> Self {
        Self::CLASSIC
    }
}

const fn turn(heading: Heading, x: u32, y: u32, turn_to: Heading) -> PatrolTurn {
    PatrolTurn {
        heading,
        at: TilePos::new(x, y),
        turn_to,
    }
}

const PURSUER_PATROLS: &[PatrolLoop] = &[
    PatrolLoop {
        arrival: R,
        turns: &[
            turn(R, 19, 1, D),
            turn(D, 19, 5, L),
            turn(L, 15, 5, U),
            turn(U, 15, 1, R),
        ],
    },
    PatrolLoop {
        arrival: U,
        turns: &[
            turn(U, 19, 1, L),
            turn(L, 15, 1, D),
            turn(D, 15, 5, R),
            turn(R, 19, 5, U),
        ],
    },
];

const AMBUSHER_PATROLS: &[PatrolLoop] = &[
    PatrolLoop {
        arrival: L,
        turns: &[
            turn(L, 1, 1, D),
            turn(D, 1, 5, R),
            turn(R, 5, 5, U),
            turn(U, 5, 1, L),
        ],
    },
    PatrolLoop {
        arrival: U,
        turns: &[
            turn(U, 1, 1, R),
            turn(R, 5, 1, D),
            turn(D, 5, 5, L),
            turn(L, 1, 5, U),
        ],
    },
];

// The bottom corners sit in a pocket under the lower block row, so their
// loops wind around two blocks instead of one.
const SWITCHER_PATROLS: &[PatrolLoop] = &[
    PatrolLoop {
        arrival: R,
        turns: &[
            turn(R, 19, 25, U),
            turn(U, 19, 23, L),
            turn(U, 15, 20, L),
            turn(U, 11, 23, D),
            turn(L, 15, 23, U),
            turn(L, 13, 20, D),
            turn(L, 11, 23, D),
            turn(D, 13, 23, L),
            turn(D, 11, 25, R),
        ],
    },
    PatrolLoop {
        arrival: D,
        turns: &[
            turn(D, 19, 25, L),
            turn(D, 15, 23, R),
            turn(L, 11, 25, U),
            turn(L, 13, 20, R),
            turn(L, 15, 23, R),
            turn(U, 11, 23, R),
            turn(U, 13, 20, R),
            turn(R, 13, 23, U),
            turn(R, 15, 20, D),
            turn(R, 19, 23, D),
        ],
    },
];

const OPPORTUNIST_PATROLS: &[PatrolLoop] = &[
    PatrolLoop {
        arrival: L,
        turns: &[
            turn(L, 1, 25, U),
            turn(U, 1, 23, R),
            turn(U, 5, 20, R),
            turn(U, 9, 23, D),
            turn(R, 5, 23, U),
            turn(R, 7, 20, D),
            turn(R, 9, 23, D),
            turn(D, 7, 23, R),
            turn(D, 9, 25, L),
        ],
    },
    PatrolLoop {
        arrival: D,
        turns: &[
            turn(D, 1, 25, R),
            turn(D, 5, 23, L),
            turn(R, 9, 25, U),
            turn(R, 7, 20, L),
            turn(R, 5, 23, L),
            turn(U, 9, 23, L),
            turn(U, 7, 20, L),
            turn(L, 7, 23, U),
            turn(L, 5, 20, D),
            turn(L, 1, 23, D),
        ],
    },
];
