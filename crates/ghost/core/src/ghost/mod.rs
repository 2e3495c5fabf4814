//! Per-agent state and the direction-update entry point.
//!
//! A [`Ghost`] is owned by the frame driver. Each tick the driver asks it to
//! pick a heading once its sprite is centred ([`Ghost::update_direction`]) and
//! then slides the sprite ([`Ghost::update_position`]). [`Ghost::advance`]
//! performs both in the canonical order.
//!
//! Confinement (pen, return trip, free roaming) is a single enum so an agent
//! can never be both in the pen and on its way back to it.
mod house;
mod mode;
mod motion;
mod returning;

pub use motion::{PixelPos, SpeedTier};

use core::time::Duration;

use tracing::{debug, trace};

use crate::env::MazeEnv;
use crate::error::{EngineError, ErrorSeverity};
use crate::maze::{Heading, TilePos};
use crate::target;

/// Pursuit strategy; one agent per personality.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Personality {
    /// Shortest path straight at the player.
    Pursuer,
    /// Aims a few tiles ahead of the player.
    Ambusher,
    /// Alternates between the pursuer and ambusher strategies.
    Switcher,
    /// Pursues from afar, retreats to its corner when close.
    Opportunist,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Pursuer,
        Personality::Ambusher,
        Personality::Switcher,
        Personality::Opportunist,
    ];

    /// Position in [`Personality::ALL`]; indexes every per-personality table.
    pub const fn index(self) -> usize {
        match self {
            Personality::Pursuer => 0,
            Personality::Ambusher => 1,
            Personality::Switcher => 2,
            Personality::Opportunist => 3,
        }
    }
}

/// Where an agent is allowed to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confinement {
    /// Waiting in, or leaving, the pen.
    House,
    /// Captured and heading back to the pen.
    Returning,
    /// Roaming the maze under the mode machine.
    Active,
}

/// Top-level behavior while roaming. Always `Unset` outside [`Confinement::Active`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Unset,
    Chase,
    Scatter,
    Frightened,
}

/// Which sub-strategy a switcher is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitcherPhase {
    Pursuer,
    Ambusher,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SwitcherState {
    pub(crate) phase: SwitcherPhase,
    pub(crate) since: Duration,
}

/// What an agent needs to know about the player this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub tile: TilePos,
    pub heading: Option<Heading>,
}

impl PlayerView {
    pub const fn new(tile: TilePos, heading: Option<Heading>) -> Self {
        Self { tile, heading }
    }
}

/// Errors raised by agent updates.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GhostError {
    /// The agent stands outside the playable band; its state is corrupt.
    #[error("{personality} ghost is outside the board at {tile}")]
    OutOfBoard {
        personality: Personality,
        tile: TilePos,
    },
}

impl EngineError for GhostError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GhostError::OutOfBoard { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GhostError::OutOfBoard { .. } => "GHOST_OUT_OF_BOARD",
        }
    }
}

/// Observable state of an agent, for renderers, reports and comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostSnapshot {
    pub personality: Personality,
    pub tile: TilePos,
    pub pixel: PixelPos,
    pub heading: Option<Heading>,
    pub confinement: Confinement,
    pub mode: Mode,
    pub frightened: bool,
    pub in_tunnel: bool,
}

/// One autonomous agent.
#[derive(Clone, Debug)]
pub struct Ghost {
    pub(crate) personality: Personality,
    pub(crate) tile: TilePos,
    pub(crate) pixel: PixelPos,
    pub(crate) heading: Option<Heading>,
    pub(crate) confinement: Confinement,
    pub(crate) mode: Mode,
    pub(crate) in_tunnel: bool,
    /// `Some(heading)` once the corner was reached, holding the arrival heading.
    pub(crate) patrol_arrival: Option<Option<Heading>>,
    pub(crate) switcher: Option<SwitcherState>,
    pub(crate) house_since: Duration,
    pub(crate) mode_since: Duration,
    pub(crate) eaten_at: Option<PixelPos>,
    pub(crate) rng_nonce: u64,
}

impl Ghost {
    /// Places a new agent on its home tile inside the pen and starts its wait.
    pub fn spawn(personality: Personality, env: &MazeEnv<'_>) -> Self {
        let tile = env.layout().spawn(personality);
        let now = env.now();
        Self {
            personality,
            tile,
            pixel: PixelPos::tile_center(tile, env.config()),
            heading: None,
            confinement: Confinement::House,
            mode: Mode::Unset,
            in_tunnel: false,
            patrol_arrival: None,
            switcher: None,
            house_since: now,
            mode_since: now,
            eaten_at: None,
            rng_nonce: 0,
        }
    }

    /// Builds an agent already roaming at `tile`, with no heading and an
    /// unset mode.
    pub fn released_at(personality: Personality, tile: TilePos, env: &MazeEnv<'_>) -> Self {
        let mut ghost = Self::spawn(personality, env);
        ghost.tile = tile;
        ghost.pixel = PixelPos::tile_center(tile, env.config());
        ghost.confinement = Confinement::Active;
        ghost
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn tile(&self) -> TilePos {
        self.tile
    }

    pub fn pixel(&self) -> PixelPos {
        self.pixel
    }

    pub fn heading(&self) -> Option<Heading> {
        self.heading
    }

    pub fn confinement(&self) -> Confinement {
        self.confinement
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_in_house(&self) -> bool {
        self.confinement == Confinement::House
    }

    pub fn is_returning(&self) -> bool {
        self.confinement == Confinement::Returning
    }

    /// Capture eligibility.
    pub fn is_frightened(&self) -> bool {
        self.confinement == Confinement::Active && self.mode == Mode::Frightened
    }

    pub fn in_tunnel(&self) -> bool {
        self.in_tunnel
    }

    /// Sprite position recorded at the most recent capture.
    pub fn eaten_at(&self) -> Option<PixelPos> {
        self.eaten_at
    }

    /// Heading the corner patrol was entered with, once the corner was reached.
    pub fn patrol_arrival(&self) -> Option<Option<Heading>> {
        self.patrol_arrival
    }

    pub fn switcher_phase(&self) -> Option<SwitcherPhase> {
        self.switcher.map(|state| state.phase)
    }

    pub fn snapshot(&self) -> GhostSnapshot {
        GhostSnapshot {
            personality: self.personality,
            tile: self.tile,
            pixel: self.pixel,
            heading: self.heading,
            confinement: self.confinement,
            mode: self.mode,
            frightened: self.is_frightened(),
            in_tunnel: self.in_tunnel,
        }
    }

    /// Canonical per-frame sequence: choose a heading once centred, then move.
    pub fn advance(&mut self, env: &MazeEnv<'_>, player: PlayerView) -> Result<(), GhostError> {
        if self.reached_tile_center(env.config()) {
            self.update_direction(env, player)?;
        }
        self.update_position(env.config());
        Ok(())
    }

    /// Picks and commits this tick's heading, stepping the discrete tile.
    ///
    /// Confinement controllers run first; a roaming agent then goes through
    /// the same-tile hold, the tunnel, the corridor lock and finally the mode
    /// machine and its strategy.
    pub fn update_direction(
        &mut self,
        env: &MazeEnv<'_>,
        player: PlayerView,
    ) -> Result<(), GhostError> {
        if !env.layout().is_playable(self.tile) {
            return Err(self.out_of_board());
        }

        match self.confinement {
            Confinement::House => return self.update_in_house(env),
            Confinement::Returning => return self.update_returning(env),
            Confinement::Active => {}
        }

        if self.tile == player.tile {
            return Ok(());
        }

        if self.traverse_tunnel(env)? {
            return Ok(());
        }

        if env.layout().corridor_lock.contains(self.tile)
            && let Some(heading) = self.heading.filter(|heading| heading.is_horizontal())
        {
            return self.commit(Some(heading));
        }

        self.evaluate_mode(env);

        let heading = match self.mode {
            Mode::Chase => target::behavior_for(self.personality).select(self, env, player),
            Mode::Scatter => target::scatter::patrol(self, env),
            Mode::Frightened => target::evasion::evade(self, env, player),
            Mode::Unset => None,
        };
        self.commit(heading)
    }

    /// Tunnel rules on the wrap row. Returns `true` when the tick was consumed.
    fn traverse_tunnel(&mut self, env: &MazeEnv<'_>) -> Result<bool, GhostError> {
        let tunnel = env.layout().tunnel;
        let Some(heading) = self.heading else {
            self.in_tunnel = false;
            return Ok(false);
        };
        if self.tile.y != tunnel.row {
            self.in_tunnel = false;
            return Ok(false);
        }

        let wrap_to = match heading {
            Heading::Left if self.tile.x == tunnel.west_col => Some(tunnel.east_col),
            Heading::Right if self.tile.x == tunnel.east_col => Some(tunnel.west_col),
            _ => None,
        };
        if let Some(col) = wrap_to {
            debug!(
                "{} ghost wraps through the tunnel from {} to column {}",
                self.personality, self.tile, col
            );
            self.tile.x = col;
            self.pixel.x = PixelPos::tile_center(self.tile, env.config()).x;
            self.in_tunnel = true;
            return Ok(true);
        }

        let in_west = self.tile.x <= tunnel.west_mouth;
        let in_east = self.tile.x >= tunnel.east_mouth;
        if (in_west || in_east) && heading.is_horizontal() {
            self.in_tunnel = true;
            self.commit(Some(heading))?;
            return Ok(true);
        }

        self.in_tunnel = false;
        Ok(false)
    }

    /// Records `heading` and steps the tile along it. `None` holds the tile.
    pub(crate) fn commit(&mut self, heading: Option<Heading>) -> Result<(), GhostError> {
        self.heading = heading;
        if let Some(heading) = heading {
            self.tile = self.tile.step(heading).ok_or_else(|| self.out_of_board())?;
        }
        trace!(
            "{} ghost commits {:?} -> {}",
            self.personality, heading, self.tile
        );
        Ok(())
    }

    fn out_of_board(&self) -> GhostError {
        GhostError::OutOfBoard {
            personality: self.personality,
            tile: self.tile,
        }
    }
}
