//! Sub-tile pixel motion.
//!
//! The discrete tile is committed first; the sprite then slides towards that
//! tile's centre at the speed of the active tier. A new heading may only be
//! committed once the sprite has reached the centre.

use core::fmt;

use super::{Confinement, Ghost};
use crate::config::GhostConfig;
use crate::maze::{Heading, TilePos};

/// Sprite anchor in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Centre pixel of `tile` under the given scale.
    pub fn tile_center(tile: TilePos, config: &GhostConfig) -> Self {
        let (offset_x, offset_y) = config.center_offset;
        Self {
            x: tile.x as i32 * config.tile_px + offset_x,
            y: tile.y as i32 * config.tile_px + offset_y,
        }
    }

    /// Whether this position sits exactly on some tile centre.
    pub fn is_aligned(self, config: &GhostConfig) -> bool {
        let (offset_x, offset_y) = config.center_offset;
        self.x.rem_euclid(config.tile_px) == offset_x.rem_euclid(config.tile_px)
            && self.y.rem_euclid(config.tile_px) == offset_y.rem_euclid(config.tile_px)
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Speed class applied to a tick of motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SpeedTier {
    House,
    Fear,
    Normal,
    Returning,
}

impl SpeedTier {
    pub fn pixels(self, config: &GhostConfig) -> i32 {
        match self {
            SpeedTier::House => config.speeds.house,
            SpeedTier::Fear => config.speeds.fear,
            SpeedTier::Normal => config.speeds.normal,
            SpeedTier::Returning => config.speeds.returning,
        }
    }
}

impl Ghost {
    /// Returning beats every other flag; the tunnel slows an active agent down
    /// even when it is not frightened.
    pub fn speed_tier(&self) -> SpeedTier {
        match self.confinement {
            Confinement::Returning => SpeedTier::Returning,
            Confinement::House => SpeedTier::House,
            Confinement::Active if self.is_frightened() || self.in_tunnel => SpeedTier::Fear,
            Confinement::Active => SpeedTier::Normal,
        }
    }

    /// Advances the sprite by one tick along the committed heading.
    pub fn update_position(&mut self, config: &GhostConfig) {
        let Some(heading) = self.heading else {
            return;
        };
        let speed = self.speed_tier().pixels(config);
        let (dx, dy) = heading.delta();
        self.pixel.x += dx * speed;
        self.pixel.y += dy * speed;
    }

    /// Reports whether one more step would reach or cross the centre of the
    /// current tile, snapping the sprite onto it when it would.
    ///
    /// An agent without a heading is always centred.
    pub fn reached_tile_center(&mut self, config: &GhostConfig) -> bool {
        let Some(heading) = self.heading else {
            return true;
        };
        let speed = self.speed_tier().pixels(config);
        let center = PixelPos::tile_center(self.tile, config);

        let arrived = match heading {
            Heading::Left => self.pixel.x - speed <= center.x,
            Heading::Right => self.pixel.x + speed >= center.x,
            Heading::Up => self.pixel.y - speed <= center.y,
            Heading::Down => self.pixel.y + speed >= center.y,
        };
        if arrived {
            if heading.is_horizontal() {
                self.pixel.x = center.x;
            } else {
                self.pixel.y = center.y;
            }
        }
        arrived
    }
}
