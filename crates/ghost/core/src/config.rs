use core::time::Duration;

use crate::error::{EngineError, ErrorSeverity};
use crate::ghost::Personality;

/// Tunable parameters of the behavior engine.
///
/// Durations are stored as seconds so that configuration files stay readable;
/// use the accessor methods to obtain [`Duration`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GhostConfig {
    /// Divisor applied to every house wait. Higher values release ghosts sooner.
    pub difficulty: f64,
    /// Pixel length of one tile edge.
    pub tile_px: i32,
    /// Pixel offset from a tile's top-left corner to the sprite anchor.
    pub center_offset: (i32, i32),
    pub speeds: SpeedTiers,
    pub chase_secs: f64,
    pub scatter_secs: f64,
    pub switcher_pursuer_secs: f64,
    pub switcher_ambusher_secs: f64,
    /// Base house waits indexed by [`Personality::index`], before the difficulty divisor.
    pub house_wait_secs: [f64; 4],
    /// How many tiles ahead of the player the ambusher aims.
    pub ambush_lookahead: u32,
    /// Below this Manhattan distance the ambusher targets the player directly.
    pub ambush_close_range: u32,
    /// At or below this Manhattan distance the opportunist breaks off to its corner.
    pub opportunist_retreat_range: u32,
    /// Restart the house wait when a captured ghost gets back to the pen.
    pub rewait_after_capture: bool,
    pub seed: u64,
}

/// Pixels advanced per tick for each motion tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedTiers {
    pub house: i32,
    pub fear: i32,
    pub normal: i32,
    pub returning: i32,
}

impl Default for SpeedTiers {
    fn default() -> Self {
        Self {
            house: 1,
            fear: 1,
            normal: 2,
            returning: 3,
        }
    }
}

impl GhostConfig {
    pub const DEFAULT_TILE_PX: i32 = 24;
    pub const DEFAULT_CENTER_OFFSET: (i32, i32) = (0, 4);
    pub const DEFAULT_CHASE_SECS: f64 = 20.0;
    pub const DEFAULT_SCATTER_SECS: f64 = 7.0;
    pub const DEFAULT_HOUSE_WAIT_SECS: [f64; 4] = [6.0, 12.0, 18.0, 24.0];

    pub fn new() -> Self {
        Self {
            difficulty: 1.0,
            tile_px: Self::DEFAULT_TILE_PX,
            center_offset: Self::DEFAULT_CENTER_OFFSET,
            speeds: SpeedTiers::default(),
            chase_secs: Self::DEFAULT_CHASE_SECS,
            scatter_secs: Self::DEFAULT_SCATTER_SECS,
            switcher_pursuer_secs: 20.0,
            switcher_ambusher_secs: 12.0,
            house_wait_secs: Self::DEFAULT_HOUSE_WAIT_SECS,
            ambush_lookahead: 4,
            ambush_close_range: 4,
            opportunist_retreat_range: 8,
            rewait_after_capture: false,
            seed: 0,
        }
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn chase_interval(&self) -> Duration {
        secs(self.chase_secs)
    }

    pub fn scatter_interval(&self) -> Duration {
        secs(self.scatter_secs)
    }

    pub fn switcher_pursuer_interval(&self) -> Duration {
        secs(self.switcher_pursuer_secs)
    }

    pub fn switcher_ambusher_interval(&self) -> Duration {
        secs(self.switcher_ambusher_secs)
    }

    /// House wait for `personality`, already divided by the difficulty factor.
    pub fn house_wait(&self, personality: Personality) -> Duration {
        secs(self.house_wait_secs[personality.index()] / self.difficulty)
    }

    /// Checks every tunable, returning the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.difficulty.is_finite() && self.difficulty > 0.0) {
            return Err(ConfigError::InvalidDifficulty(self.difficulty));
        }
        if self.tile_px <= 0 {
            return Err(ConfigError::InvalidTileScale(self.tile_px));
        }

        let tiers = [
            ("house", self.speeds.house),
            ("fear", self.speeds.fear),
            ("normal", self.speeds.normal),
            ("returning", self.speeds.returning),
        ];
        for (tier, speed) in tiers {
            if speed <= 0 || speed >= self.tile_px {
                return Err(ConfigError::InvalidSpeed {
                    tier,
                    speed,
                    tile_px: self.tile_px,
                });
            }
        }

        let intervals = [
            ("chase_secs", self.chase_secs),
            ("scatter_secs", self.scatter_secs),
            ("switcher_pursuer_secs", self.switcher_pursuer_secs),
            ("switcher_ambusher_secs", self.switcher_ambusher_secs),
        ];
        for (field, value) in intervals.into_iter().chain(
            self.house_wait_secs
                .iter()
                .map(|value| ("house_wait_secs", *value)),
        ) {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }

        Ok(())
    }
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("difficulty must be a positive finite number, got {0}")]
    InvalidDifficulty(f64),

    #[error("tile scale must be positive, got {0}")]
    InvalidTileScale(i32),

    #[error("{tier} speed {speed} must be in 1..{tile_px}")]
    InvalidSpeed {
        tier: &'static str,
        speed: i32,
        tile_px: i32,
    },

    #[error("{field} must be a non-negative finite number of seconds, got {value}")]
    InvalidDuration { field: &'static str, value: f64 },
}

impl EngineError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidDifficulty(_) => "CONFIG_INVALID_DIFFICULTY",
            ConfigError::InvalidTileScale(_) => "CONFIG_INVALID_TILE_SCALE",
            ConfigError::InvalidSpeed { .. } => "CONFIG_INVALID_SPEED",
            ConfigError::InvalidDuration { .. } => "CONFIG_INVALID_DURATION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GhostConfig::default().validate(), Ok(()));
    }

    #[test]
    fn house_wait_is_divided_by_difficulty() {
        let config = GhostConfig::new().with_difficulty(2.0);
        assert_eq!(config.house_wait(Personality::Pursuer), Duration::from_secs(3));
        assert_eq!(
            config.house_wait(Personality::Opportunist),
            Duration::from_secs(12)
        );
    }

    #[test]
    fn rejects_bad_tunables() {
        let config = GhostConfig::new().with_difficulty(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidDifficulty(0.0)));

        let mut config = GhostConfig::new();
        config.speeds.returning = 24;
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_SPEED");

        let mut config = GhostConfig::new();
        config.house_wait_secs[2] = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration {
                field: "house_wait_secs",
                ..
            })
        ));
    }
}
