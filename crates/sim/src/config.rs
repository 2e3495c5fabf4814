//! Driver configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use ghost_core::TilePos;

/// Settings of one headless run.
///
/// Engine tunables live in the TOML file named by `ghost_config`; this struct
/// only covers what the driver itself needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Engine configuration TOML. The built-in defaults are used when unset.
    pub ghost_config: Option<PathBuf>,
    /// Maze RON file. The bundled classic maze is used when unset.
    pub maze: Option<PathBuf>,
    pub seconds: f64,
    pub fps: u32,
    /// Overrides the seed from the engine configuration.
    pub seed: Option<u64>,
    /// Fear starts every this many seconds; zero disables it.
    pub fear_every_secs: f64,
    pub fear_secs: f64,
    pub player: PlayerConfig,
    /// File log directory; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

/// Scripted player settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub start: TilePos,
    /// Frames between two player steps.
    pub step_every: u32,
    /// Chance, in percent, of turning at a junction even when it could go on.
    pub turn_percent: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: TilePos::new(10, 20),
            step_every: 10,
            turn_percent: 25,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ghost_config: None,
            maze: None,
            seconds: 120.0,
            fps: 60,
            seed: None,
            fear_every_secs: 30.0,
            fear_secs: 6.0,
            player: PlayerConfig::default(),
            log_dir: Some(default_log_dir()),
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GHOST_CONFIG` - Engine configuration TOML
    /// - `GHOST_MAZE` - Maze RON file
    /// - `SIM_SECONDS` - Simulated seconds (default: 120)
    /// - `SIM_FPS` - Frames per simulated second (default: 60)
    /// - `SIM_SEED` - Engine rng seed override
    /// - `SIM_FEAR_EVERY_SECS` - Fear period, 0 to disable (default: 30)
    /// - `SIM_FEAR_SECS` - Fear duration (default: 6)
    /// - `SIM_PLAYER_STEP_FRAMES` - Frames per player step (default: 10)
    /// - `SIM_LOG_DIR` - Log directory; empty disables file logging
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.ghost_config = lookup("GHOST_CONFIG").map(PathBuf::from);
        config.maze = lookup("GHOST_MAZE").map(PathBuf::from);

        if let Some(seconds) = read_secs(&lookup, "SIM_SECONDS") {
            config.seconds = seconds.max(0.0);
        }
        if let Some(fps) = read_value::<u32>(&lookup, "SIM_FPS") {
            config.fps = fps.max(1);
        }
        config.seed = read_value(&lookup, "SIM_SEED");
        if let Some(every) = read_secs(&lookup, "SIM_FEAR_EVERY_SECS") {
            config.fear_every_secs = every.max(0.0);
        }
        if let Some(secs) = read_secs(&lookup, "SIM_FEAR_SECS") {
            config.fear_secs = secs.max(0.0);
        }
        if let Some(frames) = read_value::<u32>(&lookup, "SIM_PLAYER_STEP_FRAMES") {
            config.player.step_every = frames.max(1);
        }

        if let Some(dir) = lookup("SIM_LOG_DIR") {
            config.log_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        config
    }

    /// Number of frames covering `seconds`.
    pub fn frames(&self) -> u64 {
        (self.seconds * f64::from(self.fps)).round() as u64
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// Platform cache directory for log files.
///
/// - Linux: `~/.cache/ghosts/logs` (or `$XDG_CACHE_HOME/ghosts/logs`)
/// - macOS: `~/Library/Caches/ghosts/logs`
/// - Fallback: `/tmp/ghosts/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "ghosts")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/ghosts"))
        .join("logs")
}

fn read_value<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key)?.parse().ok()
}

fn read_secs(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    read_value::<f64>(lookup, key).filter(|secs| secs.is_finite())
}
