//! Engine configuration loader.

use std::path::Path;

use anyhow::Context;
use ghost_core::GhostConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`GhostConfig`] from a TOML file.
    ///
    /// Missing keys keep their defaults, so a file only needs the values it
    /// overrides.
    pub fn load(path: &Path) -> LoadResult<GhostConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GhostConfig> {
        let config: GhostConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
