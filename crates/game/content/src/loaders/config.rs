//! Display configuration loader.

use std::path::Path;

use game_core::DisplayConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for display configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a [`DisplayConfig`] from a TOML file.
    ///
    /// Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<DisplayConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<DisplayConfig> {
        let config: DisplayConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse display config TOML: {}", e))?;
        config.validate()?;

        Ok(config)
    }
}
