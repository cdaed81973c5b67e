//! CLI-specific configuration for the terminal map viewer.
use std::env;
use std::path::PathBuf;

/// Terminal viewer configuration.
///
/// Display settings live in [`FrontendConfig`](client_frontend_core::FrontendConfig);
/// this holds what only the terminal binary needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Content directory; `None` uses the data bundled with `game-content`.
    pub content_dir: Option<PathBuf>,
    /// Level file name under `levels/`, without extension.
    pub level: String,
    /// Log directory override; `None` uses the platform cache directory.
    pub log_dir: Option<PathBuf>,
    /// Tile width of the mirror panel.
    pub mirror_tile_width: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            level: Self::DEFAULT_LEVEL.to_string(),
            log_dir: None,
            mirror_tile_width: 2,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_LEVEL: &'static str = "cavern";

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAP_CONTENT_DIR` - Content directory (default: bundled data)
    /// - `MAP_LEVEL` - Level to open (default: cavern)
    /// - `MAP_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `MAP_MIRROR_TILE_WIDTH` - Mirror panel tile width, at least 1 (default: 2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("MAP_CONTENT_DIR") {
            config.content_dir = Some(dir);
        }
        if let Some(level) = read_env::<String>("MAP_LEVEL").filter(|level| !level.is_empty()) {
            config.level = level;
        }
        if let Some(dir) = read_env::<PathBuf>("MAP_LOG_DIR") {
            config.log_dir = Some(dir);
        }
        if let Some(width) = read_env::<u8>("MAP_MIRROR_TILE_WIDTH") {
            config.mirror_tile_width = width.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
