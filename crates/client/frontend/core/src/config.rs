//! Frontend configuration structures and loaders.
//!
//! Display settings normally come from content data; environment variables
//! layered on top let a session override them without editing files.

use std::env;

use game_core::{DisplayConfig, GraphicsMode, TileMultiplier, WallStyle};

/// Frontend-specific configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub display: DisplayConfig,
    /// Radius of glyph snapshots recorded by the frontend.
    pub snapshot_radius: u8,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            snapshot_radius: Self::DEFAULT_SNAPSHOT_RADIUS,
        }
    }
}

impl FrontendConfig {
    pub const DEFAULT_SNAPSHOT_RADIUS: u8 = 3;
    pub const MAX_SNAPSHOT_RADIUS: u8 = 32;

    pub const fn new(display: DisplayConfig, snapshot_radius: u8) -> Self {
        Self {
            display,
            snapshot_radius,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAP_GRAPHICS` - `text` or `tiles` (default: text)
    /// - `MAP_WALL_STYLE` - `plain`, `hybrid` or `solid` (default: plain)
    /// - `MAP_HITPOINT_WARN` - Health warning threshold in tenths, 0-9 (default: 3)
    /// - `MAP_TILE_WIDTH` - Main view tile width (default: 1)
    /// - `MAP_TILE_HEIGHT` - Main view tile height (default: 1)
    /// - `MAP_SNAPSHOT_RADIUS` - Snapshot radius (default: 3)
    pub fn from_env() -> Self {
        Self::default().overlay_env()
    }

    /// Applies environment overrides on top of `self`. Invalid values are
    /// logged and ignored.
    #[must_use]
    pub fn overlay_env(mut self) -> Self {
        let display = &mut self.display;

        if let Some(value) = read_env::<String>("MAP_GRAPHICS") {
            match parse_graphics(&value) {
                Some(graphics) => display.graphics = graphics,
                None => tracing::warn!(%value, "ignoring unknown MAP_GRAPHICS"),
            }
        }
        if let Some(value) = read_env::<String>("MAP_WALL_STYLE") {
            match parse_wall_style(&value) {
                Some(style) => display.wall_style = style,
                None => tracing::warn!(%value, "ignoring unknown MAP_WALL_STYLE"),
            }
        }

        if let Some(warn) = read_env::<u8>("MAP_HITPOINT_WARN") {
            if warn <= DisplayConfig::MAX_HITPOINT_WARN {
                display.hitpoint_warn = warn;
            } else {
                tracing::warn!(warn, "ignoring out-of-range MAP_HITPOINT_WARN");
            }
        }

        let width = read_env::<u8>("MAP_TILE_WIDTH").unwrap_or(display.tile.width());
        let height = read_env::<u8>("MAP_TILE_HEIGHT").unwrap_or(display.tile.height());
        match TileMultiplier::new(width, height) {
            Ok(tile) => display.tile = tile,
            Err(error) => tracing::warn!(%error, "ignoring tile size override"),
        }

        if let Some(radius) = read_env::<u8>("MAP_SNAPSHOT_RADIUS") {
            self.snapshot_radius = radius.min(Self::MAX_SNAPSHOT_RADIUS);
        }

        self
    }
}

fn parse_graphics(value: &str) -> Option<GraphicsMode> {
    match value.to_lowercase().as_str() {
        "text" | "ascii" => Some(GraphicsMode::Text),
        "tiles" | "graphics" => Some(GraphicsMode::Tiles),
        _ => None,
    }
}

fn parse_wall_style(value: &str) -> Option<WallStyle> {
    match value.to_lowercase().as_str() {
        "plain" => Some(WallStyle::Plain),
        "hybrid" => Some(WallStyle::Hybrid),
        "solid" => Some(WallStyle::Solid),
        _ => None,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
