//! Content loaders for reading display data from files.
//!
//! Loaders convert RON/TOML files into game-core tables and level state.

pub mod config;
pub mod factory;
pub mod glyphs;
pub mod level;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use glyphs::GlyphTableLoader;
pub use level::{LevelContent, LevelLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
