//! Data-driven display content and loaders.
//!
//! This crate houses the static content the map renderer draws from and the
//! loaders for its RON/TOML data files:
//! - Glyph tables for terrain, traps, objects and monster races (RON)
//! - Level layouts with monsters, objects and traps (RON)
//! - Display configuration (TOML)
//!
//! Content is turned into game-core oracles and never mutated by renderers.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, GlyphTableLoader, LevelContent, LevelLoader};

/// Bundled data directory shipped with this crate.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
