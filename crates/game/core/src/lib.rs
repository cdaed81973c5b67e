//! World-side vocabulary shared by map renderers and content loaders.
//!
//! `game-core` defines cell snapshots, monsters and their per-frame visual
//! state, glyph and colour types, display configuration, and the read-only
//! oracles (map snapshots, glyph tables, seeded RNG) renderers draw from.
pub mod config;
pub mod display;
pub mod env;
pub mod error;
pub mod state;

pub use config::{DisplayConfig, GraphicsMode, WallStyle};
pub use display::{
    Attr, Background, Color, DisplayError, Glyph, RaceGlyph, TextAttr, TileMultiplier,
};
pub use env::{
    Env, FeatureInfo, GlyphOracle, GlyphTables, GlyphTablesBuilder, LightingGlyphs,
    MapDimensions, MapOracle, ObjectKindInfo, PcgRng, PlayerView, RaceFlags, RaceInfo, RngOracle,
    TableError, TrapInfo, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CellSnapshot, FeatureId, FrameId, LevelState, Lighting, Monster, MonsterId, MonsterRoster,
    MonsterVisualState, ObjectKindId, ObjectPile, Occupant, Position, RaceId, ResourceMeter,
    TrapKindId, TrapView,
};
