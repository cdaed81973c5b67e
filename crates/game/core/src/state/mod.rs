//! World-side state consumed by the map display.
//!
//! Cell snapshots describe what the player can see of each cell this frame.
//! Monsters carry the per-frame visual state renderers commit to. The
//! [`LevelState`] ties both together behind [`MapOracle`](crate::env::MapOracle).
pub mod types;

pub use types::{
    CellSnapshot, FeatureId, FrameId, LevelState, Lighting, Monster, MonsterId, MonsterRoster,
    MonsterVisualState, ObjectKindId, ObjectPile, Occupant, Position, RaceId, ResourceMeter,
    TrapKindId, TrapView,
};
