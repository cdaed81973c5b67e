pub mod cell;
pub mod common;
pub mod level;
pub mod monster;

// Re-export cell snapshot types
pub use cell::{CellSnapshot, Lighting, ObjectPile, Occupant, TrapView};

// Re-export common types
pub use common::{
    FeatureId, FrameId, MonsterId, ObjectKindId, Position, RaceId, ResourceMeter, TrapKindId,
};

// Re-export level state
pub use level::LevelState;

// Re-export monster types
pub use monster::{Monster, MonsterRoster, MonsterVisualState};
