//! Per-cell visibility snapshot consumed by renderers.

use strum::{EnumCount, EnumIter};

use super::{FeatureId, MonsterId, ObjectKindId, Position, TrapKindId};

/// Lighting state of a cell as seen by the player this frame.
///
/// Glyph tables hold one entry per lighting state, indexed by [`Lighting::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumCount, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lighting {
    /// In view under ambient light only.
    #[default]
    Los,
    /// Lit by the player's own light source.
    Torch,
    /// Permanently lit but not currently in view.
    Lit,
    /// Remembered only, unlit.
    Dark,
}

impl Lighting {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A trap as the player currently knows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapView {
    pub kind: TrapKindId,
    /// Detected or otherwise marked; hidden traps never draw.
    pub visible: bool,
}

impl TrapView {
    pub const fn new(kind: TrapKindId, visible: bool) -> Self {
        Self { kind, visible }
    }
}

/// Objects the player knows to be lying in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectPile {
    #[default]
    Empty,
    One(ObjectKindId),
    /// Several objects; carries the kind of the topmost one.
    Many(ObjectKindId),
}

impl ObjectPile {
    pub const fn is_empty(self) -> bool {
        matches!(self, ObjectPile::Empty)
    }
}

/// What stands in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    #[default]
    Empty,
    Player,
    Monster(MonsterId),
}

/// Immutable description of one world cell for one frame.
///
/// Produced by a [`MapOracle`](crate::env::MapOracle); renderers only read it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSnapshot {
    pub grid: Position,
    pub feature: FeatureId,
    pub lighting: Lighting,
    pub trap: Option<TrapView>,
    pub objects: ObjectPile,
    pub occupant: Occupant,
    /// The player is hallucinating; objects and monsters show false glyphs.
    pub hallucinate: bool,
}

impl CellSnapshot {
    /// Bare terrain cell with nothing on it.
    pub const fn terrain(grid: Position, feature: FeatureId, lighting: Lighting) -> Self {
        Self {
            grid,
            feature,
            lighting,
            trap: None,
            objects: ObjectPile::Empty,
            occupant: Occupant::Empty,
            hallucinate: false,
        }
    }

    #[must_use]
    pub const fn with_trap(mut self, trap: TrapView) -> Self {
        self.trap = Some(trap);
        self
    }

    #[must_use]
    pub const fn with_objects(mut self, objects: ObjectPile) -> Self {
        self.objects = objects;
        self
    }

    #[must_use]
    pub const fn with_occupant(mut self, occupant: Occupant) -> Self {
        self.occupant = occupant;
        self
    }

    #[must_use]
    pub const fn with_hallucination(mut self, hallucinate: bool) -> Self {
        self.hallucinate = hallucinate;
        self
    }

    /// Copy of this snapshot with lighting forced to [`Lighting::Lit`].
    #[must_use]
    pub const fn fully_lit(mut self) -> Self {
        self.lighting = Lighting::Lit;
        self
    }
}
