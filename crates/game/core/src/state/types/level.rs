//! In-memory level that serves cell snapshots.

use super::{
    CellSnapshot, FeatureId, Lighting, MonsterId, MonsterRoster, ObjectPile, Occupant, Position,
    ResourceMeter, TrapView,
};
use crate::env::{MapDimensions, MapOracle, PlayerView};

/// Dense per-cell layers of a single level plus the player's view of it.
///
/// Stands in for the simulation: content loaders build one, the viewer mutates it
/// between frames, and renderers read it through [`MapOracle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelState {
    dimensions: MapDimensions,
    features: Vec<FeatureId>,
    lighting: Vec<Lighting>,
    traps: Vec<Option<TrapView>>,
    objects: Vec<ObjectPile>,
    monsters: Vec<Option<MonsterId>>,
    player: PlayerView,
    hallucinating: bool,
}

impl LevelState {
    /// Level of `dimensions` filled with `fill` under [`Lighting::Los`].
    pub fn new(dimensions: MapDimensions, fill: FeatureId) -> Self {
        let len = (dimensions.width * dimensions.height) as usize;
        Self {
            dimensions,
            features: vec![fill; len],
            lighting: vec![Lighting::Los; len],
            traps: vec![None; len],
            objects: vec![ObjectPile::Empty; len],
            monsters: vec![None; len],
            player: PlayerView::new(Position::ORIGIN, ResourceMeter::new(1, 1)),
            hallucinating: false,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    /// Returns `false` if `position` is outside the level.
    pub fn set_feature(&mut self, position: Position, feature: FeatureId) -> bool {
        self.with_index(position, |level, i| level.features[i] = feature)
    }

    pub fn set_lighting(&mut self, position: Position, lighting: Lighting) -> bool {
        self.with_index(position, |level, i| level.lighting[i] = lighting)
    }

    pub fn fill_lighting(&mut self, lighting: Lighting) {
        self.lighting.fill(lighting);
    }

    pub fn set_trap(&mut self, position: Position, trap: Option<TrapView>) -> bool {
        self.with_index(position, |level, i| level.traps[i] = trap)
    }

    pub fn set_objects(&mut self, position: Position, objects: ObjectPile) -> bool {
        self.with_index(position, |level, i| level.objects[i] = objects)
    }

    pub fn set_monster(&mut self, position: Position, monster: Option<MonsterId>) -> bool {
        self.with_index(position, |level, i| level.monsters[i] = monster)
    }

    /// Rebuilds the monster layer from the roster's positions.
    pub fn sync_monsters(&mut self, roster: &MonsterRoster) {
        self.monsters.fill(None);
        for monster in roster.iter() {
            self.set_monster(monster.grid, Some(monster.id));
        }
    }

    pub fn move_player(&mut self, position: Position) -> bool {
        if !self.dimensions.contains(position) {
            return false;
        }
        self.player.position = position;
        true
    }

    pub fn set_player_health(&mut self, health: ResourceMeter) {
        self.player.health = health;
    }

    pub fn set_escaped(&mut self, escaped: bool) {
        self.player.escaped = escaped;
    }

    pub fn set_hallucinating(&mut self, hallucinating: bool) {
        self.hallucinating = hallucinating;
    }

    pub fn is_hallucinating(&self) -> bool {
        self.hallucinating
    }

    fn with_index(&mut self, position: Position, apply: impl FnOnce(&mut Self, usize)) -> bool {
        match self.index(position) {
            Some(i) => {
                apply(self, i);
                true
            }
            None => false,
        }
    }
}

impl MapOracle for LevelState {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn cell(&self, position: Position) -> Option<CellSnapshot> {
        let i = self.index(position)?;
        let occupant = if position == self.player.position {
            Occupant::Player
        } else {
            self.monsters[i].map_or(Occupant::Empty, Occupant::Monster)
        };
        Some(CellSnapshot {
            grid: position,
            feature: self.features[i],
            lighting: self.lighting[i],
            trap: self.traps[i],
            objects: self.objects[i],
            occupant,
            hallucinate: self.hallucinating,
        })
    }

    fn player(&self) -> PlayerView {
        self.player
    }
}
