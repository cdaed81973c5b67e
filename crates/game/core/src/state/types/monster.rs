//! Monster instances as seen by the map display.

use std::collections::BTreeMap;

use super::{FrameId, MonsterId, Position, RaceId};
use crate::display::Attr;

/// Attribute a monster was last drawn with.
///
/// Multi-hued and flickering monsters pick a new colour every frame. The colour is
/// committed once per frame so that every place the monster appears in that frame
/// agrees on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonsterVisualState {
    drawn: Option<(FrameId, Attr)>,
}

impl MonsterVisualState {
    /// Committed attribute for `frame`, if one has been recorded.
    pub fn attr_for(&self, frame: FrameId) -> Option<Attr> {
        match self.drawn {
            Some((committed, attr)) if committed == frame => Some(attr),
            _ => None,
        }
    }

    /// Attribute from the most recent commit, whatever frame it belonged to.
    pub fn last_drawn(&self) -> Option<Attr> {
        self.drawn.map(|(_, attr)| attr)
    }

    /// Records the drawn attribute for `frame`.
    ///
    /// Returns `false` and leaves the state untouched if `frame` already has a commit.
    pub fn commit(&mut self, frame: FrameId, attr: Attr) -> bool {
        if self.attr_for(frame).is_some() {
            return false;
        }
        self.drawn = Some((frame, attr));
        true
    }
}

/// A live monster on the current level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    pub race: RaceId,
    pub grid: Position,
    /// Another live monster whose race this one appears as while the player hallucinates.
    pub image: Option<MonsterId>,
    /// Known by sound only; drawn as a neutral marker.
    pub listened: bool,
    pub visual: MonsterVisualState,
}

impl Monster {
    pub fn new(id: MonsterId, race: RaceId, grid: Position) -> Self {
        Self {
            id,
            race,
            grid,
            image: None,
            listened: false,
            visual: MonsterVisualState::default(),
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: MonsterId) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_listened(mut self, listened: bool) -> Self {
        self.listened = listened;
        self
    }
}

/// Live monsters of the current level, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterRoster {
    monsters: BTreeMap<MonsterId, Monster>,
}

impl MonsterRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a monster, returning the previous entry with the same id.
    pub fn insert(&mut self, monster: Monster) -> Option<Monster> {
        self.monsters.insert(monster.id, monster)
    }

    pub fn remove(&mut self, id: MonsterId) -> Option<Monster> {
        self.monsters.remove(&id)
    }

    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Monster> {
        self.monsters.values_mut()
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

impl FromIterator<Monster> for MonsterRoster {
    fn from_iter<I: IntoIterator<Item = Monster>>(iter: I) -> Self {
        Self {
            monsters: iter.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Color;

    #[test]
    fn commit_is_single_write_per_frame() {
        let mut visual = MonsterVisualState::default();
        let frame = FrameId(7);

        assert!(visual.commit(frame, Attr::text(Color::Red)));
        assert!(!visual.commit(frame, Attr::text(Color::Blue)));
        assert_eq!(visual.attr_for(frame), Some(Attr::text(Color::Red)));
    }

    #[test]
    fn commit_from_previous_frame_is_stale() {
        let mut visual = MonsterVisualState::default();
        visual.commit(FrameId(1), Attr::text(Color::Green));

        assert_eq!(visual.attr_for(FrameId(2)), None);
        assert_eq!(visual.last_drawn(), Some(Attr::text(Color::Green)));
        assert!(visual.commit(FrameId(2), Attr::text(Color::Yellow)));
    }

    #[test]
    fn roster_iterates_in_id_order() {
        let roster: MonsterRoster = [
            Monster::new(MonsterId(9), RaceId(1), Position::new(1, 1)),
            Monster::new(MonsterId(2), RaceId(1), Position::new(2, 2)),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = roster.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MonsterId(2), MonsterId(9)]);
    }
}
