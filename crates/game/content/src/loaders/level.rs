//! Level layout loader.
//!
//! Terrain is drawn as rows of characters resolved through a legend of feature
//! names. Monsters, objects and traps are listed separately and refer to glyph
//! table entries by name.

use std::collections::HashMap;
use std::path::Path;

use game_core::{
    FeatureId, GlyphTables, LevelState, Lighting, MapDimensions, MapOracle, Monster, MonsterId,
    MonsterRoster, ObjectPile, Position, ResourceMeter, TrapView,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonsterRon {
    id: u32,
    race: String,
    at: (i32, i32),
    #[serde(default)]
    image: Option<u32>,
    #[serde(default)]
    listened: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectRon {
    kind: String,
    at: (i32, i32),
    #[serde(default = "one")]
    count: u16,
}

fn one() -> u16 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrapRon {
    kind: String,
    at: (i32, i32),
    #[serde(default = "visible")]
    visible: bool,
}

fn visible() -> bool {
    true
}

/// Level data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelRon {
    legend: HashMap<char, String>,
    rows: Vec<String>,
    player: (i32, i32),
    #[serde(default = "full_health")]
    health: (i32, i32),
    #[serde(default)]
    lighting: Lighting,
    #[serde(default)]
    lighting_overrides: Vec<(i32, i32, Lighting)>,
    #[serde(default)]
    monsters: Vec<MonsterRon>,
    #[serde(default)]
    objects: Vec<ObjectRon>,
    #[serde(default)]
    traps: Vec<TrapRon>,
}

fn full_health() -> (i32, i32) {
    (100, 100)
}

/// A loaded level and the monsters living on it.
#[derive(Clone, Debug)]
pub struct LevelContent {
    pub level: LevelState,
    pub monsters: MonsterRoster,
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file, resolving names against `tables`.
    pub fn load(path: &Path, tables: &GlyphTables) -> LoadResult<LevelContent> {
        let content = read_file(path)?;
        Self::parse(&content, tables)
    }

    pub fn parse(content: &str, tables: &GlyphTables) -> LoadResult<LevelContent> {
        let data: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let legend = data
            .legend
            .iter()
            .map(|(symbol, name)| {
                tables
                    .feature_id(name)
                    .map(|id| (*symbol, id))
                    .ok_or_else(|| {
                        anyhow::anyhow!("Legend '{}' names unknown feature '{}'", symbol, name)
                    })
            })
            .collect::<LoadResult<HashMap<char, FeatureId>>>()?;

        let height = data.rows.len();
        let width = data.rows.first().map_or(0, |row| row.chars().count());
        if width == 0 || height == 0 {
            anyhow::bail!("Level has no cells");
        }

        let first_feature = data.rows[0]
            .chars()
            .next()
            .and_then(|symbol| legend.get(&symbol).copied())
            .ok_or_else(|| anyhow::anyhow!("Row 0 starts with a symbol missing from the legend"))?;
        let mut level = LevelState::new(
            MapDimensions::new(width as u32, height as u32),
            first_feature,
        );
        level.fill_lighting(data.lighting);

        for (y, row) in data.rows.iter().enumerate() {
            if row.chars().count() != width {
                anyhow::bail!(
                    "Row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                );
            }
            for (x, symbol) in row.chars().enumerate() {
                let feature = legend.get(&symbol).copied().ok_or_else(|| {
                    anyhow::anyhow!("Symbol '{}' at ({}, {}) is not in the legend", symbol, x, y)
                })?;
                level.set_feature(Position::new(x as i32, y as i32), feature);
            }
        }

        for (x, y, lighting) in data.lighting_overrides {
            if !level.set_lighting(Position::new(x, y), lighting) {
                anyhow::bail!("Lighting override at ({}, {}) is outside the level", x, y);
            }
        }

        for trap in data.traps {
            let kind = tables
                .trap_id(&trap.kind)
                .ok_or_else(|| anyhow::anyhow!("Unknown trap kind '{}'", trap.kind))?;
            let at = Position::new(trap.at.0, trap.at.1);
            if !level.set_trap(at, Some(TrapView::new(kind, trap.visible))) {
                anyhow::bail!("Trap at {} is outside the level", at);
            }
        }

        for object in data.objects {
            let kind = tables
                .object_id(&object.kind)
                .ok_or_else(|| anyhow::anyhow!("Unknown object kind '{}'", object.kind))?;
            let pile = match object.count {
                0 => ObjectPile::Empty,
                1 => ObjectPile::One(kind),
                _ => ObjectPile::Many(kind),
            };
            let at = Position::new(object.at.0, object.at.1);
            if !level.set_objects(at, pile) {
                anyhow::bail!("Object at {} is outside the level", at);
            }
        }

        let mut monsters = MonsterRoster::new();
        for monster in &data.monsters {
            let race = tables
                .race_id(&monster.race)
                .ok_or_else(|| anyhow::anyhow!("Unknown monster race '{}'", monster.race))?;
            let at = Position::new(monster.at.0, monster.at.1);
            if !level.contains(at) {
                anyhow::bail!("Monster {} at {} is outside the level", monster.id, at);
            }
            let mut entry =
                Monster::new(MonsterId(monster.id), race, at).with_listened(monster.listened);
            if let Some(image) = monster.image {
                entry = entry.with_image(MonsterId(image));
            }
            if monsters.insert(entry).is_some() {
                anyhow::bail!("Monster id {} is used more than once", monster.id);
            }
        }
        for monster in monsters.iter() {
            if let Some(image) = monster.image {
                if monsters.get(image).is_none() {
                    anyhow::bail!("Monster {} mimics unknown monster {}", monster.id, image);
                }
            }
        }
        level.sync_monsters(&monsters);

        let player = Position::new(data.player.0, data.player.1);
        if !level.move_player(player) {
            anyhow::bail!("Player start {} is outside the level", player);
        }
        level.set_player_health(ResourceMeter::new(data.health.0, data.health.1));

        Ok(LevelContent { level, monsters })
    }
}
