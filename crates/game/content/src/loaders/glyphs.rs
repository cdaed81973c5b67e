//! Glyph table loader.
//!
//! Glyphs are written as `(Colour, 'c')` tuples. Features and traps carry one
//! base glyph plus optional per-lighting overrides, used by tile sets that bake
//! lighting into their art.

use std::collections::HashMap;
use std::path::Path;

use game_core::{
    Color, FeatureInfo, Glyph, GlyphTables, Lighting, LightingGlyphs, ObjectKindInfo, RaceInfo,
    TrapInfo,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

type GlyphRon = (Color, char);

fn glyph((color, ch): GlyphRon) -> Glyph {
    Glyph::text(color, ch)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeatureRon {
    name: String,
    priority: u8,
    glyph: GlyphRon,
    #[serde(default)]
    lighting: HashMap<Lighting, GlyphRon>,
    #[serde(default)]
    light_source: bool,
    #[serde(default)]
    wall: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrapRon {
    name: String,
    glyph: GlyphRon,
    #[serde(default)]
    lighting: HashMap<Lighting, GlyphRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectRon {
    name: String,
    #[serde(default)]
    glyph: Option<GlyphRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GlyphTablesRon {
    player_race: String,
    pile: GlyphRon,
    features: Vec<FeatureRon>,
    #[serde(default)]
    traps: Vec<TrapRon>,
    #[serde(default)]
    objects: Vec<ObjectRon>,
    races: Vec<RaceInfo>,
}

fn lighting_glyphs(base: GlyphRon, overrides: &HashMap<Lighting, GlyphRon>) -> LightingGlyphs {
    overrides
        .iter()
        .fold(LightingGlyphs::uniform(glyph(base)), |glyphs, (lighting, g)| {
            glyphs.with(*lighting, glyph(*g))
        })
}

/// Loader for glyph tables from RON files.
pub struct GlyphTableLoader;

impl GlyphTableLoader {
    /// Load and validate glyph tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<GlyphTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GlyphTables> {
        let data: GlyphTablesRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse glyph tables RON: {}", e))?;

        let mut builder = GlyphTables::builder();
        for feature in data.features {
            let glyphs = lighting_glyphs(feature.glyph, &feature.lighting);
            let info = FeatureInfo::new(feature.name, feature.priority)
                .with_light_source(feature.light_source)
                .with_wall(feature.wall);
            builder.add_feature(info, glyphs);
        }
        for trap in data.traps {
            let glyphs = lighting_glyphs(trap.glyph, &trap.lighting);
            builder.add_trap(TrapInfo { name: trap.name }, glyphs);
        }
        for object in data.objects {
            builder.add_object(ObjectKindInfo {
                name: object.name,
                glyph: object.glyph.map(glyph),
            });
        }

        let mut player = None;
        for race in data.races {
            let is_player = race.name == data.player_race;
            let id = builder.add_race(race);
            if is_player {
                player = Some(id);
            }
        }
        let player = player.ok_or_else(|| {
            anyhow::anyhow!("Player race '{}' is not defined", data.player_race)
        })?;
        builder.player_race(player).pile(glyph(data.pile));

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GlyphOracle, RaceFlags};

    use super::*;

    const TABLES: &str = r#"
        (
            player_race: "player",
            pile: (Violet, '&'),
            features: [
                (name: "floor", priority: 5, glyph: (White, '.')),
                (
                    name: "lava",
                    priority: 10,
                    glyph: (Red, '#'),
                    light_source: true,
                    lighting: { Dark: (Umber, '#') },
                ),
                (name: "granite", priority: 2, glyph: (White, '#'), wall: true),
            ],
            traps: [(name: "pit", glyph: (Slate, '^'))],
            objects: [
                (name: "potion", glyph: Some((LightBlue, '!'))),
                (name: "unknown item"),
            ],
            races: [
                (name: "player", glyph: Standard(color: White, ch: '@')),
                (name: "mushroom patch", glyph: Standard(color: Violet, ch: ','), flags: "ATTR_MULTI"),
                (name: "ghost", glyph: Standard(color: White, ch: 'G'), flags: "ATTR_CLEAR | CHAR_CLEAR"),
                (name: "dragon", glyph: Special(code: 129, ch: 'D')),
            ],
        )
    "#;

    #[test]
    fn parses_tables() {
        let tables = GlyphTableLoader::parse(TABLES).unwrap();

        let lava = tables.feature_id("lava").unwrap();
        assert!(tables.feature(lava).light_source);
        assert_eq!(
            tables.feature_glyph(Lighting::Dark, lava),
            Glyph::text(Color::Umber, '#')
        );
        assert_eq!(
            tables.feature_glyph(Lighting::Torch, lava),
            Glyph::text(Color::Red, '#')
        );

        let granite = tables.feature_id("granite").unwrap();
        assert!(tables.feature(granite).wall);

        let ghost = tables.race_id("ghost").unwrap();
        assert_eq!(
            tables.race(ghost).flags,
            RaceFlags::ATTR_CLEAR | RaceFlags::CHAR_CLEAR
        );

        let dragon = tables.race_id("dragon").unwrap();
        assert!(tables.race(dragon).glyph.glyph().attr.is_special());

        let unknown = tables.object_id("unknown item").unwrap();
        assert_eq!(tables.object_glyph(unknown), None);
        assert_eq!(tables.pile_glyph(), Glyph::text(Color::Violet, '&'));
    }

    #[test]
    fn race_flags_are_written_as_flag_names() {
        let tables = GlyphTableLoader::parse(TABLES).unwrap();

        let mushroom = tables.race_id("mushroom patch").unwrap();
        assert_eq!(tables.race(mushroom).flags, RaceFlags::ATTR_MULTI);
        let player = tables.race_id("player").unwrap();
        assert!(tables.race(player).flags.is_empty());
    }

    #[test]
    fn missing_player_race_is_an_error() {
        let content = TABLES.replace("player_race: \"player\"", "player_race: \"hero\"");
        let err = GlyphTableLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("hero"));
    }

    #[test]
    fn duplicate_feature_is_an_error() {
        let content = TABLES.replace("\"granite\"", "\"floor\"");
        assert!(GlyphTableLoader::parse(&content).is_err());
    }
}
