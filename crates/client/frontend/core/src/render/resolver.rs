//! Per-cell glyph resolution.
//!
//! A cell is drawn as a stack of layers: terrain, then a visible trap, then
//! objects, then the monster or player standing on it. Each layer overrides the
//! ones beneath it when present. Alongside the composite glyph the resolver
//! returns the terrain-only glyph, which graphical backends use as the
//! background of transparent tiles.
//!
//! Resolution is a pure read. Colours of multi-hued and flickering monsters are
//! chosen beforehand by [`GlyphResolver::commit_frame`], the only writer of
//! [`MonsterVisualState`](game_core::MonsterVisualState).
use game_core::{
    Attr, CellSnapshot, Color, DisplayConfig, Env, FrameId, Glyph, MapOracle, Monster, MonsterId,
    MonsterRoster, ObjectKindId, ObjectPile, Occupant, RaceFlags, RaceGlyph, ResourceMeter,
    compute_seed,
};

use super::Scene;
use super::lighting::apply_lighting;

/// Glyph of monsters the player only hears.
pub const LISTENED_GLYPH: Glyph = Glyph::text(Color::Slate, '*');

/// RNG context of the per-frame monster colour roll.
const SHIMMER_CONTEXT: u32 = u32::MAX;

/// The two glyphs produced for every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellGlyphs {
    /// Topmost visible layer.
    pub composite: Glyph,
    /// Bare terrain, ignoring every overlay.
    pub terrain: Glyph,
}

impl CellGlyphs {
    /// True when something is drawn above bare terrain.
    pub fn has_overlay(&self) -> bool {
        self.composite != self.terrain
    }
}

/// Turns cell snapshots into glyphs using one set of glyph tables.
#[derive(Clone, Copy, Debug)]
pub struct GlyphResolver<'a> {
    env: Env<'a>,
    config: &'a DisplayConfig,
}

impl<'a> GlyphResolver<'a> {
    pub fn new(env: Env<'a>, config: &'a DisplayConfig) -> Self {
        Self { env, config }
    }

    pub fn env(&self) -> Env<'a> {
        self.env
    }

    pub fn config(&self) -> &'a DisplayConfig {
        self.config
    }

    /// Resolves the composite and terrain-only glyphs of `cell`.
    ///
    /// # Panics
    ///
    /// Panics if the cell references a feature, trap kind or race that is not in
    /// the glyph tables.
    pub fn resolve(&self, scene: &Scene<'_>, cell: &CellSnapshot) -> CellGlyphs {
        let glyphs = self.env.glyphs();

        let mut terrain = glyphs.feature_glyph(cell.lighting, cell.feature);
        if self.config.applies_text_lighting() {
            terrain.attr = apply_lighting(
                terrain.attr,
                cell.lighting,
                glyphs.feature(cell.feature),
                self.config.wall_style,
            );
        }

        let mut composite = terrain;

        if let Some(trap) = cell.trap {
            if trap.visible && !cell.hallucinate {
                composite = glyphs.trap_glyph(cell.lighting, trap.kind);
            }
        }

        if !cell.objects.is_empty() {
            composite = if cell.hallucinate {
                self.hallucinatory_object(cell, scene.frame)
            } else {
                match cell.objects {
                    ObjectPile::Many(_) => glyphs.pile_glyph(),
                    ObjectPile::One(kind) => glyphs.object_glyph(kind).unwrap_or(composite),
                    ObjectPile::Empty => composite,
                }
            };
        }

        match cell.occupant {
            Occupant::Monster(id) => {
                if let Some(glyph) = self.monster_glyph(scene, cell, id, composite) {
                    composite = glyph;
                }
            }
            Occupant::Player => {
                composite = self.player_glyph(scene.map.player().health);
            }
            Occupant::Empty => {}
        }

        CellGlyphs { composite, terrain }
    }

    /// Glyph of the monster `id`, or `None` to keep the layers beneath.
    fn monster_glyph(
        &self,
        scene: &Scene<'_>,
        cell: &CellSnapshot,
        id: MonsterId,
        underlying: Glyph,
    ) -> Option<Glyph> {
        let Some(monster) = scene.monsters.get(id) else {
            tracing::error!(monster = %id, grid = %cell.grid, "snapshot names a monster missing from the roster");
            return None;
        };

        if cell.hallucinate {
            return self.image_glyph(scene.monsters, monster);
        }
        if monster.listened {
            return Some(LISTENED_GLYPH);
        }

        let race = self.env.glyphs().race(monster.race);
        let (color, ch) = match race.glyph {
            RaceGlyph::Special { .. } => return Some(race.glyph.glyph()),
            RaceGlyph::Standard { color, ch } => (color, ch),
        };
        let default = Attr::text(color);

        let glyph = if race.flags.is_animated() {
            let attr = monster.visual.attr_for(scene.frame).unwrap_or(default);
            Glyph::new(attr, ch)
        } else if !race.flags.is_transparent() || underlying.attr.is_special() {
            Glyph::new(default, ch)
        } else {
            let attr = if race.flags.contains(RaceFlags::ATTR_CLEAR) {
                underlying.attr
            } else {
                default
            };
            let ch = if race.flags.contains(RaceFlags::CHAR_CLEAR) {
                underlying.ch
            } else {
                ch
            };
            Glyph::new(attr, ch)
        };
        Some(glyph)
    }

    /// Race glyph of the monster `monster` is mimicking while the player hallucinates.
    fn image_glyph(&self, roster: &MonsterRoster, monster: &Monster) -> Option<Glyph> {
        let image = monster.image.filter(|image| *image != monster.id)?;
        let Some(mimicked) = roster.get(image) else {
            tracing::trace!(monster = %monster.id, image = %image, "hallucinatory image is gone");
            return None;
        };
        Some(self.env.glyphs().race(mimicked.race).glyph.glyph())
    }

    fn player_glyph(&self, health: ResourceMeter) -> Glyph {
        let race = self.env.glyphs().player_race();
        match race.glyph {
            RaceGlyph::Special { .. } => race.glyph.glyph(),
            RaceGlyph::Standard { ch, .. } => {
                Glyph::text(health_color(health, self.config.hitpoint_warn), ch)
            }
        }
    }

    /// A random displayable object glyph for a hallucinating player.
    ///
    /// Draws at most `hallucination_attempts` kinds, then gives up with
    /// [`Glyph::UNKNOWN`].
    pub fn hallucinatory_object(&self, cell: &CellSnapshot, frame: FrameId) -> Glyph {
        let glyphs = self.env.glyphs();
        let rng = self.env.rng();
        let count = glyphs.object_kind_count();
        if count == 0 {
            return Glyph::UNKNOWN;
        }

        let key = pack_position(cell.grid.x, cell.grid.y);
        for attempt in 0..u32::from(self.config.hallucination_attempts) {
            let seed = compute_seed(self.config.seed, frame.0, key, attempt);
            let kind = ObjectKindId(rng.pick(seed, count) as u16);
            if let Some(glyph) = glyphs.object_glyph(kind) {
                return glyph;
            }
        }
        tracing::debug!(grid = %cell.grid, "no displayable object kind found for hallucination");
        Glyph::UNKNOWN
    }

    /// Commits this frame's drawn colour for every animated monster in view.
    ///
    /// Monsters in hallucinating cells, heard-only monsters and monsters whose
    /// cell does not show them are skipped. Returns the number of commits made.
    pub fn commit_frame(
        &self,
        map: &dyn MapOracle,
        roster: &mut MonsterRoster,
        frame: FrameId,
    ) -> usize {
        let glyphs = self.env.glyphs();
        let rng = self.env.rng();
        let mut committed = 0;

        for monster in roster.iter_mut() {
            let Some(cell) = map.cell(monster.grid) else {
                continue;
            };
            if cell.hallucinate || monster.listened || cell.occupant != Occupant::Monster(monster.id)
            {
                continue;
            }

            let race = glyphs.race(monster.race);
            let RaceGlyph::Standard { color, .. } = race.glyph else {
                continue;
            };

            let seed = compute_seed(self.config.seed, frame.0, monster.id.0, SHIMMER_CONTEXT);
            let drawn = if race.flags.contains(RaceFlags::ATTR_MULTI) {
                Color::SHIMMER[rng.pick(seed, Color::SHIMMER.len())]
            } else if race.flags.contains(RaceFlags::ATTR_FLICKER) {
                if rng.coin(seed) { color.lighter() } else { color }
            } else {
                continue;
            };

            if monster.visual.commit(frame, Attr::text(drawn)) {
                committed += 1;
            }
        }

        tracing::debug!(frame = frame.0, committed, "committed monster colours");
        committed
    }
}

/// Player colour for the current health.
///
/// Full health is light green, above `warn` tenths of maximum yellow, and red
/// below that. A player without maximum hit points draws white.
pub fn health_color(health: ResourceMeter, warn: u8) -> Color {
    let current = i64::from(health.current);
    let maximum = i64::from(health.maximum);
    if maximum <= 0 {
        Color::White
    } else if current >= maximum {
        Color::LightGreen
    } else if current * 10 > maximum * i64::from(warn) {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn pack_position(x: i32, y: i32) -> u32 {
    ((y as u32) << 16) | (x as u32 & 0xFFFF)
}

#[cfg(test)]
mod tests {
    use game_core::{
        FeatureId, FeatureInfo, GlyphOracle, GlyphTables, GraphicsMode, LevelState, Lighting,
        LightingGlyphs, MapDimensions, ObjectKindInfo, PcgRng, Position, RaceInfo, TrapInfo,
        TrapView, WallStyle,
    };

    use super::*;

    struct Fixture {
        tables: GlyphTables,
        rng: PcgRng,
        config: DisplayConfig,
        level: LevelState,
        monsters: MonsterRoster,
    }

    impl Fixture {
        fn new() -> Self {
            let mut builder = GlyphTables::builder();
            builder.add_feature(
                FeatureInfo::new("floor", 5),
                LightingGlyphs::uniform(Glyph::text(Color::White, '.')),
            );
            builder.add_feature(
                FeatureInfo::new("lava", 10).with_light_source(true),
                LightingGlyphs::uniform(Glyph::text(Color::Red, '#')),
            );
            builder.add_feature(
                FeatureInfo::new("granite", 10).with_wall(true),
                LightingGlyphs::uniform(Glyph::text(Color::White, '#')),
            );
            builder.add_feature(
                FeatureInfo::new("rune", 12),
                LightingGlyphs::uniform(Glyph::special(0x90, ';')),
            );
            builder.add_trap(
                TrapInfo {
                    name: "pit".into(),
                },
                LightingGlyphs::uniform(Glyph::text(Color::Slate, '^')),
            );
            builder.add_object(ObjectKindInfo {
                name: "potion".into(),
                glyph: Some(Glyph::text(Color::LightBlue, '!')),
            });
            let player = builder.add_race(RaceInfo::new(
                "player",
                RaceGlyph::Standard {
                    color: Color::White,
                    ch: '@',
                },
            ));
            builder.add_race(RaceInfo::new(
                "kobold",
                RaceGlyph::Standard {
                    color: Color::Green,
                    ch: 'k',
                },
            ));
            builder.add_race(
                RaceInfo::new(
                    "ghost",
                    RaceGlyph::Standard {
                        color: Color::LightBlue,
                        ch: 'G',
                    },
                )
                .with_flags(RaceFlags::ATTR_CLEAR | RaceFlags::CHAR_CLEAR),
            );
            builder.player_race(player);

            let tables = builder.build().unwrap();
            let mut level = LevelState::new(MapDimensions::new(8, 4), FeatureId(0));
            level.move_player(Position::new(7, 3));
            Self {
                tables,
                rng: PcgRng,
                config: DisplayConfig::default(),
                level,
                monsters: MonsterRoster::new(),
            }
        }

        fn resolve(&self, at: Position) -> CellGlyphs {
            let resolver = GlyphResolver::new(Env::new(&self.tables, &self.rng), &self.config);
            let scene = Scene::new(&self.level, &self.monsters, FrameId(1));
            resolver.resolve(&scene, &self.level.cell(at).unwrap())
        }
    }

    #[test]
    fn bare_terrain_has_no_overlay() {
        let fixture = Fixture::new();
        let glyphs = fixture.resolve(Position::new(1, 1));
        assert_eq!(glyphs.composite, Glyph::text(Color::White, '.'));
        assert!(!glyphs.has_overlay());
    }

    #[test]
    fn hidden_traps_stay_hidden() {
        let mut fixture = Fixture::new();
        let at = Position::new(2, 1);
        let pit = fixture.tables.trap_id("pit").unwrap();

        fixture.level.set_trap(at, Some(TrapView::new(pit, false)));
        assert!(!fixture.resolve(at).has_overlay());

        fixture.level.set_trap(at, Some(TrapView::new(pit, true)));
        assert_eq!(fixture.resolve(at).composite.ch, '^');

        fixture.level.set_hallucinating(true);
        assert!(!fixture.resolve(at).has_overlay());
    }

    #[test]
    fn piles_use_pile_glyph() {
        let mut fixture = Fixture::new();
        let at = Position::new(3, 1);
        let potion = fixture.tables.object_id("potion").unwrap();

        fixture.level.set_objects(at, ObjectPile::One(potion));
        assert_eq!(fixture.resolve(at).composite.ch, '!');

        fixture.level.set_objects(at, ObjectPile::Many(potion));
        assert_eq!(fixture.resolve(at).composite, fixture.tables.pile_glyph());
    }

    #[test]
    fn player_colour_tracks_health() {
        let mut fixture = Fixture::new();
        let at = fixture.level.player().position;

        fixture.level.set_player_health(ResourceMeter::new(10, 10));
        assert_eq!(fixture.resolve(at).composite, Glyph::text(Color::LightGreen, '@'));

        fixture.level.set_player_health(ResourceMeter::new(2, 10));
        assert_eq!(fixture.resolve(at).composite, Glyph::text(Color::Red, '@'));
    }

    #[test]
    fn health_ramp_thresholds() {
        assert_eq!(health_color(ResourceMeter::new(5, 0), 3), Color::White);
        assert_eq!(health_color(ResourceMeter::new(12, 10), 3), Color::LightGreen);
        assert_eq!(health_color(ResourceMeter::new(4, 10), 3), Color::Yellow);
        assert_eq!(health_color(ResourceMeter::new(3, 10), 3), Color::Red);
    }

    #[test]
    fn tiles_keep_table_attrs() {
        let mut fixture = Fixture::new();
        let lava = fixture.tables.feature_id("lava").unwrap();
        let granite = fixture.tables.feature_id("granite").unwrap();
        let (hot, wall) = (Position::new(1, 2), Position::new(2, 2));
        fixture.level.set_feature(hot, lava);
        fixture.level.set_lighting(hot, Lighting::Torch);
        fixture.level.set_feature(wall, granite);
        fixture.config.wall_style = WallStyle::Hybrid;

        assert_ne!(fixture.resolve(hot).terrain, Glyph::text(Color::Red, '#'));
        assert_ne!(fixture.resolve(wall).terrain, Glyph::text(Color::White, '#'));

        fixture.config.graphics = GraphicsMode::Tiles;
        assert_eq!(fixture.resolve(hot).terrain, Glyph::text(Color::Red, '#'));
        assert_eq!(fixture.resolve(wall).composite, Glyph::text(Color::White, '#'));
    }

    #[test]
    fn transparent_monsters_show_through_text_terrain_only() {
        let mut fixture = Fixture::new();
        let ghost = fixture.tables.race_id("ghost").unwrap();
        let rune = fixture.tables.feature_id("rune").unwrap();
        let (plain, special) = (Position::new(1, 1), Position::new(2, 1));
        fixture.level.set_feature(special, rune);
        fixture.monsters.insert(Monster::new(MonsterId(1), ghost, plain));
        fixture.monsters.insert(Monster::new(MonsterId(2), ghost, special));
        fixture.level.sync_monsters(&fixture.monsters);

        assert_eq!(fixture.resolve(plain).composite, Glyph::text(Color::White, '.'));
        assert_eq!(fixture.resolve(special).composite, Glyph::text(Color::LightBlue, 'G'));
    }

    #[test]
    fn listened_monsters_use_marker() {
        let mut fixture = Fixture::new();
        let at = Position::new(4, 2);
        let kobold = fixture.tables.race_id("kobold").unwrap();
        fixture
            .monsters
            .insert(Monster::new(MonsterId(1), kobold, at).with_listened(true));
        fixture.level.sync_monsters(&fixture.monsters);

        assert_eq!(fixture.resolve(at).composite, LISTENED_GLYPH);
    }

    #[test]
    fn roster_miss_keeps_lower_layers() {
        let mut fixture = Fixture::new();
        let at = Position::new(5, 0);
        fixture.level.set_monster(at, Some(MonsterId(99)));

        assert_eq!(fixture.resolve(at).composite, Glyph::text(Color::White, '.'));
    }

    #[test]
    fn pack_position_separates_axes() {
        assert_ne!(pack_position(1, 0), pack_position(0, 1));
        assert_eq!(pack_position(3, 2), (2 << 16) | 3);
    }
}
