//! End-to-end rendering of the bundled cavern level.

use client_frontend_core::render::{OUTSIDE_GLYPH, overview_extent};
use client_frontend_core::{
    DevicePoint, DisplaySurface, Extent, GlyphSnapshot, MapRenderer, MemorySurface, Viewport,
    ViewportSet, ViewportTarget,
};
use game_content::{ContentFactory, LevelContent};
use game_core::{
    Attr, Color, DisplayConfig, FeatureId, FeatureInfo, FrameId, Glyph, GlyphTables, LevelState,
    LightingGlyphs, MapDimensions, MapOracle, MonsterId, MonsterRoster, ObjectKindInfo, ObjectPile,
    Position, RaceGlyph, RaceInfo, TileMultiplier,
};

fn cavern() -> (MapRenderer, LevelContent) {
    let factory = ContentFactory::bundled();
    let config = factory.load_config().unwrap();
    let tables = factory.load_glyphs().unwrap();
    let mut content = factory.load_level("cavern", &tables).unwrap();
    content.level.sync_monsters(&content.monsters);
    (MapRenderer::new(tables, config).unwrap(), content)
}

fn glyph_at(renderer: &MapRenderer, content: &LevelContent, at: Position) -> Glyph {
    let scene = renderer.scene(&content.level, &content.monsters);
    let cell = content.level.cell(at).unwrap();
    renderer.resolver().resolve(&scene, &cell).composite
}

#[test]
fn transparent_races_blend_with_floor() {
    let (renderer, content) = cavern();
    let floor = Glyph::text(Color::White, '.');

    // clear worm keeps its letter, takes the floor colour
    assert_eq!(
        glyph_at(&renderer, &content, Position::new(16, 8)),
        Glyph::text(Color::White, 'w')
    );
    // lurker vanishes into the floor entirely
    assert_eq!(glyph_at(&renderer, &content, Position::new(9, 12)), floor);
    // creeping coins keep their colour on the floor's character
    assert_eq!(
        glyph_at(&renderer, &content, Position::new(26, 8)),
        Glyph::text(Color::Yellow, '.')
    );
    // special tiles are drawn verbatim
    assert_eq!(
        glyph_at(&renderer, &content, Position::new(3, 11)),
        Glyph::special(129, 'g')
    );
}

#[test]
fn hallucination_swaps_monsters_for_their_images() {
    let (renderer, mut content) = cavern();
    content.level.set_hallucinating(true);

    // monster 3 mimics monster 5, a dog
    assert_eq!(
        glyph_at(&renderer, &content, Position::new(13, 7)),
        Glyph::text(Color::LightUmber, 'C')
    );
    // monster 2 mimics nothing, so its cell shows what lies beneath
    let scene = renderer.scene(&content.level, &content.monsters);
    let cell = content.level.cell(Position::new(12, 7)).unwrap();
    let glyphs = renderer.resolver().resolve(&scene, &cell);
    assert_eq!(glyphs.composite, glyphs.terrain);
}

#[test]
fn listened_monster_is_a_marker() {
    let (renderer, content) = cavern();
    assert_eq!(
        content.monsters.get(MonsterId(10)).map(|m| m.listened),
        Some(true)
    );
    assert_eq!(
        glyph_at(&renderer, &content, Position::new(44, 3)),
        Glyph::text(Color::Slate, '*')
    );
}

#[test]
fn full_redraw_agrees_with_cursor_on_every_view() {
    let (renderer, content) = cavern();
    let player = content.level.player().position;
    let scene = renderer.scene(&content.level, &content.monsters);

    let mut main = MemorySurface::new(Extent::new(40, 12));
    let mut mirror = MemorySurface::new(Extent::new(20, 8));
    let mut overview = MemorySurface::new(Extent::new(18, 8));

    let mut main_view = Viewport::main(DevicePoint::ORIGIN, TileMultiplier::UNIT);
    main_view.center_on(player, main.size());
    let mut mirror_view = Viewport::mirror(TileMultiplier::new(2, 1).unwrap());
    mirror_view.center_on(player, mirror.size());

    let mut set = ViewportSet::new(ViewportTarget::new(main_view, &mut main))
        .unwrap()
        .with(ViewportTarget::new(mirror_view, &mut mirror))
        .unwrap()
        .with(ViewportTarget::new(
            Viewport::overview(TileMultiplier::UNIT),
            &mut overview,
        ))
        .unwrap();

    let at = renderer.redraw(&scene, &mut set);
    drop(set);

    // 42/120 hit points sits above the 3/10 warning line
    let hurt = Glyph::text(Color::Yellow, '@');
    assert_eq!(at, main.cursor());
    assert_eq!(main.glyph(at.unwrap()), Some(hurt));
    assert_eq!(mirror.glyph(mirror.cursor().unwrap()), Some(hurt));
    // overviews draw the player race default
    assert_eq!(
        overview.glyph(overview.cursor().unwrap()),
        Some(Glyph::text(Color::White, '@'))
    );
}

#[test]
fn overview_never_hides_player() {
    let (renderer, mut content) = cavern();
    // a monster right next to the player lands in the same bucket on a tiny overview
    content.level.move_player(Position::new(4, 3));
    content.level.sync_monsters(&content.monsters);
    let scene = renderer.scene(&content.level, &content.monsters);

    let mut surface = MemorySurface::new(Extent::new(8, 5));
    let viewport = Viewport::overview(TileMultiplier::UNIT);
    let map = overview_extent(&viewport, Extent::new(8, 5), content.level.dimensions()).unwrap();
    assert_eq!(map, Extent::new(6, 3));

    let mut target = ViewportTarget::new(viewport, &mut surface);
    let at = renderer.redraw_overview(&scene, &mut target).unwrap();

    assert_eq!(surface.glyph(at), Some(Glyph::text(Color::White, '@')));
    assert_eq!(surface.find(|g| g.ch == '@'), vec![at]);
}

#[test]
fn overview_with_big_tiles_stays_inside_frame() {
    let (renderer, content) = cavern();
    let scene = renderer.scene(&content.level, &content.monsters);

    let mut surface = MemorySurface::new(Extent::new(30, 12));
    let mut target = ViewportTarget::new(
        Viewport::overview(TileMultiplier::new(2, 2).unwrap()),
        &mut surface,
    );
    let at = renderer.redraw_overview(&scene, &mut target).unwrap();

    // 28x10 usable, rounded to tiles: the box spans columns 0..=29, rows 0..=11
    assert_eq!(at.x % 2, 1);
    assert_eq!(at.y % 2, 1);
    assert_eq!(surface.glyph(DevicePoint::new(29, 11)).unwrap().ch, '+');
    assert_eq!(
        surface.glyph(DevicePoint::new(at.x + 1, at.y + 1)),
        Some(Glyph::BLANK)
    );
}

#[test]
fn hallucinated_objects_give_up_on_undisplayable_tables() {
    let mut builder = GlyphTables::builder();
    builder.add_feature(
        FeatureInfo::new("floor", 5),
        LightingGlyphs::uniform(Glyph::text(Color::White, '.')),
    );
    builder.add_object(ObjectKindInfo {
        name: "<unused kind>".into(),
        glyph: None,
    });
    let player = builder.add_race(RaceInfo::new(
        "player",
        RaceGlyph::Standard {
            color: Color::White,
            ch: '@',
        },
    ));
    builder.player_race(player);
    let tables = builder.build().unwrap();
    let kind = tables.object_id("<unused kind>").unwrap();

    let config = DisplayConfig {
        hallucination_attempts: 8,
        ..DisplayConfig::default()
    };
    let renderer = MapRenderer::new(tables, config).unwrap();
    let mut level = LevelState::new(MapDimensions::new(3, 3), FeatureId(0));
    level.set_objects(Position::new(1, 1), ObjectPile::One(kind));
    level.set_hallucinating(true);
    let monsters = MonsterRoster::new();

    let scene = renderer.scene(&level, &monsters);
    let cell = level.cell(Position::new(1, 1)).unwrap();
    assert_eq!(
        renderer.resolver().resolve(&scene, &cell).composite,
        Glyph::UNKNOWN
    );
}

#[test]
fn commit_pass_is_stable_within_a_frame() {
    let (mut renderer, mut content) = cavern();
    let frame = renderer.begin_frame(&content.level, &mut content.monsters);
    let shrieker = Position::new(21, 3);

    let first = glyph_at(&renderer, &content, shrieker);
    let second = glyph_at(&renderer, &content, shrieker);
    assert_eq!(first, second);
    assert!(matches!(first.attr, Attr::Text(text) if Color::SHIMMER.contains(&text.color)));

    // committing again in the same frame changes nothing
    let again = renderer
        .resolver()
        .commit_frame(&content.level, &mut content.monsters, frame);
    assert_eq!(again, 0);
    assert_eq!(renderer.frame(), FrameId(1));
}

#[test]
fn snapshot_centres_on_player() {
    let (renderer, mut content) = cavern();
    let player = content.level.player().position;
    let scene = renderer.scene(&content.level, &content.monsters);

    let snapshot = renderer.record_snapshot(&scene, player, 2);
    assert_eq!(snapshot.side(), 5);
    assert_eq!(snapshot.glyph(2, 2).map(|g| g.ch), Some('@'));
    assert_eq!(snapshot.char_rows()[0], "#####");

    let corner = renderer.record_snapshot(&scene, Position::ORIGIN, 1);
    assert_eq!(corner.glyph(0, 0), Some(OUTSIDE_GLYPH));

    content.level.set_escaped(true);
    let scene = renderer.scene(&content.level, &content.monsters);
    assert_eq!(
        renderer.record_snapshot(&scene, player, 2),
        GlyphSnapshot::wilderness()
    );
}
