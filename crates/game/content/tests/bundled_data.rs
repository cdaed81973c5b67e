//! The data shipped in `data/` must always load.

use game_content::ContentFactory;
use game_core::{GlyphOracle, MapOracle, Occupant, Position};

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::bundled();

    let config = factory.load_config().expect("display.toml");
    assert!(config.validate().is_ok());

    let tables = factory.load_glyphs().expect("glyphs.ron");
    assert_eq!(tables.player_race().glyph.ch(), '@');
    assert!(tables.object_kind_count() > 0);

    let content = factory.load_level("cavern", &tables).expect("cavern.ron");
    let player = content.level.player();
    assert_eq!(
        content.level.cell(player.position).map(|cell| cell.occupant),
        Some(Occupant::Player)
    );

    for monster in content.monsters.iter() {
        let cell = content.level.cell(monster.grid).expect("monster inside level");
        assert_eq!(cell.occupant, Occupant::Monster(monster.id));
    }
}

#[test]
fn cavern_legend_maps_dots_to_floor() {
    let tables = ContentFactory::bundled().load_glyphs().unwrap();
    let floor = tables.feature_id("floor").unwrap();
    let content = ContentFactory::bundled()
        .load_level("cavern", &tables)
        .unwrap();

    assert_eq!(
        content.level.cell(Position::new(1, 1)).unwrap().feature,
        floor
    );
}
