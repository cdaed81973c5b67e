//! Propagation of single-cell draws and cursor moves to every viewport.
//!
//! The main view and mirror panels place world cells 1:1 (scrolled, scaled by
//! their own tile factor); overview panels recompute their own minimap bucket.
//! Targets that fall outside a surface are skipped.
use game_core::{MapDimensions, Position, TileMultiplier};

use super::resolver::CellGlyphs;
use super::scale::{minimap_dimensions, overview_bucket};
use super::viewport::{Viewport, ViewportRole, ViewportSet, ViewportTarget};
use crate::surface::{DevicePoint, DisplaySurface, Extent};

/// Writes `glyphs` at `anchor` and pads the rest of the tile footprint.
///
/// Padding cells are clipped to the surface width and to `clip_rows`.
pub fn stamp_footprint(
    surface: &mut dyn DisplaySurface,
    anchor: DevicePoint,
    tile: TileMultiplier,
    clip_rows: u16,
    glyphs: CellGlyphs,
) {
    surface.put(anchor, glyphs.composite, Some(glyphs.terrain));
    if !tile.is_scaled() {
        return;
    }

    let width = surface.size().width;
    let padding = glyphs.composite.padding();
    for dy in 0..u16::from(tile.height()) {
        let y = anchor.y.saturating_add(dy);
        if y >= clip_rows {
            break;
        }
        for dx in 0..u16::from(tile.width()) {
            if dx == 0 && dy == 0 {
                continue;
            }
            let x = anchor.x.saturating_add(dx);
            if x >= width {
                break;
            }
            surface.put(DevicePoint::new(x, y), padding, None);
        }
    }
}

/// Minimap size of an overview viewport on a surface of `size`.
///
/// `None` when the surface is too small to hold a single bucket.
pub fn overview_extent(viewport: &Viewport, size: Extent, world: MapDimensions) -> Option<Extent> {
    let drawable = Extent::new(size.width, viewport.clip_rows(size));
    let map = minimap_dimensions(drawable, world, viewport.tile);
    (!map.is_empty()).then_some(map)
}

/// Device cell of `position` on `target`, whatever its role. `None` when the
/// position is outside the world or off the surface.
pub fn target_point(
    target: &ViewportTarget<'_>,
    world: MapDimensions,
    position: Position,
) -> Option<DevicePoint> {
    if !world.contains(position) {
        return None;
    }
    let viewport = &target.viewport;
    let size = target.surface.size();
    let at = match viewport.role {
        ViewportRole::OverviewPanel => {
            let map = overview_extent(viewport, size, world)?;
            overview_bucket(position, world, map, viewport.tile)?
        }
        ViewportRole::MainView | ViewportRole::MirrorPanel => {
            viewport.device_point(position, size)?
        }
    };
    size.contains(at).then_some(at)
}

/// Draws one resolved cell on a single viewport. Returns `false` when skipped.
pub fn draw_on(
    target: &mut ViewportTarget<'_>,
    world: MapDimensions,
    position: Position,
    glyphs: CellGlyphs,
) -> bool {
    let Some(at) = target_point(target, world, position) else {
        tracing::trace!(role = ?target.viewport.role, %position, "cell outside viewport");
        return false;
    };
    let clip_rows = target.viewport.clip_rows(target.surface.size());
    stamp_footprint(target.surface, at, target.viewport.tile, clip_rows, glyphs);
    true
}

/// Draws one resolved cell on the main view and every map-showing secondary.
///
/// Returns the number of viewports written; positions outside the world draw nothing.
pub fn draw_cell(
    viewports: &mut ViewportSet<'_>,
    world: MapDimensions,
    position: Position,
    glyphs: CellGlyphs,
) -> usize {
    if !world.contains(position) {
        tracing::trace!(%position, "draw outside the world");
        return 0;
    }
    let mut drawn = usize::from(draw_on(viewports.main(), world, position, glyphs));
    for target in viewports.secondaries() {
        if target.viewport.shows_map() && draw_on(target, world, position, glyphs) {
            drawn += 1;
        }
    }
    drawn
}

/// Moves the cursor of every map-showing viewport onto `position`.
///
/// Returns the main view's device cell, if the position is visible there.
pub fn move_cursor(
    viewports: &mut ViewportSet<'_>,
    world: MapDimensions,
    position: Position,
) -> Option<DevicePoint> {
    if !world.contains(position) {
        tracing::trace!(%position, "cursor outside the world");
        return None;
    }
    for target in viewports.secondaries() {
        if !target.viewport.shows_map() {
            continue;
        }
        match target_point(target, world, position) {
            Some(at) => target.surface.move_cursor(at),
            None => tracing::trace!(role = ?target.viewport.role, %position, "cursor outside viewport"),
        }
    }

    let main = viewports.main();
    let at = target_point(main, world, position)?;
    main.surface.move_cursor(at);
    Some(at)
}

#[cfg(test)]
mod tests {
    use game_core::{Color, Glyph};

    use super::*;
    use crate::render::viewport::ViewportFlags;
    use crate::surface::MemorySurface;

    fn glyphs(ch: char) -> CellGlyphs {
        CellGlyphs {
            composite: Glyph::text(Color::Red, ch),
            terrain: Glyph::text(Color::White, '.'),
        }
    }

    #[test]
    fn footprint_pads_and_clips() {
        let mut surface = MemorySurface::new(Extent::new(5, 4));
        let tile = TileMultiplier::new(3, 2).unwrap();
        stamp_footprint(&mut surface, DevicePoint::new(3, 2), tile, 3, glyphs('k'));

        assert_eq!(surface.glyph(DevicePoint::new(3, 2)).unwrap().ch, 'k');
        assert_eq!(surface.terrain(DevicePoint::new(3, 2)).unwrap().ch, '.');
        // one padding cell fits to the right; the second row is clipped
        assert_eq!(surface.put_count(), 2);
        assert_eq!(surface.terrain(DevicePoint::new(4, 2)), None);
    }

    #[test]
    fn special_glyphs_pad_with_tile_padding() {
        let mut surface = MemorySurface::new(Extent::new(4, 4));
        let special = CellGlyphs {
            composite: Glyph::special(0x81, 'X'),
            terrain: Glyph::special(0x80, '.'),
        };
        let tile = TileMultiplier::new(2, 2).unwrap();
        stamp_footprint(&mut surface, DevicePoint::ORIGIN, tile, 4, special);

        assert_eq!(
            surface.glyph(DevicePoint::new(1, 1)),
            Some(Glyph::TILE_PADDING)
        );
    }

    #[test]
    fn draws_reach_mirror_and_overview() {
        let world = MapDimensions::new(40, 10);
        let mut main = MemorySurface::new(Extent::new(20, 8));
        let mut mirror = MemorySurface::new(Extent::new(20, 8));
        let mut overview = MemorySurface::new(Extent::new(42, 12));
        let mut hidden = MemorySurface::new(Extent::new(20, 8));

        let mut set = ViewportSet::new(ViewportTarget::new(
            Viewport::main(DevicePoint::new(1, 1), TileMultiplier::UNIT),
            &mut main,
        ))
        .unwrap()
        .with(ViewportTarget::new(
            Viewport::mirror(TileMultiplier::UNIT).with_scroll(Position::new(2, 2)),
            &mut mirror,
        ))
        .unwrap()
        .with(ViewportTarget::new(
            Viewport::overview(TileMultiplier::UNIT),
            &mut overview,
        ))
        .unwrap()
        .with(ViewportTarget::new(
            Viewport::mirror(TileMultiplier::UNIT).with_flags(ViewportFlags::empty()),
            &mut hidden,
        ))
        .unwrap();

        let drawn = draw_cell(&mut set, world, Position::new(5, 3), glyphs('k'));
        drop(set);

        assert_eq!(drawn, 3);
        assert_eq!(main.glyph(DevicePoint::new(6, 4)).unwrap().ch, 'k');
        assert_eq!(mirror.glyph(DevicePoint::new(3, 1)).unwrap().ch, 'k');
        assert_eq!(overview.glyph(DevicePoint::new(6, 4)).unwrap().ch, 'k');
        assert_eq!(hidden.put_count(), 0);
    }

    #[test]
    fn out_of_view_cells_are_skipped() {
        let world = MapDimensions::new(40, 10);
        let mut main = MemorySurface::new(Extent::new(10, 5));
        let mut set = ViewportSet::new(ViewportTarget::new(
            Viewport::main(DevicePoint::ORIGIN, TileMultiplier::UNIT),
            &mut main,
        ))
        .unwrap();

        assert_eq!(draw_cell(&mut set, world, Position::new(30, 2), glyphs('k')), 0);
        assert_eq!(move_cursor(&mut set, world, Position::new(30, 2)), None);
        drop(set);
        assert_eq!(main.put_count(), 0);
        assert_eq!(main.cursor(), None);
    }

    #[test]
    fn positions_outside_world_touch_no_viewport() {
        let world = MapDimensions::new(40, 10);
        let mut main = MemorySurface::new(Extent::new(20, 8));
        let mut overview = MemorySurface::new(Extent::new(42, 12));
        let main_view =
            Viewport::main(DevicePoint::ORIGIN, TileMultiplier::UNIT).with_scroll(Position::new(-5, -2));
        let mut set = ViewportSet::new(ViewportTarget::new(main_view, &mut main))
            .unwrap()
            .with(ViewportTarget::new(
                Viewport::overview(TileMultiplier::UNIT),
                &mut overview,
            ))
            .unwrap();

        // the first is on screen in the scrolled main view, the second would
        // land on the overview's right frame column
        for position in [Position::new(-3, 2), Position::new(40, 3)] {
            assert_eq!(draw_cell(&mut set, world, position, glyphs('k')), 0);
            assert_eq!(move_cursor(&mut set, world, position), None);
            assert_eq!(target_point(set.main(), world, position), None);
        }
        drop(set);

        assert_eq!(main.put_count(), 0);
        assert_eq!(overview.put_count(), 0);
        assert_eq!(overview.cursor(), None);
    }

    #[test]
    fn cursor_follows_every_map_view() {
        let world = MapDimensions::new(40, 10);
        let mut main = MemorySurface::new(Extent::new(20, 8));
        let mut overview = MemorySurface::new(Extent::new(22, 7));
        let mut set = ViewportSet::new(ViewportTarget::new(
            Viewport::main(DevicePoint::ORIGIN, TileMultiplier::UNIT),
            &mut main,
        ))
        .unwrap()
        .with(ViewportTarget::new(
            Viewport::overview(TileMultiplier::UNIT),
            &mut overview,
        ))
        .unwrap();

        let at = move_cursor(&mut set, world, Position::new(10, 4));
        drop(set);

        assert_eq!(at, Some(DevicePoint::new(10, 4)));
        assert_eq!(main.cursor(), Some(DevicePoint::new(10, 4)));
        // 20x5 minimap: x = 10 * 20 / 40, y = 4 * 5 / 10, plus the frame
        assert_eq!(overview.cursor(), Some(DevicePoint::new(6, 3)));
    }
}
