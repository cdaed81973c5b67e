use game_core::{
    DisplayConfig, DisplayError, Env, FrameId, Glyph, GlyphOracle, GlyphTables, MapOracle,
    MonsterRoster, PcgRng, Position, TileMultiplier,
};

use super::Scene;
use super::overview;
use super::resolver::{CellGlyphs, GlyphResolver};
use super::snapshot::GlyphSnapshot;
use super::sync::{self, stamp_footprint};
use super::viewport::{Viewport, ViewportRole, ViewportSet, ViewportTarget};
use crate::surface::{DevicePoint, DisplaySurface};

const BLANK_CELL: CellGlyphs = CellGlyphs {
    composite: Glyph::BLANK,
    terrain: Glyph::BLANK,
};

/// Draws a level onto a main view and its secondary panels.
///
/// Holds the glyph tables, the render RNG and the display configuration, and
/// counts frames. Call [`begin_frame`](Self::begin_frame) once per game turn
/// before drawing so animated monsters get their colour for the turn.
#[derive(Debug)]
pub struct MapRenderer<G = GlyphTables> {
    glyphs: G,
    rng: PcgRng,
    config: DisplayConfig,
    frame: FrameId,
}

impl<G: GlyphOracle> MapRenderer<G> {
    /// # Errors
    ///
    /// Returns the [`DisplayError`] of an out-of-range configuration value.
    pub fn new(glyphs: G, config: DisplayConfig) -> Result<Self, DisplayError> {
        config.validate()?;
        Ok(Self {
            glyphs,
            rng: PcgRng,
            config,
            frame: FrameId::ZERO,
        })
    }

    pub fn glyphs(&self) -> &G {
        &self.glyphs
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn resolver(&self) -> GlyphResolver<'_> {
        GlyphResolver::new(Env::new(&self.glyphs, &self.rng), &self.config)
    }

    /// Scene of the current frame.
    pub fn scene<'a>(&self, map: &'a dyn MapOracle, monsters: &'a MonsterRoster) -> Scene<'a> {
        Scene::new(map, monsters, self.frame)
    }

    /// Advances to the next frame and commits animated monster colours for it.
    pub fn begin_frame(&mut self, map: &dyn MapOracle, monsters: &mut MonsterRoster) -> FrameId {
        self.frame = self.frame.next();
        let frame = self.frame;
        self.resolver().commit_frame(map, monsters, frame);
        frame
    }

    /// Resolves one cell and draws it on every map-showing viewport.
    ///
    /// Returns `None` for positions outside the level.
    pub fn render_cell(
        &self,
        scene: &Scene<'_>,
        viewports: &mut ViewportSet<'_>,
        position: Position,
    ) -> Option<CellGlyphs> {
        let Some(cell) = scene.map.cell(position) else {
            tracing::trace!(%position, "render request outside the level");
            return None;
        };
        let glyphs = self.resolver().resolve(scene, &cell);
        sync::draw_cell(viewports, scene.map.dimensions(), position, glyphs);
        Some(glyphs)
    }

    /// Redraws every cell visible in a 1:1 view. Cells outside the level are left alone.
    pub fn redraw_main_view(&self, scene: &Scene<'_>, target: &mut ViewportTarget<'_>) -> usize {
        let resolver = self.resolver();
        let viewport = target.viewport;
        let size = target.surface.size();
        let visible = viewport.visible_cells(size);
        let clip_rows = viewport.clip_rows(size);

        let mut drawn = 0;
        for dy in 0..visible.height {
            for dx in 0..visible.width {
                let position = viewport.scroll.offset(i32::from(dx), i32::from(dy));
                let Some(cell) = scene.map.cell(position) else {
                    continue;
                };
                let at = cell_origin(&viewport, dx, dy);
                let glyphs = resolver.resolve(scene, &cell);
                stamp_footprint(target.surface, at, viewport.tile, clip_rows, glyphs);
                drawn += 1;
            }
        }

        tracing::debug!(role = ?viewport.role, scroll = %viewport.scroll, drawn, "redrew map view");
        drawn
    }

    /// Redraws a mirror panel, blanking cells outside the level and the
    /// partial tiles along its right and bottom edges.
    pub fn redraw_mirror(&self, scene: &Scene<'_>, target: &mut ViewportTarget<'_>) {
        let resolver = self.resolver();
        let viewport = target.viewport;
        let size = target.surface.size();
        let visible = viewport.visible_cells(size);
        let clip_rows = viewport.clip_rows(size);
        let tile = viewport.tile;

        for dy in 0..visible.height {
            for dx in 0..visible.width {
                let position = viewport.scroll.offset(i32::from(dx), i32::from(dy));
                let glyphs = scene
                    .map
                    .cell(position)
                    .map_or(BLANK_CELL, |cell| resolver.resolve(scene, &cell));
                let at = cell_origin(&viewport, dx, dy);
                stamp_footprint(target.surface, at, tile, clip_rows, glyphs);
            }
        }

        let used_right = viewport.origin.x + visible.width * u16::from(tile.width());
        let used_bottom = viewport.origin.y + visible.height * u16::from(tile.height());
        let partial = size.width.saturating_sub(used_right);
        if partial > 0 {
            for y in viewport.origin.y..used_bottom {
                target.surface.erase(DevicePoint::new(used_right, y), partial);
            }
        }
        for y in used_bottom..clip_rows {
            target
                .surface
                .erase(DevicePoint::new(viewport.origin.x, y), size.width);
        }
    }

    /// Composes the whole level onto an overview target.
    ///
    /// Returns the player's device cell, or `None` when the surface is too small.
    pub fn redraw_overview(
        &self,
        scene: &Scene<'_>,
        target: &mut ViewportTarget<'_>,
    ) -> Option<DevicePoint> {
        overview::compose(&self.resolver(), scene, target)
    }

    /// Full redraw: secondary panels first, then the main view, then the
    /// cursor onto the player.
    pub fn redraw(&self, scene: &Scene<'_>, viewports: &mut ViewportSet<'_>) -> Option<DevicePoint> {
        for target in viewports.secondaries() {
            if !target.viewport.shows_map() {
                continue;
            }
            match target.viewport.role {
                ViewportRole::MirrorPanel => self.redraw_mirror(scene, target),
                ViewportRole::OverviewPanel => {
                    self.redraw_overview(scene, target);
                }
                ViewportRole::MainView => {}
            }
        }
        self.redraw_main_view(scene, viewports.main());
        self.move_cursor_to(scene, viewports, scene.map.player().position)
    }

    /// Places every map-showing cursor on `position`.
    ///
    /// Returns the main view's device cell when the position is visible there.
    pub fn move_cursor_to(
        &self,
        scene: &Scene<'_>,
        viewports: &mut ViewportSet<'_>,
        position: Position,
    ) -> Option<DevicePoint> {
        if !scene.map.contains(position) {
            tracing::trace!(%position, "cursor request outside the level");
            return None;
        }
        sync::move_cursor(viewports, scene.map.dimensions(), position)
    }

    /// Captures the glyphs around `center`.
    pub fn record_snapshot(
        &self,
        scene: &Scene<'_>,
        center: Position,
        radius: u8,
    ) -> GlyphSnapshot {
        GlyphSnapshot::capture(&self.resolver(), scene, center, radius)
    }

    /// Clears `surface` and shows the whole level on it at one cell per bucket.
    ///
    /// The cursor ends on the player, whose device cell is returned.
    pub fn show_full_map(
        &self,
        scene: &Scene<'_>,
        surface: &mut dyn DisplaySurface,
    ) -> Option<DevicePoint> {
        let size = surface.size();
        for y in 0..size.height {
            surface.erase(DevicePoint::new(0, y), size.width);
        }

        let mut target = ViewportTarget::new(Viewport::overview(TileMultiplier::UNIT), surface);
        let player = overview::compose(&self.resolver(), scene, &mut target)?;
        target.surface.move_cursor(player);
        Some(player)
    }
}

fn cell_origin(viewport: &Viewport, dx: u16, dy: u16) -> DevicePoint {
    DevicePoint::new(
        viewport.origin.x + dx * u16::from(viewport.tile.width()),
        viewport.origin.y + dy * u16::from(viewport.tile.height()),
    )
}
