//! Map rendering: glyph resolution, coordinate mapping and viewport output.
//!
//! [`MapRenderer`] is the entry point. It owns the glyph tables and display
//! configuration and, per call, borrows a [`Scene`] (the level and its monsters
//! for the current frame) plus the viewports to draw on.
mod lighting;
mod overview;
mod renderer;
mod resolver;
mod scale;
mod snapshot;
mod sync;
mod viewport;

use game_core::{FrameId, MapOracle, MonsterRoster};

pub use lighting::apply_lighting;
pub use overview::{OVERLAY_PRIORITY, compose};
pub use renderer::MapRenderer;
pub use resolver::{CellGlyphs, GlyphResolver, LISTENED_GLYPH, health_color};
pub use scale::{BORDER_OFFSET, FRAME_CELLS, logical_to_device, minimap_dimensions, overview_bucket};
pub use snapshot::{GlyphSnapshot, OUTSIDE_GLYPH};
pub use sync::{draw_cell, draw_on, move_cursor, overview_extent, stamp_footprint, target_point};
pub use viewport::{
    Viewport, ViewportError, ViewportFlags, ViewportRole, ViewportSet, ViewportTarget,
};

/// Everything a render call reads about the world for one frame.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub map: &'a dyn MapOracle,
    pub monsters: &'a MonsterRoster,
    pub frame: FrameId,
}

impl<'a> Scene<'a> {
    pub fn new(map: &'a dyn MapOracle, monsters: &'a MonsterRoster, frame: FrameId) -> Self {
        Self {
            map,
            monsters,
            frame,
        }
    }
}

impl std::fmt::Debug for Scene<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("dimensions", &self.map.dimensions())
            .field("monsters", &self.monsters.len())
            .field("frame", &self.frame)
            .finish()
    }
}
