//! Scaled-down composition of the whole level onto one surface.
//!
//! Several world cells can land in the same device bucket. Each bucket keeps
//! the highest priority sampled so far in a [`PriorityGrid`] that lives for a
//! single composition: overlays (traps, objects, monsters) beat every terrain
//! feature, and terrain features compete by their configured priority. The
//! player is drawn last so it is never hidden.
use game_core::{Color, Glyph};

use super::Scene;
use super::resolver::{CellGlyphs, GlyphResolver};
use super::scale::{BORDER_OFFSET, overview_bucket};
use super::sync::{overview_extent, stamp_footprint};
use super::viewport::ViewportTarget;
use crate::surface::{DevicePoint, DisplaySurface, Extent};

/// Priority of any bucket showing something above bare terrain.
pub const OVERLAY_PRIORITY: u8 = 20;

const FRAME_COLOR: Color = Color::White;

/// Per-bucket priorities of one overview composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriorityGrid {
    size: Extent,
    cells: Vec<u8>,
}

impl PriorityGrid {
    /// Zeroed grid with one entry per bucket of a `size` minimap.
    pub fn new(size: Extent) -> Self {
        Self {
            size,
            cells: vec![0; usize::from(size.width) * usize::from(size.height)],
        }
    }

    pub fn size(&self) -> Extent {
        self.size
    }

    fn index(&self, bucket: DevicePoint) -> Option<usize> {
        let x = bucket.x.checked_sub(BORDER_OFFSET)?;
        let y = bucket.y.checked_sub(BORDER_OFFSET)?;
        let local = DevicePoint::new(x, y);
        self.size
            .contains(local)
            .then(|| usize::from(y) * usize::from(self.size.width) + usize::from(x))
    }

    /// Stored priority of the bucket at device cell `bucket`.
    pub fn get(&self, bucket: DevicePoint) -> Option<u8> {
        self.index(bucket).map(|i| self.cells[i])
    }

    /// Stores `priority` if it beats the bucket's current value.
    pub fn raise(&mut self, bucket: DevicePoint, priority: u8) -> bool {
        match self.index(bucket) {
            Some(i) if priority > self.cells[i] => {
                self.cells[i] = priority;
                true
            }
            _ => false,
        }
    }
}

/// Composes the level onto an overview target.
///
/// Returns the player's device cell, or `None` when the surface cannot hold a
/// single bucket (nothing is drawn then).
pub fn compose(
    resolver: &GlyphResolver<'_>,
    scene: &Scene<'_>,
    target: &mut ViewportTarget<'_>,
) -> Option<DevicePoint> {
    let world = scene.map.dimensions();
    let size = target.surface.size();
    let Some(map) = overview_extent(&target.viewport, size, world) else {
        tracing::warn!(
            width = size.width,
            height = size.height,
            "overview surface too small for a minimap"
        );
        return None;
    };

    let mut priorities = PriorityGrid::new(map);
    compose_into(resolver, scene, target, map, &mut priorities)
}

/// Body of [`compose`]. `priorities` must be freshly zeroed and sized to `map`.
fn compose_into(
    resolver: &GlyphResolver<'_>,
    scene: &Scene<'_>,
    target: &mut ViewportTarget<'_>,
    map: Extent,
    priorities: &mut PriorityGrid,
) -> Option<DevicePoint> {
    debug_assert_eq!(priorities.size(), map);
    let world = scene.map.dimensions();
    let glyphs = resolver.env().glyphs();
    let tile = target.viewport.tile;
    let clip_rows = target.viewport.clip_rows(target.surface.size());

    draw_frame(target.surface, map, clip_rows);

    let mut stamped = 0usize;
    for position in world.positions() {
        let Some(cell) = scene.map.cell(position) else {
            continue;
        };
        let resolved = resolver.resolve(scene, &cell);
        let priority = if resolved.has_overlay() {
            OVERLAY_PRIORITY
        } else {
            glyphs.feature(cell.feature).priority
        };

        let Some(bucket) = overview_bucket(position, world, map, tile) else {
            continue;
        };
        if priorities.raise(bucket, priority) {
            let lit = resolver.resolve(scene, &cell.fully_lit());
            stamp_footprint(target.surface, bucket, tile, clip_rows, lit);
            stamped += 1;
        }
    }

    let player = scene.map.player();
    let Some(bucket) = overview_bucket(player.position, world, map, tile) else {
        tracing::warn!(position = %player.position, "player outside the level");
        return None;
    };
    let terrain = scene
        .map
        .cell(player.position)
        .map_or(Glyph::BLANK, |cell| {
            resolver.resolve(scene, &cell.fully_lit()).terrain
        });
    let player_glyphs = CellGlyphs {
        composite: glyphs.player_race().glyph.glyph(),
        terrain,
    };
    stamp_footprint(target.surface, bucket, tile, clip_rows, player_glyphs);

    tracing::debug!(
        width = map.width,
        height = map.height,
        stamped,
        player = %bucket,
        "composed overview"
    );
    Some(bucket)
}

/// Boxes the minimap and blanks everything outside the box.
fn draw_frame(surface: &mut dyn DisplaySurface, map: Extent, clip_rows: u16) {
    let size = surface.size();
    let right = map.width + 1;
    let bottom = map.height + 1;
    let rows = clip_rows.min(size.height);

    let corner = Glyph::text(FRAME_COLOR, '+');
    let horizontal = Glyph::text(FRAME_COLOR, '-');
    let vertical = Glyph::text(FRAME_COLOR, '|');

    for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
        surface.put(DevicePoint::new(x, y), corner, None);
    }
    for x in 1..right {
        surface.put(DevicePoint::new(x, 0), horizontal, None);
        surface.put(DevicePoint::new(x, bottom), horizontal, None);
    }
    for y in 1..bottom {
        surface.put(DevicePoint::new(0, y), vertical, None);
        surface.put(DevicePoint::new(right, y), vertical, None);
    }

    let outside = right + 1;
    for y in 0..rows {
        if y <= bottom {
            surface.erase(
                DevicePoint::new(outside, y),
                size.width.saturating_sub(outside),
            );
        } else {
            surface.erase(DevicePoint::new(0, y), size.width);
        }
    }
}
