//! Coordinate mapping between world cells and device cells.
//!
//! Every placement into an overview (full composition, single-cell refresh and
//! cursor moves) goes through [`overview_bucket`] so the three agree on which
//! device cell a world cell lands in.

use game_core::{MapDimensions, Position, TileMultiplier};

use crate::surface::{DevicePoint, Extent};

/// Cells reserved around an overview for its frame.
pub const FRAME_CELLS: u16 = 2;

/// Offset of the first overview bucket from the surface origin.
pub const BORDER_OFFSET: u16 = 1;

/// Size of the scaled-down map an overview draws on a surface of `surface` cells.
///
/// Per axis the world size is rounded up to a multiple of the tile factor, the
/// usable surface (minus the frame) is rounded down to one, and the smaller of
/// the two wins. The result may be empty on tiny surfaces.
pub fn minimap_dimensions(surface: Extent, world: MapDimensions, tile: TileMultiplier) -> Extent {
    Extent::new(
        minimap_axis(surface.width, world.width, tile.width()),
        minimap_axis(surface.height, world.height, tile.height()),
    )
}

fn minimap_axis(surface: u16, world: u32, tile: u8) -> u16 {
    let tile = u32::from(tile);
    let usable = u32::from(surface.saturating_sub(FRAME_CELLS));
    let world = world.div_ceil(tile) * tile;
    let usable = usable - usable % tile;
    // usable fits in u16, so does the minimum
    usable.min(world) as u16
}

/// Device coordinate of world coordinate `cell` along one axis of an overview.
///
/// `floor(cell * map / world)`, snapped down to a tile boundary when the tile
/// factor exceeds 1, then shifted past the frame. `None` for cells outside
/// `0..world`.
pub fn logical_to_device(cell: i32, world: u32, map: u16, tile: u8) -> Option<u16> {
    let cell = u32::try_from(cell).ok().filter(|cell| *cell < world)?;
    let mut bucket = u64::from(cell) * u64::from(map) / u64::from(world);
    if tile > 1 {
        bucket -= bucket % u64::from(tile);
    }
    // cell < world, so bucket < map
    Some(bucket as u16 + BORDER_OFFSET)
}

/// Overview device cell of a world position, or `None` outside the world.
pub fn overview_bucket(
    position: Position,
    world: MapDimensions,
    map: Extent,
    tile: TileMultiplier,
) -> Option<DevicePoint> {
    Some(DevicePoint::new(
        logical_to_device(position.x, world.width, map.width, tile.width())?,
        logical_to_device(position.y, world.height, map.height, tile.height())?,
    ))
}
