//! Fixed-radius glyph captures around a point, for dumps and result files.
use std::fmt::Write as _;

use game_core::{Attr, Color, Glyph, Position};

use super::Scene;
use super::resolver::GlyphResolver;
use crate::surface::{DevicePoint, DisplaySurface};

/// Drawn for cells outside the level.
pub const OUTSIDE_GLYPH: Glyph = Glyph::text(Color::Dark, ' ');

const WILDERNESS_SIDE: usize = 7;
const GRASS: Glyph = Glyph::text(Color::LightGreen, '.');
const TREE: Glyph = Glyph::text(Color::Green, '+');
const WANDERER: Glyph = Glyph::text(Color::White, '@');

/// River course through the wilderness scene as `(row, col, colour)`.
const RIVER: [(usize, usize, Color); 9] = [
    (0, 1, Color::Blue),
    (0, 2, Color::Blue),
    (1, 2, Color::LightBlue),
    (1, 3, Color::Blue),
    (1, 4, Color::LightBlue),
    (2, 4, Color::Blue),
    (2, 5, Color::Blue),
    (3, 5, Color::LightBlue),
    (3, 6, Color::Blue),
];

/// A square block of composite glyphs stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSnapshot {
    side: usize,
    cells: Vec<Glyph>,
}

impl GlyphSnapshot {
    /// Captures the `2 * radius + 1` square centred on `center`.
    ///
    /// A player who has escaped the level is shown in the wilderness instead.
    pub fn capture(
        resolver: &GlyphResolver<'_>,
        scene: &Scene<'_>,
        center: Position,
        radius: u8,
    ) -> Self {
        if scene.map.player().escaped {
            return Self::wilderness();
        }

        let r = i32::from(radius);
        let side = usize::from(radius) * 2 + 1;
        let mut cells = Vec::with_capacity(side * side);
        for dy in -r..=r {
            for dx in -r..=r {
                let glyph = scene
                    .map
                    .cell(center.offset(dx, dy))
                    .map_or(OUTSIDE_GLYPH, |cell| resolver.resolve(scene, &cell).composite);
                cells.push(glyph);
            }
        }
        Self { side, cells }
    }

    /// The 7x7 meadow with a river, two trees and the player in the middle.
    pub fn wilderness() -> Self {
        let side = WILDERNESS_SIDE;
        let mut cells = vec![GRASS; side * side];
        for (row, col, color) in RIVER {
            cells[row * side + col] = Glyph::text(color, '~');
        }
        cells[4 * side + 1] = TREE;
        cells[6 * side + 4] = TREE;
        cells[3 * side + 3] = WANDERER;
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn glyph(&self, row: usize, col: usize) -> Option<Glyph> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(self.cells[row * self.side + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.cells.chunks(self.side.max(1))
    }

    pub fn char_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|glyph| glyph.ch).collect())
            .collect()
    }

    pub fn attr_rows(&self) -> Vec<Vec<Attr>> {
        self.rows()
            .map(|row| row.iter().map(|glyph| glyph.attr).collect())
            .collect()
    }

    /// Text block with every row indented by two spaces and newline terminated.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.side * (self.side + 3));
        for row in self.char_rows() {
            let _ = writeln!(out, "  {row}");
        }
        out
    }

    /// Draws the snapshot with its top-left corner at `origin`.
    pub fn draw(&self, surface: &mut dyn DisplaySurface, origin: DevicePoint) {
        for (row, glyphs) in self.rows().enumerate() {
            for (col, glyph) in glyphs.iter().enumerate() {
                let (Ok(dx), Ok(dy)) = (u16::try_from(col), u16::try_from(row)) else {
                    return;
                };
                let at = DevicePoint::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy));
                surface.put(at, *glyph, None);
            }
        }
    }
}
