//! Character-cell display surfaces.
//!
//! A surface is a grid of device cells addressed by [`DevicePoint`]. Frontends
//! implement [`DisplaySurface`] over their backend buffer; [`MemorySurface`] keeps
//! everything in memory for headless rendering and tests.
use std::fmt;

use game_core::Glyph;

/// Cell coordinate on a display surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DevicePoint {
    pub x: u16,
    pub y: u16,
}

impl DevicePoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for DevicePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Width and height in device cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u16,
    pub height: u16,
}

impl Extent {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True when there is not a single drawable cell.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn contains(self, at: DevicePoint) -> bool {
        at.x < self.width && at.y < self.height
    }
}

/// Output primitives of a character-cell backend.
///
/// Writes outside [`size`](Self::size) must be ignored by implementations.
pub trait DisplaySurface {
    fn size(&self) -> Extent;

    /// Writes `glyph` at `at`. `terrain` is the bare terrain under it, for
    /// backends that composite transparent tiles.
    fn put(&mut self, at: DevicePoint, glyph: Glyph, terrain: Option<Glyph>);

    fn move_cursor(&mut self, at: DevicePoint);

    /// Blanks `len` cells starting at `at`, clipped to the row.
    fn erase(&mut self, at: DevicePoint, len: u16);
}

/// Headless surface that records what was drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemorySurface {
    size: Extent,
    glyphs: Vec<Glyph>,
    terrain: Vec<Option<Glyph>>,
    cursor: Option<DevicePoint>,
    puts: usize,
}

impl MemorySurface {
    pub fn new(size: Extent) -> Self {
        let len = usize::from(size.width) * usize::from(size.height);
        Self {
            size,
            glyphs: vec![Glyph::BLANK; len],
            terrain: vec![None; len],
            cursor: None,
            puts: 0,
        }
    }

    fn index(&self, at: DevicePoint) -> Option<usize> {
        self.size
            .contains(at)
            .then(|| usize::from(at.y) * usize::from(self.size.width) + usize::from(at.x))
    }

    pub fn glyph(&self, at: DevicePoint) -> Option<Glyph> {
        self.index(at).map(|i| self.glyphs[i])
    }

    pub fn terrain(&self, at: DevicePoint) -> Option<Glyph> {
        self.index(at).and_then(|i| self.terrain[i])
    }

    pub fn cursor(&self) -> Option<DevicePoint> {
        self.cursor
    }

    /// Number of accepted `put` calls since creation.
    pub fn put_count(&self) -> usize {
        self.puts
    }

    /// Characters of row `y`, or an empty string outside the surface.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.size.height {
            return String::new();
        }
        (0..self.size.width)
            .filter_map(|x| self.glyph(DevicePoint::new(x, y)))
            .map(|glyph| glyph.ch)
            .collect()
    }

    /// Every point whose glyph satisfies `predicate`, in row-major order.
    pub fn find(&self, mut predicate: impl FnMut(Glyph) -> bool) -> Vec<DevicePoint> {
        let width = usize::from(self.size.width.max(1));
        self.glyphs
            .iter()
            .enumerate()
            .filter(|(_, glyph)| predicate(**glyph))
            .map(|(i, _)| DevicePoint::new((i % width) as u16, (i / width) as u16))
            .collect()
    }
}

impl DisplaySurface for MemorySurface {
    fn size(&self) -> Extent {
        self.size
    }

    fn put(&mut self, at: DevicePoint, glyph: Glyph, terrain: Option<Glyph>) {
        if let Some(i) = self.index(at) {
            self.glyphs[i] = glyph;
            self.terrain[i] = terrain;
            self.puts += 1;
        }
    }

    fn move_cursor(&mut self, at: DevicePoint) {
        if self.size.contains(at) {
            self.cursor = Some(at);
        }
    }

    fn erase(&mut self, at: DevicePoint, len: u16) {
        if at.y >= self.size.height {
            return;
        }
        let end = at.x.saturating_add(len).min(self.size.width);
        for x in at.x..end {
            if let Some(i) = self.index(DevicePoint::new(x, at.y)) {
                self.glyphs[i] = Glyph::BLANK;
                self.terrain[i] = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::Color;

    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut surface = MemorySurface::new(Extent::new(3, 2));
        surface.put(DevicePoint::new(3, 0), Glyph::text(Color::Red, 'x'), None);
        surface.put(DevicePoint::new(0, 2), Glyph::text(Color::Red, 'x'), None);

        assert_eq!(surface.put_count(), 0);
        assert_eq!(surface.row_text(0), "   ");
    }

    #[test]
    fn erase_clips_to_row() {
        let mut surface = MemorySurface::new(Extent::new(4, 1));
        for x in 0..4 {
            surface.put(DevicePoint::new(x, 0), Glyph::text(Color::White, '#'), None);
        }
        surface.erase(DevicePoint::new(2, 0), 10);
        assert_eq!(surface.row_text(0), "##  ");
    }

    #[test]
    fn find_reports_row_major_points() {
        let mut surface = MemorySurface::new(Extent::new(3, 3));
        let at = Glyph::text(Color::White, '@');
        surface.put(DevicePoint::new(2, 1), at, None);

        assert_eq!(surface.find(|g| g == at), vec![DevicePoint::new(2, 1)]);
    }
}
