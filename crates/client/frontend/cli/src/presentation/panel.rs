//! Blits an in-memory display surface into a ratatui buffer.
use client_frontend_core::{DevicePoint, DisplaySurface, MemorySurface};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::theme;

/// A rendered map panel, clipped to the area it is drawn into.
pub struct MapPanel<'a> {
    surface: &'a MemorySurface,
}

impl<'a> MapPanel<'a> {
    pub fn new(surface: &'a MemorySurface) -> Self {
        Self { surface }
    }

    /// Terminal cell of the surface cursor inside `area`.
    pub fn cursor_in(&self, area: Rect) -> Option<(u16, u16)> {
        let cursor = self.surface.cursor()?;
        (cursor.x < area.width && cursor.y < area.height)
            .then(|| (area.x + cursor.x, area.y + cursor.y))
    }
}

impl Widget for MapPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.surface.size();
        let width = size.width.min(area.width);
        let height = size.height.min(area.height);
        for y in 0..height {
            for x in 0..width {
                let Some(glyph) = self.surface.glyph(DevicePoint::new(x, y)) else {
                    continue;
                };
                let (ch, style) = theme::glyph_style(glyph);
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}
