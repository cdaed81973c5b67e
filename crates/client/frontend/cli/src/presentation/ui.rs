//! Screen layout and per-frame drawing.
use client_frontend_core::{Extent, MemorySurface};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use super::panel::MapPanel;

/// Where each panel goes on the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelAreas {
    /// Everything above the status line; used by the full-screen map.
    pub body: Rect,
    pub main: Rect,
    pub overview: Rect,
    pub mirror_frame: Rect,
    /// Inside of the mirror panel border.
    pub mirror: Rect,
    pub status: Rect,
}

impl PanelAreas {
    pub fn new(area: Rect) -> Self {
        let [body, status] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        let [main, side] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(body);
        let [overview, mirror_frame] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(side);
        let mirror = Block::bordered().inner(mirror_frame);
        Self {
            body,
            main,
            overview,
            mirror_frame,
            mirror,
            status,
        }
    }
}

fn extent(area: Rect) -> Extent {
    Extent::new(area.width, area.height)
}

/// Off-screen surfaces the renderer draws into, sized to the current layout.
#[derive(Clone, Debug)]
pub struct Panels {
    pub areas: PanelAreas,
    pub main: MemorySurface,
    pub overview: MemorySurface,
    pub mirror: MemorySurface,
    pub full: MemorySurface,
}

impl Panels {
    pub fn new(areas: PanelAreas) -> Self {
        Self {
            areas,
            main: MemorySurface::new(extent(areas.main)),
            overview: MemorySurface::new(extent(areas.overview)),
            mirror: MemorySurface::new(extent(areas.mirror)),
            full: MemorySurface::new(extent(areas.body)),
        }
    }
}

/// What to show this frame.
pub struct Screen<'a> {
    pub panels: &'a Panels,
    pub status: &'a str,
    pub full_map: bool,
}

pub fn render(frame: &mut Frame, screen: &Screen<'_>) {
    let panels = screen.panels;
    let areas = panels.areas;

    let cursor = if screen.full_map {
        let full = MapPanel::new(&panels.full);
        let cursor = full.cursor_in(areas.body);
        frame.render_widget(full, areas.body);
        cursor
    } else {
        frame.render_widget(MapPanel::new(&panels.overview), areas.overview);
        frame.render_widget(Block::bordered().title(" Mirror "), areas.mirror_frame);
        frame.render_widget(MapPanel::new(&panels.mirror), areas.mirror);

        let main = MapPanel::new(&panels.main);
        let cursor = main.cursor_in(areas.main);
        frame.render_widget(main, areas.main);
        cursor
    };

    let status = Paragraph::new(screen.status).style(Style::default().fg(Color::Gray));
    frame.render_widget(status, areas.status);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

#[cfg(test)]
mod tests {
    use client_frontend_core::DisplaySurface;

    use super::*;

    #[test]
    fn layout_keeps_status_line_and_side_column() {
        let areas = PanelAreas::new(Rect::new(0, 0, 100, 30));

        assert_eq!(areas.status, Rect::new(0, 29, 100, 1));
        assert_eq!(areas.body.height, 29);
        assert_eq!(areas.main.width + areas.overview.width, 100);
        assert_eq!(areas.overview.width, areas.mirror_frame.width);
        assert_eq!(areas.mirror.width, areas.mirror_frame.width - 2);
    }

    #[test]
    fn panels_match_layout() {
        let areas = PanelAreas::new(Rect::new(0, 0, 80, 24));
        let panels = Panels::new(areas);

        assert_eq!(panels.main.size(), extent(areas.main));
        assert_eq!(panels.full.size(), extent(areas.body));
    }
}
