//! Viewer state and the terminal run loop.
use anyhow::{Context, Result};
use client_frontend_core::{
    DevicePoint, Extent, FrontendConfig, MapRenderer, Viewport, ViewportSet, ViewportTarget,
};
use crossterm::event::{self, Event};
use game_content::ContentFactory;
use game_core::{LevelState, MapOracle, MonsterRoster, TileMultiplier};
use ratatui::layout::Rect;

use crate::config::CliConfig;
use crate::input::{self, KeyAction};
use crate::presentation::{PanelAreas, Panels, Screen, Tui, ui};

/// A loaded level together with everything needed to draw it.
pub struct ViewerApp {
    renderer: MapRenderer,
    level: LevelState,
    monsters: MonsterRoster,
    snapshot_radius: u8,
    mirror_tile: TileMultiplier,
    panels: Option<Panels>,
    full_map: bool,
    status: String,
}

impl ViewerApp {
    /// Loads glyph tables, display settings and the configured level.
    ///
    /// Display settings come from the content directory, with environment
    /// overrides applied on top.
    pub fn load(config: &CliConfig) -> Result<Self> {
        let factory = match &config.content_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        tracing::info!(
            data_dir = %factory.data_dir().display(),
            level = %config.level,
            "loading content"
        );

        let display = factory.load_config()?;
        let frontend =
            FrontendConfig::new(display, FrontendConfig::DEFAULT_SNAPSHOT_RADIUS).overlay_env();
        let glyphs = factory.load_glyphs()?;
        let content = factory
            .load_level(&config.level, &glyphs)
            .with_context(|| format!("Failed to load level '{}'", config.level))?;

        let renderer = MapRenderer::new(glyphs, frontend.display)
            .context("Invalid display configuration")?;
        let mirror_tile = TileMultiplier::new(config.mirror_tile_width, 1)
            .context("Invalid mirror tile width")?;

        let mut app = Self {
            renderer,
            level: content.level,
            monsters: content.monsters,
            snapshot_radius: frontend.snapshot_radius,
            mirror_tile,
            panels: None,
            full_map: false,
            status: String::new(),
        };
        app.advance();
        Ok(app)
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    pub fn panels(&self) -> Option<&Panels> {
        self.panels.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Applies one command. Returns `false` when the viewer should exit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return false,
            KeyAction::Move { dx, dy } => {
                let target = self.level.player().position.offset(dx, dy);
                if !self.level.move_player(target) {
                    tracing::debug!(%target, "player move blocked by level edge");
                }
                self.advance();
            }
            KeyAction::Wait => self.advance(),
            KeyAction::ToggleFullMap => self.full_map = !self.full_map,
            KeyAction::ToggleHallucination => {
                let hallucinating = !self.level.is_hallucinating();
                self.level.set_hallucinating(hallucinating);
                tracing::info!(hallucinating, "toggled hallucination");
                self.advance();
            }
            KeyAction::Snapshot => self.snapshot(),
            KeyAction::None => {}
        }
        true
    }

    fn advance(&mut self) {
        let frame = self.renderer.begin_frame(&self.level, &mut self.monsters);
        let player = self.level.player();
        self.status = format!(
            "frame {} | {} | hp {}/{} | arrows move, m map, h hallucinate, s snapshot, q quit",
            frame.0,
            player.position,
            player.health.current,
            player.health.maximum,
        );
    }

    fn snapshot(&mut self) {
        let scene = self.renderer.scene(&self.level, &self.monsters);
        let center = self.level.player().position;
        let snapshot = self
            .renderer
            .record_snapshot(&scene, center, self.snapshot_radius);
        tracing::info!(%center, side = snapshot.side(), "glyph snapshot\n{}", snapshot.to_text());
        self.status = format!("snapshot of {} cells around {center} logged", snapshot.side());
    }

    /// Redraws every panel for a terminal of `area`.
    ///
    /// Surfaces start blank each time: a main-view redraw leaves cells
    /// outside the level untouched, and scrolling would otherwise keep them.
    pub fn render(&mut self, area: Rect) -> Result<()> {
        let areas = PanelAreas::new(area);
        let panels = self.panels.insert(Panels::new(areas));

        let scene = self.renderer.scene(&self.level, &self.monsters);
        let player = self.level.player().position;

        if self.full_map {
            self.renderer.show_full_map(&scene, &mut panels.full);
            return Ok(());
        }

        let mut main = Viewport::main(DevicePoint::ORIGIN, self.renderer.config().tile);
        main.center_on(player, extent(areas.main));
        let mut mirror = Viewport::mirror(self.mirror_tile);
        mirror.center_on(player, extent(areas.mirror));
        let overview = Viewport::overview(TileMultiplier::UNIT);

        let mut viewports = ViewportSet::new(ViewportTarget::new(main, &mut panels.main))?
            .with(ViewportTarget::new(mirror, &mut panels.mirror))?
            .with(ViewportTarget::new(overview, &mut panels.overview))?;

        if self.renderer.redraw(&scene, &mut viewports).is_none() {
            tracing::debug!(%player, "player not visible in main view");
        }
        Ok(())
    }

    /// Runs until the user quits.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            let size = terminal.size()?;
            self.render(Rect::new(0, 0, size.width, size.height))?;
            if let Some(panels) = &self.panels {
                let screen = Screen {
                    panels,
                    status: &self.status,
                    full_map: self.full_map,
                };
                terminal.draw(|frame| ui::render(frame, &screen))?;
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if !self.apply(input::handle_key(key)) {
                tracing::info!("viewer exiting");
                return Ok(());
            }
        }
    }
}

fn extent(area: Rect) -> Extent {
    Extent::new(area.width, area.height)
}

#[cfg(test)]
mod tests {
    use client_frontend_core::DisplaySurface;
    use game_core::Glyph;

    use super::*;

    fn viewer() -> ViewerApp {
        ViewerApp::load(&CliConfig::default()).expect("bundled cavern loads")
    }

    fn is_player(glyph: Glyph) -> bool {
        glyph.ch == '@'
    }

    #[test]
    fn panels_show_player_under_cursor() {
        let mut app = viewer();
        app.render(Rect::new(0, 0, 100, 30)).unwrap();
        let panels = app.panels().unwrap();

        let cursor = panels.main.cursor().expect("main cursor");
        assert!(is_player(panels.main.glyph(cursor).unwrap()));
        let cursor = panels.overview.cursor().expect("overview cursor");
        assert!(is_player(panels.overview.glyph(cursor).unwrap()));
        assert_eq!(panels.full.put_count(), 0);
    }

    #[test]
    fn moves_stop_at_level_edge() {
        let mut app = viewer();
        let start = app.level().player().position;

        assert!(app.apply(KeyAction::Move { dx: 1, dy: 0 }));
        assert_eq!(app.level().player().position, start.offset(1, 0));

        for _ in 0..100 {
            app.apply(KeyAction::Move { dx: -1, dy: 0 });
        }
        assert_eq!(app.level().player().position.x, 0);
        assert!(app.status().contains("(0,"));
    }

    #[test]
    fn full_map_draws_only_full_surface() {
        let mut app = viewer();
        app.apply(KeyAction::ToggleFullMap);
        app.render(Rect::new(0, 0, 80, 24)).unwrap();
        let panels = app.panels().unwrap();

        assert_eq!(panels.main.put_count(), 0);
        let cursor = panels.full.cursor().expect("full map cursor");
        assert!(is_player(panels.full.glyph(cursor).unwrap()));
    }

    #[test]
    fn panels_follow_terminal_size() {
        let mut app = viewer();
        app.render(Rect::new(0, 0, 100, 30)).unwrap();
        app.render(Rect::new(0, 0, 60, 20)).unwrap();

        let panels = app.panels().unwrap();
        assert_eq!(panels.full.size(), Extent::new(60, 19));
    }

    #[test]
    fn hallucination_changes_nothing_under_player() {
        let mut app = viewer();
        app.apply(KeyAction::ToggleHallucination);
        assert!(app.level().is_hallucinating());
        app.render(Rect::new(0, 0, 100, 30)).unwrap();

        let panels = app.panels().unwrap();
        let cursor = panels.main.cursor().unwrap();
        assert!(is_player(panels.main.glyph(cursor).unwrap()));
        assert!(!app.apply(KeyAction::Quit));
    }

    #[test]
    fn snapshot_reports_in_status() {
        let mut app = viewer();
        app.apply(KeyAction::Snapshot);
        assert!(app.status().starts_with("snapshot of 7 cells"));
    }
}
