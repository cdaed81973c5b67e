//! Terminal presentation: styling, panel widgets, layout and terminal control.
pub mod panel;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use panel::MapPanel;
pub use terminal::{TerminalSession, Tui};
pub use ui::{PanelAreas, Panels, Screen};
