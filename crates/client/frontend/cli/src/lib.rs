//! Terminal map viewer.
//!
//! Loads a level from content data and shows it through the frontend-core
//! renderer: a main view centred on the player, a wide-tile mirror panel and
//! a scaled overview, with a full-screen map on demand.
//!
//! Renderer output lands on in-memory surfaces, one per panel, which are then
//! blitted into the ratatui buffer each frame.

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::ViewerApp;
pub use config::CliConfig;
pub use input::KeyAction;
