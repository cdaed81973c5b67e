//! Cross-frontend map rendering.
//!
//! Resolves level cells into glyphs and draws them onto character-cell display
//! surfaces: a main view, mirror panels and scaled-down overviews. Terminal and
//! future graphical clients implement [`DisplaySurface`] and drive a
//! [`MapRenderer`].
pub mod config;
pub mod render;
pub mod surface;

pub use config::FrontendConfig;
pub use render::{
    CellGlyphs, GlyphResolver, GlyphSnapshot, MapRenderer, Scene, Viewport, ViewportError,
    ViewportFlags, ViewportRole, ViewportSet, ViewportTarget,
};
pub use surface::{DevicePoint, DisplaySurface, Extent, MemorySurface};
