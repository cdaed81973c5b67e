//! Traits describing read-only data the renderer consumes.
//!
//! Oracles expose per-frame cell snapshots, glyph tables and seeded randomness.
//! The [`Env`] aggregate bundles the frame-independent ones so resolvers can be
//! built without coupling to concrete implementations.
mod error;
mod map;
mod rng;
mod tables;

pub use error::TableError;
pub use map::{MapDimensions, MapOracle, PlayerView};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tables::{
    FeatureInfo, GlyphOracle, GlyphTables, GlyphTablesBuilder, LightingGlyphs, ObjectKindInfo,
    RaceFlags, RaceInfo, TrapInfo,
};

/// Glyph tables and RNG borrowed for the duration of a render pass.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    glyphs: &'a dyn GlyphOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> Env<'a> {
    pub fn new(glyphs: &'a dyn GlyphOracle, rng: &'a dyn RngOracle) -> Self {
        Self { glyphs, rng }
    }

    pub fn glyphs(&self) -> &'a dyn GlyphOracle {
        self.glyphs
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}
