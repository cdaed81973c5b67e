//! Display vocabulary: colours, attributes, glyphs and tile scaling.
//!
//! These types are produced by glyph tables and consumed by renderers. They carry
//! no knowledge of any particular terminal or graphics backend.
mod color;
mod glyph;
mod tile;

pub use color::Color;
pub use glyph::{Attr, Background, Glyph, RaceGlyph, TextAttr};
pub use tile::TileMultiplier;

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while constructing display values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayError {
    #[error("tile multiplier {width}x{height} must be at least 1x1")]
    ZeroTileMultiplier { width: u8, height: u8 },

    #[error("hit point warning threshold {0} is outside 0..=9")]
    HitpointWarnOutOfRange(u8),

    #[error("hallucination attempts must be at least 1")]
    ZeroHallucinationAttempts,
}

impl GameError for DisplayError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTileMultiplier { .. } => "DISPLAY_ZERO_TILE_MULTIPLIER",
            Self::HitpointWarnOutOfRange(_) => "DISPLAY_HITPOINT_WARN_OUT_OF_RANGE",
            Self::ZeroHallucinationAttempts => "DISPLAY_ZERO_HALLUCINATION_ATTEMPTS",
        }
    }
}
