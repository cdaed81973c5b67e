use crate::display::{DisplayError, TileMultiplier};

/// How map glyphs are ultimately drawn by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GraphicsMode {
    /// Character cells; lighting is applied to terrain colours at draw time.
    #[default]
    Text,
    /// Graphical tiles; glyph tables already encode lighting.
    Tiles,
}

/// Text-mode rendering of wall features.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WallStyle {
    /// Walls keep the plain black background.
    #[default]
    Plain,
    /// Walls get a darkened background behind their character.
    Hybrid,
    /// Walls are filled with their own colour.
    Solid,
}

/// Map display configuration and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    pub graphics: GraphicsMode,
    pub wall_style: WallStyle,
    /// Player health warning threshold in tenths of maximum hit points.
    pub hitpoint_warn: u8,
    /// Tile multiplier of the main map view.
    pub tile: TileMultiplier,
    /// Upper bound on random draws when picking a hallucinatory object.
    pub hallucination_attempts: u16,
    /// Seed mixed into every render-time random choice.
    pub seed: u64,
}

impl DisplayConfig {
    // ===== compile-time limits =====
    pub const MAX_HITPOINT_WARN: u8 = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HITPOINT_WARN: u8 = 3;
    pub const DEFAULT_HALLUCINATION_ATTEMPTS: u16 = 64;
    pub const DEFAULT_SEED: u64 = 0x5eed_0f_6d61_7073;

    pub fn new() -> Self {
        Self {
            graphics: GraphicsMode::Text,
            wall_style: WallStyle::Plain,
            hitpoint_warn: Self::DEFAULT_HITPOINT_WARN,
            tile: TileMultiplier::UNIT,
            hallucination_attempts: Self::DEFAULT_HALLUCINATION_ATTEMPTS,
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Checks value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::HitpointWarnOutOfRange`] if `hitpoint_warn` exceeds 9
    /// and [`DisplayError::ZeroHallucinationAttempts`] if `hallucination_attempts` is 0.
    pub fn validate(&self) -> Result<(), DisplayError> {
        if self.hitpoint_warn > Self::MAX_HITPOINT_WARN {
            return Err(DisplayError::HitpointWarnOutOfRange(self.hitpoint_warn));
        }
        if self.hallucination_attempts == 0 {
            return Err(DisplayError::ZeroHallucinationAttempts);
        }
        Ok(())
    }

    /// True when terrain colours are adjusted by the text-mode lighting transform.
    pub fn applies_text_lighting(&self) -> bool {
        self.graphics == GraphicsMode::Text
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
