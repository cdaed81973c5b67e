//! Integer tile scaling ("big tiles").

use super::DisplayError;

/// How many device cells represent one logical map cell, per axis.
///
/// Both factors are at least 1; a multiplier of 1×1 means no scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct TileMultiplier {
    width: u8,
    height: u8,
}

impl TileMultiplier {
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    /// # Errors
    ///
    /// Returns [`DisplayError::ZeroTileMultiplier`] if either factor is zero.
    pub const fn new(width: u8, height: u8) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::ZeroTileMultiplier { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(self) -> u8 {
        self.width
    }

    pub const fn height(self) -> u8 {
        self.height
    }

    /// True if any axis is scaled.
    pub const fn is_scaled(self) -> bool {
        self.width > 1 || self.height > 1
    }
}

impl Default for TileMultiplier {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<(u8, u8)> for TileMultiplier {
    type Error = DisplayError;

    fn try_from((width, height): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<TileMultiplier> for (u8, u8) {
    fn from(tile: TileMultiplier) -> Self {
        (tile.width, tile.height)
    }
}
