//! Error classification shared by every display error.
//!
//! Each concern keeps its own `thiserror` enum next to the data it checks
//! (`TableError` for glyph tables, `DisplayError` for configuration,
//! `ViewportError` in the frontend). All of them report a severity and a
//! stable code through [`GameError`].

/// How a caller should react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retrying later may succeed.
    Recoverable,
    /// A rejected value, such as a zero tile multiplier or one viewport too many.
    Validation,
    /// Inconsistent state inside the renderer or its tables.
    Internal,
    /// Content the display cannot run without is missing, such as the player race.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True for broken content or renderer bugs rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform classification of display errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for log filtering and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
