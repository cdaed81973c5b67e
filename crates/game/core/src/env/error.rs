//! Glyph table construction errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Lighting, RaceId};

/// Errors raised while validating glyph tables.
///
/// Lookups on built tables never fail, so every inconsistency has to surface here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{table} '{name}' has no glyph for lighting {lighting:?}")]
    MissingLightingGlyph {
        table: &'static str,
        name: String,
        lighting: Lighting,
    },

    #[error("{table} name '{name}' is defined more than once")]
    DuplicateName { table: &'static str, name: String },

    #[error("{table} table has {count} entries, more than an id can address")]
    TooManyEntries { table: &'static str, count: usize },

    #[error("no player race configured")]
    MissingPlayerRace,

    #[error("player race {0} is not in the race table")]
    UnknownPlayerRace(RaceId),
}

impl GameError for TableError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TooManyEntries { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            MissingLightingGlyph { .. } => "TABLE_MISSING_LIGHTING_GLYPH",
            DuplicateName { .. } => "TABLE_DUPLICATE_NAME",
            TooManyEntries { .. } => "TABLE_TOO_MANY_ENTRIES",
            MissingPlayerRace => "TABLE_MISSING_PLAYER_RACE",
            UnknownPlayerRace(_) => "TABLE_UNKNOWN_PLAYER_RACE",
        }
    }
}
