//! Error types for the player roster.
//!
//! Duplicate players, unknown players and failed directory lookups are
//! reported through outcome types, not errors. Everything here is a
//! condition the caller cannot continue past.

/// Roster error types covering storage and encoding failures.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid {field}: {value:?} cannot be stored")]
    InvalidField { field: &'static str, value: String },

    #[error("Player must have at least one name")]
    EmptyHistory,
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, RosterError>;
