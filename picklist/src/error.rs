//! Error types for parsing pick list names.
//!
//! Core operations never fail. These errors only surface when a caller
//! converts free-form names (from a config file, a command line, a
//! presentation layer sending strings) into the typed enums.

/// Error returned when a name cannot be parsed into a pick list enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickListError {
    /// The name is not a list role (`source` or `target`).
    #[error("unknown list role: {0}")]
    UnknownRole(String),

    /// The name is not one of the four transfer directions.
    #[error("unknown transfer direction: {0}")]
    UnknownTransferDirection(String),

    /// The name is not one of `up`, `top`, `down`, `bottom`.
    #[error("unknown reorder direction: {0}")]
    UnknownReorderDirection(String),

    /// The name is not a supported filter match mode.
    #[error("unknown filter match mode: {0}")]
    UnknownMatchMode(String),
}
