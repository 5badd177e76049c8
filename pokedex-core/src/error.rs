use thiserror::Error;

/// Errors raised while building or checking API payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Level outside the accepted 1..=100 range
    #[error("Level must be between {min} and {max}, got {level}")]
    LevelOutOfRange { level: u8, min: u8, max: u8 },

    /// A required text field was empty after trimming
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Timestamp could not be parsed as ISO-8601
    #[error("Invalid timestamp '{0}': expected ISO-8601 (e.g. 2024-05-01T12:00:00Z)")]
    InvalidTimestamp(String),
}
