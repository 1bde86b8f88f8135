use thiserror::Error;

/// Engine-level failures surfaced to callers.
///
/// `Validation` and the two unsatisfiable-requirement variants abort the whole
/// operation with no side effects; `Persistence` means the store write itself
/// failed and no team was committed.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No available player for position {position} with skill {skill}")]
    NoAvailablePlayer { position: String, skill: String },

    #[error("Insufficient players for position {position}: requested {requested}, available {available}")]
    InsufficientPlayers { position: String, requested: i64, available: usize },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
