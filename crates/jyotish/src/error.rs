use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors surfaced by the horoscope engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown sign: {input}. Valid signs: {valid:?}")]
    InvalidSign { input: String, valid: Vec<String> },
    #[error("Unknown celestial body: {0}")]
    InvalidBody(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No birth chart stored for user {user_id}")]
    ChartNotFound { user_id: String },
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("Invalid engine configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
