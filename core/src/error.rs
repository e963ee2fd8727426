use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Required field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("Invalid {kind} value: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Invalid timestamp '{value}' in stored record")]
    InvalidTimestamp { value: String },

    #[error("Storage error: {0}")]
    Storage(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type IntakeResult<T> = Result<T, IntakeError>;
