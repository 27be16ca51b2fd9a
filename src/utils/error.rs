use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{reason}")]
    HttpStatusError { status: u16, reason: String },

    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
