//! Error types for the telemetry cleaner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("No device found with name: {0}")]
    DeviceNotFound(String),

    #[error("ThingsBoard API error: HTTP {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
