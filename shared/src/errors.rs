//! Shared error types for the API clients

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The session is missing or expired. Callers must surface this one.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unexpected response status: {status}")]
    Status { status: u16 },

    #[error("Transport failed: {message}")]
    Transport { message: String },

    #[error("Response decoding failed: {message}")]
    Decode { message: String },

    /// A path segment that URL normalization would drop or collapse
    #[error("Invalid path segment: {segment:?}")]
    InvalidPathSegment { segment: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    pub fn invalid_config(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else {
            ApiError::transport(err.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
