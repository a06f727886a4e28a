//! HTTP response classification and body decoding
//!
//! Every client in the workspace reads a response the same way: classify the
//! status first, then validate the body against a typed schema.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::ApiEndpoint;
use crate::errors::{ApiError, ApiResult};

/// Coarse outcome of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Unauthorized,
    Failure(u16),
}

impl StatusClass {
    pub fn of(status: StatusCode) -> Self {
        if status.is_success() {
            StatusClass::Success
        } else if status == StatusCode::UNAUTHORIZED {
            StatusClass::Unauthorized
        } else {
            StatusClass::Failure(status.as_u16())
        }
    }

    /// Convert into a result, mapping every non-success class to its error
    pub fn into_result(self) -> ApiResult<()> {
        match self {
            StatusClass::Success => Ok(()),
            StatusClass::Unauthorized => Err(ApiError::Unauthorized),
            StatusClass::Failure(status) => Err(ApiError::Status { status }),
        }
    }
}

/// Check the status of a response and decode its JSON body into `T`
pub async fn read_json<T>(response: reqwest::Response) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    StatusClass::of(response.status()).into_result()?;
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::decode(e.to_string()))
}

/// Build the HTTP client for an endpoint
pub fn build_client(endpoint: &ApiEndpoint) -> ApiResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(endpoint.timeout())
        .build()
        .map_err(ApiError::from)
}
