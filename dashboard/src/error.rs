//! Dashboard-specific error types

use shared::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Node API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Satellite not found: {satellite_id}")]
    SatelliteNotFound { satellite_id: String },
}

impl DashboardError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, DashboardError::Api(e) if e.is_unauthorized())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
