//! Service trait definitions for dependency injection
//!
//! Node API access is abstracted through these traits for testability

use async_trait::async_trait;

use crate::types::{Paystub, Satellite};
use shared::ApiResult;

/// Which paystubs to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaystubQuery {
    /// `YYYY-MM`
    pub period: String,
    /// `None` means every satellite
    pub satellite_id: Option<String>,
}

impl PaystubQuery {
    pub fn all_satellites(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            satellite_id: None,
        }
    }

    pub fn for_satellite(period: impl Into<String>, satellite_id: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            satellite_id: Some(satellite_id.into()),
        }
    }
}

/// Storage node information API
#[mockall::automock]
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Dashboard data for one satellite
    async fn fetch_satellite(&self, satellite_id: &str) -> ApiResult<Satellite>;
}

/// Held amount and payout API
#[mockall::automock]
#[async_trait]
pub trait PayoutApi: Send + Sync {
    async fn fetch_paystubs(&self, query: PaystubQuery) -> ApiResult<Vec<Paystub>>;
}
