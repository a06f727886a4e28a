//! Service trait definitions for dependency injection
//!
//! The console API is abstracted behind a trait so services can be tested
//! against generated mocks.

use async_trait::async_trait;

use crate::types::{ABHitAction, ABTestValues};
use shared::ApiResult;

/// Console A/B testing API
#[mockall::automock]
#[async_trait]
pub trait ABTestApi: Send + Sync {
    /// Fetch the current flag values.
    ///
    /// Fails only with `ApiError::Unauthorized`; every other failure yields
    /// `ABTestValues::default()`.
    async fn fetch_values(&self) -> ApiResult<ABTestValues>;

    /// Report a hit. The outcome is never returned.
    async fn send_hit(&self, action: ABHitAction);
}
