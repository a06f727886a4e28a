//! Detached hit reporting
//!
//! A hit is telemetry: the caller hands the action over and moves on. The
//! returned handle only tells when the task finished, never how it went.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::traits::ABTestApi;
use crate::types::ABHitAction;

#[derive(Clone)]
pub struct HitReporter {
    api: Arc<dyn ABTestApi>,
}

impl HitReporter {
    pub fn new(api: Arc<dyn ABTestApi>) -> Self {
        Self { api }
    }

    /// Spawn the hit request on the current tokio runtime.
    ///
    /// Dropping the handle leaves the task running.
    pub fn report(&self, action: ABHitAction) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            api.send_hit(action).await;
        })
    }
}
