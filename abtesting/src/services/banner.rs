//! New-banner experiment

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::services::HitReporter;
use crate::traits::ABTestApi;
use crate::types::ABHitAction;
use shared::ApiResult;

/// Decides whether the console shows the new banner and reports how users
/// interact with it
#[derive(Clone)]
pub struct BannerService {
    api: Arc<dyn ABTestApi>,
    reporter: HitReporter,
}

impl BannerService {
    pub fn new(api: Arc<dyn ABTestApi>) -> Self {
        let reporter = HitReporter::new(Arc::clone(&api));
        Self { api, reporter }
    }

    /// `Err` only when the session expired
    pub async fn should_show_new_banner(&self) -> ApiResult<bool> {
        let values = self.api.fetch_values().await?;
        Ok(values.has_new_banner)
    }

    pub fn banner_viewed(&self) -> JoinHandle<()> {
        self.reporter.report(ABHitAction::BannerViewed)
    }

    pub fn banner_clicked(&self) -> JoinHandle<()> {
        self.reporter.report(ABHitAction::BannerClicked)
    }

    pub fn upgrade_clicked(&self) -> JoinHandle<()> {
        self.reporter.report(ABHitAction::UpgradeAccountClicked)
    }
}
