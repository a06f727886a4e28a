//! Payout module service: loads payment totals into the store

use std::sync::Arc;
use tracing::info;

use crate::core::PayoutMutation;
use crate::error::DashboardResult;
use crate::store::DashboardStore;
use crate::traits::{PaystubQuery, PayoutApi};
use crate::types::TotalPayments;

#[derive(Clone)]
pub struct PayoutService {
    api: Arc<dyn PayoutApi>,
    store: Arc<DashboardStore>,
}

impl PayoutService {
    pub fn new(api: Arc<dyn PayoutApi>, store: Arc<DashboardStore>) -> Self {
        Self { api, store }
    }

    /// Fetch the paystubs for `query`, total them and commit the totals.
    ///
    /// On error the stored totals are kept.
    pub async fn load_total_payments(&self, query: PaystubQuery) -> DashboardResult<TotalPayments> {
        let paystubs = self.api.fetch_paystubs(query.clone()).await?;
        let totals = TotalPayments::new(&paystubs);

        info!(
            period = %query.period,
            satellite_id = query.satellite_id.as_deref().unwrap_or("all"),
            paystubs = paystubs.len(),
            "Loaded total payments"
        );
        self.store.commit(PayoutMutation::SetTotal(totals));
        Ok(totals)
    }
}
