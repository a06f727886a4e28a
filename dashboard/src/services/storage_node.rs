//! Node module service: selects satellites in the store

use std::sync::Arc;
use tracing::info;

use crate::core::NodeMutation;
use crate::error::{DashboardError, DashboardResult};
use crate::store::DashboardStore;
use crate::traits::NodeApi;
use crate::types::Satellite;
use shared::ApiError;

#[derive(Clone)]
pub struct StorageNodeService {
    api: Arc<dyn NodeApi>,
    store: Arc<DashboardStore>,
}

impl StorageNodeService {
    pub fn new(api: Arc<dyn NodeApi>, store: Arc<DashboardStore>) -> Self {
        Self { api, store }
    }

    /// Fetch a satellite and make it the selected one.
    ///
    /// On error the current selection is kept.
    pub async fn select_satellite(&self, satellite_id: &str) -> DashboardResult<Satellite> {
        let satellite = self.api.fetch_satellite(satellite_id).await.map_err(|e| match e {
            ApiError::Status { status: 404 } => DashboardError::SatelliteNotFound {
                satellite_id: satellite_id.to_string(),
            },
            other => DashboardError::Api(other),
        })?;

        info!(satellite_id, "Selected satellite");
        self.store.commit(NodeMutation::SelectSatellite(satellite.clone()));
        Ok(satellite)
    }

    /// Go back to the "all satellites" view
    pub fn clear_selection(&self) {
        self.store.commit(NodeMutation::SelectSatellite(Satellite::default()));
    }
}
