//! HTTP implementation of the storage node information API

use async_trait::async_trait;
use tracing::debug;

use crate::traits::NodeApi;
use crate::types::Satellite;
use shared::http;
use shared::{ApiEndpoint, ApiResult};

#[derive(Debug, Clone)]
pub struct HttpNodeApi {
    endpoint: ApiEndpoint,
    http: reqwest::Client,
}

impl HttpNodeApi {
    pub fn new(endpoint: ApiEndpoint) -> ApiResult<Self> {
        let http = http::build_client(&endpoint)?;
        Ok(Self::with_client(endpoint, http))
    }

    pub fn with_client(endpoint: ApiEndpoint, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }
}

#[async_trait]
impl NodeApi for HttpNodeApi {
    async fn fetch_satellite(&self, satellite_id: &str) -> ApiResult<Satellite> {
        let url = self.endpoint.url_for(&["sno", "satellite", satellite_id])?;
        debug!(%url, "Fetching satellite");

        let response = self.http.get(url).send().await?;
        http::read_json(response).await
    }
}
