//! HTTP implementation of the held amount API

use async_trait::async_trait;
use tracing::debug;

use crate::traits::{PaystubQuery, PayoutApi};
use crate::types::Paystub;
use shared::http;
use shared::{ApiEndpoint, ApiResult};

#[derive(Debug, Clone)]
pub struct HttpPayoutApi {
    endpoint: ApiEndpoint,
    http: reqwest::Client,
}

impl HttpPayoutApi {
    pub fn new(endpoint: ApiEndpoint) -> ApiResult<Self> {
        let http = http::build_client(&endpoint)?;
        Ok(Self::with_client(endpoint, http))
    }

    pub fn with_client(endpoint: ApiEndpoint, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }
}

#[async_trait]
impl PayoutApi for HttpPayoutApi {
    async fn fetch_paystubs(&self, query: PaystubQuery) -> ApiResult<Vec<Paystub>> {
        let mut url = self.endpoint.url_for(&["heldamount", "paystubs", &query.period])?;
        if let Some(satellite_id) = &query.satellite_id {
            url.query_pairs_mut().append_pair("satellite_id", satellite_id);
        }
        debug!(%url, "Fetching paystubs");

        let response = self.http.get(url).send().await?;
        http::read_json(response).await
    }
}
