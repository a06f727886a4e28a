//! HTTP implementation of the console A/B testing API

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::traits::ABTestApi;
use crate::types::{ABHitAction, ABTestValues, ABTestValuesResponse};
use shared::http::{self, StatusClass};
use shared::{ApiEndpoint, ApiError, ApiResult};

/// Console A/B testing API over HTTP
#[derive(Debug, Clone)]
pub struct ABHttpApi {
    endpoint: ApiEndpoint,
    http: reqwest::Client,
}

impl ABHttpApi {
    pub fn new(endpoint: ApiEndpoint) -> ApiResult<Self> {
        let http = http::build_client(&endpoint)?;
        Ok(Self::with_client(endpoint, http))
    }

    /// Reuse an existing client, e.g. one carrying session cookies
    pub fn with_client(endpoint: ApiEndpoint, http: reqwest::Client) -> Self {
        Self { endpoint, http }
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Strict fetch: every failure is reported as its error kind
    async fn request_values(&self) -> ApiResult<ABTestValues> {
        let url = self.endpoint.url_for(&["values"])?;
        debug!(%url, "Fetching A/B test values");

        let response = self.http.get(url).send().await?;
        let body: ABTestValuesResponse = http::read_json(response).await?;
        Ok(body.into())
    }
}

#[async_trait]
impl ABTestApi for ABHttpApi {
    async fn fetch_values(&self) -> ApiResult<ABTestValues> {
        match self.request_values().await {
            Ok(values) => Ok(values),
            Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
            Err(e) => {
                warn!(error = %e, "A/B test values unavailable, using defaults");
                Ok(ABTestValues::default())
            }
        }
    }

    async fn send_hit(&self, action: ABHitAction) {
        let url = match self.endpoint.url_for(&["hit", action.as_str()]) {
            Ok(url) => url,
            Err(e) => {
                debug!(%action, error = %e, "Hit not delivered");
                return;
            }
        };

        match self.http.post(url).send().await {
            Ok(response) => match StatusClass::of(response.status()) {
                StatusClass::Success => debug!(%action, "Hit reported"),
                class => debug!(%action, ?class, "Hit rejected"),
            },
            Err(e) => debug!(%action, error = %e, "Hit not delivered"),
        }
    }
}
