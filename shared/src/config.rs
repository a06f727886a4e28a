//! Endpoint configuration shared by the HTTP clients

use std::time::Duration;
use url::Url;

use crate::errors::{ApiError, ApiResult};

/// Root path of the console A/B testing API
pub const AB_TESTING_ROOT: &str = "/api/v0/ab";

/// Root path of the storage node dashboard API
pub const STORAGE_NODE_ROOT: &str = "/api";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where an API lives: base URL, root path below it and request timeout
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoint {
    base_url: Url,
    root_segments: Vec<String>,
    timeout: Duration,
}

impl ApiEndpoint {
    pub fn new(base_url: &str, root_path: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url).map_err(|_| ApiError::invalid_config("base_url", base_url))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::invalid_config("base_url", base_url));
        }

        let root_segments = root_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            base_url: parsed,
            root_segments,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Console A/B testing API below `base_url`
    pub fn ab_testing(base_url: &str) -> ApiResult<Self> {
        Self::new(base_url, AB_TESTING_ROOT)
    }

    /// Storage node dashboard API below `base_url`
    pub fn storage_node(base_url: &str) -> ApiResult<Self> {
        Self::new(base_url, STORAGE_NODE_ROOT)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn root_path(&self) -> String {
        format!("/{}", self.root_segments.join("/"))
    }

    /// Full URL of `segments` below the root path. Each segment is percent-encoded.
    ///
    /// Empty, `.` and `..` segments are rejected since the URL parser would
    /// drop them and address a different resource.
    pub fn url_for(&self, segments: &[&str]) -> ApiResult<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ApiError::InvalidPathSegment {
                segment: segment.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // `new` rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(self.root_segments.iter().map(String::as_str));
            path.extend(segments.iter().copied());
        }
        Ok(url)
    }
}
