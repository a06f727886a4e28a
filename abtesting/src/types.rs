//! A/B testing data types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feature flags served by the console. `Default` is the fail-open value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ABTestValues {
    pub has_new_banner: bool,
}

impl ABTestValues {
    pub fn new(has_new_banner: bool) -> Self {
        Self { has_new_banner }
    }
}

/// Wire shape of `GET /values`
#[derive(Debug, Deserialize)]
pub(crate) struct ABTestValuesResponse {
    pub has_new_banner: bool,
}

impl From<ABTestValuesResponse> for ABTestValues {
    fn from(response: ABTestValuesResponse) -> Self {
        Self::new(response.has_new_banner)
    }
}

/// UI event reported through `POST /hit/{action}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ABHitAction {
    UpgradeAccountClicked,
    BannerViewed,
    BannerClicked,
}

impl ABHitAction {
    pub const ALL: [ABHitAction; 3] = [
        ABHitAction::UpgradeAccountClicked,
        ABHitAction::BannerViewed,
        ABHitAction::BannerClicked,
    ];

    /// Path segment for the action
    pub fn as_str(&self) -> &'static str {
        match self {
            ABHitAction::UpgradeAccountClicked => "upgrade_account_clicked",
            ABHitAction::BannerViewed => "banner_viewed",
            ABHitAction::BannerClicked => "banner_clicked",
        }
    }
}

impl fmt::Display for ABHitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown hit action: {input}")]
pub struct ParseHitActionError {
    pub input: String,
}

impl FromStr for ABHitAction {
    type Err = ParseHitActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ABHitAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseHitActionError { input: s.to_string() })
    }
}
