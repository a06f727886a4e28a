//! Console A/B testing client
//!
//! Fetches feature flags for the console UI and reports hit events back to
//! the satellite. Flag fetching fails open: only an expired session is
//! surfaced to the caller.

pub mod services;
pub mod traits;
pub mod types;

pub use services::{ABHttpApi, BannerService, HitReporter};
pub use traits::ABTestApi;
pub use types::{ABHitAction, ABTestValues, ParseHitActionError};
