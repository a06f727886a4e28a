//! Shared plumbing for the dashboard API clients
//!
//! Holds the pieces both the A/B testing client and the storage node
//! dashboard need: the error taxonomy, status classification, endpoint
//! configuration and tracing setup.

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod types;

pub use config::ApiEndpoint;
pub use errors::*;
pub use http::StatusClass;
pub use types::*;
