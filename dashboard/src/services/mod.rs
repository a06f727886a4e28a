//! Service implementations
//!
//! HTTP access to the node API, plus the services that fetch data and commit
//! it into the store

pub mod node_api;
pub mod payout;
pub mod payout_api;
pub mod storage_node;

#[cfg(test)]
mod tests;

pub use node_api::HttpNodeApi;
pub use payout::PayoutService;
pub use payout_api::HttpPayoutApi;
pub use storage_node::StorageNodeService;
