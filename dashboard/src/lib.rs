//! Storage node dashboard state
//!
//! A reactive store holding the selected satellite and the payout totals.
//! Services fetch data from the node API and commit it through named
//! mutations; presentation code subscribes and derives display values.

pub mod core;
pub mod error;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;
pub mod view;

// Re-export main types
pub use crate::core::{DashboardState, Mutation, NodeMutation, PayoutMutation, Slot};
pub use error::{DashboardError, DashboardResult};
pub use store::{DashboardStore, MutationRecord, StoreSubscription};
pub use types::*;
pub use view::{TotalHeldArea, cents_to_dollars};

// Re-export trait definitions
pub use traits::{NodeApi, PaystubQuery, PayoutApi};

// Re-export service implementations
pub use services::{HttpNodeApi, HttpPayoutApi, PayoutService, StorageNodeService};
