//! Core business logic for the dashboard store
//!
//! Pure state transitions with no I/O or synchronization

pub mod mutations;
pub mod state;

pub use mutations::{Mutation, NodeMutation, PayoutMutation, Slot};
pub use state::DashboardState;
