//! Service tests for the dashboard

pub mod fixtures;
pub mod storage_node;
