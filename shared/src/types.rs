//! Core shared identifiers

use std::fmt;

/// Component identifier used to scope log filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Console A/B testing client
    AbClient,
}

impl ComponentId {
    /// Crate name whose log target the component owns
    pub fn log_target(&self) -> &'static str {
        match self {
            ComponentId::AbClient => "abtesting",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::AbClient => write!(f, "ab-client"),
        }
    }
}
