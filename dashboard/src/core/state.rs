//! Dashboard state snapshot

use crate::core::mutations::{Mutation, NodeMutation, PayoutMutation};
use crate::types::{Satellite, TotalPayments};

/// Every slot of the dashboard store.
///
/// Fields are private: the only writer is `apply`, reached through
/// `DashboardStore::commit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    selected_satellite: Satellite,
    total_payments: TotalPayments,
}

impl DashboardState {
    pub fn selected_satellite(&self) -> &Satellite {
        &self.selected_satellite
    }

    pub fn total_payments(&self) -> &TotalPayments {
        &self.total_payments
    }

    /// Replace the slot the mutation targets. Returns whether the value changed.
    pub(crate) fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Node(NodeMutation::SelectSatellite(satellite)) => replace(&mut self.selected_satellite, satellite),
            Mutation::Payout(PayoutMutation::SetTotal(totals)) => replace(&mut self.total_payments, totals),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
