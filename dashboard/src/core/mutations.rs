//! Named store mutations
//!
//! Each slot has exactly one mutation that writes it.

use std::fmt;

use crate::types::{Satellite, TotalPayments};

/// A named unit of store state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    SelectedSatellite,
    TotalPayments,
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Slot::SelectedSatellite => "selected_satellite",
            Slot::TotalPayments => "total_payments",
        }
    }
}

/// Mutations owned by the node module
#[derive(Debug, Clone, PartialEq)]
pub enum NodeMutation {
    SelectSatellite(Satellite),
}

impl NodeMutation {
    pub const SELECT_SATELLITE: &'static str = "SELECT_SATELLITE";
}

/// Mutations owned by the payout module
#[derive(Debug, Clone, PartialEq)]
pub enum PayoutMutation {
    SetTotal(TotalPayments),
}

impl PayoutMutation {
    pub const SET_TOTAL: &'static str = "SET_TOTAL";
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Node(NodeMutation),
    Payout(PayoutMutation),
}

impl Mutation {
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Node(NodeMutation::SelectSatellite(_)) => NodeMutation::SELECT_SATELLITE,
            Mutation::Payout(PayoutMutation::SetTotal(_)) => PayoutMutation::SET_TOTAL,
        }
    }

    /// The slot this mutation replaces
    pub fn slot(&self) -> Slot {
        match self {
            Mutation::Node(NodeMutation::SelectSatellite(_)) => Slot::SelectedSatellite,
            Mutation::Payout(PayoutMutation::SetTotal(_)) => Slot::TotalPayments,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<NodeMutation> for Mutation {
    fn from(mutation: NodeMutation) -> Self {
        Mutation::Node(mutation)
    }
}

impl From<PayoutMutation> for Mutation {
    fn from(mutation: PayoutMutation) -> Self {
        Mutation::Payout(mutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_names_and_slots() {
        let select: Mutation = NodeMutation::SelectSatellite(Satellite::default()).into();
        let total: Mutation = PayoutMutation::SetTotal(TotalPayments::default()).into();

        assert_eq!(select.name(), "SELECT_SATELLITE");
        assert_eq!(select.slot(), Slot::SelectedSatellite);
        assert_eq!(total.to_string(), "SET_TOTAL");
        assert_eq!(total.slot(), Slot::TotalPayments);
    }

    #[test]
    fn test_one_mutation_name_per_slot() {
        let mutations: Vec<Mutation> = vec![
            NodeMutation::SelectSatellite(Satellite::default()).into(),
            PayoutMutation::SetTotal(TotalPayments::default()).into(),
        ];

        let mut writers: HashMap<Slot, &'static str> = HashMap::new();
        for mutation in &mutations {
            let previous = writers.insert(mutation.slot(), mutation.name());
            assert!(previous.is_none() || previous == Some(mutation.name()));
        }
        assert_eq!(writers.len(), 2);
        assert_eq!(Slot::SelectedSatellite.name(), "selected_satellite");
    }
}
