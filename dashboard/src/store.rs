//! Reactive dashboard store
//!
//! The store is passed explicitly to whoever reads or writes it. Writes go
//! through `commit`, reads through snapshots or subscriptions. Every commit
//! publishes one complete state, so subscribers never see a batch half
//! applied.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;
use tracing::debug;

use crate::core::{DashboardState, Mutation, Slot};

const DEFAULT_MAX_LOG_SIZE: usize = 100;

/// One entry of the mutation log
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRecord {
    pub name: &'static str,
    pub slot: Slot,
    /// False when the committed value equaled the current one
    pub changed: bool,
    pub committed_at: DateTime<Utc>,
}

pub struct DashboardStore {
    state: watch::Sender<DashboardState>,
    log: Mutex<VecDeque<MutationRecord>>,
    max_log_size: usize,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::with_max_log_size(DEFAULT_MAX_LOG_SIZE)
    }

    pub fn with_max_log_size(max_log_size: usize) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            state,
            log: Mutex::new(VecDeque::with_capacity(max_log_size)),
            max_log_size,
        }
    }

    /// Commit one mutation. Returns whether the store changed.
    pub fn commit(&self, mutation: impl Into<Mutation>) -> bool {
        self.commit_batch(vec![mutation.into()])
    }

    /// Commit several mutations as one update.
    ///
    /// Subscribers are notified once, and only if some slot changed.
    pub fn commit_batch(&self, mutations: Vec<Mutation>) -> bool {
        if mutations.is_empty() {
            return false;
        }

        // Held across the apply so log order matches apply order
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);
        let mut records = Vec::with_capacity(mutations.len());
        let changed = self.state.send_if_modified(|state| {
            let mut any_changed = false;
            for mutation in mutations {
                let name = mutation.name();
                let slot = mutation.slot();
                let changed = state.apply(mutation);
                any_changed |= changed;
                records.push((name, slot, changed));
            }
            any_changed
        });

        debug!(
            mutations = ?records.iter().map(|(name, _, _)| *name).collect::<Vec<_>>(),
            changed,
            "Committed store mutations"
        );
        self.record(&mut log, records);
        changed
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Read the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Subscribe to future commits. The current state counts as seen.
    pub fn subscribe(&self) -> StoreSubscription {
        StoreSubscription {
            rx: self.state.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    /// Committed mutations, oldest first
    pub fn mutation_log(&self) -> Vec<MutationRecord> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    fn record(&self, log: &mut VecDeque<MutationRecord>, records: Vec<(&'static str, Slot, bool)>) {
        if self.max_log_size == 0 {
            return;
        }

        let committed_at = Utc::now();
        for (name, slot, changed) in records {
            if log.len() == self.max_log_size {
                log.pop_front();
            }
            log.push_back(MutationRecord {
                name,
                slot,
                changed,
                committed_at,
            });
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the store that wakes on every change
pub struct StoreSubscription {
    rx: watch::Receiver<DashboardState>,
}

impl StoreSubscription {
    /// Latest committed state
    pub fn current(&self) -> DashboardState {
        self.rx.borrow().clone()
    }

    /// Whether a commit happened since the last `changed` call
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next change and return the state it produced.
    ///
    /// `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<DashboardState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
