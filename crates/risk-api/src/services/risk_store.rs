//! In-memory risk storage.
//!
//! All operations, reads included, take the same exclusive lock for their
//! whole duration. Nothing is awaited or written to I/O while it is held.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::models::Risk;

/// Thread-safe mapping from risk id to risk.
#[derive(Debug, Default)]
pub struct RiskStore {
    risks: Mutex<HashMap<String, Risk>>,
}

impl RiskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a risk, replacing any existing entry with the same id.
    pub fn insert(&self, risk: Risk) {
        self.risks.lock().insert(risk.id.clone(), risk);
    }

    /// Snapshot of every stored risk, in no particular order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Risk> {
        self.risks.lock().values().cloned().collect()
    }

    /// Look up a risk by id.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<Risk> {
        self.risks.lock().get(id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.risks.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risks.lock().is_empty()
    }
}
