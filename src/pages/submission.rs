//! Duplicate-submission guard for mutating forms
//!
//! Every rendered form carries a fresh submission id. While a request for an
//! id is unresolved, further posts with the same id are refused.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

#[derive(Clone, Default)]
pub struct SubmissionGuard {
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<Uuid>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claims `id` for the duration of the returned ticket, or `None` when a
    /// request with the same id is still running.
    pub fn try_begin(&self, id: Uuid) -> Option<SubmissionTicket> {
        if !self.lock().insert(id) {
            tracing::warn!(submission = %id, "Duplicate submission rejected");
            return None;
        }
        Some(SubmissionTicket {
            id,
            guard: self.clone(),
        })
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.lock().len()
    }
}

/// Releases its submission id when dropped.
pub struct SubmissionTicket {
    id: Uuid,
    guard: SubmissionGuard,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.guard.lock().remove(&self.id);
    }
}

/// Reads the hidden submission id field, minting one when absent or malformed.
pub fn submission_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw.trim()).unwrap_or_else(|_| Uuid::new_v4())
}
