//! Per-page state
//!
//! Each page owns its own transient copy of backend data. Nothing here is
//! shared between pages or kept across page views.

pub mod admin_events;
pub mod event_detail;
pub mod event_editor;
pub mod events_list;
pub mod hackathon_register;
pub mod hackathon_roster;
pub mod submission;

pub use submission::{SubmissionGuard, SubmissionTicket};

use crate::api::ApiError;

/// Result of submitting a mutating form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    /// The same form is already being processed
    Duplicate,
    /// Saved; carries the id (or name) of the saved record
    Saved(String),
    /// Backend rejected the request; the message is on the page
    Failed,
}

/// Tag handed out when a load starts; only the newest tag may resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestGeneration(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

/// Loading/error/loaded state guarded by request generations.
#[derive(Debug, Clone)]
pub struct Loader<T> {
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LoadState::Loading,
        }
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, superseding any load still in flight.
    pub fn begin(&mut self) -> RequestGeneration {
        self.generation += 1;
        self.state = LoadState::Loading;
        RequestGeneration(self.generation)
    }

    /// Applies a finished load. Results from superseded generations are
    /// dropped and `false` is returned.
    pub fn resolve(
        &mut self,
        generation: RequestGeneration,
        outcome: Result<T, ApiError>,
        fallback: &str,
    ) -> bool {
        if generation.0 != self.generation {
            tracing::debug!(
                stale = generation.0,
                current = self.generation,
                "Discarding stale load result"
            );
            return false;
        }
        self.state = match outcome {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                tracing::warn!(error = %e, "Load failed");
                LoadState::Failed(e.user_message(fallback))
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn loaded(&self) -> Option<&T> {
        match &self.state {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Transforms a loaded value in place.
    pub fn map_loaded(&mut self, f: impl FnOnce(&mut T)) {
        if let Some(value) = self.loaded_mut() {
            f(value);
        }
    }
}
