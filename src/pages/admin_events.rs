use uuid::Uuid;

use super::Loader;
use crate::api::ApiError;
use crate::models::Event;
use crate::views::Toast;

/// Oldest first. Unreadable timestamps go first.
pub fn sort_oldest_first(events: &mut [Event]) {
    events.sort_by_key(Event::starts_at);
}

/// Admin events list with a single-row delete confirmation flow
#[derive(Debug, Clone, Default)]
pub struct AdminEventsPage {
    pub events: Loader<Vec<Event>>,
    /// Row awaiting confirmation in the modal
    pub confirm_id: Option<String>,
    /// Row whose delete request is in flight
    pub deleting_id: Option<String>,
    pub toast: Option<Toast>,
    /// Carried by the confirmation form so repeated deletes are refused
    pub submission_id: Uuid,
}

impl AdminEventsPage {
    pub fn new() -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            ..Self::default()
        }
    }

    pub async fn load<F>(&mut self, fetch: F)
    where
        F: std::future::Future<Output = Result<Vec<Event>, ApiError>>,
    {
        let generation = self.events.begin();
        let outcome = fetch.await.map(|mut events| {
            sort_oldest_first(&mut events);
            events
        });
        self.events.resolve(generation, outcome, "Failed to load events");
    }

    /// Opens the confirmation modal for `id`. Ignored while a delete is running.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        if self.deleting_id.is_none() {
            self.confirm_id = Some(id.into());
        }
    }

    /// Confirms the pending delete and returns the id to send to the backend.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting_id.is_some() {
            return None;
        }
        let id = self.confirm_id.clone()?;
        self.deleting_id = Some(id.clone());
        Some(id)
    }

    /// Applies the backend outcome of the in-flight delete.
    pub fn finish_delete(&mut self, outcome: Result<(), ApiError>) {
        let Some(id) = self.deleting_id.take() else {
            return;
        };
        self.confirm_id = None;

        match outcome {
            Ok(()) => {
                self.events.map_loaded(|events| events.retain(|e| e.id != id));
                tracing::info!(event_id = %id, "Event deleted");
                self.toast = Some(Toast::success("Event deleted"));
            }
            Err(e) => {
                tracing::warn!(event_id = %id, error = %e, "Event delete failed");
                self.toast = Some(Toast::error(e.user_message("Delete failed")));
            }
        }
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting_id.as_deref() == Some(id)
    }

    /// Event currently shown in the confirmation modal, if it is still listed.
    pub fn confirming(&self) -> Option<&Event> {
        let id = self.confirm_id.as_deref()?;
        self.events.loaded()?.iter().find(|e| e.id == id)
    }
}
