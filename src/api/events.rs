use std::sync::Arc;

use url::Url;

use super::{decode, encode, endpoint, ensure_success, ApiError};
use crate::io::HttpClient;
use crate::models::{CreateEventCommand, Event, UpdateEventCommand};

/// Client for the `/events` backend resource
#[derive(Clone)]
pub struct EventsClient {
    base: Url,
    http: Arc<dyn HttpClient>,
}

impl EventsClient {
    pub fn new(base: Url, http: Arc<dyn HttpClient>) -> Self {
        Self { base, http }
    }

    /// All events, in backend order.
    pub async fn get_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = endpoint(&self.base, &["events"])?;
        decode(self.http.get(&url).await?)
    }

    pub async fn get_event(&self, id: &str) -> Result<Event, ApiError> {
        let url = endpoint(&self.base, &["events", id])?;
        decode(self.http.get(&url).await?)
    }

    /// The `count` most recent events as ordered by the backend.
    pub async fn get_last_events(&self, count: usize) -> Result<Vec<Event>, ApiError> {
        let count = count.to_string();
        let url = endpoint(&self.base, &["events", "last", &count])?;
        decode(self.http.get(&url).await?)
    }

    pub async fn create_event(&self, command: &CreateEventCommand) -> Result<Event, ApiError> {
        let url = endpoint(&self.base, &["events", "create-event"])?;
        let body = encode(command)?;
        decode(self.http.post_json(&url, &body).await?)
    }

    pub async fn update_event(&self, command: &UpdateEventCommand) -> Result<Event, ApiError> {
        let url = endpoint(&self.base, &["events", "update-event"])?;
        let body = encode(command)?;
        decode(self.http.put_json(&url, &body).await?)
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let url = endpoint(&self.base, &["events", "delete-event", id])?;
        ensure_success(self.http.delete(&url).await?)?;
        Ok(())
    }
}
