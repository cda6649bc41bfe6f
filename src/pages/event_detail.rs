use super::{Loader, RequestGeneration};
use crate::api::ApiError;
use crate::models::Event;

/// Single event view keyed by the route id
#[derive(Debug, Clone, Default)]
pub struct EventDetailPage {
    pub id: String,
    pub event: Loader<Event>,
}

impl EventDetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `id` and starts a new load generation for it.
    pub fn navigate(&mut self, id: impl Into<String>) -> RequestGeneration {
        self.id = id.into();
        self.event.begin()
    }

    /// Applies a fetch result; results for superseded navigations are dropped.
    pub fn resolve(&mut self, generation: RequestGeneration, outcome: Result<Event, ApiError>) -> bool {
        self.event.resolve(generation, outcome, "Failed to load event")
    }

    pub async fn load<F>(&mut self, id: &str, fetch: F)
    where
        F: std::future::Future<Output = Result<Event, ApiError>>,
    {
        let generation = self.navigate(id);
        let outcome = fetch.await;
        self.resolve(generation, outcome);
    }
}
