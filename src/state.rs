use std::sync::Arc;

use chrono::FixedOffset;

use crate::api::{EventsClient, HackathonClient};
use crate::config::SiteConfig;
use crate::io::HttpClient;
use crate::pages::SubmissionGuard;

/// Shared by every handler; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub events: EventsClient,
    pub hackathon: HackathonClient,
    pub submissions: SubmissionGuard,
}

impl AppState {
    pub fn new(config: SiteConfig, http: Arc<dyn HttpClient>) -> Self {
        let base = config.api_base_url.clone();
        Self {
            events: EventsClient::new(base.clone(), http.clone()),
            hackathon: HackathonClient::new(base, http),
            submissions: SubmissionGuard::new(),
            config: Arc::new(config),
        }
    }

    pub fn display_offset(&self) -> FixedOffset {
        self.config.display_offset
    }
}
