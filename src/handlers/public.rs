use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;

use super::public_page;
use crate::pages::event_detail::EventDetailPage;
use crate::pages::events_list::{EventFilter, EventsListPage};
use crate::state::AppState;
use crate::views::event::{event_detail_body, events_list_body};
use crate::views::home::home_body;

/// Number of events shown on the homepage
const LATEST_EVENTS: usize = 5;

pub async fn home(State(state): State<AppState>) -> Response {
    let events = match state.events.get_last_events(LATEST_EVENTS).await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load latest events");
            Vec::new()
        }
    };

    public_page(
        StatusCode::OK,
        "IEEE Student Branch at Nazarbayev University",
        &home_body(&events, state.display_offset()),
    )
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub filter: Option<String>,
}

pub async fn events_list(State(state): State<AppState>, Query(query): Query<EventsQuery>) -> Response {
    let mut page = EventsListPage::default();
    page.set_filter(EventFilter::parse(query.filter.as_deref()));
    page.load(state.events.get_events()).await;

    public_page(
        StatusCode::OK,
        "Events",
        &events_list_body(&page, Utc::now(), state.display_offset()),
    )
}

pub async fn event_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut page = EventDetailPage::new();
    page.load(&id, state.events.get_event(&id)).await;

    let title = page
        .event
        .loaded()
        .map(|event| event.display_title().to_string())
        .unwrap_or_else(|| "Event".to_string());
    public_page(
        StatusCode::OK,
        &title,
        &event_detail_body(&page, state.display_offset()),
    )
}
