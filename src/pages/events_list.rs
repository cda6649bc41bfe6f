use chrono::{DateTime, Utc};

use super::Loader;
use crate::api::ApiError;
use crate::models::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl EventFilter {
    pub const ALL: [EventFilter; 3] = [EventFilter::All, EventFilter::Upcoming, EventFilter::Past];

    /// Unknown or missing values mean "all".
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("upcoming") => EventFilter::Upcoming,
            Some("past") => EventFilter::Past,
            _ => EventFilter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventFilter::All => "all",
            EventFilter::Upcoming => "upcoming",
            EventFilter::Past => "past",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventFilter::All => "All Events",
            EventFilter::Upcoming => "Upcoming",
            EventFilter::Past => "Past Events",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            EventFilter::All => "No events available yet.",
            EventFilter::Upcoming => "No upcoming events scheduled.",
            EventFilter::Past => "No past events found.",
        }
    }

    /// Events without a readable timestamp are neither upcoming nor past.
    pub fn accepts(self, event: &Event, now: DateTime<Utc>) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Upcoming => event.starts_at().is_some_and(|at| at >= now),
            EventFilter::Past => event.starts_at().is_some_and(|at| at < now),
        }
    }
}

/// Newest first. Unreadable timestamps go last.
pub fn sort_newest_first(events: &mut [Event]) {
    events.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));
}

/// Public events list: fetched once, sorted, filtered on demand
#[derive(Debug, Clone, Default)]
pub struct EventsListPage {
    pub events: Loader<Vec<Event>>,
    pub filter: EventFilter,
}

impl EventsListPage {
    pub async fn load<F>(&mut self, fetch: F)
    where
        F: std::future::Future<Output = Result<Vec<Event>, ApiError>>,
    {
        let generation = self.events.begin();
        let outcome = fetch.await.map(|mut events| {
            sort_newest_first(&mut events);
            events
        });
        self.events.resolve(generation, outcome, "Failed to load events");
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    /// The already-fetched events that pass the current filter at `now`.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Event> {
        self.events
            .loaded()
            .map(|events| {
                events
                    .iter()
                    .filter(|event| self.filter.accepts(event, now))
                    .collect()
            })
            .unwrap_or_default()
    }
}
