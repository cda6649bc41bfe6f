use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPhoto {
    pub id: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    /// Absolute URL of the uploaded image
    #[serde(default)]
    pub photo_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 timestamp as sent by the backend
    pub event_date_time: String,
    #[serde(default)]
    pub has_registration_link: bool,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<EventPhoto>>,
}

impl Event {
    /// Parsed event timestamp, `None` when the backend value is unreadable.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.event_date_time)
    }

    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "Untitled Event",
        }
    }

    /// Registration link if one is actually present.
    ///
    /// `hasRegistrationLink` comes from the backend and is not trusted on its
    /// own; the link itself decides.
    pub fn registration_url(&self) -> Option<&str> {
        self.registration_link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }

    pub fn photos(&self) -> &[EventPhoto] {
        self.photos.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPhoto {
    pub alternative_text: Option<String>,
    pub photo_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    pub photos: Option<Vec<CreateEventPhoto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventCommand {
    pub event_dto: Event,
}

/// Reads an RFC 3339 timestamp, falling back to an offset-less one taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
