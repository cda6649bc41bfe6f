use chrono::{FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use url::Url;
use uuid::Uuid;

use super::{char_len, non_empty, FieldErrors, FormData};
use crate::models::{CreateEventCommand, CreateEventPhoto, Event, EventPhoto};

pub const TITLE_MIN: usize = 2;
pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 5000;

/// `datetime-local` input format
const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoRow {
    /// Backend id of an existing photo; new rows have none
    pub id: Option<String>,
    pub photo_link: String,
    pub alternative_text: String,
}

impl PhotoRow {
    fn is_blank(&self) -> bool {
        self.photo_link.trim().is_empty() && self.alternative_text.trim().is_empty()
    }
}

/// Add/edit event form as typed by the admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// Raw `datetime-local` value
    pub event_date_time: String,
    pub registration_link: String,
    pub photos: Vec<PhotoRow>,
    pub submission_id: Uuid,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            event_date_time: String::new(),
            registration_link: String::new(),
            photos: Vec::new(),
            submission_id: Uuid::new_v4(),
        }
    }
}

/// Validated, normalised form values
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEvent {
    pub title: String,
    pub description: String,
    /// UTC, RFC 3339 with milliseconds
    pub event_date_time: String,
    pub registration_link: Option<String>,
    pub photos: Vec<PhotoRow>,
}

impl EventForm {
    pub fn from_form(data: &FormData) -> Self {
        let photos = data
            .rows("photos")
            .into_values()
            .map(|row| PhotoRow {
                id: row.get("id").and_then(|id| non_empty(id)),
                photo_link: row.get("photoLink").copied().unwrap_or_default().to_string(),
                alternative_text: row
                    .get("alternativeText")
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        Self {
            title: data.get("title").to_string(),
            description: data.get("description").to_string(),
            event_date_time: data.get("eventDateTime").to_string(),
            registration_link: data.get("registrationLink").to_string(),
            photos,
            submission_id: crate::pages::submission::submission_id(data.get("submissionId")),
        }
    }

    /// Prefills the form from a stored event for editing.
    pub fn from_event(event: &Event, offset: FixedOffset) -> Self {
        let event_date_time = event
            .starts_at()
            .map(|at| at.with_timezone(&offset).format(LOCAL_INPUT_FORMAT).to_string())
            .unwrap_or_default();

        Self {
            title: event.title.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            event_date_time,
            registration_link: event.registration_link.clone().unwrap_or_default(),
            photos: event
                .photos()
                .iter()
                .map(|p| PhotoRow {
                    id: Some(p.id.clone()),
                    photo_link: p.photo_link.clone().unwrap_or_default(),
                    alternative_text: p.alternative_text.clone().unwrap_or_default(),
                })
                .collect(),
            submission_id: Uuid::new_v4(),
        }
    }

    pub fn add_photo(&mut self) {
        self.photos.push(PhotoRow::default());
    }

    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    pub fn validate(&self, offset: FixedOffset) -> Result<ValidEvent, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title_len = char_len(&self.title);
        if title_len < TITLE_MIN {
            errors.add("title", "Title too short");
        } else if title_len > TITLE_MAX {
            errors.add("title", "Title too long");
        }

        let description_len = char_len(&self.description);
        if description_len < DESCRIPTION_MIN {
            errors.add("description", "Description too short");
        } else if description_len > DESCRIPTION_MAX {
            errors.add("description", "Description too long");
        }

        let event_date_time = if self.event_date_time.trim().is_empty() {
            errors.add("eventDateTime", "Event date/time required");
            None
        } else {
            let normalized = normalize_local_datetime(&self.event_date_time, offset);
            if normalized.is_none() {
                errors.add("eventDateTime", "Invalid event date/time");
            }
            normalized
        };

        let registration_link = non_empty(&self.registration_link);
        if let Some(link) = &registration_link {
            if Url::parse(link).is_err() {
                errors.add("registrationLink", "Invalid URL");
            }
        }

        for (index, photo) in self.photos.iter().enumerate() {
            if let Some(link) = non_empty(&photo.photo_link) {
                if Url::parse(&link).is_err() {
                    errors.add(format!("photos.{}.photoLink", index), "Invalid photo URL");
                }
            }
        }

        match event_date_time {
            Some(event_date_time) if errors.is_empty() => Ok(ValidEvent {
                title: self.title.clone(),
                description: self.description.clone(),
                event_date_time,
                registration_link,
                photos: self
                    .photos
                    .iter()
                    .filter(|p| !p.is_blank())
                    .cloned()
                    .collect(),
            }),
            _ => Err(errors),
        }
    }
}

impl ValidEvent {
    pub fn into_create_command(self) -> CreateEventCommand {
        CreateEventCommand {
            title: Some(self.title),
            description: Some(self.description),
            event_date_time: self.event_date_time,
            registration_link: self.registration_link,
            photos: Some(
                self.photos
                    .into_iter()
                    .map(|p| CreateEventPhoto {
                        alternative_text: non_empty(&p.alternative_text),
                        photo_link: non_empty(&p.photo_link),
                    })
                    .collect(),
            ),
        }
    }

    /// Full record for an update. New photo rows get a fresh id and the
    /// registration flag is derived from the link.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: Some(self.title),
            description: Some(self.description),
            event_date_time: self.event_date_time,
            has_registration_link: self.registration_link.is_some(),
            registration_link: self.registration_link,
            photos: Some(
                self.photos
                    .into_iter()
                    .map(|p| EventPhoto {
                        id: p.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                        alternative_text: non_empty(&p.alternative_text),
                        photo_link: non_empty(&p.photo_link),
                    })
                    .collect(),
            ),
        }
    }
}

/// Reads a `datetime-local` value in `offset` and renders it as UTC,
/// e.g. `2025-01-01T10:00:00.000Z`.
pub fn normalize_local_datetime(raw: &str, offset: FixedOffset) -> Option<String> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(
        local
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
