//! Presentational HTML rendering
//!
//! Views take already-prepared data and return markup. They never call the
//! backend and never decide what to show beyond simple presence checks.

pub mod event;
pub mod forms;
pub mod hackathon;
pub mod home;
pub mod layout;

use chrono::{DateTime, FixedOffset, Utc};

use crate::models::event::parse_timestamp;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encodes a value for use inside a query string.
pub fn query_value(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Percent-encodes a value for use as one URL path segment.
pub fn path_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn localize(at: DateTime<Utc>, offset: FixedOffset) -> DateTime<FixedOffset> {
    at.with_timezone(&offset)
}

/// "Jun 1, 2025, 06:30 PM"; unreadable timestamps are shown as sent.
pub fn format_event_datetime(raw: &str, offset: FixedOffset) -> String {
    match parse_timestamp(raw) {
        Some(at) => localize(at, offset).format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// "01/06/2025" (day first)
pub fn format_event_date(raw: &str, offset: FixedOffset) -> String {
    match parse_timestamp(raw) {
        Some(at) => localize(at, offset).format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown on the next render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        let class = match self.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        };
        format!(
            r#"<div class="{}" role="status">{}</div>"#,
            class,
            escape(&self.message)
        )
    }
}
