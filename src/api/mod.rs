//! Thin clients for the events and hackathon backend
//!
//! Every call is one HTTP request. Bodies are (de)serialized as JSON and
//! nothing else is done to them: no retries, no caching.

pub mod events;
pub mod hackathon;

pub use events::EventsClient;
pub use hackathon::HackathonClient;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::io::HttpResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Backend responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Backend-provided message, if the failure carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Human readable text for a page: the backend message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Pulls a `message` out of an error body.
///
/// Accepts both `{"message": "..."}` and `{"error": {"message": "..."}}`.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

pub(crate) fn ensure_success(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = extract_message(&response.body);
    tracing::warn!(
        status = response.status,
        message = message.as_deref().unwrap_or(""),
        "Backend call failed"
    );
    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

pub(crate) fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let response = ensure_success(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) fn encode<T: serde::Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Appends path segments to the backend origin, percent-encoding each one.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<String, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::Encode(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn message_is_taken_verbatim() {
        let err = ensure_success(response(400, r#"{"message":"Title already taken"}"#)).unwrap_err();
        assert_eq!(err.user_message("Failed to create event"), "Title already taken");
    }

    #[test]
    fn nested_envelope_message_is_understood() {
        let err = ensure_success(response(
            409,
            r#"{"success":false,"error":{"code":"CONFLICT","message":"Team exists"}}"#,
        ))
        .unwrap_err();
        assert_eq!(err.backend_message(), Some("Team exists"));
    }

    #[test]
    fn missing_message_falls_back() {
        let err = ensure_success(response(500, "")).unwrap_err();
        assert_eq!(err.user_message("Delete failed"), "Delete failed");

        let err = ensure_success(response(500, r#"{"detail":"boom"}"#)).unwrap_err();
        assert_eq!(err.user_message("Delete failed"), "Delete failed");

        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Delete failed"), "Delete failed");
    }

    #[test]
    fn decode_reports_bad_json() {
        let err = decode::<Vec<crate::models::Event>>(response(200, "<html>")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn endpoint_appends_and_encodes_segments() {
        let base = Url::parse("http://api.local/").unwrap();
        assert_eq!(endpoint(&base, &["events"]).unwrap(), "http://api.local/events");

        let prefixed = Url::parse("http://api.local/v1").unwrap();
        assert_eq!(
            endpoint(&prefixed, &["events", "last", "5"]).unwrap(),
            "http://api.local/v1/events/last/5"
        );
        assert_eq!(
            endpoint(&base, &["events", "a b/c"]).unwrap(),
            "http://api.local/events/a%20b%2Fc"
        );
    }

    #[test]
    fn not_found_is_detected() {
        let err = ensure_success(response(404, "")).unwrap_err();
        assert!(err.is_not_found());
    }
}
