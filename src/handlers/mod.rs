use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub mod admin;
pub mod auth;
pub mod hackathon;
pub mod public;

use crate::utils::error::AppError;
use crate::utils::response::{page, success};
use crate::views::layout::{admin_layout, main_layout};
use crate::views::Toast;

/// Cookie holding the admin access token
pub const TOKEN_COOKIE: &str = "token";

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "branch-portal",
    };

    success(payload, "Health check successful").into_response()
}

pub async fn not_found() -> Response {
    AppError::NotFound("The page you are looking for does not exist.".to_string()).into_response()
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Admin pages only check that a token is present; the backend owns authorization.
pub fn require_token(headers: &HeaderMap) -> Result<(), AppError> {
    match cookie_value(headers, TOKEN_COOKIE) {
        Some(token) if !token.is_empty() => Ok(()),
        _ => Err(AppError::AuthError("missing token cookie".to_string())),
    }
}

pub(crate) fn public_page(status: StatusCode, title: &str, body: &str) -> Response {
    page(status, main_layout(title, body, None))
}

pub(crate) fn admin_page(status: StatusCode, title: &str, body: &str, toast: Option<&Toast>) -> Response {
    page(status, admin_layout(title, body, toast))
}
