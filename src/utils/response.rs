use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

pub fn success<T>(data: T, message: impl Into<String>) -> impl IntoResponse
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        data: Some(data),
        message: Some(message.into()),
    };
    (StatusCode::OK, Json(body))
}

/// Rendered HTML document with an explicit status.
pub fn page(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

/// Post/redirect/get: 303 so the browser follows up with a GET.
pub fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}

/// Redirect that also stores a cookie.
pub fn see_other_with_cookie(location: &str, cookie: &str) -> Response {
    let mut response = see_other(location);
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!("Dropping unencodable cookie: {}", e),
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn see_other_uses_303() {
        let response = see_other("/events/abc");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/events/abc");
    }

    #[test]
    fn cookie_is_attached_to_redirect() {
        let response = see_other_with_cookie("/admin/events", "token=abc; Path=/");
        assert_eq!(response.headers()[header::SET_COOKIE], "token=abc; Path=/");
    }

    #[test]
    fn page_keeps_status() {
        let response = page(StatusCode::CONFLICT, "<p>busy</p>".to_string());
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
