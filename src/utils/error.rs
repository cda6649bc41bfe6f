use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::ApiError;
use crate::utils::response::{page, see_other};
use crate::views::layout::error_page;

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend error")]
    BackendError(#[from] ApiError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthError(_) => StatusCode::SEE_OTHER,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BackendError(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppError::AuthError(_) => "Sign in required",
            AppError::NotFound(_) => "Page not found",
            AppError::Conflict(_) => "Already in progress",
            AppError::BackendError(_) => "Service unavailable",
        }
    }

    fn log(&self) {
        match self {
            AppError::AuthError(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                warn!(error = ?self, message = %msg, "Request rejected");
            }
            AppError::BackendError(e) => {
                error!(error = ?e, "Backend error");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        if let AppError::AuthError(_) = self {
            return see_other(LOGIN_PATH);
        }

        // Only expose a high-level message to the visitor
        let public_message = match &self {
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::AuthError(msg) => msg.clone(),
            AppError::BackendError(e) => e.user_message("The events service is not reachable right now."),
        };

        page(self.status_code(), error_page(self.title(), &public_message))
    }
}
