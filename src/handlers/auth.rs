use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use super::{public_page, TOKEN_COOKIE};
use crate::utils::response::see_other_with_cookie;
use crate::views::{escape, query_value};

/// Where a successful sign-in lands
const AFTER_LOGIN: &str = "/admin/events";

fn login_body(error: Option<&str>) -> String {
    let error = error
        .map(|message| format!(r#"<p class="field-error">{}</p>"#, escape(message)))
        .unwrap_or_default();
    format!(
        r#"<section class="container">
    <h1 class="page-title">sign in</h1>
    <form method="post" action="/auth/login">
        <label class="field">
            <span>Access token</span>
            <input type="password" name="token" autocomplete="off">
            {}
        </label>
        <button class="button button-primary" type="submit">Sign in</button>
    </form>
</section>"#,
        error
    )
}

pub async fn login_form() -> Response {
    public_page(StatusCode::OK, "Sign in", &login_body(None))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub token: String,
}

pub async fn login(Form(form): Form<LoginForm>) -> Response {
    let token = form.token.trim();
    if token.is_empty() {
        return public_page(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Sign in",
            &login_body(Some("Access token is required")),
        );
    }

    tracing::info!("Admin token stored");
    let cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/",
        TOKEN_COOKIE,
        query_value(token)
    );
    see_other_with_cookie(AFTER_LOGIN, &cookie)
}
