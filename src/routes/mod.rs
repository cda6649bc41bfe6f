use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{admin, auth, hackathon, health_check, not_found, public};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(public::home))
        .route("/events", get(public::events_list))
        .route("/events/:id", get(public::event_detail))
        .route("/auth/login", get(auth::login_form).post(auth::login))
        .route("/superadmin", get(admin::superadmin))
        .route("/admin", get(admin::landing))
        .route("/admin/events", get(admin::events))
        .route(
            "/admin/events/addNewEvent",
            get(admin::new_event).post(admin::create_event),
        )
        .route("/admin/events/:id/delete", post(admin::delete_event))
        .route(
            "/admin/events/:id/edit",
            get(admin::edit_event).post(admin::update_event),
        )
        .route(
            "/hackathon/register",
            get(hackathon::register_form).post(hackathon::register_team),
        )
        .route("/admin/hackathon", get(hackathon::roster))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::io::{HttpResponse, MockHttpClient};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use tower::ServiceExt;

    const EVENTS_JSON: &str = r#"[
        {"id":"b","title":"Robotics Night","eventDateTime":"2025-06-01T00:00:00Z"},
        {"id":"a","title":"Career Fair","eventDateTime":"2025-01-01T00:00:00Z"}
    ]"#;

    fn app(mock: MockHttpClient) -> Router {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        create_routes(AppState::new(config, Arc::new(mock)))
    }

    fn ok(body: &str) -> Result<HttpResponse, crate::api::ApiError> {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn admin_get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, "token=secret")
            .body(Body::empty())
            .unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, "token=secret")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_json_envelope() {
        let response = app(MockHttpClient::new()).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["service"], "branch-portal");
    }

    #[tokio::test]
    async fn admin_events_requires_token() {
        let response = app(MockHttpClient::new())
            .oneshot(get("/admin/events"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/auth/login");
    }

    #[tokio::test]
    async fn admin_events_are_listed_oldest_first() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:5000/events")
            .returning(|_| Box::pin(async { ok(EVENTS_JSON) }));

        let response = app(mock).oneshot(admin_get("/admin/events?confirm=a")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = text(response).await;
        let career = html.find("Career Fair").unwrap();
        let robotics = html.find("Robotics Night").unwrap();
        assert!(career < robotics);
        assert!(html.contains(r#"action="/admin/events/a/delete""#));
    }

    #[tokio::test]
    async fn public_list_is_newest_first_and_ignores_unknown_filter() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { ok(EVENTS_JSON) }));

        let response = app(mock).oneshot(get("/events?filter=bogus")).await.unwrap();
        let html = text(response).await;
        assert!(html.find("Robotics Night").unwrap() < html.find("Career Fair").unwrap());
    }

    #[tokio::test]
    async fn upcoming_filter_from_query_hides_past_events() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { ok(EVENTS_JSON) }));

        let html = text(app(mock).oneshot(get("/events?filter=upcoming")).await.unwrap()).await;
        assert!(!html.contains("Robotics Night"));
        assert!(!html.contains("Career Fair"));
        assert!(html.contains("empty-state"));
    }

    #[tokio::test]
    async fn created_event_redirect_encodes_id() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().times(1).returning(|_, _| {
            Box::pin(async { ok(r#"{"id":"evt 9/x","eventDateTime":"2025-04-10T12:00:00.000Z"}"#) })
        });

        let body = "title=Career+Fair&description=Meet+employers+on+campus.\
                    &eventDateTime=2025-04-10T12%3A00&registrationLink=&action=submit";
        let response = app(mock)
            .oneshot(post_form("/admin/events/addNewEvent", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/events/evt%209%2Fx");
    }

    #[tokio::test]
    async fn delete_removes_row_and_shows_toast() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .returning(|_| Box::pin(async { ok(EVENTS_JSON) }));
        mock.expect_delete()
            .withf(|url| url == "http://localhost:5000/events/delete-event/a")
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 204,
                        body: String::new(),
                    })
                })
            });

        let response = app(mock)
            .oneshot(post_form("/admin/events/a/delete", ""))
            .await
            .unwrap();
        let html = text(response).await;
        assert!(html.contains("Event deleted"));
        assert!(!html.contains("Career Fair"));
        assert!(html.contains("Robotics Night"));
    }

    #[tokio::test]
    async fn valid_create_redirects_to_new_event() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().times(1).returning(|_, _| {
            Box::pin(async { ok(r#"{"id":"evt-9","eventDateTime":"2025-04-10T12:00:00.000Z"}"#) })
        });

        let body = "title=Career+Fair&description=Meet+employers+on+campus.\
                    &eventDateTime=2025-04-10T12%3A00&registrationLink=&action=submit";
        let response = app(mock)
            .oneshot(post_form("/admin/events/addNewEvent", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/events/evt-9");
    }

    #[tokio::test]
    async fn invalid_create_rerenders_with_errors() {
        let body = "title=C&description=short&eventDateTime=&action=submit";
        let response = app(MockHttpClient::new())
            .oneshot(post_form("/admin/events/addNewEvent", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = text(response).await;
        assert!(html.contains("Title too short"));
        assert!(html.contains("Description too short"));
    }

    #[tokio::test]
    async fn add_photo_button_keeps_values_without_submitting() {
        let body = "title=Career+Fair&description=x&eventDateTime=&action=add";
        let response = app(MockHttpClient::new())
            .oneshot(post_form("/admin/events/addNewEvent", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = text(response).await;
        assert!(html.contains(r#"value="Career Fair""#));
        assert!(html.contains("photos.0.photoLink"));
    }

    #[tokio::test]
    async fn team_registration_shows_confirmation() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .withf(|url, _| url == "http://localhost:5000/hackathon/register-team")
            .times(1)
            .returning(|_, _| Box::pin(async { ok("{}") }));

        let member = |i: usize| {
            format!(
                "members.{i}.fullName=Student+{i}&members.{i}.nuId=20220{i}&members.{i}.iin=000000000000\
                 &members.{i}.email=s{i}%40nu.edu.kz&members.{i}.yearOfStudy=2&members.{i}.major=CS",
                i = i
            )
        };
        let body = format!("teamName=Segfault&{}&{}&action=submit", member(0), member(1));
        let response = app(mock)
            .oneshot(post_form("/hackathon/register", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Registration Successful!"));
    }

    #[tokio::test]
    async fn roster_failure_renders_inline_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 500,
                    body: String::new(),
                })
            })
        });

        let response = app(mock)
            .oneshot(get("/admin/hackathon?expanded=oops"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Failed to fetch teams"));
    }

    #[tokio::test]
    async fn login_stores_token_cookie() {
        let request = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("token=abc"))
            .unwrap();
        let response = app(MockHttpClient::new()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin/events");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("token=abc;"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn unknown_path_is_404_page() {
        let response = app(MockHttpClient::new())
            .oneshot(get("/nope"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(text(response).await.contains("Page not found"));
    }
}
