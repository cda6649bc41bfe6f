use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use super::{admin_page, require_token};
use crate::forms::{EventForm, FormData};
use crate::pages::admin_events::AdminEventsPage;
use crate::pages::event_editor::EventEditorPage;
use crate::pages::submission::submission_id;
use crate::pages::SubmitOutcome;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::see_other;
use crate::views::event::admin_events_body;
use crate::views::forms::event_form;
use crate::views::path_segment;

pub async fn landing() -> Response {
    admin_page(
        StatusCode::OK,
        "Admin",
        r#"<h1>Admin</h1>
<div class="admin-links">
    <a class="button button-primary" href="/admin/events">Manage Events</a>
    <a class="button button-primary" href="/admin/hackathon">Hackathon Teams</a>
</div>"#,
        None,
    )
}

pub async fn superadmin() -> Response {
    admin_page(
        StatusCode::OK,
        "Super Admin",
        r#"<h1>Super Admin</h1><p>Nothing to manage here yet.</p>"#,
        None,
    )
}

#[derive(Debug, Deserialize)]
pub struct AdminEventsQuery {
    pub confirm: Option<String>,
}

pub async fn events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AdminEventsQuery>,
) -> Result<Response, AppError> {
    require_token(&headers)?;

    let mut page = AdminEventsPage::new();
    page.load(state.events.get_events()).await;
    if let Some(id) = query.confirm.filter(|id| !id.is_empty()) {
        page.request_delete(id);
    }

    Ok(render_events(&state, &page))
}

pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    require_token(&headers)?;

    let data = FormData::new(pairs);
    let Some(_ticket) = state.submissions.try_begin(submission_id(data.get("submissionId"))) else {
        return Err(AppError::Conflict(
            "This event is already being deleted.".to_string(),
        ));
    };

    let mut page = AdminEventsPage::new();
    page.load(state.events.get_events()).await;
    page.request_delete(id);
    if let Some(id) = page.begin_delete() {
        let outcome = state.events.delete_event(&id).await;
        page.finish_delete(outcome);
    }

    Ok(render_events(&state, &page))
}

fn render_events(state: &AppState, page: &AdminEventsPage) -> Response {
    admin_page(
        StatusCode::OK,
        "Events",
        &admin_events_body(page, state.display_offset()),
        page.toast.as_ref(),
    )
}

fn render_editor(page: &EventEditorPage, status: StatusCode) -> Response {
    admin_page(status, "Event", &event_form(page), None)
}

/// Maps a submit outcome to a response; saved events redirect to their page.
async fn submit_editor(state: &AppState, mut page: EventEditorPage, data: &FormData) -> Response {
    if !page.apply_action(data.action()) {
        return render_editor(&page, StatusCode::OK);
    }

    match page
        .submit(state.display_offset(), &state.submissions, &state.events)
        .await
    {
        SubmitOutcome::Saved(id) => see_other(&format!("/events/{}", path_segment(&id))),
        SubmitOutcome::Invalid => render_editor(&page, StatusCode::UNPROCESSABLE_ENTITY),
        SubmitOutcome::Duplicate => render_editor(&page, StatusCode::CONFLICT),
        SubmitOutcome::Failed => render_editor(&page, StatusCode::BAD_GATEWAY),
    }
}

pub async fn new_event(headers: HeaderMap) -> Result<Response, AppError> {
    require_token(&headers)?;
    Ok(render_editor(
        &EventEditorPage::create(EventForm::default()),
        StatusCode::OK,
    ))
}

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    require_token(&headers)?;

    let data = FormData::new(pairs);
    let page = EventEditorPage::create(EventForm::from_form(&data));
    Ok(submit_editor(&state, page, &data).await)
}

pub async fn edit_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    require_token(&headers)?;

    let event = state.events.get_event(&id).await.map_err(|e| {
        if e.is_not_found() {
            AppError::NotFound(e.user_message("Event not found"))
        } else {
            AppError::BackendError(e)
        }
    })?;
    let form = EventForm::from_event(&event, state.display_offset());
    Ok(render_editor(&EventEditorPage::edit(id, form), StatusCode::OK))
}

pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    require_token(&headers)?;

    let data = FormData::new(pairs);
    let page = EventEditorPage::edit(id, EventForm::from_form(&data));
    Ok(submit_editor(&state, page, &data).await)
}
