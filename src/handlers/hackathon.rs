use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use super::{admin_page, public_page};
use crate::forms::{FormData, TeamForm};
use crate::pages::hackathon_register::RegisterPage;
use crate::pages::hackathon_roster::RosterPage;
use crate::pages::SubmitOutcome;
use crate::state::AppState;
use crate::views::hackathon::{register_body, roster_body};

const REGISTER_TITLE: &str = "Hackathon 2.0 Registration";

pub async fn register_form() -> Response {
    public_page(StatusCode::OK, REGISTER_TITLE, &register_body(&RegisterPage::default()))
}

pub async fn register_team(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let data = FormData::new(pairs);
    let mut page = RegisterPage::new(TeamForm::from_form(&data));
    if !page.apply_action(data.action()) {
        return public_page(StatusCode::OK, REGISTER_TITLE, &register_body(&page));
    }

    let status = match page.submit(&state.submissions, &state.hackathon).await {
        SubmitOutcome::Saved(_) => StatusCode::OK,
        SubmitOutcome::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Duplicate => StatusCode::CONFLICT,
        SubmitOutcome::Failed => StatusCode::BAD_GATEWAY,
    };
    public_page(status, REGISTER_TITLE, &register_body(&page))
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub q: Option<String>,
    pub expanded: Option<String>,
}

pub async fn roster(State(state): State<AppState>, Query(query): Query<RosterQuery>) -> Response {
    let expanded = query.expanded.and_then(|raw| raw.parse::<usize>().ok());
    let mut page = RosterPage::new(query.q.unwrap_or_default(), expanded);
    page.load(state.hackathon.get_teams()).await;

    admin_page(StatusCode::OK, "Hackathon Teams", &roster_body(&page), None)
}
