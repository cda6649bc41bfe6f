use chrono::FixedOffset;

use super::{SubmissionGuard, SubmitOutcome};
use crate::api::EventsClient;
use crate::forms::{EventForm, FieldErrors, FormAction};
use crate::models::UpdateEventCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

/// Add/edit event form page
#[derive(Debug, Clone)]
pub struct EventEditorPage {
    pub mode: EditorMode,
    pub form: EventForm,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
}

impl EventEditorPage {
    pub fn create(form: EventForm) -> Self {
        Self {
            mode: EditorMode::Create,
            form,
            errors: FieldErrors::new(),
            submit_error: None,
        }
    }

    pub fn edit(id: impl Into<String>, form: EventForm) -> Self {
        Self {
            mode: EditorMode::Edit { id: id.into() },
            ..Self::create(form)
        }
    }

    /// Handles add/remove photo buttons. Returns `true` when the form
    /// should be submitted instead.
    pub fn apply_action(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::AddRow => {
                self.form.add_photo();
                false
            }
            FormAction::RemoveRow(index) => {
                self.form.remove_photo(index);
                false
            }
            FormAction::Submit => true,
        }
    }

    fn failure_fallback(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Failed to create event",
            EditorMode::Edit { .. } => "Failed to update event",
        }
    }

    pub async fn submit(
        &mut self,
        offset: FixedOffset,
        guard: &SubmissionGuard,
        events: &EventsClient,
    ) -> SubmitOutcome {
        self.submit_error = None;
        let valid = match self.form.validate(offset) {
            Ok(valid) => {
                self.errors = FieldErrors::new();
                valid
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Event form rejected");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        let Some(_ticket) = guard.try_begin(self.form.submission_id) else {
            self.submit_error = Some("This event is already being saved.".to_string());
            return SubmitOutcome::Duplicate;
        };

        let result = match &self.mode {
            EditorMode::Create => events.create_event(&valid.into_create_command()).await,
            EditorMode::Edit { id } => {
                let command = UpdateEventCommand {
                    event_dto: valid.into_event(id.clone()),
                };
                events.update_event(&command).await
            }
        };

        match result {
            Ok(saved) => {
                tracing::info!(event_id = %saved.id, mode = ?self.mode, "Event saved");
                SubmitOutcome::Saved(saved.id)
            }
            Err(e) => {
                self.submit_error = Some(e.user_message(self.failure_fallback()));
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::io::{HttpResponse, MockHttpClient};
    use std::sync::Arc;
    use url::Url;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn client(mock: MockHttpClient) -> EventsClient {
        EventsClient::new(Url::parse("http://backend.test").unwrap(), Arc::new(mock))
    }

    fn form() -> EventForm {
        EventForm {
            title: "Career Fair".to_string(),
            description: "Meet engineering employers on campus.".to_string(),
            event_date_time: "2025-04-10T12:00".to_string(),
            ..EventForm::default()
        }
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let mock = MockHttpClient::new();
        let mut page = EventEditorPage::create(EventForm {
            title: "C".to_string(),
            ..form()
        });

        let outcome = page.submit(utc(), &SubmissionGuard::new(), &client(mock)).await;
        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(page.errors.get("title"), Some("Title too short"));
    }

    #[tokio::test]
    async fn create_returns_new_id() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().times(1).returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 201,
                    body: r#"{"id":"evt-9","eventDateTime":"2025-04-10T12:00:00.000Z"}"#.to_string(),
                })
            })
        });

        let guard = SubmissionGuard::new();
        let mut page = EventEditorPage::create(form());
        let outcome = page.submit(utc(), &guard, &client(mock)).await;
        assert_eq!(outcome, SubmitOutcome::Saved("evt-9".to_string()));
        assert_eq!(guard.in_flight(), 0);
    }

    #[tokio::test]
    async fn failure_keeps_values_and_shows_message() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 400,
                    body: r#"{"message":"Date is in the past"}"#.to_string(),
                })
            })
        });

        let mut page = EventEditorPage::create(form());
        let outcome = page.submit(utc(), &SubmissionGuard::new(), &client(mock)).await;
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(page.submit_error.as_deref(), Some("Date is in the past"));
        assert_eq!(page.form.title, "Career Fair");
    }

    #[tokio::test]
    async fn duplicate_submission_is_refused() {
        let mock = MockHttpClient::new();
        let guard = SubmissionGuard::new();
        let page_form = form();
        let _in_flight = guard.try_begin(page_form.submission_id).unwrap();

        let mut page = EventEditorPage::create(page_form);
        let outcome = page.submit(utc(), &guard, &client(mock)).await;
        assert_eq!(outcome, SubmitOutcome::Duplicate);
    }

    #[tokio::test]
    async fn edit_sends_update_with_route_id() {
        let mut mock = MockHttpClient::new();
        mock.expect_put_json()
            .withf(|_, body| {
                let value: serde_json::Value = serde_json::from_str(body).unwrap();
                value["eventDto"]["id"] == "e1" && value["eventDto"]["hasRegistrationLink"] == false
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: r#"{"id":"e1","eventDateTime":"2025-04-10T12:00:00.000Z"}"#.to_string(),
                    })
                })
            });

        let mut page = EventEditorPage::edit("e1", form());
        let outcome = page.submit(utc(), &SubmissionGuard::new(), &client(mock)).await;
        assert_eq!(outcome, SubmitOutcome::Saved("e1".to_string()));
    }

    #[tokio::test]
    async fn edit_failure_uses_update_fallback() {
        let mut mock = MockHttpClient::new();
        mock.expect_put_json()
            .returning(|_, _| Box::pin(async { Err(ApiError::Transport("down".to_string())) }));

        let mut page = EventEditorPage::edit("e1", form());
        page.submit(utc(), &SubmissionGuard::new(), &client(mock)).await;
        assert_eq!(page.submit_error.as_deref(), Some("Failed to update event"));
    }

    #[test]
    fn photo_buttons_do_not_submit() {
        let mut page = EventEditorPage::create(form());
        assert!(!page.apply_action(FormAction::AddRow));
        assert_eq!(page.form.photos.len(), 1);
        assert!(!page.apply_action(FormAction::RemoveRow(0)));
        assert!(page.form.photos.is_empty());
        assert!(page.apply_action(FormAction::Submit));
    }
}
