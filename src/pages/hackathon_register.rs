use super::{SubmissionGuard, SubmitOutcome};
use crate::api::HackathonClient;
use crate::forms::{FieldErrors, FormAction, TeamForm};

/// Team registration page: form, inline errors and the confirmation view
#[derive(Debug, Clone, Default)]
pub struct RegisterPage {
    pub form: TeamForm,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
    pub succeeded: bool,
}

impl RegisterPage {
    pub fn new(form: TeamForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Handles add/remove member buttons. Returns `true` when the form
    /// should be submitted instead.
    pub fn apply_action(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::AddRow => {
                self.form.add_member();
                false
            }
            FormAction::RemoveRow(index) => {
                self.form.remove_member(index);
                false
            }
            FormAction::Submit => true,
        }
    }

    pub async fn submit(&mut self, guard: &SubmissionGuard, hackathon: &HackathonClient) -> SubmitOutcome {
        self.submit_error = None;
        let command = match self.form.validate() {
            Ok(command) => {
                self.errors = FieldErrors::new();
                command
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Team registration rejected");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };

        let Some(_ticket) = guard.try_begin(self.form.submission_id) else {
            self.submit_error = Some("This registration is already being processed.".to_string());
            return SubmitOutcome::Duplicate;
        };

        match hackathon.register_team(&command).await {
            Ok(_) => {
                tracing::info!(
                    team = %command.team_name,
                    members = command.members.len(),
                    "Hackathon team registered"
                );
                self.succeeded = true;
                self.form = TeamForm::default();
                SubmitOutcome::Saved(command.team_name)
            }
            Err(e) => {
                self.submit_error = Some(e.user_message("Registration failed. Please try again."));
                SubmitOutcome::Failed
            }
        }
    }
}
