//! Form markup shared by the event editor and the team registration page

use super::escape;
use crate::forms::FieldErrors;
use crate::pages::event_editor::{EditorMode, EventEditorPage};

/// Inline message under a field, empty when the field is valid.
pub fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|message| format!(r#"<p class="field-error">{}</p>"#, escape(message)))
        .unwrap_or_default()
}

pub fn text_input(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    placeholder: &str,
    errors: &FieldErrors,
) -> String {
    format!(
        r#"<label class="field">
    <span>{label}</span>
    <input type="{kind}" name="{name}" value="{value}" placeholder="{placeholder}">
    {error}
</label>"#,
        label = escape(label),
        kind = kind,
        name = escape(name),
        value = escape(value),
        placeholder = escape(placeholder),
        error = field_error(errors, name),
    )
}

pub fn hidden_submission_id(id: &uuid::Uuid) -> String {
    format!(r#"<input type="hidden" name="submissionId" value="{}">"#, id)
}

/// Banner for a failed submit, shown above the form
pub fn submit_error(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<div class="error-box" role="alert">{}</div>"#, escape(m)))
        .unwrap_or_default()
}

fn photo_rows(page: &EventEditorPage) -> String {
    if page.form.photos.is_empty() {
        return r#"<p class="muted">No photos added yet.</p>"#.to_string();
    }
    page.form
        .photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let id_field = photo
                .id
                .as_deref()
                .map(|id| {
                    format!(
                        r#"<input type="hidden" name="photos.{}.id" value="{}">"#,
                        i,
                        escape(id)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<fieldset class="photo-row">
    {id_field}
    {link}
    {alt}
    <button class="button" type="submit" name="action" value="remove:{i}">Remove</button>
</fieldset>"#,
                id_field = id_field,
                link = text_input(
                    "Photo URL",
                    &format!("photos.{}.photoLink", i),
                    "url",
                    &photo.photo_link,
                    "https://...",
                    &page.errors,
                ),
                alt = text_input(
                    "Alternative text",
                    &format!("photos.{}.alternativeText", i),
                    "text",
                    &photo.alternative_text,
                    "Alternative text",
                    &page.errors,
                ),
                i = i,
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Add/edit event form
pub fn event_form(page: &EventEditorPage) -> String {
    let (heading, action, submit_label) = match &page.mode {
        EditorMode::Create => (
            "Add New Event".to_string(),
            "/admin/events/addNewEvent".to_string(),
            "Create Event",
        ),
        EditorMode::Edit { id } => (
            "Edit Event".to_string(),
            format!("/admin/events/{}/edit", super::path_segment(id)),
            "Save Changes",
        ),
    };
    let form = &page.form;

    format!(
        r#"<h1>{heading}</h1>
{submit_error}
<form class="event-form" method="post" action="{action}">
    {submission_id}
    {title}
    <label class="field">
        <span>Description</span>
        <textarea name="description" rows="6" placeholder="Describe the event...">{description}</textarea>
        {description_error}
    </label>
    {date}
    {registration}
    <h2>Photos</h2>
    {photos}
    <button class="button" type="submit" name="action" value="add">Add Photo</button>
    <div class="form-actions">
        <a class="button" href="/admin/events">Cancel</a>
        <button class="button button-primary" type="submit" name="action" value="submit">{submit_label}</button>
    </div>
</form>"#,
        heading = heading,
        submit_error = submit_error(page.submit_error.as_deref()),
        action = action,
        submission_id = hidden_submission_id(&form.submission_id),
        title = text_input(
            "Title",
            "title",
            "text",
            &form.title,
            "Amazing Engineering Talk",
            &page.errors
        ),
        description = escape(&form.description),
        description_error = field_error(&page.errors, "description"),
        date = text_input(
            "Event date & time",
            "eventDateTime",
            "datetime-local",
            &form.event_date_time,
            "",
            &page.errors
        ),
        registration = text_input(
            "Registration link",
            "registrationLink",
            "url",
            &form.registration_link,
            "https://...",
            &page.errors
        ),
        photos = photo_rows(page),
        submit_label = submit_label,
    )
}
