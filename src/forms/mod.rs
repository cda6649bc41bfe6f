//! Typed form state, validation and conversion to backend commands
//!
//! Forms arrive as urlencoded pairs. Repeated rows use dotted, indexed names
//! (`photos.0.photoLink`, `members.1.iin`), which are also the keys used for
//! field errors.

pub mod event_form;
pub mod team_form;

pub use event_form::{EventForm, PhotoRow};
pub use team_form::{MemberRow, TeamForm};

use std::collections::{BTreeMap, HashMap};

/// Raw submitted fields; the last value wins for repeated names.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self {
            fields: pairs.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Fields of the form `{prefix}.{index}.{field}`, grouped by index in order.
    pub fn rows(&self, prefix: &str) -> BTreeMap<usize, HashMap<&str, &str>> {
        let mut rows: BTreeMap<usize, HashMap<&str, &str>> = BTreeMap::new();
        for (name, value) in &self.fields {
            let mut parts = name.splitn(3, '.');
            let (Some(head), Some(index), Some(field)) = (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };
            if head != prefix {
                continue;
            }
            if let Ok(index) = index.parse::<usize>() {
                rows.entry(index).or_default().insert(field, value.as_str());
            }
        }
        rows
    }

    pub fn action(&self) -> FormAction {
        FormAction::parse(self.get("action"))
    }
}

/// Which button submitted the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    AddRow,
    RemoveRow(usize),
}

impl FormAction {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some(("remove", index)) => index
                .parse()
                .map(FormAction::RemoveRow)
                .unwrap_or(FormAction::Submit),
            _ if raw == "add" => FormAction::AddRow,
            _ => FormAction::Submit,
        }
    }
}

/// Field-level validation messages keyed by field path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Length in characters, the unit the length rules are stated in.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let form = data(&[("title", "Hi")]);
        assert_eq!(form.get("title"), "Hi");
        assert_eq!(form.get("description"), "");
    }

    #[test]
    fn rows_are_grouped_by_index() {
        let form = data(&[
            ("members.1.fullName", "B"),
            ("members.0.fullName", "A"),
            ("members.0.email", "a@x.io"),
            ("photos.0.photoLink", "ignored"),
            ("members.x.fullName", "bad index"),
        ]);
        let rows = form.rows("members");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[&0]["fullName"], "A");
        assert_eq!(rows[&0]["email"], "a@x.io");
        assert_eq!(rows[&1]["fullName"], "B");
    }

    #[test]
    fn parses_actions() {
        assert_eq!(FormAction::parse(""), FormAction::Submit);
        assert_eq!(FormAction::parse("submit"), FormAction::Submit);
        assert_eq!(FormAction::parse("add"), FormAction::AddRow);
        assert_eq!(FormAction::parse("remove:3"), FormAction::RemoveRow(3));
        assert_eq!(FormAction::parse("remove:x"), FormAction::Submit);
    }

    #[test]
    fn first_error_per_field_is_kept() {
        let mut errors = FieldErrors::new();
        errors.add("title", "Title too short");
        errors.add("title", "Other");
        assert_eq!(errors.get("title"), Some("Title too short"));
        assert_eq!(errors.len(), 1);
    }
}
