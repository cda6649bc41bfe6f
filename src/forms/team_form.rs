use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use super::{char_len, FieldErrors, FormData};
use crate::models::{HackathonTeamMember, RegisterTeamCommand};

pub const MIN_MEMBERS: usize = 2;
pub const MAX_MEMBERS: usize = 5;
pub const TEAM_NAME_MAX: usize = 50;
pub const IIN_LEN: usize = 12;

pub const YEARS_OF_STUDY: &[(&str, &str)] = &[
    ("1", "1st Year"),
    ("2", "2nd Year"),
    ("3", "3rd Year"),
    ("4", "4th Year"),
    ("5", "5th Year"),
    ("6", "6th Year"),
];

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

pub type MemberRow = HackathonTeamMember;

/// Team registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamForm {
    pub team_name: String,
    pub members: Vec<MemberRow>,
    pub submission_id: Uuid,
}

impl Default for TeamForm {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            members: vec![MemberRow::default(); MIN_MEMBERS],
            submission_id: Uuid::new_v4(),
        }
    }
}

impl TeamForm {
    pub fn from_form(data: &FormData) -> Self {
        let field = |row: &std::collections::HashMap<&str, &str>, name: &str| {
            row.get(name).copied().unwrap_or_default().to_string()
        };
        let members = data
            .rows("members")
            .into_values()
            .map(|row| MemberRow {
                full_name: field(&row, "fullName"),
                nu_id: field(&row, "nuId"),
                iin: field(&row, "iin"),
                email: field(&row, "email"),
                year_of_study: field(&row, "yearOfStudy"),
                major: field(&row, "major"),
            })
            .collect();

        Self {
            team_name: data.get("teamName").to_string(),
            members,
            submission_id: crate::pages::submission::submission_id(data.get("submissionId")),
        }
    }

    pub fn can_add_member(&self) -> bool {
        self.members.len() < MAX_MEMBERS
    }

    pub fn can_remove_member(&self) -> bool {
        self.members.len() > MIN_MEMBERS
    }

    /// Adds an empty member row unless the team is full.
    pub fn add_member(&mut self) -> bool {
        if !self.can_add_member() {
            return false;
        }
        self.members.push(MemberRow::default());
        true
    }

    /// Removes a member row unless the team is at its minimum size.
    pub fn remove_member(&mut self, index: usize) -> bool {
        if !self.can_remove_member() || index >= self.members.len() {
            return false;
        }
        self.members.remove(index);
        true
    }

    pub fn validate(&self) -> Result<RegisterTeamCommand, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.team_name.is_empty() {
            errors.add("teamName", "Team name is required");
        } else if char_len(&self.team_name) > TEAM_NAME_MAX {
            errors.add("teamName", "Team name must be less than 50 characters");
        }

        if self.members.len() < MIN_MEMBERS {
            errors.add("members", "At least 2 team members are required");
        } else if self.members.len() > MAX_MEMBERS {
            errors.add("members", "Maximum 5 team members allowed");
        }

        for (index, member) in self.members.iter().enumerate() {
            let key = |field: &str| format!("members.{}.{}", index, field);

            if member.full_name.is_empty() {
                errors.add(key("fullName"), "Full name is required");
            }
            if member.nu_id.is_empty() {
                errors.add(key("nuId"), "NU ID is required");
            }
            if char_len(&member.iin) != IIN_LEN {
                errors.add(key("iin"), "IIN must be 12 digits");
            }
            if !is_valid_email(&member.email) {
                errors.add(key("email"), "Invalid email address");
            }
            if member.year_of_study.is_empty() {
                errors.add(key("yearOfStudy"), "Year of study is required");
            }
            if member.major.is_empty() {
                errors.add(key("major"), "Major is required");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterTeamCommand {
            team_name: self.team_name.clone(),
            members: self.members.clone(),
        })
    }
}
