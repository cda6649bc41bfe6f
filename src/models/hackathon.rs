use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonTeamMember {
    pub full_name: String,
    /// Institutional (university) id
    pub nu_id: String,
    /// National id number, 12 characters
    pub iin: String,
    pub email: String,
    pub year_of_study: String,
    pub major: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonTeam {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<HackathonTeamMember>,
}

impl HackathonTeam {
    /// Case-insensitive substring match over the team name and the
    /// name, email and NU ID of every member.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        let hit = |field: &str| field.to_lowercase().contains(&needle);

        hit(&self.team_name)
            || self
                .members
                .iter()
                .any(|m| hit(&m.full_name) || hit(&m.email) || hit(&m.nu_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamCommand {
    pub team_name: String,
    pub members: Vec<HackathonTeamMember>,
}
