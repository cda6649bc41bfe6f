use super::Loader;
use crate::api::ApiError;
use crate::models::HackathonTeam;

/// Aggregate numbers shown above the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub team_count: usize,
    pub member_count: usize,
    /// One decimal place, or "0" when there are no teams
    pub average_team_size: String,
}

impl RosterStats {
    pub fn of(teams: &[HackathonTeam]) -> Self {
        let team_count = teams.len();
        let member_count = teams.iter().map(|t| t.members.len()).sum();
        let average_team_size = if team_count == 0 {
            "0".to_string()
        } else {
            // tenths, rounding halves up
            let tenths = (member_count * 20 + team_count) / (2 * team_count);
            format!("{}.{}", tenths / 10, tenths % 10)
        };
        Self {
            team_count,
            member_count,
            average_team_size,
        }
    }
}

/// Admin roster: search plus a single expanded team.
///
/// Teams are identified by their position in the fetched roster, so two
/// teams sharing a name expand independently.
#[derive(Debug, Clone, Default)]
pub struct RosterPage {
    pub teams: Loader<Vec<HackathonTeam>>,
    pub search: String,
    pub expanded: Option<usize>,
}

impl RosterPage {
    pub fn new(search: impl Into<String>, expanded: Option<usize>) -> Self {
        Self {
            teams: Loader::new(),
            search: search.into(),
            expanded,
        }
    }

    pub async fn load<F>(&mut self, fetch: F)
    where
        F: std::future::Future<Output = Result<Vec<HackathonTeam>, ApiError>>,
    {
        let generation = self.teams.begin();
        let outcome = fetch.await;
        self.teams.resolve(generation, outcome, "Failed to fetch teams");

        let count = self.teams.loaded().map_or(0, Vec::len);
        if self.expanded.is_some_and(|index| index >= count) {
            self.expanded = None;
        }
    }

    /// Expansion that clicking `index` would produce: it expands `index` and
    /// collapses any other, or collapses `index` if it is already expanded.
    pub fn toggled(&self, index: usize) -> Option<usize> {
        if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Teams matching the search, with their stable roster index.
    pub fn filtered(&self) -> Vec<(usize, &HackathonTeam)> {
        self.teams
            .loaded()
            .map(|teams| {
                teams
                    .iter()
                    .enumerate()
                    .filter(|(_, team)| team.matches(&self.search))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Stats over the whole roster, not just the search results.
    pub fn stats(&self) -> RosterStats {
        RosterStats::of(self.teams.loaded().map(Vec::as_slice).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HackathonTeamMember;
    use crate::pages::LoadState;

    fn member(name: &str, email: &str, nu_id: &str) -> HackathonTeamMember {
        HackathonTeamMember {
            full_name: name.to_string(),
            nu_id: nu_id.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn roster() -> Vec<HackathonTeam> {
        vec![
            HackathonTeam {
                team_name: "Tensor Tigers".to_string(),
                members: vec![
                    member("Dana Bekova", "dana@nu.edu.kz", "202101"),
                    member("Timur Ali", "timur@nu.edu.kz", "202102"),
                ],
            },
            HackathonTeam {
                team_name: "Gradient Gang".to_string(),
                members: vec![
                    member("Alua K", "alua@nu.edu.kz", "202201"),
                    member("Max P", "max@nu.edu.kz", "202202"),
                    member("Ivan S", "ivan@nu.edu.kz", "202203"),
                ],
            },
            HackathonTeam {
                team_name: "Tensor Tigers".to_string(),
                members: vec![
                    member("Someone Else", "else@nu.edu.kz", "202301"),
                    member("Another", "another@nu.edu.kz", "202302"),
                ],
            },
        ]
    }

    async fn loaded(search: &str) -> RosterPage {
        let mut page = RosterPage::new(search, None);
        page.load(async { Ok(roster()) }).await;
        page
    }

    fn indexes(page: &RosterPage) -> Vec<usize> {
        page.filtered().into_iter().map(|(i, _)| i).collect()
    }

    #[tokio::test]
    async fn search_matches_team_and_member_fields() {
        assert_eq!(indexes(&loaded("").await), [0, 1, 2]);
        assert_eq!(indexes(&loaded("gradient").await), [1]);
        assert_eq!(indexes(&loaded("DANA").await), [0]);
        assert_eq!(indexes(&loaded("max@").await), [1]);
        assert_eq!(indexes(&loaded("2023").await), [2]);
        assert!(indexes(&loaded("nobody").await).is_empty());
    }

    #[tokio::test]
    async fn expansion_is_single_select_by_index() {
        let mut page = loaded("").await;
        page.expanded = page.toggled(0);
        assert!(page.is_expanded(0));
        assert!(!page.is_expanded(2), "same-named team stays collapsed");

        page.expanded = page.toggled(2);
        assert!(page.is_expanded(2));
        assert!(!page.is_expanded(0));

        page.expanded = page.toggled(2);
        assert_eq!(page.expanded, None);
    }

    #[tokio::test]
    async fn out_of_range_expansion_is_cleared_on_load() {
        let mut page = RosterPage::new("", Some(7));
        page.load(async { Ok(roster()) }).await;
        assert_eq!(page.expanded, None);
    }

    #[tokio::test]
    async fn stats_cover_whole_roster() {
        let page = loaded("gradient").await;
        let stats = page.stats();
        assert_eq!(stats.team_count, 3);
        assert_eq!(stats.member_count, 7);
        assert_eq!(stats.average_team_size, "2.3");
    }

    #[test]
    fn average_rounds_halves_up() {
        let team = |size: usize| HackathonTeam {
            team_name: format!("Team of {}", size),
            members: vec![HackathonTeamMember::default(); size],
        };
        let nine_over_four = RosterStats::of(&[team(2), team(2), team(2), team(3)]);
        assert_eq!(nine_over_four.average_team_size, "2.3");
        let thirteen_over_four = RosterStats::of(&[team(3), team(3), team(3), team(4)]);
        assert_eq!(thirteen_over_four.average_team_size, "3.3");
        assert_eq!(RosterStats::of(&[team(2), team(3)]).average_team_size, "2.5");
        assert_eq!(RosterStats::of(&[team(4), team(4)]).average_team_size, "4.0");
    }

    #[test]
    fn stats_for_empty_roster() {
        let stats = RosterStats::of(&[]);
        assert_eq!(stats.team_count, 0);
        assert_eq!(stats.average_team_size, "0");
    }

    #[tokio::test]
    async fn load_failure_uses_fallback() {
        let mut page = RosterPage::new("", None);
        page.load(async { Err(ApiError::Transport("down".to_string())) })
            .await;
        assert_eq!(
            page.teams.state(),
            &LoadState::Failed("Failed to fetch teams".to_string())
        );
        assert_eq!(page.stats().team_count, 0);
    }
}
