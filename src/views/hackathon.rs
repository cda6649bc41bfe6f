use super::forms::{field_error, hidden_submission_id, submit_error, text_input};
use super::layout::load_state;
use super::{escape, query_value};
use crate::forms::team_form::{MAX_MEMBERS, YEARS_OF_STUDY};
use crate::forms::{FieldErrors, MemberRow, TeamForm};
use crate::models::HackathonTeam;
use crate::pages::hackathon_register::RegisterPage;
use crate::pages::hackathon_roster::RosterPage;

fn year_select(index: usize, selected: &str, errors: &FieldErrors) -> String {
    let name = format!("members.{}.yearOfStudy", index);
    let options: String = YEARS_OF_STUDY
        .iter()
        .map(|(value, label)| {
            let flag = if *value == selected { " selected" } else { "" };
            format!(r#"<option value="{}"{}>{}</option>"#, value, flag, label)
        })
        .collect();
    format!(
        r#"<label class="field">
    <span>Year of study</span>
    <select name="{name}"><option value="">Select year</option>{options}</select>
    {error}
</label>"#,
        name = name,
        options = options,
        error = field_error(errors, &name),
    )
}

fn member_fields(form: &TeamForm, index: usize, member: &MemberRow, errors: &FieldErrors) -> String {
    let field = |label: &str, key: &str, kind: &str, value: &str| {
        text_input(label, &format!("members.{}.{}", index, key), kind, value, label, errors)
    };
    let remove = if form.can_remove_member() {
        format!(
            r#"<button class="button" type="submit" name="action" value="remove:{}">Remove</button>"#,
            index
        )
    } else {
        String::new()
    };

    format!(
        r#"<fieldset class="member-row">
    <legend>Member {number}</legend>
    {full_name}{nu_id}{iin}{email}{year}{major}
    {remove}
</fieldset>"#,
        number = index + 1,
        full_name = field("Full name", "fullName", "text", &member.full_name),
        nu_id = field("NU ID", "nuId", "text", &member.nu_id),
        iin = field("IIN", "iin", "text", &member.iin),
        email = field("Email address", "email", "email", &member.email),
        year = year_select(index, &member.year_of_study, errors),
        major = field("Major", "major", "text", &member.major),
        remove = remove,
    )
}

fn success_view() -> &'static str {
    r#"<div class="success-card">
    <h2>Registration Successful!</h2>
    <p>Your team has been registered for the hackathon.</p>
    <a class="button button-primary" href="/hackathon/register">Register Another Team</a>
</div>"#
}

/// Registration form, or the confirmation once a team has been registered
pub fn register_body(page: &RegisterPage) -> String {
    let content = if page.succeeded {
        success_view().to_string()
    } else {
        let form = &page.form;
        let members: String = form
            .members
            .iter()
            .enumerate()
            .map(|(i, member)| member_fields(form, i, member, &page.errors))
            .collect();
        let add = if form.can_add_member() {
            r#"<button class="button" type="submit" name="action" value="add">Add Member</button>"#
        } else {
            ""
        };

        format!(
            r#"{submit_error}
<form class="team-form" method="post" action="/hackathon/register">
    {submission_id}
    {team_name}
    <h2>Team Members ({count}/{max})</h2>
    {members_error}
    {members}
    {add}
    <button class="button button-primary" type="submit" name="action" value="submit">Register Team</button>
</form>"#,
            submit_error = submit_error(page.submit_error.as_deref()),
            submission_id = hidden_submission_id(&form.submission_id),
            team_name = text_input(
                "Team name",
                "teamName",
                "text",
                &form.team_name,
                "Enter your team name",
                &page.errors
            ),
            count = form.members.len(),
            max = MAX_MEMBERS,
            members_error = field_error(&page.errors, "members"),
            members = members,
            add = add,
        )
    };

    format!(
        r#"<section class="container">
    <h1 class="page-title"><span class="accent">hackathon</span>2.0</h1>
    {}
</section>"#,
        content
    )
}

fn member_detail(member: &MemberRow) -> String {
    format!(
        r#"<li class="member-detail">
    <strong>{name}</strong>
    <span>NU ID: {nu_id}</span>
    <span>IIN: {iin}</span>
    <span>Email: {email}</span>
    <span>Year: {year}</span>
    <span>Major: {major}</span>
</li>"#,
        name = escape(&member.full_name),
        nu_id = escape(&member.nu_id),
        iin = escape(&member.iin),
        email = escape(&member.email),
        year = escape(&member.year_of_study),
        major = escape(&member.major),
    )
}

fn team_row(page: &RosterPage, index: usize, team: &HackathonTeam) -> String {
    let mut href = format!("/admin/hackathon?q={}", query_value(&page.search));
    if let Some(next) = page.toggled(index) {
        href.push_str(&format!("&expanded={}", next));
    }
    let count = team.members.len();
    let details = if page.is_expanded(index) {
        let members: String = team.members.iter().map(member_detail).collect();
        format!(r#"<ul class="team-members">{}</ul>"#, members)
    } else {
        String::new()
    };

    format!(
        r#"<div class="team">
    <a class="team-toggle" href="{href}" aria-expanded="{expanded}">
        <h3>{name}</h3>
        <span>{count} {noun}</span>
    </a>
    {details}
</div>"#,
        href = escape(&href),
        expanded = page.is_expanded(index),
        name = escape(&team.team_name),
        count = count,
        noun = if count == 1 { "member" } else { "members" },
        details = details,
    )
}

/// Admin roster with stats, search and expandable teams
pub fn roster_body(page: &RosterPage) -> String {
    let content = load_state(page.teams.state(), "Error", |_| {
        let stats = page.stats();
        let teams: String = page
            .filtered()
            .into_iter()
            .map(|(index, team)| team_row(page, index, team))
            .collect();
        let list = if teams.is_empty() {
            r#"<p class="empty-state">No teams found.</p>"#.to_string()
        } else {
            teams
        };

        format!(
            r#"<div class="stats">
    <div><span>Total Teams</span><strong>{teams}</strong></div>
    <div><span>Total Participants</span><strong>{members}</strong></div>
    <div><span>Avg Team Size</span><strong>{average}</strong></div>
</div>
<form class="search" method="get" action="/admin/hackathon">
    <input type="search" name="q" value="{search}" placeholder="Search teams or members">
    <button class="button" type="submit">Search</button>
</form>
{list}"#,
            teams = stats.team_count,
            members = stats.member_count,
            average = stats.average_team_size,
            search = escape(&page.search),
            list = list,
        )
    });

    format!("<h1>Hackathon</h1>\n{}", content)
}
