use std::sync::Arc;

use serde_json::Value;
use url::Url;

use super::{decode, encode, endpoint, ensure_success, ApiError};
use crate::io::HttpClient;
use crate::models::{HackathonTeam, RegisterTeamCommand};

/// Client for the `/hackathon` backend resource
#[derive(Clone)]
pub struct HackathonClient {
    base: Url,
    http: Arc<dyn HttpClient>,
}

impl HackathonClient {
    pub fn new(base: Url, http: Arc<dyn HttpClient>) -> Self {
        Self { base, http }
    }

    /// Registers a team. The response body is returned as-is; callers only
    /// care whether the call succeeded.
    pub async fn register_team(&self, command: &RegisterTeamCommand) -> Result<Value, ApiError> {
        let url = endpoint(&self.base, &["hackathon", "register-team"])?;
        let body = encode(command)?;
        let response = ensure_success(self.http.post_json(&url, &body).await?)?;

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str::<Value>(&response.body).unwrap_or(Value::String(response.body)))
    }

    pub async fn get_teams(&self) -> Result<Vec<HackathonTeam>, ApiError> {
        let url = endpoint(&self.base, &["hackathon", "get-hackathon-teams"])?;
        decode(self.http.get(&url).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{HttpResponse, MockHttpClient};
    use crate::models::HackathonTeamMember;

    fn client(mock: MockHttpClient) -> HackathonClient {
        HackathonClient::new(Url::parse("http://backend.test").unwrap(), Arc::new(mock))
    }

    fn command() -> RegisterTeamCommand {
        RegisterTeamCommand {
            team_name: "Null Pointers".to_string(),
            members: vec![HackathonTeamMember::default(), HackathonTeamMember::default()],
        }
    }

    #[tokio::test]
    async fn register_posts_team() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .withf(|url, body| {
                url == "http://backend.test/hackathon/register-team"
                    && body.contains(r#""teamName":"Null Pointers""#)
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: "Team registered".to_string(),
                    })
                })
            });

        let response = client(mock).register_team(&command()).await.unwrap();
        assert_eq!(response, Value::String("Team registered".to_string()));
    }

    #[tokio::test]
    async fn register_surfaces_backend_message() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 400,
                    body: r#"{"message":"Team name already registered"}"#.to_string(),
                })
            })
        });

        let err = client(mock).register_team(&command()).await.unwrap_err();
        assert_eq!(
            err.user_message("Registration failed. Please try again."),
            "Team name already registered"
        );
    }

    #[tokio::test]
    async fn lists_teams() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://backend.test/hackathon/get-hackathon-teams")
            .returning(|_| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: r#"[{"teamName":"A","members":[]},{"teamName":"B"}]"#.to_string(),
                    })
                })
            });

        let teams = client(mock).get_teams().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams[1].members.is_empty());
    }
}
