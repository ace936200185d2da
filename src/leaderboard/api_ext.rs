use crate::{
    api::{Api, Credentials},
    leaderboard::LeaderboardEntry,
};
use anyhow::Context;

/// API to retrieve the leaderboard.
pub struct LeaderboardApi<'a> {
    api: &'a Api,
}

impl<'a> LeaderboardApi<'a> {
    /// Creates Leaderboard API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retrieves players ordered by the total score. The API returns `null` when nobody has
    /// played yet.
    pub async fn get(&self) -> anyhow::Result<Vec<LeaderboardEntry>> {
        Ok(self
            .api
            .execute_json::<Option<Vec<LeaderboardEntry>>>(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint("leaderboard")),
                Credentials::Session,
            )
            .await
            .context("Cannot retrieve leaderboard.")?
            .unwrap_or_default())
    }
}

impl Api {
    /// Returns an API to retrieve the leaderboard.
    pub fn leaderboard(&self) -> LeaderboardApi<'_> {
        LeaderboardApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{leaderboard::LeaderboardEntry, tests::mock_api};
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn can_get_leaderboard() -> anyhow::Result<()> {
        let server = MockServer::start();
        let leaderboard_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/leaderboard");
            then.status(200).json_body(json!([
                { "rank": 1, "username": "devquest", "avatar_url": "", "total_score": 320 },
                { "rank": 2, "username": "snapper", "avatar_url": "https://cdn.photoquest.app/a.png", "total_score": 100 }
            ]));
        });

        let api = mock_api(&server.base_url());
        let leaderboard = api.leaderboard().get().await?;
        assert_eq!(leaderboard.len(), 2);
        assert_eq!(
            leaderboard[1],
            LeaderboardEntry {
                rank: 2,
                username: "snapper".to_string(),
                avatar_url: "https://cdn.photoquest.app/a.png".to_string(),
                total_score: 100,
            }
        );
        leaderboard_mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn handles_empty_leaderboard() -> anyhow::Result<()> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/leaderboard");
            then.status(200).body("null");
        });

        let api = mock_api(&server.base_url());
        assert!(api.leaderboard().get().await?.is_empty());

        Ok(())
    }
}
