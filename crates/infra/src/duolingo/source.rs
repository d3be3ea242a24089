//! `SummarySource` backed by the live Duolingo API

use async_trait::async_trait;
use duosync_core::SummarySource;
use duosync_domain::schema::{parse_summaries, parse_user_id, parse_user_state};
use duosync_domain::{AccountConfig, RemoteSnapshot, Result};
use tracing::{debug, instrument};

use super::client::DuolingoClient;

/// Logs in, then reads user state and summaries on every fetch.
pub struct DuolingoSummarySource {
    client: DuolingoClient,
    account: AccountConfig,
}

impl DuolingoSummarySource {
    pub fn new(client: DuolingoClient, account: AccountConfig) -> Self {
        Self { client, account }
    }
}

#[async_trait]
impl SummarySource for DuolingoSummarySource {
    #[instrument(skip(self), fields(username = %self.account.username))]
    async fn fetch(&self) -> Result<RemoteSnapshot> {
        let session = self.client.login(&self.account).await?;

        let user_data = self.client.fetch_user_data(&session, &self.account.username).await?;
        let user_id = parse_user_id(&user_data)?;
        let streak = parse_user_state(&user_data)?;

        let raw_summaries = self.client.fetch_summaries(&session, user_id).await?;
        let summaries = parse_summaries(&raw_summaries)?;

        debug!(user_id, summaries = summaries.len(), streak = streak.site_streak, "remote snapshot fetched");
        Ok(RemoteSnapshot { summaries, streak })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::http::HttpClient;

    async fn source_for(server: &MockServer) -> DuolingoSummarySource {
        let http = HttpClient::builder().max_attempts(1).build().unwrap();
        let client = DuolingoClient::new(http, &server.uri(), "duosync-test").unwrap();
        let account = AccountConfig { username: "learner".into(), password: None, jwt: Some("t".into()) };
        DuolingoSummarySource::new(client, account)
    }

    async fn mount_user(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/users/learner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn fetch_validates_both_payloads() {
        let server = MockServer::start().await;
        mount_user(&server, json!({ "id": 42, "site_streak": 9, "username": "learner" })).await;
        Mock::given(method("GET"))
            .and(path("/2017-06-30/users/42/xp_summaries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summaries": [
                    { "date": 1659657600, "numSessions": 1, "gainedXp": 100, "frozen": false,
                      "dailyGoalXp": 50, "totalSessionTime": 1 },
                    { "date": 1659571200, "numSessions": 2, "gainedXp": 200,
                      "dailyGoalXp": 50, "totalSessionTime": 3 }
                ]
            })))
            .mount(&server)
            .await;

        let snapshot = source_for(&server).await.fetch().await.unwrap();

        assert_eq!(snapshot.streak.site_streak, 9);
        assert_eq!(snapshot.summaries.len(), 2);
        assert_eq!(snapshot.summaries[0].date, 1_659_657_600);
        assert_eq!(snapshot.summaries[1].gained_xp, 200);
    }

    #[tokio::test]
    async fn missing_streak_is_a_schema_mismatch() {
        let server = MockServer::start().await;
        mount_user(&server, json!({ "id": 42 })).await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(err.is_schema_mismatch(), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_summary_is_a_schema_mismatch() {
        let server = MockServer::start().await;
        mount_user(&server, json!({ "id": 42, "site_streak": 1 })).await;
        Mock::given(method("GET"))
            .and(path("/2017-06-30/users/42/xp_summaries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summaries": [{ "date": 1, "gainedXp": "lots" }]
            })))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(err.is_schema_mismatch());
    }
}
