//! Player endpoints

use super::client::OpenDotaClient;
use super::query::Query;
use super::urls::endpoints;
use crate::data_fetcher::models::Response;
use crate::error::AppError;

impl OpenDotaClient {
    /// Player data
    pub async fn get_player(&self, account_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::PLAYER, &[&account_id.to_string()], Query::new())
            .await
    }

    /// Win/Loss count
    pub async fn get_player_wl(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(&endpoints::PLAYER_WL, &[&account_id.to_string()], query.into())
            .await
    }

    /// Recent matches played
    pub async fn get_player_recent_matches(&self, account_id: u64) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_RECENT_MATCHES,
            &[&account_id.to_string()],
            Query::new(),
        )
        .await
    }

    /// Matches played
    pub async fn get_player_matches(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_MATCHES,
            &[&account_id.to_string()],
            query.into(),
        )
        .await
    }

    /// Heroes played
    pub async fn get_player_heroes(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_HEROES,
            &[&account_id.to_string()],
            query.into(),
        )
        .await
    }

    /// Players played with
    pub async fn get_player_peers(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(&endpoints::PLAYER_PEERS, &[&account_id.to_string()], query.into())
            .await
    }

    /// Pro players played with
    pub async fn get_player_pros(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(&endpoints::PLAYER_PROS, &[&account_id.to_string()], query.into())
            .await
    }

    /// Totals in stats
    pub async fn get_player_totals(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_TOTALS,
            &[&account_id.to_string()],
            query.into(),
        )
        .await
    }

    /// Counts in categories
    pub async fn get_player_counts(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_COUNTS,
            &[&account_id.to_string()],
            query.into(),
        )
        .await
    }

    /// Distribution of matches in a single stat
    pub async fn get_player_histograms(
        &self,
        account_id: u64,
        field: &str,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_HISTOGRAMS,
            &[&account_id.to_string(), field],
            query.into(),
        )
        .await
    }

    /// Wards placed in matches played
    pub async fn get_player_wardmap(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_WARDMAP,
            &[&account_id.to_string()],
            query.into(),
        )
        .await
    }

    /// Words said/read in matches played
    pub async fn get_player_wordcloud(
        &self,
        account_id: u64,
        query: impl Into<Query>,
    ) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_WORDCLOUD,
            &[&account_id.to_string()],
            query.into(),
        )
        .await
    }

    /// Player rating history
    pub async fn get_player_ratings(&self, account_id: u64) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_RATINGS,
            &[&account_id.to_string()],
            Query::new(),
        )
        .await
    }

    /// Player hero rankings
    pub async fn get_player_rankings(&self, account_id: u64) -> Result<Response, AppError> {
        self.call(
            &endpoints::PLAYER_RANKINGS,
            &[&account_id.to_string()],
            Query::new(),
        )
        .await
    }

    /// Search players by personaname
    pub async fn search_players(&self, personaname: &str) -> Result<Response, AppError> {
        self.call(&endpoints::SEARCH, &[], Query::new().param("q", personaname))
            .await
    }

    /// Refresh player match history
    pub async fn refresh_player(&self, account_id: u64) -> Result<Response, AppError> {
        self.post(&endpoints::PLAYER_REFRESH, &[&account_id.to_string()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::data_fetcher::api::{ClientOptions, MatchFilter, OpenDotaClient, Query};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    async fn client_for(mock_server: &MockServer) -> OpenDotaClient {
        OpenDotaClient::new(ClientOptions::default().base_url(mock_server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_player_wl_with_filter() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/players/86745912/wl"))
            .and(query_param("limit", "20"))
            .and(query_param("hero_id", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"win": 12, "lose": 8})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let filter = MatchFilter {
            limit: Some(20),
            hero_id: Some(1),
            ..Default::default()
        };
        let response = client.get_player_wl(86745912, &filter).await.unwrap();

        let wl = response.as_model().unwrap();
        assert_eq!(wl.name(), "Player_WL");
        assert_eq!(wl.get_i64("win"), Some(12));
        assert_eq!(wl.get_i64("lose"), Some(8));
    }

    #[tokio::test]
    async fn test_get_player_matches_returns_models() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/players/1/matches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"match_id": 7001, "hero_id": 2, "kills": 10},
                {"match_id": 7000, "hero_id": 5, "kills": 1}
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let matches = client
            .get_player_matches(1, Query::new())
            .await
            .unwrap()
            .into_models();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name(), "Match");
        assert_eq!(matches[0].get_i64("match_id"), Some(7001));
        assert_eq!(matches[1].get_i64("kills"), Some(1));
    }

    #[tokio::test]
    async fn test_get_player_histograms_path() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/players/1/histograms/kills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"x": 0, "games": 3, "win": 1}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let response = client
            .get_player_histograms(1, "kills", Query::new())
            .await
            .unwrap();
        assert_eq!(response.as_models().map(|items| items.len()), Some(1));
    }

    #[tokio::test]
    async fn test_search_players_sends_q() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("q", "Miracle-"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"account_id": 105248644, "personaname": "Miracle-", "similarity": 1.0}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let players = client.search_players("Miracle-").await.unwrap().into_models();
        assert_eq!(players[0].get_u64("account_id"), Some(105248644));
    }

    #[tokio::test]
    async fn test_refresh_player_posts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/players/1/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"length": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let response = client.refresh_player(1).await.unwrap();
        assert_eq!(response.as_model().and_then(|m| m.get_i64("length")), Some(1));
    }
}
