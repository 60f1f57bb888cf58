//! Match and pro scene endpoints

use super::client::OpenDotaClient;
use super::query::Query;
use super::urls::endpoints;
use crate::data_fetcher::models::Response;
use crate::error::AppError;

impl OpenDotaClient {
    /// Get list of pro players
    pub async fn get_pro_players(&self) -> Result<Response, AppError> {
        self.call(&endpoints::PRO_PLAYERS, &[], Query::new()).await
    }

    /// Get list of pro matches, optionally before `less_than_match_id`
    pub async fn get_pro_matches(
        &self,
        less_than_match_id: Option<u64>,
    ) -> Result<Response, AppError> {
        let query = Query::new().param_opt("less_than_match_id", less_than_match_id);
        self.call(&endpoints::PRO_MATCHES, &[], query).await
    }

    /// Match data
    pub async fn get_match(&self, match_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::MATCH, &[&match_id.to_string()], Query::new())
            .await
    }

    /// Get list of randomly sampled public matches
    pub async fn get_public_matches(&self, query: impl Into<Query>) -> Result<Response, AppError> {
        self.call(&endpoints::PUBLIC_MATCHES, &[], query.into()).await
    }

    /// Get list of parsed match IDs
    pub async fn get_parsed_matches(
        &self,
        less_than_match_id: Option<u64>,
    ) -> Result<Response, AppError> {
        let query = Query::new().param_opt("less_than_match_id", less_than_match_id);
        self.call(&endpoints::PARSED_MATCHES, &[], query).await
    }

    /// Finds recent matches by heroes played on each team
    pub async fn find_matches(
        &self,
        team_a: &[u32],
        team_b: &[u32],
    ) -> Result<Response, AppError> {
        let query = Query::new()
            .param_list("teamA", team_a)
            .param_list("teamB", team_b);
        self.call(&endpoints::FIND_MATCHES, &[], query).await
    }
}
