//! League and team endpoints

use super::client::OpenDotaClient;
use super::query::Query;
use super::urls::endpoints;
use crate::data_fetcher::models::Response;
use crate::error::AppError;

impl OpenDotaClient {
    /// Get league data
    pub async fn get_leagues(&self) -> Result<Response, AppError> {
        self.call(&endpoints::LEAGUES, &[], Query::new()).await
    }

    /// Get data for a league
    pub async fn get_league(&self, league_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::LEAGUE, &[&league_id.to_string()], Query::new())
            .await
    }

    /// Get matches for a league
    pub async fn get_league_matches(&self, league_id: u64) -> Result<Response, AppError> {
        self.call(
            &endpoints::LEAGUE_MATCHES,
            &[&league_id.to_string()],
            Query::new(),
        )
        .await
    }

    /// Get teams for a league
    pub async fn get_league_teams(&self, league_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::LEAGUE_TEAMS, &[&league_id.to_string()], Query::new())
            .await
    }

    /// Get team data, one page at a time
    pub async fn get_teams(&self, page: Option<u32>) -> Result<Response, AppError> {
        self.call(&endpoints::TEAMS, &[], Query::new().param_opt("page", page))
            .await
    }

    /// Get data for a team
    pub async fn get_team(&self, team_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::TEAM, &[&team_id.to_string()], Query::new())
            .await
    }

    /// Get matches for a team
    pub async fn get_team_matches(&self, team_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::TEAM_MATCHES, &[&team_id.to_string()], Query::new())
            .await
    }

    /// Get players who have played for a team
    pub async fn get_team_players(&self, team_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::TEAM_PLAYERS, &[&team_id.to_string()], Query::new())
            .await
    }

    /// Get heroes for a team
    pub async fn get_team_heroes(&self, team_id: u64) -> Result<Response, AppError> {
        self.call(&endpoints::TEAM_HEROES, &[&team_id.to_string()], Query::new())
            .await
    }
}
