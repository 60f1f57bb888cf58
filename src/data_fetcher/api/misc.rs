//! Service, constants, records and scenario endpoints

use super::client::OpenDotaClient;
use super::query::Query;
use super::urls::endpoints;
use crate::data_fetcher::models::Response;
use crate::error::AppError;

impl OpenDotaClient {
    /// Submit an arbitrary SQL query to the database
    pub async fn explorer(&self, sql: &str) -> Result<Response, AppError> {
        self.call(&endpoints::EXPLORER, &[], Query::new().param("sql", sql))
            .await
    }

    /// Distributions of MMR data by bracket and country
    pub async fn get_distributions(&self) -> Result<Response, AppError> {
        self.call(&endpoints::DISTRIBUTIONS, &[], Query::new()).await
    }

    /// Top players by hero
    pub async fn get_rankings(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(&endpoints::RANKINGS, &[], Query::new().param("hero_id", hero_id))
            .await
    }

    /// Benchmarks of average stat values for a hero
    pub async fn get_benchmarks(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(
            &endpoints::BENCHMARKS,
            &[],
            Query::new().param("hero_id", hero_id),
        )
        .await
    }

    /// Get current service statistics
    pub async fn check_status(&self) -> Result<Response, AppError> {
        self.call(&endpoints::STATUS, &[], Query::new()).await
    }

    /// Get service health data
    pub async fn check_health(&self) -> Result<Response, AppError> {
        self.call(&endpoints::HEALTH, &[], Query::new()).await
    }

    /// Get parse request state
    pub async fn get_parse_request(&self, job_id: &str) -> Result<Response, AppError> {
        self.call(&endpoints::PARSE_REQUEST, &[job_id], Query::new())
            .await
    }

    /// Submit a new parse request. Counts as 10 calls against the rate limit.
    pub async fn submit_parse_request(&self, match_id: u64) -> Result<Response, AppError> {
        self.post(&endpoints::SUBMIT_PARSE_REQUEST, &[&match_id.to_string()])
            .await
    }

    /// Get top performances in a stat
    pub async fn get_records(&self, field: &str) -> Result<Response, AppError> {
        self.call(&endpoints::RECORDS, &[field], Query::new()).await
    }

    /// Get top currently ongoing live games
    pub async fn get_live(&self) -> Result<Response, AppError> {
        self.call(&endpoints::LIVE, &[], Query::new()).await
    }

    /// Get database schema
    pub async fn get_schema(&self) -> Result<Response, AppError> {
        self.call(&endpoints::SCHEMA, &[], Query::new()).await
    }

    /// Get static game data mirrored from the dotaconstants repository
    pub async fn get_constant(&self, resource: &str) -> Result<Response, AppError> {
        self.call(&endpoints::CONSTANT, &[resource], Query::new())
            .await
    }

    /// Gets an array of available constant resources
    pub async fn get_constants(&self) -> Result<Response, AppError> {
        self.call(&endpoints::CONSTANTS, &[], Query::new()).await
    }

    /// Win rates for certain item timings on a hero
    pub async fn get_scenarios_item_timings(
        &self,
        item: Option<&str>,
        hero_id: Option<u32>,
    ) -> Result<Response, AppError> {
        let query = Query::new()
            .param_opt("item", item)
            .param_opt("hero_id", hero_id);
        self.call(&endpoints::SCENARIOS_ITEM_TIMINGS, &[], query)
            .await
    }

    /// Win rates for heroes in certain lane roles
    pub async fn get_scenarios_lane_roles(
        &self,
        lane_role: Option<u32>,
        hero_id: Option<u32>,
    ) -> Result<Response, AppError> {
        let query = Query::new()
            .param_opt("lane_role", lane_role)
            .param_opt("hero_id", hero_id);
        self.call(&endpoints::SCENARIOS_LANE_ROLES, &[], query)
            .await
    }

    /// Miscellaneous team scenarios
    pub async fn get_scenarios_misc(&self, scenario: Option<&str>) -> Result<Response, AppError> {
        self.call(
            &endpoints::SCENARIOS_MISC,
            &[],
            Query::new().param_opt("scenario", scenario),
        )
        .await
    }
}
