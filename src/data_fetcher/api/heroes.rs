//! Hero endpoints and the per-client heroes list

use serde_json::Value;
use tracing::{debug, info, instrument};

use super::client::OpenDotaClient;
use super::query::Query;
use super::urls::endpoints;
use crate::data_fetcher::hero_lookup::{
    find_hero_by_param, find_heroes_by_param, hero_names, heroes_from_value,
};
use crate::data_fetcher::models::{Model, Response};
use crate::error::AppError;

impl OpenDotaClient {
    /// Get hero data
    pub async fn get_heroes(&self) -> Result<Response, AppError> {
        self.call(&endpoints::HEROES, &[], Query::new()).await
    }

    /// Get recent matches with a hero
    pub async fn get_hero_matches(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(&endpoints::HERO_MATCHES, &[&hero_id.to_string()], Query::new())
            .await
    }

    /// Get results against other heroes for a hero
    pub async fn get_hero_matchups(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(&endpoints::HERO_MATCHUPS, &[&hero_id.to_string()], Query::new())
            .await
    }

    /// Get hero performance over a range of match durations
    pub async fn get_hero_durations(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(&endpoints::HERO_DURATIONS, &[&hero_id.to_string()], Query::new())
            .await
    }

    /// Get players who have played this hero
    pub async fn get_hero_players(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(&endpoints::HERO_PLAYERS, &[&hero_id.to_string()], Query::new())
            .await
    }

    /// Get item popularity of hero categorized by start, early, mid and late game
    pub async fn get_hero_item_popularity(&self, hero_id: u32) -> Result<Response, AppError> {
        self.call(
            &endpoints::HERO_ITEM_POPULARITY,
            &[&hero_id.to_string()],
            Query::new(),
        )
        .await
    }

    /// Get stats about hero performance in recent matches
    pub async fn get_hero_stats(&self) -> Result<Response, AppError> {
        self.call(&endpoints::HERO_STATS, &[], Query::new()).await
    }

    /// Loads the heroes list into this client and returns it.
    ///
    /// The list is fetched once. Later calls, including concurrent ones that
    /// raced the first, return the stored list without another request. A
    /// failed load leaves the client unloaded so the call can be repeated.
    #[instrument(skip(self))]
    pub async fn load_heroes(&self) -> Result<&[Model], AppError> {
        let heroes = self
            .heroes
            .get_or_try_init(|| async {
                let value = self.fetch(&endpoints::HEROES, &[], Query::new()).await?;
                let heroes = heroes_from_value(value).ok_or_else(|| {
                    AppError::api_no_data(
                        "Heroes response is not a list",
                        endpoints::HEROES.path,
                    )
                })?;
                info!("Loaded {} heroes", heroes.len());
                Ok::<_, AppError>(heroes)
            })
            .await?;
        Ok(heroes)
    }

    /// The loaded heroes list
    ///
    /// # Errors
    /// `AppError::HeroesNotLoaded` until [`OpenDotaClient::load_heroes`] has succeeded
    pub fn heroes(&self) -> Result<&[Model], AppError> {
        self.heroes
            .get()
            .map(Vec::as_slice)
            .ok_or(AppError::HeroesNotLoaded)
    }

    /// First loaded hero whose attribute `param` equals `value`, or `None`
    pub fn get_hero_by_param(
        &self,
        param: &str,
        value: impl Into<Value>,
    ) -> Result<Option<&Model>, AppError> {
        let value = value.into();
        let hero = find_hero_by_param(self.heroes()?, param, &value);
        debug!("Hero lookup {}={} found={}", param, value, hero.is_some());
        Ok(hero)
    }

    /// All loaded heroes whose attribute `param` equals `value`, in list order
    pub fn get_heroes_by_param(
        &self,
        param: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<&Model>, AppError> {
        Ok(find_heroes_by_param(self.heroes()?, param, &value.into()))
    }

    /// Localized names of all loaded heroes
    pub fn hero_names(&self) -> Result<Vec<&str>, AppError> {
        Ok(hero_names(self.heroes()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::data_fetcher::api::{ClientOptions, OpenDotaClient};
    use crate::error::AppError;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn heroes_body() -> serde_json::Value {
        json!([
            {"id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage", "primary_attr": "agi"},
            {"id": 2, "name": "Axe", "localized_name": "Axe", "primary_attr": "str"},
            {"id": 6, "name": "npc_dota_hero_drow_ranger", "localized_name": "Drow Ranger", "primary_attr": "agi"},
            {"id": 7, "name": "npc_dota_hero_earthshaker", "localized_name": "Earthshaker", "primary_attr": "str"},
            {"id": 8, "name": "npc_dota_hero_juggernaut", "localized_name": "Juggernaut", "primary_attr": "agi"}
        ])
    }

    async fn mount_heroes(mock_server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/api/heroes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(heroes_body()))
            .expect(expected_calls)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_lookups_fail_before_load() {
        let client = OpenDotaClient::new(ClientOptions::default()).unwrap();

        assert!(matches!(client.heroes(), Err(AppError::HeroesNotLoaded)));
        assert!(matches!(
            client.get_hero_by_param("name", "Axe"),
            Err(AppError::HeroesNotLoaded)
        ));
        assert!(matches!(
            client.get_heroes_by_param("primary_attr", "agi"),
            Err(AppError::HeroesNotLoaded)
        ));
        assert!(matches!(client.hero_names(), Err(AppError::HeroesNotLoaded)));
    }

    #[tokio::test]
    async fn test_load_heroes_then_lookup() {
        let mock_server = MockServer::start().await;
        mount_heroes(&mock_server, 1).await;

        let client =
            OpenDotaClient::new(ClientOptions::default().base_url(mock_server.uri())).unwrap();
        let heroes = client.load_heroes().await.unwrap();
        assert_eq!(heroes.len(), 5);

        let axe = client.get_hero_by_param("name", "Axe").unwrap().unwrap();
        assert_eq!(axe.get_i64("id"), Some(2));
        assert!(client.get_hero_by_param("name", "Nonexistent").unwrap().is_none());

        let agility: Vec<i64> = client
            .get_heroes_by_param("primary_attr", "agi")
            .unwrap()
            .iter()
            .filter_map(|hero| hero.get_i64("id"))
            .collect();
        assert_eq!(agility, vec![1, 6, 8]);

        assert_eq!(client.hero_names().unwrap()[1], "Axe");
    }

    #[tokio::test]
    async fn test_load_heroes_fetches_once() {
        let mock_server = MockServer::start().await;
        mount_heroes(&mock_server, 1).await;

        let client =
            OpenDotaClient::new(ClientOptions::default().base_url(mock_server.uri())).unwrap();
        let (first, second) = tokio::join!(client.load_heroes(), client.load_heroes());
        assert_eq!(first.unwrap().len(), 5);
        assert_eq!(second.unwrap().len(), 5);

        client.load_heroes().await.unwrap();
        // MockServer verifies the single expected call on drop
    }

    #[tokio::test]
    async fn test_load_heroes_failure_can_be_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/heroes"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        mount_heroes(&mock_server, 1).await;

        let client =
            OpenDotaClient::new(ClientOptions::default().base_url(mock_server.uri())).unwrap();
        let err = client.load_heroes().await.unwrap_err();
        assert!(err.is_transport());
        assert!(client.heroes().is_err());

        assert_eq!(client.load_heroes().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_heroes_are_models_even_without_model_mode() {
        let mock_server = MockServer::start().await;
        mount_heroes(&mock_server, 1).await;

        let client = OpenDotaClient::new(
            ClientOptions::default()
                .base_url(mock_server.uri())
                .with_models(false),
        )
        .unwrap();
        client.load_heroes().await.unwrap();
        let hero = client.get_hero_by_param("id", 7).unwrap().unwrap();
        assert_eq!(hero.get_str("localized_name"), Some("Earthshaker"));
    }
}
