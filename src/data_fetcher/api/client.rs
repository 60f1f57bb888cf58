use reqwest::{Client, Method, Url};
use serde_json::Value;
use std::fmt;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use super::fetch_utils::send;
use super::http_client::create_http_client_with_timeout;
use super::query::Query;
use super::urls::{build_request_url, Endpoint};
use crate::config::validation::validate_config;
use crate::config::Config;
use crate::constants::{model_names, DEFAULT_API_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, REDACTED};
use crate::data_fetcher::models::{Model, Response};
use crate::error::AppError;

/// Construction options for [`OpenDotaClient`].
#[derive(Clone)]
pub struct ClientOptions {
    /// Return [`Response::Model`]/[`Response::Models`] instead of raw JSON
    pub with_models: bool,
    /// Sent as the `api_key` query parameter on every request
    pub api_key: Option<String>,
    pub base_url: String,
    pub http_timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            with_models: true,
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }
}

impl ClientOptions {
    pub fn with_models(mut self, with_models: bool) -> Self {
        self.with_models = with_models;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn http_timeout_seconds(mut self, seconds: u64) -> Self {
        self.http_timeout_seconds = seconds;
        self
    }
}

impl From<&Config> for ClientOptions {
    fn from(config: &Config) -> Self {
        ClientOptions {
            with_models: config.with_models,
            api_key: config.api_key.clone(),
            base_url: config.api_url.clone(),
            http_timeout_seconds: config.http_timeout_seconds,
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("with_models", &self.with_models)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .finish()
    }
}

/// Asynchronous OpenDota API client.
///
/// Every endpoint method issues exactly one request. The heroes list is the
/// only state kept between calls and is filled at most once by
/// [`OpenDotaClient::load_heroes`].
pub struct OpenDotaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    with_models: bool,
    pub(super) heroes: OnceCell<Vec<Model>>,
}

impl OpenDotaClient {
    /// Builds a client after checking the options the same way a loaded
    /// [`Config`] is checked.
    ///
    /// # Errors
    /// `AppError::Config` for a base URL without an http(s) scheme, a blank
    /// API key or a zero timeout
    pub fn new(options: ClientOptions) -> Result<Self, AppError> {
        validate_config(
            &options.base_url,
            options.api_key.as_deref(),
            None,
            options.http_timeout_seconds,
        )?;
        let client = create_http_client_with_timeout(options.http_timeout_seconds)?;
        debug!(
            "Created OpenDota client: base_url={}, with_models={}, api_key_set={}",
            options.base_url,
            options.with_models,
            options.api_key.is_some()
        );

        Ok(OpenDotaClient {
            client,
            base_url: options.base_url,
            api_key: options.api_key,
            with_models: options.with_models,
            heroes: OnceCell::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(ClientOptions::from(config))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn with_models(&self) -> bool {
        self.with_models
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Requests an endpoint and returns the decoded body without shaping it.
    ///
    /// `segments` fill the endpoint's path placeholders in order. The API
    /// key, if configured, is merged into `query`.
    #[instrument(skip_all, fields(endpoint = endpoint.path))]
    pub async fn fetch(
        &self,
        endpoint: &Endpoint,
        segments: &[&str],
        query: Query,
    ) -> Result<Value, AppError> {
        let unknown = endpoint.unknown_params(&query);
        if !unknown.is_empty() {
            warn!(
                "Parameters {:?} are not documented for {}, sending anyway",
                unknown, endpoint.path
            );
        }
        let url = endpoint.url_with(&self.base_url, segments, &self.with_api_key(&query))?;
        self.dispatch(Method::GET, url).await
    }

    /// Requests an endpoint and shapes the body according to `with_models`
    pub(super) async fn call(
        &self,
        endpoint: &Endpoint,
        segments: &[&str],
        query: Query,
    ) -> Result<Response, AppError> {
        let value = self.fetch(endpoint, segments, query).await?;
        Ok(Response::from_decoded(endpoint.model, value, self.with_models))
    }

    /// POSTs to an endpoint that takes no body
    #[instrument(skip_all, fields(endpoint = endpoint.path))]
    pub(super) async fn post(
        &self,
        endpoint: &Endpoint,
        segments: &[&str],
    ) -> Result<Response, AppError> {
        let url = endpoint.url_with(&self.base_url, segments, &self.with_api_key(&Query::new()))?;
        let value = self.dispatch(Method::POST, url).await?;
        Ok(Response::from_decoded(endpoint.model, value, self.with_models))
    }

    /// GETs any path under the base URL, for resources without a dedicated method
    pub async fn get_raw(&self, path: &str, query: impl Into<Query>) -> Result<Response, AppError> {
        let url = build_request_url(&self.base_url, path, &self.with_api_key(&query.into()))?;
        let value = self.dispatch(Method::GET, url).await?;
        Ok(Response::from_decoded(
            model_names::GENERIC,
            value,
            self.with_models,
        ))
    }

    fn with_api_key(&self, query: &Query) -> Query {
        query.with_api_key(self.api_key.as_deref())
    }

    async fn dispatch(&self, method: Method, url: Url) -> Result<Value, AppError> {
        send(&self.client, method, url).await
    }
}

impl fmt::Debug for OpenDotaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenDotaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("with_models", &self.with_models)
            .field("heroes_loaded", &self.heroes.initialized())
            .finish()
    }
}
