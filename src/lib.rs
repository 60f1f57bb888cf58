//! OpenDota API client library
//!
//! Async access to the OpenDota web API. Every remote resource has one
//! method on [`OpenDotaClient`]; responses come back either as raw JSON or
//! wrapped into attribute-style [`Model`]s.
//!
//! # Examples
//!
//! ```rust,no_run
//! use opendota_client::{AppError, ClientOptions, OpenDotaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = OpenDotaClient::new(ClientOptions::default())?;
//!
//!     let player = client.get_player(86745912).await?;
//!     if let Some(model) = player.as_model() {
//!         println!("rank tier: {:?}", model.get_i64("rank_tier"));
//!     }
//!
//!     client.load_heroes().await?;
//!     if let Some(axe) = client.get_hero_by_param("localized_name", "Axe")? {
//!         println!("{axe}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{ClientOptions, Endpoint, MatchFilter, OpenDotaClient, Query, endpoints};
pub use data_fetcher::models::{Attr, Model, Response};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
