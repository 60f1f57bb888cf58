pub mod urls;
pub mod http_client;
pub mod query;
mod client;
mod fetch_utils;
mod heroes;
mod leagues;
mod matches;
mod misc;
mod players;

// Re-export URL utilities and the endpoint catalogue
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
pub use query::{MatchFilter, Query};
// Re-export the client itself
pub use client::{ClientOptions, OpenDotaClient};
