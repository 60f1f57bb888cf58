pub mod api;
pub mod hero_lookup;
pub mod models;

pub use api::{ClientOptions, MatchFilter, OpenDotaClient, Query};
pub use models::{Attr, Model, Response};
