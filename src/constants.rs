//! Application-wide constants and configuration values
//!
//! This module centralizes default endpoints, parameter names and timeouts
//! so the client, config and CLI agree on them.

/// Base URL of the public OpenDota API
pub const DEFAULT_API_URL: &str = "https://api.opendota.com";

/// Query parameter name the API key is sent under
pub const API_KEY_PARAM: &str = "api_key";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Number of response body characters written to debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;

/// Placeholder written in place of the API key in logs and config output
pub const REDACTED: &str = "<redacted>";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for overriding the API base URL
    pub const API_URL: &str = "OPENDOTA_API_URL";

    /// Environment variable for providing the API key
    pub const API_KEY: &str = "OPENDOTA_API_KEY";

    /// Environment variable for overriding the log file path
    pub const LOG_FILE: &str = "OPENDOTA_LOG_FILE";

    /// Environment variable for overriding the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "OPENDOTA_HTTP_TIMEOUT";
}

/// Advisory retry delays handed to callers; the client itself never retries
pub mod retry {
    /// Delay for rate limit errors (429) in seconds
    pub const RATE_LIMIT_DELAY_SECONDS: u64 = 60;

    /// Delay for server errors (5xx) in seconds
    pub const SERVER_ERROR_DELAY_SECONDS: u64 = 5;

    /// Delay for service unavailable errors (502/503) in seconds
    pub const SERVICE_UNAVAILABLE_DELAY_SECONDS: u64 = 30;

    /// Delay for network timeout errors in seconds
    pub const NETWORK_TIMEOUT_DELAY_SECONDS: u64 = 2;

    /// Delay for network connection errors in seconds
    pub const NETWORK_CONNECTION_DELAY_SECONDS: u64 = 10;
}

/// Names given to wrapped models, one per kind of resource
pub mod model_names {
    pub const PLAYER: &str = "Player";
    pub const PLAYER_WL: &str = "Player_WL";
    pub const PRO_PLAYER: &str = "Pro_Player";
    pub const PRO_MATCH: &str = "Pro_Match";
    pub const MATCH: &str = "Match";
    pub const HERO: &str = "Hero";
    pub const TOTAL: &str = "Total";
    pub const COUNT: &str = "Count";
    pub const DISTRIBUTION: &str = "Distribution";
    pub const WARDMAP: &str = "Wardmap";
    pub const WORD: &str = "Word";
    pub const RATING: &str = "Rating";
    pub const RANKING: &str = "Ranking";
    pub const MATCHUP: &str = "Matchup";
    pub const DURATION: &str = "Duration";
    pub const ITEM: &str = "Item";
    pub const STATISTIC: &str = "Statistic";
    pub const LEAGUE: &str = "League";
    pub const TEAM: &str = "Team";
    pub const BENCHMARK: &str = "Benchmark";
    pub const RECORD: &str = "Record";
    pub const GAME: &str = "Game";
    pub const SCHEMA: &str = "Schema";
    pub const CONSTANT: &str = "Constant";
    pub const TIMING: &str = "Timing";
    pub const RANKS: &str = "Ranks";
    pub const GENERIC: &str = "Object";
}
