//! Endpoint definitions and URL building utilities

use reqwest::Url;

use super::query::Query;
use crate::constants::{model_names as names, API_KEY_PARAM, REDACTED};
use crate::error::AppError;

/// One remote resource: its path template, the name given to models built
/// from its responses and the query parameters it understands.
///
/// Path templates use `{placeholder}` segments that are filled in order by
/// [`Endpoint::url_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub model: &'static str,
    pub params: &'static [&'static str],
}

impl Endpoint {
    const fn new(path: &'static str, model: &'static str, params: &'static [&'static str]) -> Self {
        Endpoint {
            path,
            model,
            params,
        }
    }

    /// Path segments of the template with placeholders replaced by `values`, in order.
    ///
    /// # Errors
    /// `AppError::Config` when the number of values does not match the
    /// placeholders, or a value is empty, `.` or `..`
    pub fn path_segments<'a>(&self, values: &[&'a str]) -> Result<Vec<&'a str>, AppError> {
        let mut values = values.iter();
        let mut segments = Vec::new();

        for part in self.path.split('/').filter(|part| !part.is_empty()) {
            if !(part.starts_with('{') && part.ends_with('}')) {
                segments.push(part);
                continue;
            }
            let value = values.next().ok_or_else(|| {
                AppError::config_error(format!("Missing value for {part} in {}", self.path))
            })?;
            if matches!(*value, "" | "." | "..") {
                return Err(AppError::config_error(format!(
                    "Invalid value '{value}' for {part} in {}",
                    self.path
                )));
            }
            segments.push(*value);
        }

        if values.next().is_some() {
            return Err(AppError::config_error(format!(
                "Too many path values for {}",
                self.path
            )));
        }
        Ok(segments)
    }

    /// Builds the request URL for this endpoint. Each value is
    /// percent-encoded as a single path segment.
    ///
    /// # Example
    /// ```
    /// use opendota_client::data_fetcher::api::{endpoints, Query};
    ///
    /// let url = endpoints::PLAYER_HISTOGRAMS
    ///     .url_with("https://api.opendota.com", &["123", "kills"], &Query::new())
    ///     .unwrap();
    /// assert_eq!(url.path(), "/api/players/123/histograms/kills");
    /// ```
    pub fn url_with(&self, base_url: &str, values: &[&str], query: &Query) -> Result<Url, AppError> {
        build_segments_url(base_url, &self.path_segments(values)?, query)
    }

    /// Whether `name` is a documented query parameter of this endpoint
    pub fn accepts(&self, name: &str) -> bool {
        name == API_KEY_PARAM || self.params.contains(&name)
    }

    /// Query parameter names the endpoint does not document
    pub fn unknown_params<'a>(&self, query: &'a Query) -> Vec<&'a str> {
        query
            .pairs()
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| !self.accepts(name))
            .collect()
    }
}

/// The OpenDota endpoint catalogue
pub mod endpoints {
    use super::{names, Endpoint};

    /// Filter parameters accepted by most player sub-resources
    pub const PLAYER_FILTERS: &[&str] = &[
        "limit",
        "offset",
        "win",
        "patch",
        "game_mode",
        "lobby_type",
        "region",
        "date",
        "lane_role",
        "hero_id",
        "is_radiant",
        "included_account_id",
        "excluded_account_id",
        "with_hero_id",
        "against_hero_id",
        "significant",
        "having",
        "sort",
    ];

    /// Match listing filters also allow projecting extra columns
    pub const PLAYER_MATCH_FILTERS: &[&str] = &[
        "limit",
        "offset",
        "win",
        "patch",
        "game_mode",
        "lobby_type",
        "region",
        "date",
        "lane_role",
        "hero_id",
        "is_radiant",
        "included_account_id",
        "excluded_account_id",
        "with_hero_id",
        "against_hero_id",
        "significant",
        "having",
        "sort",
        "project",
    ];

    // Players
    pub const PLAYER: Endpoint = Endpoint::new("/api/players/{account_id}", names::PLAYER, &[]);
    pub const PLAYER_WL: Endpoint =
        Endpoint::new("/api/players/{account_id}/wl", names::PLAYER_WL, PLAYER_FILTERS);
    pub const PLAYER_RECENT_MATCHES: Endpoint =
        Endpoint::new("/api/players/{account_id}/recentMatches", names::MATCH, &[]);
    pub const PLAYER_MATCHES: Endpoint = Endpoint::new(
        "/api/players/{account_id}/matches",
        names::MATCH,
        PLAYER_MATCH_FILTERS,
    );
    pub const PLAYER_HEROES: Endpoint =
        Endpoint::new("/api/players/{account_id}/heroes", names::HERO, PLAYER_FILTERS);
    pub const PLAYER_PEERS: Endpoint =
        Endpoint::new("/api/players/{account_id}/peers", names::PLAYER, PLAYER_FILTERS);
    pub const PLAYER_PROS: Endpoint =
        Endpoint::new("/api/players/{account_id}/pros", names::PRO_PLAYER, PLAYER_FILTERS);
    pub const PLAYER_TOTALS: Endpoint =
        Endpoint::new("/api/players/{account_id}/totals", names::TOTAL, PLAYER_FILTERS);
    pub const PLAYER_COUNTS: Endpoint =
        Endpoint::new("/api/players/{account_id}/counts", names::COUNT, PLAYER_FILTERS);
    pub const PLAYER_HISTOGRAMS: Endpoint = Endpoint::new(
        "/api/players/{account_id}/histograms/{field}",
        names::DISTRIBUTION,
        PLAYER_FILTERS,
    );
    pub const PLAYER_WARDMAP: Endpoint =
        Endpoint::new("/api/players/{account_id}/wardmap", names::WARDMAP, PLAYER_FILTERS);
    pub const PLAYER_WORDCLOUD: Endpoint =
        Endpoint::new("/api/players/{account_id}/wordcloud", names::WORD, PLAYER_FILTERS);
    pub const PLAYER_RATINGS: Endpoint =
        Endpoint::new("/api/players/{account_id}/ratings", names::RATING, &[]);
    pub const PLAYER_RANKINGS: Endpoint =
        Endpoint::new("/api/players/{account_id}/rankings", names::RANKING, &[]);
    pub const PLAYER_REFRESH: Endpoint =
        Endpoint::new("/api/players/{account_id}/refresh", names::GENERIC, &[]);
    pub const SEARCH: Endpoint = Endpoint::new("/api/search", names::PLAYER, &["q"]);

    // Pro
    pub const PRO_PLAYERS: Endpoint = Endpoint::new("/api/proPlayers", names::PRO_PLAYER, &[]);
    pub const PRO_MATCHES: Endpoint =
        Endpoint::new("/api/proMatches", names::PRO_MATCH, &["less_than_match_id"]);

    // Matches
    pub const MATCH: Endpoint = Endpoint::new("/api/matches/{match_id}", names::MATCH, &[]);
    pub const PUBLIC_MATCHES: Endpoint = Endpoint::new(
        "/api/publicMatches",
        names::MATCH,
        &[
            "less_than_match_id",
            "min_rank",
            "max_rank",
            "mmr_ascending",
            "mmr_descending",
        ],
    );
    pub const PARSED_MATCHES: Endpoint =
        Endpoint::new("/api/parsedMatches", names::MATCH, &["less_than_match_id"]);
    pub const FIND_MATCHES: Endpoint =
        Endpoint::new("/api/findMatches", names::MATCH, &["teamA", "teamB"]);

    // Heroes
    pub const HEROES: Endpoint = Endpoint::new("/api/heroes", names::HERO, &[]);
    pub const HERO_MATCHES: Endpoint =
        Endpoint::new("/api/heroes/{hero_id}/matches", names::MATCH, &[]);
    pub const HERO_MATCHUPS: Endpoint =
        Endpoint::new("/api/heroes/{hero_id}/matchups", names::MATCHUP, &[]);
    pub const HERO_DURATIONS: Endpoint =
        Endpoint::new("/api/heroes/{hero_id}/durations", names::DURATION, &[]);
    pub const HERO_PLAYERS: Endpoint =
        Endpoint::new("/api/heroes/{hero_id}/players", names::PLAYER, &[]);
    pub const HERO_ITEM_POPULARITY: Endpoint =
        Endpoint::new("/api/heroes/{hero_id}/itemPopularity", names::ITEM, &[]);
    pub const HERO_STATS: Endpoint = Endpoint::new("/api/heroStats", names::STATISTIC, &[]);

    // Leagues
    pub const LEAGUES: Endpoint = Endpoint::new("/api/leagues", names::LEAGUE, &[]);
    pub const LEAGUE: Endpoint = Endpoint::new("/api/leagues/{league_id}", names::LEAGUE, &[]);
    pub const LEAGUE_MATCHES: Endpoint =
        Endpoint::new("/api/leagues/{league_id}/matches", names::MATCH, &[]);
    pub const LEAGUE_TEAMS: Endpoint =
        Endpoint::new("/api/leagues/{league_id}/teams", names::TEAM, &[]);

    // Teams
    pub const TEAMS: Endpoint = Endpoint::new("/api/teams", names::TEAM, &["page"]);
    pub const TEAM: Endpoint = Endpoint::new("/api/teams/{team_id}", names::TEAM, &[]);
    pub const TEAM_MATCHES: Endpoint =
        Endpoint::new("/api/teams/{team_id}/matches", names::MATCH, &[]);
    pub const TEAM_PLAYERS: Endpoint =
        Endpoint::new("/api/teams/{team_id}/players", names::PLAYER, &[]);
    pub const TEAM_HEROES: Endpoint =
        Endpoint::new("/api/teams/{team_id}/heroes", names::HERO, &[]);

    // Misc
    pub const EXPLORER: Endpoint = Endpoint::new("/api/explorer", names::GENERIC, &["sql"]);
    pub const DISTRIBUTIONS: Endpoint = Endpoint::new("/api/distributions", names::RANKS, &[]);
    pub const RANKINGS: Endpoint = Endpoint::new("/api/rankings", names::RANKING, &["hero_id"]);
    pub const BENCHMARKS: Endpoint =
        Endpoint::new("/api/benchmarks", names::BENCHMARK, &["hero_id"]);
    pub const STATUS: Endpoint = Endpoint::new("/api/status", names::GENERIC, &[]);
    pub const HEALTH: Endpoint = Endpoint::new("/api/health", names::GENERIC, &[]);
    pub const PARSE_REQUEST: Endpoint =
        Endpoint::new("/api/request/{job_id}", names::GENERIC, &[]);
    pub const SUBMIT_PARSE_REQUEST: Endpoint =
        Endpoint::new("/api/request/{match_id}", names::GENERIC, &[]);
    pub const RECORDS: Endpoint = Endpoint::new("/api/records/{field}", names::RECORD, &[]);
    pub const LIVE: Endpoint = Endpoint::new("/api/live", names::GAME, &[]);
    pub const SCHEMA: Endpoint = Endpoint::new("/api/schema", names::SCHEMA, &[]);
    pub const CONSTANT: Endpoint =
        Endpoint::new("/api/constants/{resource}", names::GENERIC, &[]);
    pub const CONSTANTS: Endpoint = Endpoint::new("/api/constants", names::CONSTANT, &[]);

    // Scenarios
    pub const SCENARIOS_ITEM_TIMINGS: Endpoint = Endpoint::new(
        "/api/scenarios/itemTimings",
        names::TIMING,
        &["item", "hero_id"],
    );
    pub const SCENARIOS_LANE_ROLES: Endpoint = Endpoint::new(
        "/api/scenarios/laneRoles",
        names::TIMING,
        &["lane_role", "hero_id"],
    );
    pub const SCENARIOS_MISC: Endpoint =
        Endpoint::new("/api/scenarios/misc", names::GENERIC, &["scenario"]);
}

/// Joins a base URL and an absolute endpoint path.
///
/// # Example
/// ```
/// use opendota_client::data_fetcher::api::build_url;
///
/// let url = build_url("https://api.opendota.com/", "/api/heroes");
/// assert_eq!(url, "https://api.opendota.com/api/heroes");
/// ```
pub fn build_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Builds the full request URL with query parameters percent-encoded.
pub fn build_request_url(base_url: &str, path: &str, query: &Query) -> Result<Url, AppError> {
    let raw = build_url(base_url, path);
    let url = if query.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, query.pairs())
    };
    url.map_err(|e| AppError::config_error(format!("Invalid request URL '{raw}': {e}")))
}

/// Appends `segments` to the base URL path, percent-encoding each one,
/// so `/`, `?` and `#` inside a value stay part of that segment.
pub fn build_segments_url(base_url: &str, segments: &[&str], query: &Query) -> Result<Url, AppError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| AppError::config_error(format!("Invalid base URL '{base_url}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("Base URL '{base_url}' cannot have a path")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.pairs());
    }
    Ok(url)
}

/// Renders a URL for logs and errors with the API key value hidden
pub fn redact_api_key(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == API_KEY_PARAM) {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            if name == API_KEY_PARAM {
                (name.into_owned(), REDACTED.to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.opendota.com";

    fn endpoint_path(endpoint: &Endpoint, values: &[&str]) -> String {
        endpoint
            .url_with(BASE, values, &Query::new())
            .unwrap()
            .path()
            .to_string()
    }

    #[test]
    fn test_url_with_fills_placeholders_in_order() {
        assert_eq!(endpoint_path(&endpoints::PLAYER, &["86745912"]), "/api/players/86745912");
        assert_eq!(
            endpoint_path(&endpoints::PLAYER_HISTOGRAMS, &["1", "gold_per_min"]),
            "/api/players/1/histograms/gold_per_min"
        );
        assert_eq!(endpoint_path(&endpoints::HEROES, &[]), "/api/heroes");
    }

    #[test]
    fn test_url_with_keeps_values_inside_their_segment() {
        let url = endpoints::RECORDS
            .url_with(BASE, &["kills?limit=1"], &Query::new())
            .unwrap();
        assert_eq!(url.path(), "/api/records/kills%3Flimit=1");
        assert_eq!(url.query(), None);

        let url = endpoints::RECORDS
            .url_with(BASE, &["kills#frag"], &Query::new())
            .unwrap();
        assert_eq!(url.path(), "/api/records/kills%23frag");
        assert_eq!(url.fragment(), None);

        assert_eq!(
            endpoint_path(&endpoints::CONSTANT, &["../players/1"]),
            "/api/constants/..%2Fplayers%2F1"
        );
        assert_eq!(
            endpoint_path(&endpoints::CONSTANT, &["100%"]),
            "/api/constants/100%25"
        );
    }

    #[test]
    fn test_url_with_keeps_base_path_and_query() {
        let query = Query::new().param("limit", 5);
        let url = endpoints::PLAYER_WL
            .url_with("http://localhost:8080/proxy/", &["7"], &query)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/players/7/wl?limit=5");
    }

    #[test]
    fn test_url_with_rejects_wrong_value_count() {
        assert!(matches!(
            endpoints::PLAYER.url_with(BASE, &[], &Query::new()),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            endpoints::PLAYER_HISTOGRAMS.url_with(BASE, &["1"], &Query::new()),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            endpoints::HEROES.url_with(BASE, &["1"], &Query::new()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_url_with_rejects_dot_and_empty_values() {
        for value in ["", ".", ".."] {
            assert!(
                endpoints::CONSTANT.url_with(BASE, &[value], &Query::new()).is_err(),
                "value {value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_url_handles_slashes() {
        assert_eq!(
            build_url("https://api.opendota.com", "/api/heroes"),
            "https://api.opendota.com/api/heroes"
        );
        assert_eq!(
            build_url("http://localhost:8080/", "api/live"),
            "http://localhost:8080/api/live"
        );
    }

    #[test]
    fn test_build_request_url_encodes_query() {
        let query = Query::new().param("q", "Miracle Amer").param("limit", 2);
        let url = build_request_url("https://api.opendota.com", "/api/search", &query).unwrap();

        assert_eq!(url.path(), "/api/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "Miracle Amer".to_string()),
                ("limit".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_build_request_url_without_query() {
        let url = build_request_url("https://api.opendota.com", "/api/health", &Query::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.opendota.com/api/health");
    }

    #[test]
    fn test_build_request_url_rejects_garbage() {
        let result = build_request_url("not a url", "/api/health", &Query::new());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_redact_api_key() {
        let query = Query::new().param("limit", 1).with_api_key(Some("secret"));
        let url = build_request_url("https://api.opendota.com", "/api/heroes", &query).unwrap();

        let redacted = redact_api_key(&url);
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("limit=1"));
        assert!(redacted.contains("api_key="));
    }

    #[test]
    fn test_unknown_params() {
        let query = Query::new()
            .param("limit", 1)
            .param("bogus", 2)
            .with_api_key(Some("k"));
        assert_eq!(endpoints::PLAYER_WL.unknown_params(&query), vec!["bogus"]);
        assert!(endpoints::PLAYER.unknown_params(&Query::new()).is_empty());
    }
}
