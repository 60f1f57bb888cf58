//! Query parameter handling for API requests

use crate::constants::API_KEY_PARAM;

/// Ordered set of query parameters for one request.
///
/// Parameters set to `None` through [`Query::param_opt`] are left out
/// entirely rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Adds a parameter only when a value is present
    pub fn param_opt<T: ToString>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Adds one entry per value, e.g. `hero_id=1&hero_id=2`
    pub fn param_list<T: ToString>(mut self, name: &str, values: &[T]) -> Self {
        for value in values {
            self.pairs.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns a copy with the API key merged in. A key already present in
    /// the query is replaced so it is sent exactly once.
    pub fn with_api_key(&self, api_key: Option<&str>) -> Query {
        match api_key {
            Some(key) => {
                let mut merged: Vec<(String, String)> = self
                    .pairs
                    .iter()
                    .filter(|(name, _)| name != API_KEY_PARAM)
                    .cloned()
                    .collect();
                merged.push((API_KEY_PARAM.to_string(), key.to_string()));
                Query { pairs: merged }
            }
            None => self.clone(),
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (name, value)| query.param(name, value))
    }
}

/// Filters shared by the player endpoints (`wl`, `matches`, `heroes`,
/// `peers`, `pros`, `totals`, `counts`, `histograms`, `wardmap`,
/// `wordcloud`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub win: Option<u8>,
    pub patch: Option<u32>,
    pub game_mode: Option<u32>,
    pub lobby_type: Option<u32>,
    pub region: Option<u32>,
    /// Days previous
    pub date: Option<u32>,
    pub lane_role: Option<u32>,
    pub hero_id: Option<u32>,
    pub is_radiant: Option<u8>,
    pub included_account_id: Vec<u64>,
    pub excluded_account_id: Vec<u64>,
    pub with_hero_id: Vec<u32>,
    pub against_hero_id: Vec<u32>,
    pub significant: Option<u8>,
    pub having: Option<u32>,
    pub sort: Option<String>,
}

impl From<&MatchFilter> for Query {
    fn from(filter: &MatchFilter) -> Self {
        Query::new()
            .param_opt("limit", filter.limit)
            .param_opt("offset", filter.offset)
            .param_opt("win", filter.win)
            .param_opt("patch", filter.patch)
            .param_opt("game_mode", filter.game_mode)
            .param_opt("lobby_type", filter.lobby_type)
            .param_opt("region", filter.region)
            .param_opt("date", filter.date)
            .param_opt("lane_role", filter.lane_role)
            .param_opt("hero_id", filter.hero_id)
            .param_opt("is_radiant", filter.is_radiant)
            .param_list("included_account_id", &filter.included_account_id)
            .param_list("excluded_account_id", &filter.excluded_account_id)
            .param_list("with_hero_id", &filter.with_hero_id)
            .param_list("against_hero_id", &filter.against_hero_id)
            .param_opt("significant", filter.significant)
            .param_opt("having", filter.having)
            .param_opt("sort", filter.sort.as_deref())
    }
}

impl From<MatchFilter> for Query {
    fn from(filter: MatchFilter) -> Self {
        Query::from(&filter)
    }
}
