//! Linear lookups over a loaded heroes list.
//!
//! The roster is small and fixed, so no index is built; every query is a
//! scan in list order.

use serde_json::Value;

use super::models::Model;

/// Returns the first hero whose attribute `param` equals `value`
pub fn find_hero_by_param<'a>(heroes: &'a [Model], param: &str, value: &Value) -> Option<&'a Model> {
    heroes.iter().find(|hero| hero.attr_equals(param, value))
}

/// Returns every hero whose attribute `param` equals `value`, in list order
pub fn find_heroes_by_param<'a>(heroes: &'a [Model], param: &str, value: &Value) -> Vec<&'a Model> {
    heroes
        .iter()
        .filter(|hero| hero.attr_equals(param, value))
        .collect()
}

/// Localized names of all heroes that have one, in list order
pub fn hero_names(heroes: &[Model]) -> Vec<&str> {
    heroes
        .iter()
        .filter_map(|hero| hero.get_str("localized_name"))
        .collect()
}

/// Builds the heroes list from a decoded `/api/heroes` body
pub(crate) fn heroes_from_value(value: Value) -> Option<Vec<Model>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| Model::from_value(crate::constants::model_names::HERO, item))
                .collect(),
        ),
        _ => None,
    }
}
