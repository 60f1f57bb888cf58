use serde_json::Value;

use super::model::{Attr, Model};

/// What an endpoint call returns.
///
/// With models disabled every body comes back as [`Response::Raw`]. With
/// models enabled a mapping body becomes [`Response::Model`] and a sequence
/// body becomes [`Response::Models`]; bare scalars stay raw.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Response {
    Raw(Value),
    Model(Model),
    Models(Vec<Attr>),
}

impl Response {
    /// Shapes a decoded body. `name` is given to the top-level model and to
    /// every mapping element of a top-level sequence.
    pub fn from_decoded(name: &str, value: Value, with_models: bool) -> Self {
        if !with_models {
            return Response::Raw(value);
        }

        match value {
            Value::Object(map) => Response::Model(Model::wrap(name, map)),
            Value::Array(items) => Response::Models(
                items
                    .into_iter()
                    .map(|item| Attr::from_value(name, item))
                    .collect(),
            ),
            scalar => Response::Raw(scalar),
        }
    }

    /// Rebuilds the decoded JSON body
    pub fn to_value(&self) -> Value {
        match self {
            Response::Raw(value) => value.clone(),
            Response::Model(model) => model.to_value(),
            Response::Models(items) => Value::Array(items.iter().map(Attr::to_value).collect()),
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Response::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Response::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_models(&self) -> Option<&[Attr]> {
        match self {
            Response::Models(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_model(self) -> Option<Model> {
        match self {
            Response::Model(model) => Some(model),
            _ => None,
        }
    }

    /// Mapping elements of a sequence response, in order
    pub fn into_models(self) -> Vec<Model> {
        match self {
            Response::Models(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Attr::Model(model) => Some(model),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_when_models_disabled() {
        let body = json!({"account_id": 1});
        let response = Response::from_decoded("Player", body.clone(), false);
        assert_eq!(response, Response::Raw(body));
    }

    #[test]
    fn test_mapping_becomes_model() {
        let response = Response::from_decoded("Player", json!({"rank_tier": 70}), true);
        let model = response.as_model().expect("should be a model");
        assert_eq!(model.name(), "Player");
        assert_eq!(model.get_i64("rank_tier"), Some(70));
    }

    #[test]
    fn test_sequence_elements_share_the_endpoint_name() {
        let response = Response::from_decoded("Match", json!([{"match_id": 1}, {"match_id": 2}]), true);
        let models = response.into_models();
        assert_eq!(models.len(), 2);
        assert!(models.iter().all(|m| m.name() == "Match"));
        assert_eq!(models[1].get_i64("match_id"), Some(2));
    }

    #[test]
    fn test_sequence_of_scalars_is_kept() {
        let response = Response::from_decoded("Constant", json!(["heroes", "items"]), true);
        let items = response.as_models().unwrap();
        assert_eq!(items[0].as_str(), Some("heroes"));
        assert!(response.clone().into_models().is_empty());
    }

    #[test]
    fn test_scalar_body_stays_raw() {
        let response = Response::from_decoded("Object", json!(42), true);
        assert_eq!(response.as_raw(), Some(&json!(42)));
    }

    #[test]
    fn test_to_value_restores_the_body() {
        let body = json!([{"a": {"b": 1}}, 2]);
        assert_eq!(Response::from_decoded("X", body.clone(), true).to_value(), body);
        assert_eq!(Response::from_decoded("X", body.clone(), false).to_value(), body);
    }
}
