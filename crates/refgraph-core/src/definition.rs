use derive_more::{Deref, IntoIterator};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

///
/// BaseDefinition
///
/// Caller-supplied defaults merged underneath every derived definition.
///

pub type BaseDefinition = Map<String, Value>;

/// Keys always written by the generator; they override base keys.
pub const GENERATED_KEYS: [&str; 8] = [
    "parents",
    "name",
    "description",
    "field",
    "entity_type",
    "schema_cache_tags",
    "schema_cache_contexts",
    "schema_cache_max_age",
];

/// Written only when at least one argument was generated.
pub const ARGUMENTS_KEY: &str = "arguments";

///
/// ArgumentSpec
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ArgumentSpec {
    pub multi: bool,
    pub nullable: bool,

    #[serde(rename = "type")]
    pub type_name: String,
}

impl ArgumentSpec {
    /// Single-valued nullable argument of `type_name`.
    #[must_use]
    pub fn optional(type_name: impl Into<String>) -> Self {
        Self {
            multi: false,
            nullable: true,
            type_name: type_name.into(),
        }
    }
}

///
/// FieldDefinition
///
/// One synthesized reverse-reference field, attached to the schema node of
/// the referenced entity type. Serializes to the flat plugin-definition
/// shape the schema assembly layer consumes.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDefinition {
    /// `{entity_type}-{field}`; the key of this definition in the output map.
    #[serde(skip)]
    pub key: String,

    pub parents: Vec<String>,
    pub name: String,
    pub description: String,
    pub field: String,
    pub entity_type: String,
    pub schema_cache_tags: BTreeSet<String>,
    pub schema_cache_contexts: BTreeSet<String>,
    pub schema_cache_max_age: i64,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<String, ArgumentSpec>,

    /// Base-definition keys the generator did not set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDefinition {
    /// Derived key for a field on an entity type.
    #[must_use]
    pub fn derive_key(entity_type_id: &str, field_name: &str) -> String {
        format!("{entity_type_id}-{field_name}")
    }

    /// Keep every base key this definition does not set itself.
    #[must_use]
    pub fn merged_with(mut self, base: &BaseDefinition) -> Self {
        self.extra = base
            .iter()
            .filter(|(key, _)| !self.sets_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        self
    }

    fn sets_key(&self, key: &str) -> bool {
        GENERATED_KEYS.contains(&key) || (key == ARGUMENTS_KEY && !self.arguments.is_empty())
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.get(name)
    }

    /// Parent schema node id (the referenced type's node).
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

///
/// DerivedDefinitions
///
/// Output of one generation pass, in registry iteration order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct DerivedDefinitions(IndexMap<String, FieldDefinition>);

impl DerivedDefinitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition under its key, replacing any previous entry.
    pub fn insert(&mut self, definition: FieldDefinition) -> Option<FieldDefinition> {
        self.0.insert(definition.key.clone(), definition)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> FieldDefinition {
        FieldDefinition {
            key: FieldDefinition::derive_key("article", "tags"),
            parents: vec!["Tag".to_string()],
            name: "reverseTagsArticle".to_string(),
            description: "Reverse reference: Tags".to_string(),
            field: "tags".to_string(),
            entity_type: "article".to_string(),
            schema_cache_tags: BTreeSet::from(["entity_field_info".to_string()]),
            schema_cache_contexts: BTreeSet::new(),
            schema_cache_max_age: -1,
            arguments: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    fn base(value: Value) -> BaseDefinition {
        match value {
            Value::Object(map) => map,
            other => panic!("base must be an object, got {other}"),
        }
    }

    #[test]
    fn generated_keys_win_over_base() {
        let merged = definition().merged_with(&base(json!({
            "name": "overridden",
            "provider": "graphql_core",
            "type": "EntityQueryResult",
        })));

        assert_eq!(merged.name, "reverseTagsArticle");
        assert_eq!(
            merged.to_json().unwrap(),
            json!({
                "parents": ["Tag"],
                "name": "reverseTagsArticle",
                "description": "Reverse reference: Tags",
                "field": "tags",
                "entity_type": "article",
                "schema_cache_tags": ["entity_field_info"],
                "schema_cache_contexts": [],
                "schema_cache_max_age": -1,
                "provider": "graphql_core",
                "type": "EntityQueryResult",
            })
        );
    }

    #[test]
    fn base_arguments_survive_only_without_generated_ones() {
        let base = base(json!({ "arguments": { "offset": { "type": "Int" } } }));

        let plain = definition().merged_with(&base);
        assert_eq!(
            plain.to_json().unwrap()["arguments"],
            json!({ "offset": { "type": "Int" } })
        );

        let mut filtered = definition();
        filtered.arguments.insert(
            "filter".to_string(),
            ArgumentSpec::optional("TagQueryFilterInput"),
        );
        let filtered = filtered.merged_with(&base);

        assert!(!filtered.extra.contains_key(ARGUMENTS_KEY));
        assert_eq!(
            filtered.to_json().unwrap()["arguments"],
            json!({ "filter": { "multi": false, "nullable": true, "type": "TagQueryFilterInput" } })
        );
    }

    #[test]
    fn derived_definitions_keep_insertion_order() {
        let mut derived = DerivedDefinitions::new();

        let mut second = definition();
        second.key = FieldDefinition::derive_key("node", "author");
        derived.insert(second);
        derived.insert(definition());

        let keys = derived.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, ["node-author", "article-tags"]);

        let replaced = derived.insert(definition());
        assert!(replaced.is_some());
        assert_eq!(derived.len(), 2);
    }
}
