use crate::{ENTITY_REFERENCE_FIELD_TYPE, TARGET_TYPE_SETTING, types::CacheMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// FieldStorageDescriptor
///
/// Storage-level definition of one field on an entity type.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldStorageDescriptor {
    pub entity_type_id: String,
    pub name: String,
    pub field_type: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub settings: BTreeMap<String, Value>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub cache: CacheMetadata,
}

impl FieldStorageDescriptor {
    #[must_use]
    pub fn new(
        entity_type_id: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            entity_type_id: entity_type_id.into(),
            name: name.into(),
            field_type: field_type.into(),
            settings: BTreeMap::new(),
            description: String::new(),
            cache: CacheMetadata::default(),
        }
    }

    /// Entity-reference field pointing at `target_type`.
    #[must_use]
    pub fn entity_reference(
        entity_type_id: impl Into<String>,
        name: impl Into<String>,
        target_type: impl Into<String>,
    ) -> Self {
        Self::new(entity_type_id, name, ENTITY_REFERENCE_FIELD_TYPE)
            .with_setting(TARGET_TYPE_SETTING, Value::String(target_type.into()))
    }

    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: CacheMetadata) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// String setting, treating a missing, non-string or empty value as absent.
    #[must_use]
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.setting(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn target_type(&self) -> Option<&str> {
        self.setting_str(TARGET_TYPE_SETTING)
    }

    #[must_use]
    pub fn is_entity_reference(&self) -> bool {
        self.field_type == ENTITY_REFERENCE_FIELD_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_type_ignores_empty_and_non_string_values() {
        let field = FieldStorageDescriptor::new("article", "tags", ENTITY_REFERENCE_FIELD_TYPE);
        assert_eq!(field.target_type(), None);

        let field = field.with_setting(TARGET_TYPE_SETTING, "");
        assert_eq!(field.target_type(), None);

        let field = field.with_setting(TARGET_TYPE_SETTING, 7);
        assert_eq!(field.target_type(), None);

        let field = field.with_setting(TARGET_TYPE_SETTING, "tag");
        assert_eq!(field.target_type(), Some("tag"));
    }

    #[test]
    fn entity_reference_shorthand_sets_type_and_target() {
        let field = FieldStorageDescriptor::entity_reference("article", "tags", "tag");

        assert!(field.is_entity_reference());
        assert_eq!(field.target_type(), Some("tag"));
        assert!(field.cache.is_permanent());
    }
}
