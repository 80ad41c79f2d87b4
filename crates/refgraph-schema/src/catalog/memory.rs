use crate::{
    catalog::{CatalogError, EntityTypeCatalog, FieldStorageCatalog, TypeDefinitionResolver},
    node::{EntityTypeDescriptor, FieldStorageDescriptor, PropertyDefinition},
    validate::validate_catalog,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

///
/// MemoryCatalog
///
/// Snapshot of the three host registries held in memory. Serves as the
/// standalone collaborator for the generator and as the on-disk format the
/// CLI reads (`.toml` or `.json`).
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryCatalog {
    #[serde(default)]
    pub entity_types: Vec<EntityTypeDescriptor>,

    #[serde(default)]
    pub fields: Vec<FieldStorageDescriptor>,

    /// Structural properties keyed by entity type id.
    #[serde(default)]
    pub properties: BTreeMap<String, Vec<PropertyDefinition>>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entity_type(mut self, entity_type: EntityTypeDescriptor) -> Self {
        self.entity_types.push(entity_type);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldStorageDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_property(
        mut self,
        entity_type_id: impl Into<String>,
        property: PropertyDefinition,
    ) -> Self {
        self.properties
            .entry(entity_type_id.into())
            .or_default()
            .push(property);
        self
    }

    #[must_use]
    pub fn contains_entity_type(&self, id: &str) -> bool {
        self.entity_types.iter().any(|ty| ty.id == id)
    }

    /// Check names, uniqueness and cross references.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_catalog(self).map_err(CatalogError::Validation)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Load a snapshot, choosing the parser by file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, String> = match extension.as_deref() {
            Some("toml") => |s| Self::from_toml_str(s).map_err(|e| e.to_string()),
            Some("json") => |s| Self::from_json_str(s).map_err(|e| e.to_string()),
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = fs::read_to_string(path).map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&source).map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!(
            path = %path.display(),
            entity_types = catalog.entity_types.len(),
            fields = catalog.fields.len(),
            "loaded catalog snapshot"
        );

        Ok(catalog)
    }
}

impl EntityTypeCatalog for MemoryCatalog {
    fn entity_types(&self) -> Vec<&EntityTypeDescriptor> {
        self.entity_types.iter().collect()
    }
}

impl FieldStorageCatalog for MemoryCatalog {
    fn field_storage_definitions(
        &self,
        entity_type_id: &str,
    ) -> Result<Vec<&FieldStorageDescriptor>, CatalogError> {
        Ok(self
            .fields
            .iter()
            .filter(|field| field.entity_type_id == entity_type_id)
            .collect())
    }
}

impl TypeDefinitionResolver for MemoryCatalog {
    fn property_definitions(
        &self,
        entity_type_id: &str,
    ) -> Result<Vec<&PropertyDefinition>, CatalogError> {
        if !self.contains_entity_type(entity_type_id) {
            return Err(CatalogError::UnknownEntityType(entity_type_id.to_string()));
        }

        Ok(self
            .properties
            .get(entity_type_id)
            .map(|props| props.iter().collect())
            .unwrap_or_default())
    }
}

///
/// TESTS
///
