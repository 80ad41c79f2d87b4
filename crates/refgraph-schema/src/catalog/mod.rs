//! Read-only registries consumed by the reverse-reference generator.
//!
//! The traits are deliberately narrow: the generator only ever enumerates
//! entity types, lists the field storage of one type, and resolves the
//! structural properties of one type. Implementations must return data in a
//! stable order; derived output follows it.

mod memory;

pub use memory::MemoryCatalog;

use crate::{
    error::ErrorTree,
    node::{EntityTypeDescriptor, FieldStorageDescriptor, PropertyDefinition},
};
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// CatalogError
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("entity type '{0}' is not registered")]
    UnknownEntityType(String),

    #[error("failed to read catalog '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported catalog format '{}', expected .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("catalog validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// EntityTypeCatalog
///

pub trait EntityTypeCatalog {
    /// Every registered entity type, in registry order.
    fn entity_types(&self) -> Vec<&EntityTypeDescriptor>;
}

///
/// FieldStorageCatalog
///

pub trait FieldStorageCatalog {
    /// Field storage definitions owned by `entity_type_id`, in declaration
    /// order. An entity type without fields yields an empty list.
    fn field_storage_definitions(
        &self,
        entity_type_id: &str,
    ) -> Result<Vec<&FieldStorageDescriptor>, CatalogError>;
}

///
/// TypeDefinitionResolver
///

pub trait TypeDefinitionResolver {
    /// Structural property definitions of `entity_type_id`.
    ///
    /// Fails for an id the host does not know; a known type without
    /// properties yields an empty list.
    fn property_definitions(
        &self,
        entity_type_id: &str,
    ) -> Result<Vec<&PropertyDefinition>, CatalogError>;
}
