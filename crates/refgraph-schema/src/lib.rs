//! Host-side vocabulary for reverse-reference derivation: entity type and
//! field storage descriptors, the read-only catalog traits the generator
//! consumes, and an in-memory catalog that can be loaded from a snapshot.

pub mod catalog;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for entity type ids and field names.
pub const MAX_MACHINE_NAME_LEN: usize = 64;

/// Field type tag carried by entity-reference fields.
pub const ENTITY_REFERENCE_FIELD_TYPE: &str = "entity_reference";

/// Settings key holding the referenced entity type id.
pub const TARGET_TYPE_SETTING: &str = "target_type";

/// Cache max-age meaning "never expires".
pub const CACHE_PERMANENT: i64 = -1;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::{
            CatalogError, EntityTypeCatalog, FieldStorageCatalog, MemoryCatalog,
            TypeDefinitionResolver,
        },
        err,
        error::ErrorTree,
        node::*,
        types::{CacheMetadata, Capability},
    };
    pub use serde::{Deserialize, Serialize};
}
