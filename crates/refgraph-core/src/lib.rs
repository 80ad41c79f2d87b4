//! Reverse-reference field derivation.
//!
//! Given the host's entity type, field storage and type definition
//! registries, [`generator::ReverseReferenceGenerator`] produces one GraphQL
//! field definition per entity-reference field, attached to the referenced
//! type (e.g. "articles that reference this tag").

pub mod definition;
pub mod generator;
pub mod naming;
pub mod translate;

use refgraph_schema::catalog::CatalogError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Generation has no failure modes of its own; everything here comes from
/// a collaborator lookup.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        definition::{ArgumentSpec, BaseDefinition, DerivedDefinitions, FieldDefinition},
        generator::ReverseReferenceGenerator,
        naming::SchemaNodeNaming,
        translate::Translator,
    };
}
