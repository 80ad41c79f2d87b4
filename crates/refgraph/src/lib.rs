//! ## Crate layout
//! - `config`: TOML generator configuration.
//! - `core`: the reverse-reference generator, field definitions, translation.
//! - `schema`: entity type / field storage descriptors and catalogs.
//! - `utils`: identifier case transforms.
//! - `error`: the public error taxonomy.
//!
//! [`derive`] wires a loaded catalog and config into one generation pass.

pub use refgraph_config as config;
pub use refgraph_core as core;
pub use refgraph_schema as schema;
pub use refgraph_utils as utils;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

use crate::{
    config::Config,
    core::{
        definition::{BaseDefinition, DerivedDefinitions},
        generator::ReverseReferenceGenerator,
        translate::TranslationTable,
    },
    schema::catalog::MemoryCatalog,
};
use serde_json::Value;
use std::{fs, path::Path};

/// Run one generation pass over `catalog` using `config`.
///
/// Descriptions are localized when the config carries a `[translations]`
/// language.
pub fn derive(
    catalog: &MemoryCatalog,
    config: &Config,
    base: &BaseDefinition,
) -> Result<DerivedDefinitions, Error> {
    let mut generator =
        ReverseReferenceGenerator::from_catalog(catalog).with_config(config.generator.clone());

    if let Some(table) = TranslationTable::from_config(&config.translations) {
        tracing::debug!(language = table.language(), "localizing descriptions");
        generator = generator.with_translator(table);
    }

    Ok(generator.generate(base)?)
}

/// Read a base definition: a JSON object merged underneath every derived
/// definition.
pub fn load_base_definition(path: impl AsRef<Path>) -> Result<BaseDefinition, Error> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|err| {
        Error::new(
            ErrorKind::Io,
            ErrorOrigin::Input,
            format!("failed to read base definition '{}': {err}", path.display()),
        )
    })?;

    match serde_json::from_str::<Value>(&source) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::new(
            ErrorKind::Invalid,
            ErrorOrigin::Input,
            format!("base definition '{}' must be a JSON object", path.display()),
        )),
        Err(err) => Err(Error::new(
            ErrorKind::Parse,
            ErrorOrigin::Input,
            format!(
                "failed to parse base definition '{}': {err}",
                path.display()
            ),
        )),
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{Config, GeneratorConfig},
        core::prelude::*,
        derive, load_base_definition,
        schema::prelude::*,
    };
}
