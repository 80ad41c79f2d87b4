//! TOML configuration for the reverse-reference generator.
//!
//! ```toml
//! [generator]
//! field_info_cache_tag = "entity_field_info"
//!
//! [translations]
//! language = "de"
//!
//! [translations.strings]
//! "Reverse reference: @description" = "Rückverweis: @description"
//! ```
//!
//! Every key is optional; omitted keys keep their defaults.

use refgraph_schema::{ENTITY_REFERENCE_FIELD_TYPE, TARGET_TYPE_SETTING, err, error::ErrorTree};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Cache tag added to every derived definition.
pub const DEFAULT_FIELD_INFO_CACHE_TAG: &str = "entity_field_info";

/// Source template for derived field descriptions.
pub const DEFAULT_DESCRIPTION_TEMPLATE: &str = "Reverse reference: @description";

/// Name of the generated filter argument.
pub const DEFAULT_FILTER_ARGUMENT: &str = "filter";

/// Leading token of every derived field name.
pub const DEFAULT_NAME_PREFIX: &str = "reverse";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(ErrorTree),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub translations: TranslationConfig,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errs = ErrorTree::new();
        errs.merge_for("generator", self.generator.check());
        errs.merge_for("translations", self.translations.check());

        errs.result().map_err(ConfigError::Invalid)
    }
}

///
/// GeneratorConfig
///
/// Literal tokens the generator matches on and emits.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Field type tag that marks entity-reference fields.
    pub reference_field_type: String,

    /// Settings key holding the referenced entity type id.
    pub target_type_setting: String,

    pub field_info_cache_tag: String,
    pub description_template: String,
    pub filter_argument: String,
    pub name_prefix: String,
}

impl GeneratorConfig {
    fn check(&self) -> ErrorTree {
        let mut errs = ErrorTree::new();

        for (key, value) in [
            ("reference_field_type", &self.reference_field_type),
            ("target_type_setting", &self.target_type_setting),
            ("field_info_cache_tag", &self.field_info_cache_tag),
            ("description_template", &self.description_template),
            ("filter_argument", &self.filter_argument),
            ("name_prefix", &self.name_prefix),
        ] {
            if value.trim().is_empty() {
                errs.add_for(key, "must not be empty");
            }
        }

        if !self.filter_argument.is_empty() && !is_graphql_name(&self.filter_argument) {
            err!(
                errs,
                "filter_argument '{}' is not a valid GraphQL name",
                self.filter_argument
            );
        }

        errs
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            reference_field_type: ENTITY_REFERENCE_FIELD_TYPE.to_string(),
            target_type_setting: TARGET_TYPE_SETTING.to_string(),
            field_info_cache_tag: DEFAULT_FIELD_INFO_CACHE_TAG.to_string(),
            description_template: DEFAULT_DESCRIPTION_TEMPLATE.to_string(),
            filter_argument: DEFAULT_FILTER_ARGUMENT.to_string(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }
}

///
/// TranslationConfig
///
/// Optional translated templates for one language, keyed by source template.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationConfig {
    pub language: Option<String>,
    pub strings: BTreeMap<String, String>,
}

impl TranslationConfig {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    fn check(&self) -> ErrorTree {
        let mut errs = ErrorTree::new();

        if self
            .language
            .as_deref()
            .is_some_and(|lang| lang.trim().is_empty())
        {
            errs.add_for("language", "must not be empty when set");
        }
        if !self.strings.is_empty() && self.language.is_none() {
            errs.add_for("language", "required when strings are configured");
        }

        errs
    }
}

// GraphQL names: [_A-Za-z][_0-9A-Za-z]*
fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

///
/// TESTS
///
