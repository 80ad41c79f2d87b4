use crate::CACHE_PERMANENT;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// Capability
///
/// Capability markers declared by an entity type's implementation.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Instances carry a configurable set of typed fields.
    #[display("fieldable")]
    Fieldable,

    #[display("publishable")]
    Publishable,

    #[display("revisionable")]
    Revisionable,

    #[display("translatable")]
    Translatable,
}

///
/// CacheMetadata
///
/// Tags, contexts and max-age used by the host's result cache.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheMetadata {
    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub contexts: BTreeSet<String>,

    #[serde(default = "permanent")]
    pub max_age: i64,
}

impl CacheMetadata {
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.contexts.insert(context.into());
        self
    }

    #[must_use]
    pub const fn with_max_age(mut self, max_age: i64) -> Self {
        self.max_age = max_age;
        self
    }

    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        self.max_age == CACHE_PERMANENT
    }
}

impl Default for CacheMetadata {
    fn default() -> Self {
        Self {
            tags: BTreeSet::new(),
            contexts: BTreeSet::new(),
            max_age: CACHE_PERMANENT,
        }
    }
}

const fn permanent() -> i64 {
    CACHE_PERMANENT
}
