use serde::{Deserialize, Serialize};

///
/// PropertyDefinition
/// Structural property of an entity type's data definition.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDefinition {
    pub name: String,

    #[serde(default)]
    pub queryable: bool,

    /// Declared on the entity type itself rather than attached per bundle.
    #[serde(default)]
    pub base_field: bool,
}

impl PropertyDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queryable: false,
            base_field: false,
        }
    }

    /// Queryable base field, the only kind that enables filter arguments.
    #[must_use]
    pub fn queryable_base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queryable: true,
            base_field: true,
        }
    }

    #[must_use]
    pub const fn with_queryable(mut self, queryable: bool) -> Self {
        self.queryable = queryable;
        self
    }

    #[must_use]
    pub const fn with_base_field(mut self, base_field: bool) -> Self {
        self.base_field = base_field;
        self
    }

    #[must_use]
    pub const fn is_queryable_base(&self) -> bool {
        self.base_field && self.queryable
    }
}
