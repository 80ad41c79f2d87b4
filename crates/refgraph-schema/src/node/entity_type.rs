use crate::types::Capability;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// EntityTypeDescriptor
///
/// Metadata for one registered entity type. Capabilities are declared
/// explicitly by the host rather than discovered from the implementation.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EntityTypeDescriptor {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub capabilities: BTreeSet<Capability>,
}

impl EntityTypeDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            capabilities: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Shorthand for a fieldable entity type.
    #[must_use]
    pub fn fieldable(id: impl Into<String>) -> Self {
        Self::new(id).with_capability(Capability::Fieldable)
    }

    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    #[must_use]
    pub fn is_fieldable(&self) -> bool {
        self.has_capability(Capability::Fieldable)
    }
}
