use refgraph_utils::{camel_case, prop_case};

///
/// SchemaNodeNaming
///
/// Maps an entity type id to the id of its schema node. Must be pure: the
/// same input always yields the same id.
///

pub trait SchemaNodeNaming {
    fn schema_node_id(&self, entity_type_id: &str) -> String;
}

///
/// TypeNameNaming
/// Default node ids: the entity type id in upper camel case (`TaxonomyTerm`).
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TypeNameNaming;

impl SchemaNodeNaming for TypeNameNaming {
    fn schema_node_id(&self, entity_type_id: &str) -> String {
        camel_case([entity_type_id])
    }
}

impl<F> SchemaNodeNaming for F
where
    F: Fn(&str) -> String,
{
    fn schema_node_id(&self, entity_type_id: &str) -> String {
        self(entity_type_id)
    }
}

/// Field name of the reverse reference: `prefix` + field + owning type.
#[must_use]
pub fn reverse_field_name(prefix: &str, field_name: &str, entity_type_id: &str) -> String {
    prop_case([prefix, field_name, entity_type_id])
}

/// Input type accepted by the filter argument for `entity_type_id`.
#[must_use]
pub fn query_filter_input_type(entity_type_id: &str) -> String {
    camel_case([entity_type_id, "query", "filter", "input"])
}
