use crate::{
    Error,
    definition::{ArgumentSpec, BaseDefinition, DerivedDefinitions, FieldDefinition},
    naming::{SchemaNodeNaming, TypeNameNaming, query_filter_input_type, reverse_field_name},
    translate::{Translator, Untranslated},
};
use refgraph_config::GeneratorConfig;
use refgraph_schema::{
    catalog::{EntityTypeCatalog, FieldStorageCatalog, TypeDefinitionResolver},
    node::{EntityTypeDescriptor, FieldStorageDescriptor},
};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

///
/// ReverseReferenceGenerator
///
/// Derives one reverse-reference field definition per entity-reference
/// field on a fieldable entity type. The definition is attached to the
/// schema node of the referenced type and lists the entities pointing at it.
///
/// The generator only reads its collaborators and keeps no state between
/// calls; every `generate` builds a fresh map.
///

pub struct ReverseReferenceGenerator<'a> {
    entity_types: &'a dyn EntityTypeCatalog,
    field_storage: &'a dyn FieldStorageCatalog,
    type_definitions: &'a dyn TypeDefinitionResolver,
    translator: Box<dyn Translator + 'a>,
    schema_naming: Box<dyn SchemaNodeNaming + 'a>,
    config: GeneratorConfig,
}

impl<'a> ReverseReferenceGenerator<'a> {
    #[must_use]
    pub fn new(
        entity_types: &'a dyn EntityTypeCatalog,
        field_storage: &'a dyn FieldStorageCatalog,
        type_definitions: &'a dyn TypeDefinitionResolver,
    ) -> Self {
        Self {
            entity_types,
            field_storage,
            type_definitions,
            translator: Box::new(Untranslated),
            schema_naming: Box::new(TypeNameNaming),
            config: GeneratorConfig::default(),
        }
    }

    /// Use one value for all three collaborators.
    #[must_use]
    pub fn from_catalog<C>(catalog: &'a C) -> Self
    where
        C: EntityTypeCatalog + FieldStorageCatalog + TypeDefinitionResolver,
    {
        Self::new(catalog, catalog, catalog)
    }

    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'a) -> Self {
        self.translator = Box::new(translator);
        self
    }

    #[must_use]
    pub fn with_schema_naming(mut self, naming: impl SchemaNodeNaming + 'a) -> Self {
        self.schema_naming = Box::new(naming);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Derive definitions with no base defaults.
    pub fn generate_default(&self) -> Result<DerivedDefinitions, Error> {
        self.generate(&BaseDefinition::new())
    }

    /// Derive every reverse-reference definition, merging `base` underneath
    /// each one.
    pub fn generate(&self, base: &BaseDefinition) -> Result<DerivedDefinitions, Error> {
        let mut derived = DerivedDefinitions::new();

        for entity_type in self.entity_types.entity_types() {
            if !entity_type.is_fieldable() {
                trace!(entity_type = %entity_type.id, "skipping non-fieldable entity type");
                continue;
            }

            for field in self
                .field_storage
                .field_storage_definitions(&entity_type.id)?
            {
                let Some(target_type_id) = self.reference_target(field) else {
                    trace!(
                        entity_type = %entity_type.id,
                        field = %field.name,
                        "skipping field without entity reference target"
                    );
                    continue;
                };

                let definition = self
                    .derive_field(entity_type, field, target_type_id)?
                    .merged_with(base);

                debug!(
                    key = %definition.key,
                    name = %definition.name,
                    target = %target_type_id,
                    filter = definition.argument(&self.config.filter_argument).is_some(),
                    "derived reverse reference field"
                );

                derived.insert(definition);
            }
        }

        info!(count = derived.len(), "derived reverse reference fields");

        Ok(derived)
    }

    // Referenced type id, present only for entity-reference fields with a
    // non-empty target setting.
    fn reference_target<'f>(&self, field: &'f FieldStorageDescriptor) -> Option<&'f str> {
        if field.field_type != self.config.reference_field_type {
            return None;
        }

        field.setting_str(&self.config.target_type_setting)
    }

    fn derive_field(
        &self,
        entity_type: &EntityTypeDescriptor,
        field: &FieldStorageDescriptor,
        target_type_id: &str,
    ) -> Result<FieldDefinition, Error> {
        let mut schema_cache_tags = field.cache.tags.clone();
        schema_cache_tags.insert(self.config.field_info_cache_tag.clone());

        let description = self.translator.translate(
            &self.config.description_template,
            &[("@description", field.description.as_str())],
        );

        Ok(FieldDefinition {
            key: FieldDefinition::derive_key(&entity_type.id, &field.name),
            parents: vec![self.schema_naming.schema_node_id(target_type_id)],
            name: reverse_field_name(&self.config.name_prefix, &field.name, &entity_type.id),
            description,
            field: field.name.clone(),
            entity_type: entity_type.id.clone(),
            schema_cache_tags,
            schema_cache_contexts: field.cache.contexts.clone(),
            schema_cache_max_age: field.cache.max_age,
            arguments: self.filter_arguments(target_type_id)?,
            extra: BaseDefinition::new(),
        })
    }

    // `filter` is offered only when the target exposes a queryable base field.
    fn filter_arguments(
        &self,
        target_type_id: &str,
    ) -> Result<BTreeMap<String, ArgumentSpec>, Error> {
        let properties = self.type_definitions.property_definitions(target_type_id)?;

        let mut arguments = BTreeMap::new();
        if properties.iter().any(|p| p.is_queryable_base()) {
            arguments.insert(
                self.config.filter_argument.clone(),
                ArgumentSpec::optional(query_filter_input_type(target_type_id)),
            );
        }

        Ok(arguments)
    }
}

///
/// TESTS
///
