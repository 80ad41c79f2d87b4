//! Catalog validation orchestration.

pub mod naming;

use crate::{catalog::MemoryCatalog, err, error::ErrorTree};
use std::collections::{BTreeMap, BTreeSet};

/// Run every catalog check, collecting all problems.
pub(crate) fn validate_catalog(catalog: &MemoryCatalog) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    // Phase 1: names and uniqueness.
    let entity_ids = validate_entity_types(catalog, &mut errs);
    validate_fields(catalog, &entity_ids, &mut errs);

    // Phase 2: cross references.
    validate_references(catalog, &entity_ids, &mut errs);
    validate_properties(catalog, &entity_ids, &mut errs);

    errs.result()
}

// Check entity type ids and return the set of registered ids.
fn validate_entity_types(catalog: &MemoryCatalog, errs: &mut ErrorTree) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();

    for ty in &catalog.entity_types {
        if let Err(msg) = naming::validate_machine_name(&ty.id) {
            errs.add_for(&ty.id, msg);
        }
        if !ids.insert(ty.id.clone()) {
            errs.add_for(&ty.id, "duplicate entity type id");
        }
    }

    ids
}

fn validate_fields(catalog: &MemoryCatalog, entity_ids: &BTreeSet<String>, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for field in &catalog.fields {
        let route = format!("{}.{}", field.entity_type_id, field.name);

        if !entity_ids.contains(&field.entity_type_id) {
            errs.add_for(
                &route,
                format!(
                    "field is owned by unregistered entity type '{}'",
                    field.entity_type_id
                ),
            );
        }
        if let Err(msg) = naming::validate_machine_name(&field.name) {
            errs.add_for(&route, msg);
        }
        if field.field_type.is_empty() {
            errs.add_for(&route, "field type is empty");
        }
        if !seen
            .entry(field.entity_type_id.as_str())
            .or_default()
            .insert(field.name.as_str())
        {
            errs.add_for(&route, "duplicate field name");
        }
    }
}

// Entity-reference fields must point at a registered entity type.
fn validate_references(
    catalog: &MemoryCatalog,
    entity_ids: &BTreeSet<String>,
    errs: &mut ErrorTree,
) {
    for field in catalog.fields.iter().filter(|f| f.is_entity_reference()) {
        let Some(target) = field.target_type() else {
            continue;
        };

        if !entity_ids.contains(target) {
            let mut field_errs = ErrorTree::new();
            err!(
                field_errs,
                "entity reference targets unregistered entity type '{target}'"
            );
            errs.merge_for(
                format!("{}.{}", field.entity_type_id, field.name),
                field_errs,
            );
        }
    }
}

fn validate_properties(
    catalog: &MemoryCatalog,
    entity_ids: &BTreeSet<String>,
    errs: &mut ErrorTree,
) {
    for (entity_type_id, properties) in &catalog.properties {
        if !entity_ids.contains(entity_type_id) {
            errs.add_for(
                entity_type_id,
                "properties declared for unregistered entity type",
            );
        }

        let mut seen = BTreeSet::new();
        for property in properties {
            if property.name.is_empty() {
                errs.add_for(entity_type_id, "property name is empty");
            } else if !seen.insert(property.name.as_str()) {
                errs.add_for(
                    entity_type_id,
                    format!("duplicate property '{}'", property.name),
                );
            }
        }
    }
}

///
/// TESTS
///
