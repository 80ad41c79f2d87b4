mod entity_type;
mod field;
mod property;

pub use entity_type::EntityTypeDescriptor;
pub use field::FieldStorageDescriptor;
pub use property::PropertyDefinition;
