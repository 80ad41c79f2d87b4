//! Small shared helpers for the refgraph crates.
//!
//! - `case`: deterministic identifier transforms used to derive GraphQL
//!   field and type names from machine names.

pub mod case;

pub use case::{camel_case, prop_case};
