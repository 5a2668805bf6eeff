//! Utilities for entity_naming
//!
//! This module provides utility functions used across the library.

pub mod logging;
pub mod naming;

use crate::context;
use crate::entity::{EntityClass, EntityField};
use crate::error::Result;

// Re-export key utility functions
pub use naming::{
    camel_to_lower_underscore, camel_to_separated, camel_to_upper_underscore, identity,
    to_lower, to_upper, Case,
};

/// Convert a name with the process-wide name conversion
pub fn convert(name: &str) -> Result<String> {
    Ok(context::global()?.name_convert().convert(name))
}

/// Convert an entity class, usually into a table name
pub fn convert_entity_class(entity: &EntityClass) -> Result<String> {
    Ok(context::global()?.name_convert().convert_entity_class(entity))
}

/// Convert an entity field, usually into a column name
pub fn convert_entity_field(field: &EntityField) -> Result<String> {
    Ok(context::global()?.name_convert().convert_entity_field(field))
}
