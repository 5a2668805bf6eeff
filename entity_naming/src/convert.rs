//! Default name conversion
//!
//! When an entity does not declare a style, its table and column names come
//! from a single process-wide [`NameConvert`]. A replacement can be plugged in
//! through discovery; otherwise [`CamelUnderscoreConvert`] is used.

use std::fmt::Debug;

use crate::entity::{EntityClass, EntityField};
use crate::utils::naming::camel_to_lower_underscore;

/// Converts raw names, entity classes and fields into schema names
pub trait NameConvert: Send + Sync + Debug {
    /// Convert a raw name
    fn convert(&self, name: &str) -> String;

    /// Convert an entity class, usually into a table name
    fn convert_entity_class(&self, entity: &EntityClass) -> String {
        self.convert(entity.simple_name())
    }

    /// Convert an entity field, usually into a column name
    fn convert_entity_field(&self, field: &EntityField) -> String {
        self.convert(field.name())
    }
}

/// Camel case to lowercase snake case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CamelUnderscoreConvert;

impl NameConvert for CamelUnderscoreConvert {
    fn convert(&self, name: &str) -> String {
        camel_to_lower_underscore(name)
    }
}
