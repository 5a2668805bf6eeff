//! Entity module for entity_naming
//!
//! Read-only descriptors of entities and their fields, as seen by naming styles.

pub mod types;

// Re-export key types
pub use types::{ColumnMapping, Entity, EntityClass, EntityField, EntityMapping, EntityTable};
