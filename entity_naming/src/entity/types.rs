//! Type definitions for entity descriptors

use serde::{Deserialize, Serialize};

/// A type that can describe itself as an entity.
///
/// Usually implemented with `#[derive(Entity)]`.
pub trait Entity {
    /// Get the class-level descriptor for this entity
    fn entity_class() -> EntityClass;
}

/// Class-level descriptor of an entity: its simple name and declared fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityClass {
    pub name: String,
    pub fields: Vec<EntityField>,
    /// Explicit table name, bypassing any naming conversion
    pub table: Option<String>,
    /// Style used for this entity instead of the default name conversion
    pub style: Option<String>,
}

impl EntityClass {
    /// Create a new entity class with the given simple name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            table: None,
            style: None,
        }
    }

    /// Add a field by its declared name
    pub fn field(mut self, name: &str) -> Self {
        self.fields.push(EntityField::new(name));
        self
    }

    /// Set an explicit table name
    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Set the style for this entity
    pub fn style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    /// Get the simple name of the entity
    pub fn simple_name(&self) -> &str {
        &self.name
    }
}

/// A single declared field of an entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityField {
    pub name: String,
}

impl EntityField {
    /// Create a new field with the given declared name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Get the declared (source) name of the field
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The table an entity maps to, with the fields it carries.
///
/// Styles receive the whole table when naming a column so they can look at
/// the table name or at sibling fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTable {
    pub name: String,
    pub entity: String,
    pub fields: Vec<EntityField>,
}

impl EntityTable {
    /// Create a new table with the given name for an entity class
    pub fn new(name: &str, entity: &EntityClass) -> Self {
        Self {
            name: name.to_string(),
            entity: entity.name.clone(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the table
    pub fn add_field(&mut self, field: EntityField) {
        self.fields.push(field);
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared names of all fields
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A field and the column it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub field: String,
    pub column: String,
}

/// Resolved table and column names of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMapping {
    pub entity: String,
    pub table: String,
    pub columns: Vec<ColumnMapping>,
}

impl EntityMapping {
    /// Get the column a field maps to
    pub fn column(&self, field: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.column.as_str())
    }

    /// Get all column names in field declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column.as_str()).collect()
    }
}
