//! Style module for entity_naming
//!
//! Named strategies that turn entity and field names into table and column
//! names, and the registry they are looked up in.

pub mod builtin;
pub mod registry;

use std::fmt::Debug;

use crate::entity::{EntityClass, EntityField, EntityTable};

// Re-export key types
pub use builtin::BuiltinStyle;
pub use registry::StyleRegistry;

/// Configuration key holding the default style name
pub const DEFAULT_STYLE_KEY: &str = "mybatis.provider.style";

/// Keep names as declared
pub const NORMAL: &str = "normal";

/// Camel case to lowercase snake case
pub const LOWER_UNDERSCORE: &str = "lower_underscore";

/// Lowercase
pub const LOWER: &str = "lower";

/// Uppercase
pub const UPPER: &str = "upper";

/// Camel case to uppercase snake case
pub const UPPER_UNDERSCORE: &str = "upper_underscore";

/// A named naming strategy for tables and columns.
///
/// Implementations must be stateless: a single instance is shared by every
/// caller once the registry has been built.
pub trait Style: Send + Sync + Debug {
    /// Get the unique name of this style, e.g. `lower_underscore`
    fn style(&self) -> &str;

    /// Convert an entity into its table name
    fn table_name(&self, entity: &EntityClass) -> String;

    /// Convert a field of a table into its column name
    fn column_name(&self, table: &EntityTable, field: &EntityField) -> String;
}
