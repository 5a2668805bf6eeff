//! entity_naming: pluggable naming styles for mapping entities to tables
//!
//! A style turns an entity's name into a table name and its fields' names into
//! column names. Styles are discovered once per [`StyleContext`], looked up by
//! name, and fall back to the `mybatis.provider.style` configuration key when
//! no name is given.
//!
//! ```
//! use entity_naming::{Entity, StyleContext};
//!
//! #[derive(Entity)]
//! #[entity(style = "upper_underscore")]
//! struct UserOrder {
//!     order_id: i64,
//! }
//!
//! let context = StyleContext::from_env().unwrap();
//! let mapping = context.map::<UserOrder>().unwrap();
//! assert_eq!(mapping.table, "USER_ORDER");
//! assert_eq!(mapping.column("order_id"), Some("ORDER_ID"));
//! ```

pub mod config;
pub mod context;
pub mod convert;
pub mod discovery;
pub mod entity;
pub mod error;
pub mod style;
pub mod utils;

// Re-export main types for easier access
pub use config::{ConfigLayer, ConfigResolver, LoggingConfig};
pub use context::StyleContext;
pub use convert::{CamelUnderscoreConvert, NameConvert};
pub use discovery::{Discovery, ServiceLoader};
pub use entity::{Entity, EntityClass, EntityField, EntityMapping, EntityTable};
pub use entity_naming_macros::Entity;
pub use error::{Error, Result};
pub use style::{BuiltinStyle, Style, StyleRegistry, DEFAULT_STYLE_KEY};

use std::sync::Arc;

/// Initialize the process-wide context from a user configuration file.
///
/// Logging is set up from the file's `logging` section, if any, unless a
/// global subscriber is already installed. Fails with
/// [`Error::AlreadyInitialized`] when a process-wide context already exists,
/// before touching logging.
pub fn init(config_path: &str) -> Result<&'static StyleContext> {
    if context::is_initialized() {
        return Err(Error::AlreadyInitialized);
    }

    let config = ConfigResolver::with_user_file(config_path)?;
    utils::logging::init_logging(&LoggingConfig::from_resolver(&config))?;

    context::install(StyleContext::new(ServiceLoader::default(), config))
}

/// Get a style from the process-wide context; an empty name selects the default
pub fn get_style(name: &str) -> Result<Arc<dyn Style>> {
    context::global()?.style(name)
}
