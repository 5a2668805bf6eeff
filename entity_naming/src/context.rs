//! Style context
//!
//! A [`StyleContext`] owns everything style resolution needs: the discovery
//! source, the configuration, and the lazily built registry and name
//! conversion. Each is built at most once per context, even under concurrent
//! first access, and is read without locking afterwards.
//!
//! Most programs use the process-wide context from [`global`], optionally
//! replaced once at startup with [`install`].

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::config::ConfigResolver;
use crate::convert::{CamelUnderscoreConvert, NameConvert};
use crate::discovery::{Discovery, ServiceLoader};
use crate::entity::{ColumnMapping, Entity, EntityClass, EntityField, EntityMapping, EntityTable};
use crate::error::{Error, Result};
use crate::style::{Style, StyleRegistry, DEFAULT_STYLE_KEY};

static GLOBAL: OnceCell<StyleContext> = OnceCell::new();

/// Get the process-wide context, building it from the environment on first use
pub fn global() -> Result<&'static StyleContext> {
    GLOBAL.get_or_try_init(StyleContext::from_env)
}

/// Whether the process-wide context has been installed or built
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Install the process-wide context.
///
/// Fails with [`Error::AlreadyInitialized`] once a context has been installed
/// or built by [`global`].
pub fn install(context: StyleContext) -> Result<&'static StyleContext> {
    GLOBAL
        .set(context)
        .map_err(|_| Error::AlreadyInitialized)?;
    GLOBAL.get().ok_or(Error::AlreadyInitialized)
}

/// Resolves styles and name conversions for one process or test
pub struct StyleContext {
    discovery: Arc<dyn Discovery>,
    config: ConfigResolver,
    registry: OnceCell<StyleRegistry>,
    name_convert: OnceCell<Arc<dyn NameConvert>>,
}

impl fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleContext")
            .field("config", &self.config)
            .field("registry", &self.registry.get())
            .field("name_convert", &self.name_convert.get())
            .finish_non_exhaustive()
    }
}

impl StyleContext {
    /// Create a context from a discovery source and configuration
    pub fn new(discovery: impl Discovery + 'static, config: ConfigResolver) -> Self {
        Self::with_discovery(Arc::new(discovery), config)
    }

    /// Create a context from a shared discovery source
    pub fn with_discovery(discovery: Arc<dyn Discovery>, config: ConfigResolver) -> Self {
        Self {
            discovery,
            config,
            registry: OnceCell::new(),
            name_convert: OnceCell::new(),
        }
    }

    /// Create a context with the built-in styles and the loaded configuration
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ServiceLoader::default(), ConfigResolver::load()?))
    }

    pub fn config(&self) -> &ConfigResolver {
        &self.config
    }

    /// Get the style registry, running discovery on first use
    pub fn registry(&self) -> &StyleRegistry {
        self.registry.get_or_init(|| {
            let registry = StyleRegistry::discover(self.discovery.as_ref());
            tracing::debug!(styles = ?registry.names(), "Built style registry");
            registry
        })
    }

    /// Get a style by name.
    ///
    /// An empty name selects the style configured under
    /// `mybatis.provider.style`. Fails with [`Error::UnknownStyle`] carrying
    /// the name that was looked up when no such style is registered, or an
    /// empty name when no default is configured.
    pub fn style(&self, name: &str) -> Result<Arc<dyn Style>> {
        let name = if name.is_empty() {
            let configured = self.config.get_str(DEFAULT_STYLE_KEY).unwrap_or_default();
            tracing::debug!(style = configured, "Using configured default style");
            configured
        } else {
            name
        };

        if name.is_empty() {
            return Err(Error::UnknownStyle(String::new()));
        }
        self.registry().get(name)
    }

    /// Get the configured default style
    pub fn default_style(&self) -> Result<Arc<dyn Style>> {
        self.style("")
    }

    /// Names of all registered styles
    pub fn style_names(&self) -> Vec<&str> {
        self.registry().names()
    }

    /// Get the name conversion used when an entity declares no style.
    ///
    /// The first discovered implementation wins; without any, names are
    /// converted from camel case to lowercase snake case.
    pub fn name_convert(&self) -> Arc<dyn NameConvert> {
        self.name_convert
            .get_or_init(|| {
                let convert = self
                    .discovery
                    .name_converts()
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| Arc::new(CamelUnderscoreConvert));
                tracing::info!(name_convert = ?convert, "Resolved name conversion");
                convert
            })
            .clone()
    }

    /// Resolve the table and column names of an entity.
    ///
    /// An explicit table name is kept as is. Otherwise names come from the
    /// entity's style when it declares one, else from [`Self::name_convert`].
    pub fn map_entity(&self, entity: &EntityClass) -> Result<EntityMapping> {
        let naming = match entity.style.as_deref() {
            Some(style) => Naming::Style(self.style(style)?),
            None => Naming::Convert(self.name_convert()),
        };

        let table_name = match &entity.table {
            Some(table) => table.clone(),
            None => naming.table_name(entity),
        };

        let mut table = EntityTable::new(&table_name, entity);
        for field in &entity.fields {
            table.add_field(field.clone());
        }

        let columns = table
            .fields
            .iter()
            .map(|field| ColumnMapping {
                field: field.name.clone(),
                column: naming.column_name(&table, field),
            })
            .collect();

        Ok(EntityMapping {
            entity: entity.name.clone(),
            table: table.name,
            columns,
        })
    }

    /// Resolve the table and column names of an [`Entity`] type
    pub fn map<E: Entity>(&self) -> Result<EntityMapping> {
        self.map_entity(&E::entity_class())
    }
}

enum Naming {
    Style(Arc<dyn Style>),
    Convert(Arc<dyn NameConvert>),
}

impl Naming {
    fn table_name(&self, entity: &EntityClass) -> String {
        match self {
            Naming::Style(style) => style.table_name(entity),
            Naming::Convert(convert) => convert.convert_entity_class(entity),
        }
    }

    fn column_name(&self, table: &EntityTable, field: &EntityField) -> String {
        match self {
            Naming::Style(style) => style.column_name(table, field),
            Naming::Convert(convert) => convert.convert_entity_field(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLayer;
    use pretty_assertions::assert_eq;

    fn context_with_default(style: &str) -> StyleContext {
        let config = ConfigResolver::from_layers(vec![
            ConfigLayer::new("user").set(DEFAULT_STYLE_KEY, style),
        ]);
        StyleContext::new(ServiceLoader::default(), config)
    }

    #[test]
    fn test_explicit_style() {
        let context = context_with_default("normal");
        let style = context.style("lower_underscore").unwrap();

        assert_eq!(style.table_name(&EntityClass::new("UserOrder")), "user_order");
    }

    #[test]
    fn test_empty_name_uses_configured_default() {
        let context = context_with_default("upper_underscore");

        let by_default = context.style("").unwrap();
        let by_name = context.style("upper_underscore").unwrap();
        assert!(Arc::ptr_eq(&by_default, &by_name));
        assert!(Arc::ptr_eq(&context.default_style().unwrap(), &by_name));
    }

    #[test]
    fn test_missing_default_is_unknown_style() {
        let context = StyleContext::new(ServiceLoader::default(), ConfigResolver::default());
        let err = context.style("").unwrap_err();

        assert_eq!(err.style_name(), Some(""));
    }

    #[test]
    fn test_configured_unknown_style_names_configured_value() {
        let context = context_with_default("camel");
        let err = context.style("").unwrap_err();

        assert_eq!(err.style_name(), Some("camel"));
    }

    #[test]
    fn test_map_entity_with_style() {
        let context = context_with_default("normal");
        let entity = EntityClass::new("UserOrder")
            .field("orderId")
            .field("createdAt")
            .style("upper_underscore");

        let mapping = context.map_entity(&entity).unwrap();
        assert_eq!(mapping.table, "USER_ORDER");
        assert_eq!(mapping.column_names(), vec!["ORDER_ID", "CREATED_AT"]);
    }

    #[test]
    fn test_map_entity_without_style_uses_name_convert() {
        let context = context_with_default("upper");
        let entity = EntityClass::new("UserOrder").field("orderId");

        let mapping = context.map_entity(&entity).unwrap();
        assert_eq!(mapping.table, "user_order");
        assert_eq!(mapping.column("orderId"), Some("order_id"));
    }

    #[test]
    fn test_map_entity_explicit_table() {
        let context = context_with_default("normal");
        let entity = EntityClass::new("UserOrder")
            .table("orders")
            .field("orderId")
            .style("lower");

        let mapping = context.map_entity(&entity).unwrap();
        assert_eq!(mapping.table, "orders");
        assert_eq!(mapping.column("orderId"), Some("orderid"));
    }

    #[test]
    fn test_map_entity_unknown_style() {
        let context = context_with_default("normal");
        let entity = EntityClass::new("UserOrder").style("camel");

        assert!(matches!(context.map_entity(&entity), Err(Error::UnknownStyle(name)) if name == "camel"));
    }

    #[test]
    fn test_name_convert_is_cached() {
        let context = context_with_default("normal");

        assert!(Arc::ptr_eq(&context.name_convert(), &context.name_convert()));
    }
}
