//! Style registry for entity_naming
//!
//! This module indexes discovered styles by name. A registry is immutable once
//! built; there is no way to add or remove a style afterwards.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::discovery::Discovery;
use crate::error::{Error, Result};

use super::Style;

/// Registry of styles keyed by their name
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: IndexMap<String, Arc<dyn Style>>,
}

impl StyleRegistry {
    /// Build a registry from the styles a discovery mechanism reports
    pub fn discover(discovery: &dyn Discovery) -> Self {
        Self::from_styles(discovery.styles())
    }

    /// Build a registry from styles in discovery order.
    ///
    /// A style whose name was already seen replaces the earlier one but keeps
    /// its position in [`StyleRegistry::names`]. Styles with an empty name are
    /// skipped.
    pub fn from_styles(styles: Vec<Arc<dyn Style>>) -> Self {
        let mut map: IndexMap<String, Arc<dyn Style>> = IndexMap::with_capacity(styles.len());

        for style in styles {
            let name = style.style().to_string();
            if name.is_empty() {
                tracing::warn!(skipped = ?style, "Ignoring style with an empty name");
                continue;
            }
            tracing::debug!(style = %name, "Discovered style");

            if let Some(previous) = map.insert(name.clone(), style) {
                tracing::warn!(
                    style = %name,
                    replaced = ?previous,
                    "Style name registered more than once, the later one wins"
                );
            }
        }

        Self { styles: map }
    }

    /// Get a style by its exact name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Style>> {
        self.styles
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownStyle(name.to_string()))
    }

    /// Check whether a style with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Get all registered style names
    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
