//! Discovery of style and name conversion implementations
//!
//! A [`Discovery`] reports every implementation available to a context, in a
//! fixed order. Contexts query it at most once per capability.

use std::sync::Arc;

use crate::convert::NameConvert;
use crate::style::{BuiltinStyle, Style};

/// Source of pluggable implementations
pub trait Discovery: Send + Sync {
    /// All available styles, in discovery order
    fn styles(&self) -> Vec<Arc<dyn Style>>;

    /// All available name conversions, in discovery order
    fn name_converts(&self) -> Vec<Arc<dyn NameConvert>>;
}

/// Default discovery: built-in styles followed by registered plugins
#[derive(Debug, Clone)]
pub struct ServiceLoader {
    builtins: bool,
    styles: Vec<Arc<dyn Style>>,
    name_converts: Vec<Arc<dyn NameConvert>>,
}

impl Default for ServiceLoader {
    fn default() -> Self {
        Self {
            builtins: true,
            styles: Vec::new(),
            name_converts: Vec::new(),
        }
    }
}

impl ServiceLoader {
    /// Create a loader that reports the built-in styles only
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style plugin.
    ///
    /// Plugins are reported after the built-ins, so one named like a built-in
    /// replaces it.
    pub fn with_style(mut self, style: impl Style + 'static) -> Self {
        self.styles.push(Arc::new(style));
        self
    }

    /// Register a name conversion plugin. The first one registered is used.
    pub fn with_name_convert(mut self, convert: impl NameConvert + 'static) -> Self {
        self.name_converts.push(Arc::new(convert));
        self
    }

    /// Do not report the built-in styles
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }
}

impl Discovery for ServiceLoader {
    fn styles(&self) -> Vec<Arc<dyn Style>> {
        let mut styles = if self.builtins {
            BuiltinStyle::instances()
        } else {
            Vec::new()
        };
        styles.extend(self.styles.iter().cloned());
        styles
    }

    fn name_converts(&self) -> Vec<Arc<dyn NameConvert>> {
        self.name_converts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::CamelUnderscoreConvert;

    fn style_names(loader: &ServiceLoader) -> Vec<String> {
        loader.styles().iter().map(|s| s.style().to_string()).collect()
    }

    #[test]
    fn test_builtins_first() {
        let loader = ServiceLoader::new().with_style(BuiltinStyle::Lower);

        assert_eq!(
            style_names(&loader),
            vec!["normal", "lower_underscore", "lower", "upper", "upper_underscore", "lower"]
        );
    }

    #[test]
    fn test_without_builtins() {
        let loader = ServiceLoader::new()
            .without_builtins()
            .with_style(BuiltinStyle::Upper);

        assert_eq!(style_names(&loader), vec!["upper"]);
    }

    #[test]
    fn test_name_converts_in_registration_order() {
        let loader = ServiceLoader::new().with_name_convert(CamelUnderscoreConvert);

        assert_eq!(loader.name_converts().len(), 1);
        assert!(ServiceLoader::default().name_converts().is_empty());
    }
}
