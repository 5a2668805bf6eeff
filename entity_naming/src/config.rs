//! Configuration handling for entity_naming
//!
//! Configuration is a stack of flat key/value layers. Lookups walk the layers
//! in order and the first layer defining a key wins: user overrides come
//! before the packaged defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the user configuration file
pub const USER_CONFIG_ENV: &str = "MYBATIS_PROVIDER_CONFIG";

/// User configuration file looked up in the working directory
pub const USER_CONFIG_NAME: &str = "mybatis-provider.toml";

const PACKAGED_DEFAULTS: &str = r#"
[mybatis.provider]
style = "lower_underscore"
"#;

/// A single named source of configuration values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    name: String,
    values: HashMap<String, String>,
}

impl ConfigLayer {
    /// Create an empty layer
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: HashMap::new(),
        }
    }

    /// The defaults shipped with this crate
    pub fn packaged_defaults() -> Result<Self> {
        Self::from_toml_str("packaged defaults", PACKAGED_DEFAULTS)
    }

    /// Parse a layer from TOML, flattening nested tables into dotted keys
    pub fn from_toml_str(name: &str, source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {}", name, e)))?;

        let mut layer = Self::new(name);
        flatten_into(&mut layer.values, "", &table);
        Ok(layer)
    }

    /// Load a layer from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&path.display().to_string(), &source)
    }

    /// Set a value, replacing any previous one
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Get a value defined by this layer
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flatten_into(values: &mut HashMap<String, String>, prefix: &str, table: &toml::Table) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            toml::Value::Table(nested) => flatten_into(values, &full_key, nested),
            toml::Value::String(s) => {
                values.insert(full_key, s.clone());
            }
            toml::Value::Integer(i) => {
                values.insert(full_key, i.to_string());
            }
            toml::Value::Float(f) => {
                values.insert(full_key, f.to_string());
            }
            toml::Value::Boolean(b) => {
                values.insert(full_key, b.to_string());
            }
            toml::Value::Datetime(dt) => {
                values.insert(full_key, dt.to_string());
            }
            toml::Value::Array(_) => {
                tracing::trace!(key = %full_key, "Ignoring array configuration value");
            }
        }
    }
}

/// Read-only view over layered configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    layers: Vec<ConfigLayer>,
}

impl ConfigResolver {
    /// Create a resolver over layers in lookup order
    pub fn from_layers(layers: Vec<ConfigLayer>) -> Self {
        Self { layers }
    }

    /// Load the user configuration (if any) on top of the packaged defaults.
    ///
    /// The user file is taken from `MYBATIS_PROVIDER_CONFIG`, falling back to
    /// `mybatis-provider.toml` in the working directory when it exists.
    pub fn load() -> Result<Self> {
        match user_config_path() {
            Some(path) => Self::with_user_file(path),
            None => Ok(Self::from_layers(vec![ConfigLayer::packaged_defaults()?])),
        }
    }

    /// Load an explicit user configuration file on top of the packaged defaults
    pub fn with_user_file(path: impl AsRef<Path>) -> Result<Self> {
        let user = ConfigLayer::from_file(path)?;
        tracing::debug!(file = user.name(), keys = user.len(), "Loaded user configuration");

        Ok(Self::from_layers(vec![user, ConfigLayer::packaged_defaults()?]))
    }

    /// Get a string value from the first layer that defines the key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    /// Get a boolean value, `None` when absent or not a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_str(key).and_then(|v| v.parse().ok())
    }

    /// Names of the layers, in lookup order
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(ConfigLayer::name).collect()
    }
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(USER_CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let local = PathBuf::from(USER_CONFIG_NAME);
    local.is_file().then_some(local)
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
}

impl LoggingConfig {
    /// Read the `logging.*` keys, `None` when none of them is set
    pub fn from_resolver(config: &ConfigResolver) -> Option<Self> {
        let level = config.get_str("logging.level");
        let file = config.get_str("logging.file");
        let format = config.get_str("logging.format");
        let stdout = config.get_bool("logging.stdout");

        if level.is_none() && file.is_none() && format.is_none() && stdout.is_none() {
            return None;
        }

        Some(Self {
            level: level.unwrap_or("info").to_string(),
            file: file.map(str::to_string),
            format: format.unwrap_or("text").to_string(),
            stdout: stdout.unwrap_or(true),
        })
    }
}
