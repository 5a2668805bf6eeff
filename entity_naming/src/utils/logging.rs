//! Logging utilities for entity_naming
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Parse a log level name, defaulting to INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Open the configured log destination: the file when set, else stdout
fn make_writer(config: &LoggingConfig) -> Result<Option<BoxMakeWriter>> {
    match &config.file {
        Some(file_path) => {
            if let Some(parent) = Path::new(file_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = File::create(file_path)?;
            Ok(Some(BoxMakeWriter::new(Mutex::new(file))))
        }
        None if config.stdout => Ok(Some(BoxMakeWriter::new(std::io::stdout))),
        None => Ok(None),
    }
}

/// Install a global subscriber, returning false when one is already set
fn install<S>(subscriber: S) -> bool
where
    S: Subscriber + Send + Sync + 'static,
{
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Keeping the existing global subscriber");
            false
        }
    }
}

/// Initialize logging based on configuration.
///
/// Returns whether a subscriber was installed. An already installed global
/// subscriber is kept and is not an error.
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<bool> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(false), // No logging configuration, leave the subscriber alone
    };

    let directive = format!("entity_naming={}", parse_level(&config.level))
        .parse::<Directive>()
        .map_err(|e| Error::ConfigError(format!("Invalid log directive: {}", e)))?;
    let writer = match make_writer(config)? {
        Some(writer) => writer,
        None => return Ok(false),
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(writer);

    let installed = if config.format.eq_ignore_ascii_case("json") {
        install(builder.json().finish())
    } else {
        install(builder.finish())
    };
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_no_config_is_noop() {
        assert!(!init_logging(&None).unwrap());
    }

    #[test]
    fn test_no_destination_is_noop() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: None,
            format: "text".to_string(),
            stdout: false,
        };

        assert!(!init_logging(&Some(config)).unwrap());
    }

    // The only test in this binary that installs a global subscriber
    #[test]
    fn test_file_logging_installs_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("entity_naming.log");
        let config = Some(LoggingConfig {
            level: "debug".to_string(),
            file: Some(path.to_str().unwrap().to_string()),
            format: "json".to_string(),
            stdout: false,
        });

        assert!(init_logging(&config).unwrap());
        assert!(path.is_file());

        assert!(!init_logging(&config).unwrap());
    }
}
