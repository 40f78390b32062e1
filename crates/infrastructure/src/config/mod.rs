//! Application configuration
//!
//! Layered from built-in defaults, an optional TOML file and `PLACEMARK__*`
//! environment variables, in that order of precedence.

use std::fmt;
use std::path::Path;

use application::{ApplicationError, SearchConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::telemetry::TelemetryConfig;

/// File name (without extension) looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "placemark";

/// Prefix for environment overrides, e.g. `PLACEMARK__SEARCH__MAX_RESULTS=5`
pub const ENV_PREFIX: &str = "PLACEMARK";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The configuration was read but holds invalid values
    #[error(transparent)]
    Invalid(#[from] ApplicationError),
}

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - human-readable logs by default
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Nearby search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `placemark.toml` (if present) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file when given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                config::File::from(path).required(true)
            },
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("telemetry.log_format", "text")?
            // Load from file
            .add_source(file)
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        info!(
            environment = %config.environment,
            max_results = config.search.max_results,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn environment_from_str() {
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(
            "PRODUCTION".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.search, SearchConfig::default());
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn app_config_from_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_from_file() {
        let file = write_config(
            r#"
environment = "production"

[search]
default_radius_meters = 2500.0
max_results = 5

[telemetry]
log_format = "json"
log_filter = "debug"
"#,
        );

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.search.default_radius_meters, Some(2500.0));
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.telemetry.log_filter, "debug");
    }

    #[test]
    fn load_from_partial_file_keeps_defaults() {
        let file = write_config("[search]\nmax_results = 3\n");

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.search.default_radius_meters, Some(5_000.0));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn load_zero_radius_as_unbounded() {
        let file = write_config("[search]\ndefault_radius_meters = 0\n");

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert_eq!(config.search.default_radius_meters, None);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let file = write_config("[search]\nmax_results = 0\n");

        let result = AppConfig::load_from(Some(file.path()));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(ApplicationError::Configuration(_)))
        ));
    }

    #[test]
    fn load_requires_explicit_file() {
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/placemark.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
