//! Infrastructure layer - Adapters for external systems
//!
//! Configuration loading, logging setup and the JSON location catalog.

pub mod catalog;
pub mod config;
pub mod telemetry;

pub use catalog::{CatalogError, LocationCatalog};
pub use config::{AppConfig, ConfigError, Environment};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
