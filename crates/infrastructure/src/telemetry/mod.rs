//! Logging and tracing infrastructure
//!
//! Installs a `tracing-subscriber` pipeline with text or JSON output.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
