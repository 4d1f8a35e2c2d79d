#![allow(clippy::must_use_candidate)]

mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level configuration for a server hosting the DSS error boundary
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
