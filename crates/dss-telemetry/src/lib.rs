//! Logging setup for services hosting the DSS error boundary
//!
//! Installs a `tracing-subscriber` registry so the boundary's
//! `TracingReporter` events reach stdout as text or JSON.

use dss_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Initialize logging from configuration
///
/// `RUST_LOG` overrides the configured filter when it is set. Falls back to
/// the default configuration when `config` is `None`.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_config = TelemetryConfig::default();
    let config = config.unwrap_or(&default_config);

    let filter = build_filter(&config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(service = %config.service_name, format = ?config.format, "logging initialized");

    Ok(())
}

/// Build the event filter, preferring `RUST_LOG` over the configured directives
fn build_filter(directives: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(directives).map_err(|e| anyhow::anyhow!("invalid log filter '{directives}': {e}"))
}
