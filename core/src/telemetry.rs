//! Tracing subscriber setup.

use crate::config::TelemetryConfig;
use crate::error::{CoreError, CoreResult};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a stdout subscriber. `RUST_LOG` wins over the configured filter.
///
/// Calling this twice returns [`CoreError::Telemetry`] instead of panicking,
/// so tests and embedders can call it freely.
pub fn init_tracing(config: &TelemetryConfig) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| CoreError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let config = TelemetryConfig::default();
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(CoreError::Telemetry(_))));
    }
}
