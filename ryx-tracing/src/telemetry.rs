use crate::TracingError;
use ryx_types::models::telemetry::TelemetryConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

// Init logging by setting a global handler
pub fn init_telemetry(telemetry_config: Option<TelemetryConfig>) -> Result<(), TracingError> {
    let config = telemetry_config.unwrap_or_default();
    let fmt_layer = fmt::layer().with_target(config.with_target);
    let fmt_filter = get_filter(&config)?;

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(fmt_filter))
        .try_init()?;
    Ok(())
}

// Init logging with a closure without setting a global subscriber
pub fn init_telemetry_closure<T>(
    telemetry_config: Option<TelemetryConfig>,
    closure: impl FnOnce() -> T,
) -> Result<T, TracingError> {
    let config = telemetry_config.unwrap_or_default();
    let fmt_layer = fmt::layer().with_target(config.with_target);
    let fmt_filter = get_filter(&config)?;

    let subscriber = tracing_subscriber::registry().with(fmt_layer.with_filter(fmt_filter));

    Ok(ryx_types::tracing::subscriber::with_default(
        subscriber, closure,
    ))
}

/// `RUST_LOG` wins over the configured filter.
fn get_filter(config: &TelemetryConfig) -> Result<EnvFilter, TracingError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.filter).map_err(|source| TracingError::InvalidFilter {
            filter: config.filter.clone(),
            source,
        })
    })
}
