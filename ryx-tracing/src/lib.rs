mod telemetry;
pub use telemetry::{init_telemetry, init_telemetry_closure};

#[derive(thiserror::Error, Debug)]
pub enum TracingError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("A global subscriber is already set: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}
