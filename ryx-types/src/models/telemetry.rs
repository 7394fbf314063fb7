use crate::constants::DEFAULT_LOG_FILTER;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set; Default: info
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// print the event target next to each log line
    #[serde(default)]
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            with_target: false,
        }
    }
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}
