use super::{field::FieldConfig, telemetry::TelemetryConfig};
use crate::constants::DEFAULT_CONNECTION_NAME;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
/// The configuration of a record layout
pub struct Config {
    /// name of the connection written into outgoing `MetaInfo`; Default: Output
    #[serde(default = "default_connection")]
    pub connection: String,

    /// fields in record order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldConfig>,

    /// logging setup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection: default_connection(),
            fields: vec![],
            telemetry: None,
        }
    }
}

pub fn default_connection() -> String {
    DEFAULT_CONNECTION_NAME.to_owned()
}
