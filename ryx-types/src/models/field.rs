use crate::types::FieldType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A field declaration, as written in a config file.
#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    #[serde(rename = "type")]
    pub typ: FieldType,

    /// declared width; ignored by types with a natural width
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u32,

    /// decimal places of a FixedDecimal
    #[serde(default, skip_serializing_if = "is_zero")]
    pub scale: u32,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}
