use crate::RecordInfo;
use ryx_types::{
    errors::types::InterchangeError,
    serde::{Deserialize, Serialize},
    tracing::{debug, warn},
    types::{FieldInfo, FieldType},
};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(crate = "ryx_types::serde", rename = "MetaInfo")]
struct XmlMetaInfo {
    #[serde(rename = "@connection", default, skip_serializing_if = "Option::is_none")]
    connection: Option<String>,
    #[serde(rename = "RecordInfo", default)]
    record_info: XmlRecordInfo,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(crate = "ryx_types::serde")]
struct XmlRecordInfo {
    #[serde(rename = "Field", default)]
    fields: Vec<XmlField>,
}

// Attributes stay strings so a malformed number can be reported with its position.
#[derive(Debug, Serialize, Deserialize)]
#[serde(crate = "ryx_types::serde")]
struct XmlField {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@source", default)]
    source: String,
    #[serde(rename = "@size", default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(rename = "@scale", default, skip_serializing_if = "Option::is_none")]
    scale: Option<String>,
    #[serde(rename = "@type", default)]
    typ: String,
}

impl From<&FieldInfo> for XmlField {
    fn from(field: &FieldInfo) -> Self {
        let field_type = field.field_type;
        XmlField {
            name: field.name.clone(),
            source: field.source.clone(),
            size: field_type
                .has_declared_size()
                .then(|| field.size.to_string()),
            scale: field_type
                .has_scale()
                .then(|| field.precision.to_string()),
            typ: field_type.name().to_string(),
        }
    }
}

impl RecordInfo {
    /// Builds a `RecordInfo` from a `<MetaInfo><RecordInfo><Field .../>...` document.
    ///
    /// Fields with an unknown `type` are left out. A `size` or `scale` that is
    /// not an integer fails the whole document, since every later offset would
    /// be wrong.
    pub fn from_xml(xml: &str) -> Result<RecordInfo, InterchangeError> {
        let meta_info: XmlMetaInfo = quick_xml::de::from_str(xml)
            .map_err(|e| InterchangeError::XmlDeserialization(Box::new(e)))?;

        let mut record_info = RecordInfo::new();
        for (index, field) in meta_info.record_info.fields.iter().enumerate() {
            let Some(field_type) = FieldType::from_name(&field.typ) else {
                warn!(
                    "Skipping field {} [{}] with unknown type '{}'",
                    index, field.name, field.typ
                );
                continue;
            };
            let size = if field_type.has_declared_size() {
                parse_attribute(index, "size", field.size.as_deref())?
            } else {
                0
            };
            let precision = if field_type.has_scale() {
                parse_attribute(index, "scale", field.scale.as_deref())?
            } else {
                0
            };
            record_info.add_field(&field.name, &field.source, field_type, size, precision);
        }

        debug!(
            "Read RecordInfo with {} fields and {} bytes per record",
            record_info.num_fields(),
            record_info.total_length()
        );
        Ok(record_info)
    }

    /// Writes the declaration the host expects when an outgoing connection is initialised.
    pub fn to_xml(&self, connection: &str) -> Result<String, InterchangeError> {
        let meta_info = XmlMetaInfo {
            connection: Some(connection.to_string()),
            record_info: XmlRecordInfo {
                fields: self.fields().map(XmlField::from).collect(),
            },
        };
        quick_xml::se::to_string(&meta_info)
            .map_err(|e| InterchangeError::XmlSerialization(Box::new(e)))
    }
}

fn parse_attribute(
    index: usize,
    attribute: &'static str,
    value: Option<&str>,
) -> Result<u32, InterchangeError> {
    let value = value.unwrap_or_default();
    value
        .parse()
        .map_err(|_| InterchangeError::SchemaIntegerParseFailure {
            index,
            attribute,
            value: value.to_string(),
        })
}
