use crate::RecordInfo;
use ryx_types::{
    models::{config::Config, field::FieldConfig},
    tracing::debug,
};

impl RecordInfo {
    pub fn from_config(config: &Config) -> RecordInfo {
        let mut record_info = RecordInfo::new();
        for field in &config.fields {
            record_info.add_field(&field.name, &field.source, field.typ, field.size, field.scale);
        }
        debug!(
            "Built RecordInfo for connection {} with {} fields",
            config.connection,
            record_info.num_fields()
        );
        record_info
    }

    pub fn to_config(&self, connection: &str) -> Config {
        Config {
            connection: connection.to_string(),
            fields: self
                .fields()
                .map(|field| FieldConfig {
                    name: field.name.clone(),
                    source: field.source.clone(),
                    typ: field.field_type,
                    size: if field.field_type.has_declared_size() {
                        field.size
                    } else {
                        0
                    },
                    scale: field.precision,
                })
                .collect(),
            telemetry: None,
        }
    }
}
