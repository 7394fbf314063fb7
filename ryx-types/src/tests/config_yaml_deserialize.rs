use crate::models::config::Config;
use crate::models::field::FieldConfig;
use crate::models::telemetry::TelemetryConfig;
use crate::types::FieldType;

#[test]
fn test_deserialize_full_config() {
    let input_config = r#"
    connection: Orders
    telemetry:
      filter: "ryx=debug"
      with_target: true
    fields:
    - name: Id
      type: Int64
    - name: Amount
      source: "Formula: 123.45"
      type: FixedDecimal
      size: 19
      scale: 6
    - name: Comment
      type: V_WString
      size: 1000
  "#;
    let config = serde_yaml::from_str::<Config>(input_config).unwrap();
    assert_eq!(config.connection, "Orders");
    assert_eq!(
        config.telemetry,
        Some(TelemetryConfig {
            filter: "ryx=debug".to_string(),
            with_target: true,
        })
    );
    assert_eq!(
        config.fields,
        vec![
            FieldConfig {
                name: "Id".to_string(),
                source: String::new(),
                typ: FieldType::Int64,
                size: 0,
                scale: 0,
            },
            FieldConfig {
                name: "Amount".to_string(),
                source: "Formula: 123.45".to_string(),
                typ: FieldType::FixedDecimal,
                size: 19,
                scale: 6,
            },
            FieldConfig {
                name: "Comment".to_string(),
                source: String::new(),
                typ: FieldType::VWString,
                size: 1000,
                scale: 0,
            },
        ]
    );
}

#[test]
fn test_defaults() {
    let config = serde_yaml::from_str::<Config>("fields: []").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.connection, "Output");

    let telemetry = serde_yaml::from_str::<TelemetryConfig>("with_target: false").unwrap();
    assert_eq!(telemetry.filter, "info");
}

#[test]
fn error_unknown_field_type() {
    let input_config = r#"
    fields:
    - name: Blob
      type: Blob
  "#;
    let error = serde_yaml::from_str::<Config>(input_config).unwrap_err();
    assert!(error.to_string().contains("unknown variant `Blob`"));
}

#[test]
fn error_unknown_attribute() {
    let input_config = r#"
    fields:
    - name: Id
      type: Int64
      width: 8
  "#;
    let error = serde_yaml::from_str::<Config>(input_config).unwrap_err();
    assert!(error.to_string().contains("unknown field `width`"));
}

#[test]
fn test_config_serialize_roundtrip() {
    let config = Config {
        connection: "Output1".to_string(),
        fields: vec![FieldConfig {
            name: "Name".to_string(),
            source: "TextInput:".to_string(),
            typ: FieldType::WString,
            size: 64,
            scale: 0,
        }],
        telemetry: Some(TelemetryConfig::default()),
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("type: WString"));
    assert!(!yaml.contains("scale"));
    assert_eq!(serde_yaml::from_str::<Config>(&yaml).unwrap(), config);
}
