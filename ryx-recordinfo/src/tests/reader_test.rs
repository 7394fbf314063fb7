use super::test_helper::{put, sample_record, SAMPLE_RECORD_INFO_XML, SAMPLE_RECORD_LENGTH};
use crate::RecordInfo;
use ryx_types::chrono::NaiveDate;
use ryx_types::errors::types::RecordInfoError;
use ryx_types::rust_decimal::Decimal;
use ryx_types::types::{Field, FieldType};
use std::str::FromStr;

fn sample_record_info() -> RecordInfo {
    RecordInfo::from_xml(SAMPLE_RECORD_INFO_XML).unwrap()
}

#[test]
fn test_read_sample_record() {
    let record_info = sample_record_info();
    let record = sample_record();
    assert_eq!(record_info.total_length(), SAMPLE_RECORD_LENGTH);

    let ri = &record_info;
    assert_eq!(ri.get_byte_value_from("ByteField", &record).unwrap(), (1, false));
    assert_eq!(ri.get_bool_value_from("BoolField", &record).unwrap(), (true, false));
    assert_eq!(ri.get_int16_value_from("Int16Field", &record).unwrap(), (16, false));
    assert_eq!(ri.get_int32_value_from("Int32Field", &record).unwrap(), (32, false));
    assert_eq!(ri.get_int64_value_from("Int64Field", &record).unwrap(), (64, false));
    assert_eq!(
        ri.get_fixed_decimal_value_from("FixedDecimalField", &record)
            .unwrap(),
        (Decimal::from_str("123.45").unwrap(), false)
    );
    assert_eq!(
        ri.get_float_value_from("FloatField", &record).unwrap(),
        (678.9_f32, false)
    );
    assert_eq!(
        ri.get_double_value_from("DoubleField", &record).unwrap(),
        (0.12345, false)
    );
    assert_eq!(
        ri.get_string_value_from("StringField", &record).unwrap(),
        ("A".to_string(), false)
    );
    assert_eq!(
        ri.get_wstring_value_from("WStringField", &record).unwrap(),
        ("AB".to_string(), false)
    );
    assert_eq!(
        ri.get_date_value_from("DateField", &record).unwrap(),
        (NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), false)
    );
    assert_eq!(
        ri.get_datetime_value_from("DateTimeField", &record).unwrap(),
        (
            NaiveDate::from_ymd_opt(2020, 2, 3)
                .unwrap()
                .and_hms_opt(4, 5, 6)
                .unwrap(),
            false
        )
    );
}

#[test]
fn test_get_value_from() {
    let record_info = sample_record_info();
    let record = sample_record();

    assert_eq!(
        record_info.get_value_from("Int32Field", &record).unwrap(),
        Field::Int32(32)
    );
    assert_eq!(
        record_info.get_value_from("StringField", &record).unwrap(),
        Field::String("A".to_string())
    );

    let mut null_record = record.clone();
    put(&mut null_record, 6 + 4, &[1]);
    assert_eq!(
        record_info.get_value_from("Int32Field", &null_record).unwrap(),
        Field::Null
    );
    assert_eq!(
        record_info
            .get_int32_value_from("Int32Field", &null_record)
            .unwrap(),
        (0, true)
    );
}

#[test]
fn test_var_data_cannot_be_read() {
    let record_info = sample_record_info();
    let record = sample_record();
    let error = record_info
        .get_value_from("V_StringShortField", &record)
        .unwrap_err();
    assert!(matches!(
        error,
        RecordInfoError::UnsupportedFieldType {
            field_type: FieldType::VString,
            ..
        }
    ));
}

#[test]
fn test_unknown_field() {
    let record_info = sample_record_info();
    let error = record_info
        .get_int64_value_from("Invalid", &sample_record())
        .unwrap_err();
    assert!(error.to_string().contains("Invalid"));
}

#[test]
fn test_reader_type_must_match() {
    let record_info = sample_record_info();
    let error = record_info
        .get_int32_value_from("Int64Field", &sample_record())
        .unwrap_err();
    assert!(matches!(
        error,
        RecordInfoError::UnsupportedFieldType {
            field_type: FieldType::Int64,
            ref requested,
            ..
        } if requested == "Int32"
    ));
}

#[test]
fn test_record_too_short() {
    let record_info = sample_record_info();
    let record = sample_record();

    assert_eq!(
        record_info
            .get_byte_value_from("ByteField", &record[..2])
            .unwrap(),
        (1, false)
    );
    let error = record_info
        .get_date_value_from("DateField", &record[..270])
        .unwrap_err();
    assert!(matches!(
        error,
        RecordInfoError::RecordTooShort {
            expected: 275,
            actual: 270
        }
    ));
}

#[test]
fn test_malformed_text_fields() {
    let record_info = sample_record_info();
    let mut record = sample_record();
    put(&mut record, 20, b"12x.45\0\0\0\0");
    put(&mut record, 264, b"01/01/2020");

    let error = record_info
        .get_fixed_decimal_value_from("FixedDecimalField", &record)
        .unwrap_err();
    assert!(matches!(
        error,
        RecordInfoError::NumericParseFailure { ref value, .. } if value == "12x.45"
    ));

    let error = record_info
        .get_date_value_from("DateField", &record)
        .unwrap_err();
    let message = error.to_string();
    assert!(message.contains("01/01/2020"));
    assert!(message.contains("yyyy-MM-dd"));
}

#[test]
fn test_string_stops_at_nul() {
    let mut record_info = RecordInfo::new();
    record_info.add_string_field("Name", "", 6);
    record_info.add_wstring_field("WName", "", 4);

    let mut record = vec![0_u8; record_info.total_length()];
    put(&mut record, 0, &[b'n', 0xE9, 0, b'x', b'y', b'z']);
    put(&mut record, 7, &[72, 0, 105, 0, 0, 0, 88, 0]);

    assert_eq!(
        record_info.get_string_value_from("Name", &record).unwrap(),
        ("né".to_string(), false)
    );
    assert_eq!(
        record_info.get_wstring_value_from("WName", &record).unwrap(),
        ("Hi".to_string(), false)
    );
}

#[test]
fn test_bool_null_reads_as_false() {
    let record_info = sample_record_info();
    let mut record = sample_record();
    put(&mut record, 2, &[2]);
    assert_eq!(
        record_info.get_bool_value_from("BoolField", &record).unwrap(),
        (false, true)
    );
    assert_eq!(
        record_info.get_value_from("BoolField", &record).unwrap(),
        Field::Null
    );
}

#[test]
fn test_malformed_datetime() {
    let record_info = sample_record_info();
    let mut record = sample_record();
    put(&mut record, 275, b"2020-02-03T04:05:06");

    let error = record_info
        .get_datetime_value_from("DateTimeField", &record)
        .unwrap_err();
    assert!(matches!(error, RecordInfoError::DateParseFailure { .. }));
    let message = error.to_string();
    assert!(message.contains("2020-02-03T04:05:06"));
    assert!(message.contains("yyyy-MM-dd hh:mm:ss"));
}

#[test]
fn test_fixed_decimal_wider_than_decimal() {
    let mut record_info = RecordInfo::new();
    record_info.add_fixed_decimal_field("Amount", "", 40, 2);
    let mut record = vec![0_u8; record_info.total_length()];
    put(&mut record, 0, b"123456789012345678901234567890.12");

    let error = record_info
        .get_fixed_decimal_value_from("Amount", &record)
        .unwrap_err();
    assert!(matches!(
        error,
        RecordInfoError::FixedDecimalTooWide {
            max_digits: 28,
            ref value,
            ..
        } if value == "123456789012345678901234567890.12"
    ));
    assert!(error.to_string().contains("28"));

    let mut record = vec![0_u8; record_info.total_length()];
    put(&mut record, 0, b"1234567890123456789012345.12");
    assert_eq!(
        record_info
            .get_fixed_decimal_value_from("Amount", &record)
            .unwrap(),
        (
            Decimal::from_str("1234567890123456789012345.12").unwrap(),
            false
        )
    );
}
