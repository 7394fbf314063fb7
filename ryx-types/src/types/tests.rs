use super::{FieldInfo, FieldType};

#[test]
fn test_field_type_name_roundtrip() {
    for typ in FieldType::ALL {
        assert_eq!(FieldType::from_name(typ.name()), Some(typ));
        assert_eq!(
            FieldType::from_name(&typ.name().to_ascii_lowercase()),
            Some(typ)
        );
        assert_eq!(
            FieldType::from_name(&typ.name().to_ascii_uppercase()),
            Some(typ)
        );
    }
    assert_eq!(FieldType::from_name("blob"), None);
    assert_eq!(FieldType::from_name(""), None);
}

#[test]
fn test_fixed_lengths() {
    let expected = [
        (FieldType::Byte, 0, 1, 1),
        (FieldType::Bool, 0, 1, 0),
        (FieldType::Int16, 0, 2, 1),
        (FieldType::Int32, 0, 4, 1),
        (FieldType::Int64, 0, 8, 1),
        (FieldType::FixedDecimal, 19, 19, 1),
        (FieldType::Float, 0, 4, 1),
        (FieldType::Double, 0, 8, 1),
        (FieldType::String, 64, 64, 1),
        (FieldType::WString, 64, 128, 1),
        (FieldType::VString, 1000, 4, 0),
        (FieldType::VWString, 1_073_741_823, 4, 0),
        (FieldType::Date, 0, 10, 1),
        (FieldType::DateTime, 0, 19, 1),
    ];
    for (typ, size, fixed_length, null_length) in expected {
        assert_eq!(typ.fixed_length(size), fixed_length, "{typ}");
        assert_eq!(typ.null_length(), null_length, "{typ}");
    }
}

#[test]
fn test_field_info_end() {
    let info = FieldInfo::new(
        "Name".to_string(),
        String::new(),
        FieldType::WString,
        5,
        0,
        7,
    );
    assert_eq!(info.payload_range(), 7..17);
    assert_eq!(info.end(), 18);
}
