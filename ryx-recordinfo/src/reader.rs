use crate::{generator::unsupported, RecordInfo};
use ryx_types::{
    chrono::{NaiveDate, NaiveDateTime},
    constants::{
        BOOL_NULL, DATE_FORMAT, DATE_FORMAT_DISPLAY, DATE_TIME_FORMAT, DATE_TIME_FORMAT_DISPLAY,
        MAX_DECIMAL_DIGITS, NULL_INDICATOR,
    },
    errors::types::RecordInfoError,
    ordered_float::OrderedFloat,
    rust_decimal::Decimal,
    types::{Field, FieldInfo, FieldType},
};
use std::{borrow::Cow, str::FromStr};

// Typed readers return `(value, is_null)`; a null field yields the type's zero value.
impl RecordInfo {
    pub fn get_byte_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(u8, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Byte)? {
            Field::Byte(value) => Ok((value, false)),
            _ => Ok((0, true)),
        }
    }

    pub fn get_bool_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(bool, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Bool)? {
            Field::Bool(value) => Ok((value, false)),
            _ => Ok((false, true)),
        }
    }

    pub fn get_int16_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(i16, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Int16)? {
            Field::Int16(value) => Ok((value, false)),
            _ => Ok((0, true)),
        }
    }

    pub fn get_int32_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(i32, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Int32)? {
            Field::Int32(value) => Ok((value, false)),
            _ => Ok((0, true)),
        }
    }

    pub fn get_int64_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(i64, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Int64)? {
            Field::Int64(value) => Ok((value, false)),
            _ => Ok((0, true)),
        }
    }

    pub fn get_fixed_decimal_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(Decimal, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::FixedDecimal)? {
            Field::FixedDecimal(value) => Ok((value, false)),
            _ => Ok((Decimal::ZERO, true)),
        }
    }

    pub fn get_float_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(f32, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Float)? {
            Field::Float(value) => Ok((value.0, false)),
            _ => Ok((0.0, true)),
        }
    }

    pub fn get_double_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(f64, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Double)? {
            Field::Double(value) => Ok((value.0, false)),
            _ => Ok((0.0, true)),
        }
    }

    pub fn get_string_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(String, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::String)? {
            Field::String(value) => Ok((value, false)),
            _ => Ok((String::new(), true)),
        }
    }

    pub fn get_wstring_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(String, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::WString)? {
            Field::WString(value) => Ok((value, false)),
            _ => Ok((String::new(), true)),
        }
    }

    pub fn get_date_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(NaiveDate, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::Date)? {
            Field::Date(value) => Ok((value, false)),
            _ => Ok((NaiveDate::default(), true)),
        }
    }

    pub fn get_datetime_value_from(
        &self,
        name: &str,
        record: &[u8],
    ) -> Result<(NaiveDateTime, bool), RecordInfoError> {
        match self.read_as(name, record, FieldType::DateTime)? {
            Field::DateTime(value) => Ok((value, false)),
            _ => Ok((NaiveDateTime::default(), true)),
        }
    }

    /// Reads a field whatever its type, `Field::Null` when the field is null.
    pub fn get_value_from(&self, name: &str, record: &[u8]) -> Result<Field, RecordInfoError> {
        let field = self.get_field_by_name(name)?;
        read_field(field, record)
    }

    fn read_as(
        &self,
        name: &str,
        record: &[u8],
        requested: FieldType,
    ) -> Result<Field, RecordInfoError> {
        let field = self.get_field_by_name(name)?;
        if field.field_type != requested {
            return Err(unsupported(field, requested.name()));
        }
        read_field(field, record)
    }
}

fn read_field(field: &FieldInfo, record: &[u8]) -> Result<Field, RecordInfoError> {
    let data = record
        .get(field.offset..field.end())
        .ok_or(RecordInfoError::RecordTooShort {
            expected: field.end(),
            actual: record.len(),
        })?;
    let (payload, null_indicator) = data.split_at(field.fixed_length);
    if is_null(field.field_type, payload, null_indicator) {
        return Ok(Field::Null);
    }

    let value = match field.field_type {
        FieldType::Byte => Field::Byte(payload[0]),
        FieldType::Bool => Field::Bool(payload[0] != 0),
        FieldType::Int16 => Field::Int16(i16::from_le_bytes(read_array(payload)?)),
        FieldType::Int32 => Field::Int32(i32::from_le_bytes(read_array(payload)?)),
        FieldType::Int64 => Field::Int64(i64::from_le_bytes(read_array(payload)?)),
        FieldType::Float => Field::Float(OrderedFloat(f32::from_le_bytes(read_array(payload)?))),
        FieldType::Double => Field::Double(OrderedFloat(f64::from_le_bytes(read_array(payload)?))),
        FieldType::FixedDecimal => {
            let text = read_ascii(payload);
            Field::FixedDecimal(parse_fixed_decimal(field, text.trim())?)
        }
        FieldType::String => Field::String(read_latin1(payload)),
        FieldType::WString => Field::WString(read_utf16(payload)),
        FieldType::Date => {
            let text = read_ascii(payload);
            let value = NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| {
                RecordInfoError::DateParseFailure {
                    field: field.name.clone(),
                    value: text.to_string(),
                    format: DATE_FORMAT_DISPLAY,
                }
            })?;
            Field::Date(value)
        }
        FieldType::DateTime => {
            let text = read_ascii(payload);
            let value = NaiveDateTime::parse_from_str(&text, DATE_TIME_FORMAT).map_err(|_| {
                RecordInfoError::DateParseFailure {
                    field: field.name.clone(),
                    value: text.to_string(),
                    format: DATE_TIME_FORMAT_DISPLAY,
                }
            })?;
            Field::DateTime(value)
        }
        FieldType::VString | FieldType::VWString => {
            return Err(unsupported(field, "reading variable length data"))
        }
    };
    Ok(value)
}

fn parse_fixed_decimal(field: &FieldInfo, text: &str) -> Result<Decimal, RecordInfoError> {
    Decimal::from_str(text).map_err(|_| {
        let digits = text
            .trim_start_matches(['-', '+', '0', '.'])
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        if digits > MAX_DECIMAL_DIGITS && is_plain_number(text) {
            RecordInfoError::FixedDecimalTooWide {
                field: field.name.clone(),
                value: text.to_string(),
                max_digits: MAX_DECIMAL_DIGITS,
            }
        } else {
            RecordInfoError::NumericParseFailure {
                field: field.name.clone(),
                value: text.to_string(),
            }
        }
    })
}

/// Optional sign, digits and at most one decimal point.
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut parts = unsigned.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    !(whole.is_empty() && fraction.is_empty())
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

fn is_null(field_type: FieldType, payload: &[u8], null_indicator: &[u8]) -> bool {
    match field_type {
        FieldType::Bool => payload.first() == Some(&BOOL_NULL),
        _ => null_indicator.first() == Some(&NULL_INDICATOR),
    }
}

fn read_array<const N: usize>(payload: &[u8]) -> Result<[u8; N], RecordInfoError> {
    payload
        .try_into()
        .map_err(|_| RecordInfoError::RecordTooShort {
            expected: N,
            actual: payload.len(),
        })
}

/// Bytes up to the first NUL.
fn terminated(payload: &[u8]) -> &[u8] {
    let end = payload
        .iter()
        .position(|byte| *byte == 0)
        .unwrap_or(payload.len());
    &payload[..end]
}

fn read_ascii(payload: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(terminated(payload))
}

fn read_latin1(payload: &[u8]) -> String {
    terminated(payload).iter().map(|byte| char::from(*byte)).collect()
}

fn read_utf16(payload: &[u8]) -> String {
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|bytes| u16::from_le_bytes([bytes[0], bytes[1]]))
        .take_while(|unit| *unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}
