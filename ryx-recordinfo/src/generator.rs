use crate::RecordInfo;
use ryx_types::{
    chrono::{NaiveDate, NaiveDateTime},
    constants::{BOOL_NULL, DATE_FORMAT, DATE_TIME_FORMAT, NULL_INDICATOR},
    errors::types::RecordInfoError,
    rust_decimal::{Decimal, RoundingStrategy},
    tracing::trace,
    types::{Field, FieldInfo, FieldType},
};

/// Collects one value (or null) per field and writes them out as a record.
///
/// The builder can be reused across rows: `reset` clears all values while
/// keeping the layout.
#[derive(Debug, Clone)]
pub struct RecordBuilder<'a> {
    record_info: &'a RecordInfo,
    values: Vec<Option<Field>>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(record_info: &'a RecordInfo) -> Self {
        Self {
            record_info,
            values: vec![None; record_info.num_fields()],
        }
    }

    pub fn record_info(&self) -> &'a RecordInfo {
        self.record_info
    }

    /// Assigns a value, `Field::Null` marks the field null.
    ///
    /// The value must carry the same type as the field, nothing is converted.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<Field>,
    ) -> Result<(), RecordInfoError> {
        let value = value.into();
        let (index, field) = self.record_info.get_full_field(name)?;
        if let Some(value_type) = value.get_type() {
            if value_type != field.field_type {
                return Err(unsupported(field, value_type.name()));
            }
        }
        self.values[index] = Some(value);
        Ok(())
    }

    pub fn set_field_null(&mut self, name: &str) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Null)
    }

    pub fn set_byte_field(&mut self, name: &str, value: u8) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Byte(value))
    }

    pub fn set_bool_field(&mut self, name: &str, value: bool) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Bool(value))
    }

    pub fn set_int16_field(&mut self, name: &str, value: i16) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Int16(value))
    }

    pub fn set_int32_field(&mut self, name: &str, value: i32) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Int32(value))
    }

    pub fn set_int64_field(&mut self, name: &str, value: i64) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Int64(value))
    }

    pub fn set_fixed_decimal_field(
        &mut self,
        name: &str,
        value: Decimal,
    ) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::FixedDecimal(value))
    }

    pub fn set_float_field(&mut self, name: &str, value: f32) -> Result<(), RecordInfoError> {
        self.set_field(name, value)
    }

    pub fn set_double_field(&mut self, name: &str, value: f64) -> Result<(), RecordInfoError> {
        self.set_field(name, value)
    }

    pub fn set_string_field(&mut self, name: &str, value: &str) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::String(value.to_string()))
    }

    pub fn set_wstring_field(&mut self, name: &str, value: &str) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::WString(value.to_string()))
    }

    pub fn set_date_field(&mut self, name: &str, value: NaiveDate) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::Date(value))
    }

    pub fn set_datetime_field(
        &mut self,
        name: &str,
        value: NaiveDateTime,
    ) -> Result<(), RecordInfoError> {
        self.set_field(name, Field::DateTime(value))
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|value| *value = None);
    }

    /// Writes every field in layout order into a new buffer of
    /// `RecordInfo::total_length` bytes.
    pub fn generate_record(&self) -> Result<Vec<u8>, RecordInfoError> {
        if self.record_info.is_empty() {
            return Err(RecordInfoError::EmptySchema);
        }

        let mut record = vec![0_u8; self.record_info.total_length()];
        for (field, value) in self.record_info.fields().zip(&self.values) {
            let value = value
                .as_ref()
                .ok_or_else(|| RecordInfoError::MissingValueGenerator(field.name.clone()))?;
            let actual = record.len();
            let data = record
                .get_mut(field.offset..field.end())
                .ok_or(RecordInfoError::RecordTooShort {
                    expected: field.end(),
                    actual,
                })?;
            generate_field(field, value, data)?;
        }
        trace!("Generated record of {} bytes", record.len());
        Ok(record)
    }
}

/// `data` spans the payload and the null indicator of `field`, zero filled.
fn generate_field(
    field: &FieldInfo,
    value: &Field,
    data: &mut [u8],
) -> Result<(), RecordInfoError> {
    debug_assert_eq!(data.len(), field.fixed_length + field.null_length);
    if field.field_type.is_var_data() {
        return Err(unsupported(field, "generating a record"));
    }

    let (payload, null_indicator) = data.split_at_mut(field.fixed_length);
    match (field.field_type, value) {
        (FieldType::Bool, Field::Null) => payload[0] = BOOL_NULL,
        (_, Field::Null) => null_indicator[0] = NULL_INDICATOR,
        (FieldType::Byte, Field::Byte(value)) => payload[0] = *value,
        (FieldType::Bool, Field::Bool(value)) => payload[0] = u8::from(*value),
        (FieldType::Int16, Field::Int16(value)) => payload.copy_from_slice(&value.to_le_bytes()),
        (FieldType::Int32, Field::Int32(value)) => payload.copy_from_slice(&value.to_le_bytes()),
        (FieldType::Int64, Field::Int64(value)) => payload.copy_from_slice(&value.to_le_bytes()),
        (FieldType::Float, Field::Float(value)) => payload.copy_from_slice(&value.0.to_le_bytes()),
        (FieldType::Double, Field::Double(value)) => {
            payload.copy_from_slice(&value.0.to_le_bytes())
        }
        (FieldType::FixedDecimal, Field::FixedDecimal(value)) => {
            let text = format_fixed_decimal(field, value)?;
            write_ascii(field, &text, payload)?;
        }
        (FieldType::String, Field::String(value)) => write_latin1(field, value, payload)?,
        (FieldType::WString, Field::WString(value)) => write_utf16(field, value, payload)?,
        (FieldType::Date, Field::Date(value)) => {
            write_ascii(field, &value.format(DATE_FORMAT).to_string(), payload)?
        }
        (FieldType::DateTime, Field::DateTime(value)) => {
            write_ascii(field, &value.format(DATE_TIME_FORMAT).to_string(), payload)?
        }
        (_, value) => {
            let requested = value.get_type().map_or("NULL", |typ| typ.name());
            return Err(unsupported(field, requested));
        }
    }
    Ok(())
}

fn format_fixed_decimal(field: &FieldInfo, value: &Decimal) -> Result<String, RecordInfoError> {
    let rounded =
        value.round_dp_with_strategy(field.precision, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", field.precision as usize, rounded);
    if text.len() > field.fixed_length {
        return Err(RecordInfoError::FixedDecimalOverflow {
            field: field.name.clone(),
            value: value.to_string(),
            size: field.size,
            precision: field.precision,
        });
    }
    Ok(text)
}

fn write_ascii(field: &FieldInfo, text: &str, payload: &mut [u8]) -> Result<(), RecordInfoError> {
    let bytes = text.as_bytes();
    check_length(field, bytes.len(), payload.len())?;
    payload[..bytes.len()].copy_from_slice(bytes);
    Ok(())
}

fn write_latin1(field: &FieldInfo, text: &str, payload: &mut [u8]) -> Result<(), RecordInfoError> {
    check_length(field, text.chars().count(), payload.len())?;
    // NUL terminates the payload, so it cannot be part of a value.
    for (byte, character) in payload.iter_mut().zip(text.chars()) {
        *byte = u8::try_from(character)
            .ok()
            .filter(|byte| *byte != 0)
            .ok_or_else(|| unrepresentable(field, character))?;
    }
    Ok(())
}

fn write_utf16(field: &FieldInfo, text: &str, payload: &mut [u8]) -> Result<(), RecordInfoError> {
    if text.contains('\0') {
        return Err(unrepresentable(field, '\0'));
    }
    let units: Vec<u16> = text.encode_utf16().collect();
    check_length(field, units.len(), payload.len() / 2)?;
    for (bytes, unit) in payload.chunks_exact_mut(2).zip(units) {
        bytes.copy_from_slice(&unit.to_le_bytes());
    }
    Ok(())
}

fn check_length(field: &FieldInfo, length: usize, size: usize) -> Result<(), RecordInfoError> {
    if length > size {
        return Err(RecordInfoError::ValueTooLong {
            field: field.name.clone(),
            length,
            size,
        });
    }
    Ok(())
}

fn unrepresentable(field: &FieldInfo, character: char) -> RecordInfoError {
    RecordInfoError::UnrepresentableCharacter {
        field: field.name.clone(),
        character,
    }
}

pub(crate) fn unsupported(field: &FieldInfo, requested: &str) -> RecordInfoError {
    RecordInfoError::UnsupportedFieldType {
        field: field.name.clone(),
        field_type: field.field_type,
        requested: requested.to_string(),
    }
}

impl RecordInfo {
    /// Generates a record from `(name, value)` pairs, `Field::Null` for nulls.
    /// Every field of the layout needs an entry.
    pub fn generate_record<I, S>(&self, values: I) -> Result<Vec<u8>, RecordInfoError>
    where
        I: IntoIterator<Item = (S, Field)>,
        S: AsRef<str>,
    {
        let mut builder = RecordBuilder::new(self);
        for (name, value) in values {
            builder.set_field(name.as_ref(), value)?;
        }
        builder.generate_record()
    }
}
