use crate::constants::{DATE_LENGTH, DATE_TIME_LENGTH, VAR_DATA_SLOT_LENGTH};
use chrono::{NaiveDate, NaiveDateTime};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A typed value travelling in or out of a record. `Null` stands in for any type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Field {
    Byte(u8),
    Bool(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    FixedDecimal(Decimal),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    String(String),
    WString(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Null,
}

impl Field {
    /// The field type this value can be written to, `None` for `Null`.
    pub fn get_type(&self) -> Option<FieldType> {
        match self {
            Field::Byte(_) => Some(FieldType::Byte),
            Field::Bool(_) => Some(FieldType::Bool),
            Field::Int16(_) => Some(FieldType::Int16),
            Field::Int32(_) => Some(FieldType::Int32),
            Field::Int64(_) => Some(FieldType::Int64),
            Field::FixedDecimal(_) => Some(FieldType::FixedDecimal),
            Field::Float(_) => Some(FieldType::Float),
            Field::Double(_) => Some(FieldType::Double),
            Field::String(_) => Some(FieldType::String),
            Field::WString(_) => Some(FieldType::WString),
            Field::Date(_) => Some(FieldType::Date),
            Field::DateTime(_) => Some(FieldType::DateTime),
            Field::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Field::Byte(b) => Some((*b).into()),
            Field::Int16(i) => Some((*i).into()),
            Field::Int32(i) => Some((*i).into()),
            Field::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Float(f) => Some(f.0.into()),
            Field::Double(f) => Some(f.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::String(s) | Field::WString(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Field::Byte(v) => write!(f, "{v}"),
            Field::Bool(v) => write!(f, "{v}"),
            Field::Int16(v) => write!(f, "{v}"),
            Field::Int32(v) => write!(f, "{v}"),
            Field::Int64(v) => write!(f, "{v}"),
            Field::FixedDecimal(v) => write!(f, "{v}"),
            Field::Float(v) => write!(f, "{v}"),
            Field::Double(v) => write!(f, "{v}"),
            Field::String(v) | Field::WString(v) => f.write_str(v),
            Field::Date(v) => write!(f, "{v}"),
            Field::DateTime(v) => write!(f, "{v}"),
            Field::Null => f.write_str("NULL"),
        }
    }
}

/// Field types understood by the host. Serialized with the host's own spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FieldType {
    Byte,
    Bool,
    Int16,
    Int32,
    Int64,
    FixedDecimal,
    Float,
    Double,
    String,
    WString,
    #[serde(rename = "V_String")]
    VString,
    #[serde(rename = "V_WString")]
    VWString,
    Date,
    DateTime,
}

impl FieldType {
    pub const ALL: [FieldType; 14] = [
        FieldType::Byte,
        FieldType::Bool,
        FieldType::Int16,
        FieldType::Int32,
        FieldType::Int64,
        FieldType::FixedDecimal,
        FieldType::Float,
        FieldType::Double,
        FieldType::String,
        FieldType::WString,
        FieldType::VString,
        FieldType::VWString,
        FieldType::Date,
        FieldType::DateTime,
    ];

    /// Name used in `RecordInfo` XML.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Byte => "Byte",
            FieldType::Bool => "Bool",
            FieldType::Int16 => "Int16",
            FieldType::Int32 => "Int32",
            FieldType::Int64 => "Int64",
            FieldType::FixedDecimal => "FixedDecimal",
            FieldType::Float => "Float",
            FieldType::Double => "Double",
            FieldType::String => "String",
            FieldType::WString => "WString",
            FieldType::VString => "V_String",
            FieldType::VWString => "V_WString",
            FieldType::Date => "Date",
            FieldType::DateTime => "DateTime",
        }
    }

    /// Case-insensitive lookup of a host type name.
    pub fn from_name(name: &str) -> Option<FieldType> {
        Self::ALL
            .into_iter()
            .find(|typ| typ.name().eq_ignore_ascii_case(name))
    }

    /// Size recorded for types whose width is not declared by the caller.
    pub fn natural_size(&self) -> Option<u32> {
        match self {
            FieldType::Byte | FieldType::Bool => Some(1),
            FieldType::Int16 => Some(2),
            FieldType::Int32 | FieldType::Float => Some(4),
            FieldType::Int64 | FieldType::Double => Some(8),
            FieldType::Date => Some(DATE_LENGTH),
            FieldType::DateTime => Some(DATE_TIME_LENGTH),
            FieldType::FixedDecimal
            | FieldType::String
            | FieldType::WString
            | FieldType::VString
            | FieldType::VWString => None,
        }
    }

    pub fn has_declared_size(&self) -> bool {
        self.natural_size().is_none()
    }

    pub fn has_scale(&self) -> bool {
        matches!(self, FieldType::FixedDecimal)
    }

    pub fn is_var_data(&self) -> bool {
        matches!(self, FieldType::VString | FieldType::VWString)
    }

    /// Payload bytes in the fixed part of the record, excluding the null indicator.
    pub fn fixed_length(&self, size: u32) -> usize {
        match self {
            FieldType::WString => size as usize * 2,
            FieldType::VString | FieldType::VWString => VAR_DATA_SLOT_LENGTH,
            FieldType::FixedDecimal | FieldType::String => size as usize,
            _ => self.natural_size().unwrap_or_default() as usize,
        }
    }

    /// Width of the trailing null indicator.
    pub fn null_length(&self) -> usize {
        match self {
            FieldType::Bool | FieldType::VString | FieldType::VWString => 0,
            _ => 1,
        }
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
