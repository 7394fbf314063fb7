use crate::types::Field;
use chrono::{NaiveDate, NaiveDateTime};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

impl From<u8> for Field {
    fn from(value: u8) -> Self {
        Field::Byte(value)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

impl From<i16> for Field {
    fn from(value: i16) -> Self {
        Field::Int16(value)
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Int32(value)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Int64(value)
    }
}

impl From<Decimal> for Field {
    fn from(value: Decimal) -> Self {
        Field::FixedDecimal(value)
    }
}

impl From<f32> for Field {
    fn from(value: f32) -> Self {
        Field::Float(OrderedFloat(value))
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Double(OrderedFloat(value))
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::String(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::String(value.to_owned())
    }
}

impl From<NaiveDate> for Field {
    fn from(value: NaiveDate) -> Self {
        Field::Date(value)
    }
}

impl From<NaiveDateTime> for Field {
    fn from(value: NaiveDateTime) -> Self {
        Field::DateTime(value)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Into::into)
    }
}
