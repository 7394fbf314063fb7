use super::internal::BoxedError;
use crate::types::FieldType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordInfoError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Index {index} was not between 0 and {count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Error converting '{value}' to a decimal in field [{field}]")]
    NumericParseFailure { field: String, value: String },
    #[error("Value '{value}' in field [{field}] has more than {max_digits} significant digits")]
    FixedDecimalTooWide {
        field: String,
        value: String,
        max_digits: usize,
    },
    #[error("Error converting '{value}' in field [{field}], use format {format}")]
    DateParseFailure {
        field: String,
        value: String,
        format: &'static str,
    },
    #[error("Field [{field}] is of type {field_type}, {requested} is not supported")]
    UnsupportedFieldType {
        field: String,
        field_type: FieldType,
        requested: String,
    },
    #[error("Field [{0}] does not have a value or null assigned")]
    MissingValueGenerator(String),
    #[error("Cannot generate a record for a RecordInfo without fields")]
    EmptySchema,
    #[error("Value {value} does not fit in field [{field}] with size {size} and precision {precision}")]
    FixedDecimalOverflow {
        field: String,
        value: String,
        size: u32,
        precision: u32,
    },
    #[error("Value of field [{field}] needs {length} units but only {size} are available")]
    ValueTooLong {
        field: String,
        length: usize,
        size: usize,
    },
    #[error("Character {character:?} cannot be stored in field [{field}]")]
    UnrepresentableCharacter { field: String, character: char },
    #[error("Record has {actual} bytes but at least {expected} are required")]
    RecordTooShort { expected: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("Error converting field {index} {attribute} to an int. Provided {attribute} was '{value}'")]
    SchemaIntegerParseFailure {
        index: usize,
        attribute: &'static str,
        value: String,
    },
    #[error("Error creating RecordInfo from xml: {0}")]
    XmlDeserialization(#[source] BoxedError),
    #[error("Error writing RecordInfo as xml: {0}")]
    XmlSerialization(#[source] BoxedError),
}
