use serde::{Deserialize, Serialize};

mod field;

pub use field::{Field, FieldType};

#[cfg(test)]
mod tests;

/// One entry of a record layout.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// Unique within its `RecordInfo`.
    pub name: String,
    /// Provenance string, carried through untouched.
    pub source: String,
    pub field_type: FieldType,
    pub size: u32,
    pub precision: u32,
    /// Absolute position of the payload within a record.
    pub offset: usize,
    pub fixed_length: usize,
    pub null_length: usize,
}

impl FieldInfo {
    pub fn new(
        name: String,
        source: String,
        field_type: FieldType,
        size: u32,
        precision: u32,
        offset: usize,
    ) -> Self {
        Self {
            name,
            source,
            field_type,
            size,
            precision,
            offset,
            fixed_length: field_type.fixed_length(size),
            null_length: field_type.null_length(),
        }
    }

    /// Offset one past the last byte this field occupies, null indicator included.
    pub fn end(&self) -> usize {
        self.offset + self.fixed_length + self.null_length
    }

    pub fn payload_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.fixed_length
    }
}
