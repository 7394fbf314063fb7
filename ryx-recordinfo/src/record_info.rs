use ryx_types::{
    constants::DUPLICATE_NAME_SUFFIX,
    errors::types::RecordInfoError,
    indexmap::IndexMap,
    tracing::{debug, trace},
    types::{FieldInfo, FieldType},
};

/// Layout of a fixed-width record: fields in declaration order, each at a
/// precomputed offset.
///
/// A `RecordInfo` only grows. Fields are appended by the `add_*_field`
/// methods and are never removed, reordered or changed afterwards, so offsets
/// handed out once stay valid for the lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInfo {
    fields: IndexMap<String, FieldInfo>,
    total_length: usize,
}

impl RecordInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of bytes in a record of this layout.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldInfo> + '_ {
        self.fields.values()
    }

    pub fn get_field_by_index(&self, index: usize) -> Result<&FieldInfo, RecordInfoError> {
        self.fields
            .get_index(index)
            .map(|(_, field)| field)
            .ok_or(RecordInfoError::IndexOutOfRange {
                index,
                count: self.fields.len(),
            })
    }

    pub fn get_field_by_name(&self, name: &str) -> Result<&FieldInfo, RecordInfoError> {
        self.fields
            .get(name)
            .ok_or_else(|| RecordInfoError::FieldNotFound(name.to_string()))
    }

    pub(crate) fn get_full_field(
        &self,
        name: &str,
    ) -> Result<(usize, &FieldInfo), RecordInfoError> {
        self.fields
            .get_full(name)
            .map(|(index, _, field)| (index, field))
            .ok_or_else(|| RecordInfoError::FieldNotFound(name.to_string()))
    }

    /// Appends a field and returns the name it was stored under.
    ///
    /// Types with a natural width ignore `size`; only `FixedDecimal` keeps
    /// `precision`.
    pub fn add_field(
        &mut self,
        name: &str,
        source: &str,
        field_type: FieldType,
        size: u32,
        precision: u32,
    ) -> String {
        let size = field_type.natural_size().unwrap_or(size);
        let precision = if field_type.has_scale() { precision } else { 0 };
        let name = self.check_field_name(name);

        let field = FieldInfo::new(
            name.clone(),
            source.to_string(),
            field_type,
            size,
            precision,
            self.total_length,
        );
        trace!(
            "Adding {} field {} at offset {} ({} + {} bytes)",
            field_type,
            name,
            field.offset,
            field.fixed_length,
            field.null_length
        );
        self.total_length = field.end();
        self.fields.insert(name.clone(), field);
        name
    }

    pub fn add_byte_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Byte, 0, 0)
    }

    pub fn add_bool_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Bool, 0, 0)
    }

    pub fn add_int16_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Int16, 0, 0)
    }

    pub fn add_int32_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Int32, 0, 0)
    }

    pub fn add_int64_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Int64, 0, 0)
    }

    pub fn add_fixed_decimal_field(
        &mut self,
        name: &str,
        source: &str,
        size: u32,
        precision: u32,
    ) -> String {
        self.add_field(name, source, FieldType::FixedDecimal, size, precision)
    }

    pub fn add_float_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Float, 0, 0)
    }

    pub fn add_double_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Double, 0, 0)
    }

    pub fn add_string_field(&mut self, name: &str, source: &str, size: u32) -> String {
        self.add_field(name, source, FieldType::String, size, 0)
    }

    /// `size` counts UTF-16 code units, the field takes twice as many bytes.
    pub fn add_wstring_field(&mut self, name: &str, source: &str, size: u32) -> String {
        self.add_field(name, source, FieldType::WString, size, 0)
    }

    pub fn add_v_string_field(&mut self, name: &str, source: &str, size: u32) -> String {
        self.add_field(name, source, FieldType::VString, size, 0)
    }

    pub fn add_v_wstring_field(&mut self, name: &str, source: &str, size: u32) -> String {
        self.add_field(name, source, FieldType::VWString, size, 0)
    }

    pub fn add_date_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::Date, 0, 0)
    }

    pub fn add_datetime_field(&mut self, name: &str, source: &str) -> String {
        self.add_field(name, source, FieldType::DateTime, 0, 0)
    }

    // Existing documents depend on the literal "2" suffix, "X" becomes "X2", then "X22".
    fn check_field_name(&self, name: &str) -> String {
        let mut unique = name.to_string();
        while self.fields.contains_key(&unique) {
            unique.push_str(DUPLICATE_NAME_SUFFIX);
        }
        if unique != name {
            debug!("Field {} already exists, renamed to {}", name, unique);
        }
        unique
    }
}
