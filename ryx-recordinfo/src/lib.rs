//! Fixed-width record layouts shared with the host engine.
//!
//! A [`RecordInfo`] describes where each field lives inside a record buffer.
//! [`RecordBuilder`] writes new records for a layout and the `get_*_value_from`
//! readers on [`RecordInfo`] decode fields out of buffers handed over by the
//! host. Layouts are exchanged with the host as `MetaInfo` XML.
//!
//! ```
//! use ryx_recordinfo::{RecordBuilder, RecordInfo};
//!
//! let mut record_info = RecordInfo::new();
//! record_info.add_int64_field("Id", "");
//! record_info.add_string_field("Name", "", 10);
//!
//! let mut builder = RecordBuilder::new(&record_info);
//! builder.set_int64_field("Id", 64).unwrap();
//! builder.set_string_field("Name", "ABCDEFG").unwrap();
//! let record = builder.generate_record().unwrap();
//!
//! assert_eq!(record.len(), 20);
//! assert_eq!(record_info.get_int64_value_from("Id", &record).unwrap(), (64, false));
//! ```

mod generator;
mod interchange;
mod reader;
mod record_info;

pub use generator::RecordBuilder;
pub use record_info::RecordInfo;

#[cfg(test)]
mod tests;
