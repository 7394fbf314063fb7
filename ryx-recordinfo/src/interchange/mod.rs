//! Textual descriptions of a `RecordInfo`: the host's `MetaInfo` XML and the
//! YAML config. Both replay `RecordInfo::add_field` in document order.

mod config;
mod xml;
