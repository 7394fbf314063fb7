pub mod constants;
pub mod errors;
pub mod field_type;
pub mod models;
#[cfg(test)]
mod tests;
pub mod types;

// Re-exports
pub use chrono;
pub use indexmap;
pub use ordered_float;
pub use rust_decimal;
pub use serde;
pub use serde_yaml;
pub use thiserror;
pub use tracing;
