/// chrono format of a `date` payload (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// chrono format of a `datetime` payload (`yyyy-MM-dd hh:mm:ss`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The formats as the host documents them, used in error messages.
pub const DATE_FORMAT_DISPLAY: &str = "yyyy-MM-dd";
pub const DATE_TIME_FORMAT_DISPLAY: &str = "yyyy-MM-dd hh:mm:ss";

pub const DATE_LENGTH: u32 = 10;

/// Significant digits a decoded `FixedDecimal` can carry.
pub const MAX_DECIMAL_DIGITS: usize = 28;
pub const DATE_TIME_LENGTH: u32 = 19;

/// Width of the slot a variable-length string occupies in the fixed part of a record.
pub const VAR_DATA_SLOT_LENGTH: usize = 4;

pub const NOT_NULL_INDICATOR: u8 = 0;
pub const NULL_INDICATOR: u8 = 1;
/// `bool` fields store null in-band.
pub const BOOL_NULL: u8 = 2;

/// Suffix appended to a field name until it no longer collides with an existing field.
pub const DUPLICATE_NAME_SUFFIX: &str = "2";

pub const DEFAULT_CONNECTION_NAME: &str = "Output";
pub const DEFAULT_LOG_FILTER: &str = "info";
