//! Stable error codes.
//!
//! Every user-facing error carries a bracketed code in its message and exposes
//! the same code through a `code()` accessor. Codes are stable across releases
//! so that callers can match on them without parsing message text.

pub const GRID_INDEX_OUT_OF_RANGE: &str = "SHASM_GRID_001";

pub const TABLE_DUPLICATE_HEADER: &str = "SHASM_TABLE_001";
pub const TABLE_MISSING_HEADER: &str = "SHASM_TABLE_002";
pub const TABLE_HEADER_NOT_FOUND: &str = "SHASM_TABLE_003";

pub const FILE_INVALID_NAME: &str = "SHASM_FILE_001";
pub const FILE_NAME_TOO_SHORT: &str = "SHASM_FILE_002";
pub const FILE_INVALID_FORMAT: &str = "SHASM_FILE_003";

pub const GROUP_NO_SERIAL: &str = "SHASM_GROUP_001";
pub const GROUP_SERIAL_MISMATCH: &str = "SHASM_GROUP_002";

pub const CONFIG_ZERO_SERIAL_LEN: &str = "SHASM_CONFIG_001";
