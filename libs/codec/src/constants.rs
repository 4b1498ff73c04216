//! Codec-level constants.
//!
//! Delimiter characters, the preview cap for repair suggestions, and the
//! well-known tag numbers the parsers and validation rules key on. Tags are
//! kept as text because the message model carries tags as encountered,
//! including the `"?"` placeholder for unparseable fragments.

/// SOH control character (`0x01`), the canonical FIX field delimiter.
pub const SOH: char = '\x01';

/// SOH as a one-character string, for `str::replace` call sites.
pub const SOH_STR: &str = "\x01";

/// Pipe delimiter convention tolerated by the relaxed parser.
pub const PIPE: char = '|';

/// Caret delimiter convention tolerated by the relaxed parser.
pub const CARET: char = '^';

/// Longest preview text the repair engine renders before truncating.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Tags that must be present for a message to pass strict validation.
pub const REQUIRED_TAGS: [&str; 3] = [tags::BEGIN_STRING, tags::BODY_LENGTH, tags::MSG_TYPE];

/// Well-known tag numbers used on the summary and validation paths.
pub mod tags {
    pub const BEGIN_STRING: &str = "8";
    pub const BODY_LENGTH: &str = "9";
    pub const CHECKSUM: &str = "10";
    pub const CL_ORD_ID: &str = "11";
    pub const MSG_TYPE: &str = "35";
    pub const ORDER_ID: &str = "37";
    pub const ORDER_QTY: &str = "38";
    pub const ORD_STATUS: &str = "39";
    pub const PRICE: &str = "44";
    pub const SIDE: &str = "54";
    pub const SYMBOL: &str = "55";
    pub const TRANSACT_TIME: &str = "60";
    pub const EXEC_TYPE: &str = "150";
}
