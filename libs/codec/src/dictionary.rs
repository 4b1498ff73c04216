//! # FIX Tag Dictionary
//!
//! ## Purpose
//!
//! Static lookup tables mapping the minimal FIX subset FixLens understands:
//! tag numbers to field names, plus the display code tables for message
//! type, side, order status, and exec type. The tables are process-wide
//! immutable statics initialized once; no runtime mutation, no locking.
//!
//! The code tables are display mappings consumed by the UI layer. Nothing in
//! validation reads them; strict rules are purely structural.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Tag number to field name for the subset of tags FixLens renders.
pub static TAG_DICTIONARY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("8", "BeginString"),
        ("9", "BodyLength"),
        ("10", "CheckSum"),
        ("11", "ClOrdID"),
        ("14", "CumQty"),
        ("17", "ExecID"),
        ("21", "HandlInst"),
        ("31", "LastPx"),
        ("32", "LastQty"),
        ("34", "MsgSeqNum"),
        ("35", "MsgType"),
        ("37", "OrderID"),
        ("38", "OrderQty"),
        ("39", "OrdStatus"),
        ("40", "OrdType"),
        ("44", "Price"),
        ("49", "SenderCompID"),
        ("52", "SendingTime"),
        ("54", "Side"),
        ("55", "Symbol"),
        ("56", "TargetCompID"),
        ("58", "Text"),
        ("59", "TimeInForce"),
        ("60", "TransactTime"),
        ("150", "ExecType"),
        ("151", "LeavesQty"),
    ])
});

/// MsgType (tag 35) code to human-readable label.
pub static MSG_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("0", "Heartbeat"),
        ("1", "Test Request"),
        ("2", "Resend Request"),
        ("3", "Reject"),
        ("4", "Sequence Reset"),
        ("5", "Logout"),
        ("8", "Execution Report"),
        ("9", "Order Cancel Reject"),
        ("A", "Logon"),
        ("D", "New Order Single"),
        ("F", "Order Cancel Request"),
        ("G", "Order Cancel/Replace Request"),
        ("V", "Market Data Request"),
    ])
});

/// Side (tag 54) code to label.
pub static SIDE_CODES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("1", "Buy"), ("2", "Sell"), ("5", "Sell Short")]));

/// OrdStatus (tag 39) code to label.
pub static ORD_STATUS_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("0", "New"),
        ("1", "Partially Filled"),
        ("2", "Filled"),
        ("4", "Canceled"),
        ("6", "Pending Cancel"),
        ("8", "Rejected"),
        ("A", "Pending New"),
        ("E", "Pending Replace"),
    ])
});

/// ExecType (tag 150) code to label.
pub static EXEC_TYPE_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("0", "New"),
        ("4", "Canceled"),
        ("5", "Replaced"),
        ("6", "Pending Cancel"),
        ("8", "Rejected"),
        ("F", "Trade"),
    ])
});

/// Resolve a tag number to its dictionary name, falling back to the tag
/// itself for anything outside the subset.
pub fn resolve_tag_name(tag: &str) -> &str {
    TAG_DICTIONARY.get(tag).copied().unwrap_or(tag)
}

/// Display label for a MsgType code.
pub fn msg_type_label(code: &str) -> Option<&'static str> {
    MSG_TYPES.get(code).copied()
}

/// Display label for a Side code.
pub fn side_label(code: &str) -> Option<&'static str> {
    SIDE_CODES.get(code).copied()
}

/// Display label for an OrdStatus code.
pub fn ord_status_label(code: &str) -> Option<&'static str> {
    ORD_STATUS_CODES.get(code).copied()
}

/// Display label for an ExecType code.
pub fn exec_type_label(code: &str) -> Option<&'static str> {
    EXEC_TYPE_CODES.get(code).copied()
}
