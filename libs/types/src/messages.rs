//! Parsed FIX message model.
//!
//! These structures are the output contract of both parser entry points.
//! They serialize directly to the JSON shape the dashboard and ingestion
//! routes expose, so field naming here is load-bearing.

use serde::{Deserialize, Serialize};

/// A single `tag=value` field in message order.
///
/// `tag` is kept as text because malformed fragments surface with the
/// placeholder tag `"?"` rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// FIX numeric tag as encountered, or `"?"` for unparseable fragments
    pub tag: String,
    /// Dictionary name for the tag, falling back to the tag itself
    pub name: String,
    /// Raw field value, possibly empty
    pub value: String,
}

impl Field {
    pub fn new(tag: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Projection of the order-related fields a message carries.
///
/// Every component is optional; a summary derived from an empty message is
/// all-`None`. `trans_type` is filled from TransactTime (60), falling back
/// to ExecType (150), then OrdStatus (39).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cl_ord_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ord_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_type: Option<String>,
}

/// Result of a relaxed parse: ordered fields, derived summary, and
/// non-fatal warnings.
///
/// `raw` holds the delimiter-normalized (SOH-joined) text, not the original
/// bytes. Parsing the stored `raw` again is a no-op with respect to
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    pub fields: Vec<Field>,
    pub summary: MessageSummary,
    pub warnings: Vec<String>,
    /// Grouping key for the order the message refers to; always ClOrdID
    /// (tag 11) when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,
    pub raw: String,
}
