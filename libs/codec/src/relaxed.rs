//! # Relaxed FIX Parser
//!
//! ## Purpose
//!
//! Best-effort, non-failing field extraction tolerant of the three delimiter
//! conventions seen in pasted and uploaded messages: SOH, pipe, and caret.
//! Any input produces a `ParsedMessage`; malformed structure degrades to
//! warnings, never to an error.
//!
//! ## Parsing Rules
//!
//! 1. Detect the delimiter in priority order SOH, pipe, caret; default SOH.
//! 2. Replace every occurrence of the detected delimiter with SOH. Only one
//!    delimiter type is substituted per call; a message mixing pipes and
//!    carets keeps the losing delimiter embedded in field values.
//! 3. Split on SOH, dropping empty segments.
//! 4. Split each token on the first `=`. Tokens without `=` surface as
//!    `{tag: "?", name: "Unknown", value: token}` rather than being dropped.
//! 5. Derive the summary from a last-write-wins tag map; the field list
//!    keeps every occurrence in message order.

use crate::constants::{tags, CARET, PIPE, SOH, SOH_STR};
use crate::dictionary::resolve_tag_name;
use std::collections::HashMap;
use tracing::debug;
use types::{Field, MessageSummary, ParsedMessage};

/// Delimiter conventions the relaxed parser tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Soh,
    Pipe,
    Caret,
}

impl Delimiter {
    /// First delimiter present in the text, in priority order SOH, pipe,
    /// caret. Defaults to SOH for single-field or empty messages.
    fn detect(raw: &str) -> Self {
        if raw.contains(SOH) {
            Delimiter::Soh
        } else if raw.contains(PIPE) {
            Delimiter::Pipe
        } else if raw.contains(CARET) {
            Delimiter::Caret
        } else {
            Delimiter::Soh
        }
    }

    fn ch(self) -> char {
        match self {
            Delimiter::Soh => SOH,
            Delimiter::Pipe => PIPE,
            Delimiter::Caret => CARET,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Delimiter::Soh => "SOH",
            Delimiter::Pipe => "'|'",
            Delimiter::Caret => "'^'",
        }
    }
}

/// Parse a raw message on a best-effort basis.
///
/// Total over arbitrary input: the worst case is an empty field list with an
/// all-empty summary and several warnings. The returned `raw` holds the
/// SOH-normalized text, so feeding it back through the parser is a no-op
/// with respect to normalization.
pub fn parse_relaxed(raw: &str) -> ParsedMessage {
    let delimiter = Delimiter::detect(raw);
    let normalized = if delimiter == Delimiter::Soh {
        raw.to_string()
    } else {
        debug!(delimiter = delimiter.label(), "normalizing non-standard delimiter");
        raw.replace(delimiter.ch(), SOH_STR)
    };

    let mut fields = Vec::new();
    for token in normalized.split(SOH).filter(|t| !t.is_empty()) {
        match token.split_once('=') {
            Some((tag, value)) => fields.push(Field::new(tag, resolve_tag_name(tag), value)),
            None => fields.push(Field::new("?", "Unknown", token)),
        }
    }

    // Last write wins for summary purposes; the field list above keeps
    // every occurrence.
    let mut by_tag: HashMap<&str, &str> = HashMap::with_capacity(fields.len());
    for field in &fields {
        by_tag.insert(field.tag.as_str(), field.value.as_str());
    }

    let summary = derive_summary(&by_tag);
    let order_key = summary.cl_ord_id.clone();
    let warnings = collect_warnings(delimiter, &fields, &by_tag);

    ParsedMessage {
        fields,
        summary,
        warnings,
        order_key,
        raw: normalized,
    }
}

fn derive_summary(by_tag: &HashMap<&str, &str>) -> MessageSummary {
    let get = |tag: &str| by_tag.get(tag).map(|value| (*value).to_string());
    MessageSummary {
        msg_type: get(tags::MSG_TYPE),
        cl_ord_id: get(tags::CL_ORD_ID),
        order_id: get(tags::ORDER_ID),
        symbol: get(tags::SYMBOL),
        side: get(tags::SIDE),
        qty: get(tags::ORDER_QTY),
        price: get(tags::PRICE),
        ord_status: get(tags::ORD_STATUS),
        // TransactTime, falling back to ExecType, then OrdStatus
        trans_type: get(tags::TRANSACT_TIME)
            .or_else(|| get(tags::EXEC_TYPE))
            .or_else(|| get(tags::ORD_STATUS)),
    }
}

fn collect_warnings(
    delimiter: Delimiter,
    fields: &[Field],
    by_tag: &HashMap<&str, &str>,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if delimiter != Delimiter::Soh {
        warnings.push(format!(
            "Non-standard delimiter {} detected; normalized to SOH",
            delimiter.label()
        ));
    }
    if !by_tag.contains_key(tags::BEGIN_STRING) {
        warnings.push("Missing BeginString (tag 8)".to_string());
    }
    if !by_tag.contains_key(tags::MSG_TYPE) {
        warnings.push("Missing MsgType (tag 35)".to_string());
    }

    // One warning per duplicated tag, in first-encounter order.
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(fields.len());
    let mut encounter_order = Vec::new();
    for field in fields {
        let count = counts.entry(field.tag.as_str()).or_insert(0);
        if *count == 0 {
            encounter_order.push(field.tag.as_str());
        }
        *count += 1;
    }
    for tag in encounter_order {
        let count = counts[tag];
        if count > 1 {
            warnings.push(format!("Tag {tag} appears {count} times"));
        }
    }

    let empty_tags: Vec<&str> = fields
        .iter()
        .filter(|f| f.value.is_empty())
        .map(|f| f.tag.as_str())
        .collect();
    if !empty_tags.is_empty() {
        warnings.push(format!("Empty value for tag(s): {}", empty_tags.join(", ")));
    }

    warnings
}
