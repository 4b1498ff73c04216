//! The five strict-validation rule categories.
//!
//! Each rule is a pure function from raw text to zero or more issues and
//! knows nothing about the others. The format, required-fields, and
//! field-order rules split on SOH only; a pipe-delimited message therefore
//! reaches them as one giant token while the delimiter rule fires
//! separately.
//!
//! Position semantics differ by rule: delimiter and whitespace issues carry
//! a byte offset into the raw text, format and field-order issues carry
//! a zero-based ordinal into the SOH token sequence. The two spaces are
//! intentionally not unified.

use crate::constants::{CARET, PIPE, REQUIRED_TAGS, SOH};
use crate::dictionary::resolve_tag_name;
use std::collections::HashSet;
use types::{IssueKind, ParseIssue};

/// Non-empty SOH-delimited tokens, in message order.
fn soh_tokens(raw: &str) -> Vec<&str> {
    raw.split(SOH).filter(|t| !t.is_empty()).collect()
}

/// Tag portion of a token: everything before the first `=`, or the whole
/// token when no `=` is present.
fn tag_of(token: &str) -> &str {
    token.split_once('=').map_or(token, |(tag, _)| tag)
}

/// Flag pipe and caret delimiters anywhere in the raw text.
///
/// Both can fire on the same message; each issue carries the byte offset
/// of that delimiter's first occurrence.
pub fn check_delimiters(raw: &str) -> Vec<ParseIssue> {
    let mut issues = Vec::new();
    if let Some(position) = raw.find(PIPE) {
        issues.push(ParseIssue::at(
            IssueKind::InvalidDelimiter,
            "Message uses '|' instead of SOH (\\x01) as the field delimiter",
            position,
        ));
    }
    if let Some(position) = raw.find(CARET) {
        issues.push(ParseIssue::at(
            IssueKind::InvalidDelimiter,
            "Message uses '^' instead of SOH (\\x01) as the field delimiter",
            position,
        ));
    }
    issues
}

/// Check every SOH token for `tag=value` shape.
///
/// A token can produce at most one issue: missing `=`, then empty tag, then
/// non-numeric tag, in that precedence.
pub fn check_field_format(raw: &str) -> Vec<ParseIssue> {
    let mut issues = Vec::new();
    for (index, token) in soh_tokens(raw).iter().enumerate() {
        match token.split_once('=') {
            None => issues.push(ParseIssue::at(
                IssueKind::MissingEquals,
                format!("Field \"{token}\" is missing the '=' separator"),
                index,
            )),
            Some((tag, _)) if tag.is_empty() => issues.push(ParseIssue::at(
                IssueKind::EmptyTag,
                format!("Field \"{token}\" has an empty tag"),
                index,
            )),
            Some((tag, _)) if !tag.bytes().all(|b| b.is_ascii_digit()) => {
                issues.push(ParseIssue::at(
                    IssueKind::InvalidTag,
                    format!("Tag \"{tag}\" is not numeric"),
                    index,
                ));
            }
            Some(_) => {}
        }
    }
    issues
}

/// Require BeginString (8), BodyLength (9), and MsgType (35).
///
/// Message-level check; the issues carry no position.
pub fn check_required_fields(raw: &str) -> Vec<ParseIssue> {
    let present: HashSet<&str> = soh_tokens(raw).into_iter().map(tag_of).collect();
    REQUIRED_TAGS
        .iter()
        .copied()
        .filter(|tag| !present.contains(*tag))
        .map(|tag| {
            ParseIssue::new(
                IssueKind::MissingRequiredField,
                format!("Missing required field: {} (tag {tag})", resolve_tag_name(tag)),
            )
        })
        .collect()
}

/// BeginString must open the message; CheckSum, when present, must close it.
pub fn check_field_order(raw: &str) -> Vec<ParseIssue> {
    let tokens = soh_tokens(raw);
    let mut issues = Vec::new();

    if let Some(first) = tokens.first() {
        if !first.starts_with("8=") {
            issues.push(ParseIssue::at(
                IssueKind::InvalidFieldOrder,
                "BeginString must be first",
                0,
            ));
        }
    }

    let has_checksum = tokens.iter().any(|t| t.starts_with("10="));
    if has_checksum {
        if let Some(last) = tokens.last() {
            if !last.starts_with("10=") {
                issues.push(ParseIssue::at(
                    IssueKind::InvalidFieldOrder,
                    "CheckSum must be last",
                    tokens.len() - 1,
                ));
            }
        }
    }

    issues
}

/// Flag leading and trailing space, tab, or newline on the raw text.
///
/// Runs pre-normalization and pre-split; positions are byte offsets into
/// the raw text (0 for leading, `raw.len() - 1` for trailing).
pub fn check_whitespace(raw: &str) -> Vec<ParseIssue> {
    let is_ws = |c: char| matches!(c, ' ' | '\t' | '\n' | '\r');
    let mut issues = Vec::new();

    if raw.starts_with(is_ws) {
        issues.push(ParseIssue::at(
            IssueKind::WhitespaceIssue,
            "Message has leading whitespace",
            0,
        ));
    }
    if raw.ends_with(is_ws) {
        issues.push(ParseIssue::at(
            IssueKind::WhitespaceIssue,
            "Message has trailing whitespace",
            raw.len() - 1,
        ));
    }

    issues
}
