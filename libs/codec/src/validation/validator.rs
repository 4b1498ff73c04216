//! Rule aggregation and the strict entry point.

use super::rules;
use crate::error::{StrictParseResult, ValidationFailure};
use crate::relaxed::parse_relaxed;
use tracing::debug;

/// Validate a raw message against all five rule categories.
///
/// Every category runs unconditionally and every issue is collected before
/// the decision, so the caller sees the complete diagnostic picture instead
/// of a fix-one-resubmit loop. A clean message is handed to the relaxed
/// parser, which re-detects the (trivially SOH) delimiter and produces the
/// field list and summary.
pub fn parse_strict(raw: &str) -> StrictParseResult {
    let mut issues = Vec::new();
    issues.extend(rules::check_delimiters(raw));
    issues.extend(rules::check_field_format(raw));
    issues.extend(rules::check_required_fields(raw));
    issues.extend(rules::check_field_order(raw));
    issues.extend(rules::check_whitespace(raw));

    if !issues.is_empty() {
        debug!(issue_count = issues.len(), "strict validation rejected message");
        return Err(ValidationFailure::new(issues));
    }

    Ok(parse_relaxed(raw))
}
