//! # Repair Suggestion Engine
//!
//! ## Purpose
//!
//! Deterministic, human-reviewable fix proposals for strict-validation
//! issues, plus a best-effort auto-repair path that applies only the two
//! provably safe transforms (whitespace trim, delimiter normalization)
//! directly to the text. Anything that would rewrite tag/value structure,
//! reorder fields, or synthesize missing fields stays a suggestion and
//! requires human judgment about intent.
//!
//! Suggestions are emitted in a fixed priority order regardless of the
//! order issues were supplied: delimiter, whitespace, missing-equals,
//! invalid-tag, missing-required-fields, field-order. Multiple issues of
//! one type collapse into a single suggestion, except field-order which
//! yields one suggestion per distinct violation.

use crate::constants::{CARET, PIPE, PREVIEW_MAX_CHARS, SOH_STR};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use types::{IssueKind, ParseIssue, RepairSuggestion, SuggestionKind};

// Patterns recovering structured data from issue message text.
static QUOTED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("quoted-token pattern"));
static TAG_THEN_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(.+)$").expect("tag-then-value pattern"));
static MISSING_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Missing required field: (\w+) \(tag (\d+)\)").expect("missing-field pattern")
});

/// Cap preview text at [`PREVIEW_MAX_CHARS`] characters, marking truncation
/// with a trailing `"..."`.
fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_MAX_CHARS {
        text.to_string()
    } else {
        let mut preview: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
        preview.push_str("...");
        preview
    }
}

/// Map validation issues to repair proposals.
///
/// Pure function of its inputs. An empty issue list yields an empty
/// suggestion list; a non-empty list that matches no specific rule yields
/// the `general` fallback.
pub fn generate_repair_suggestions(raw: &str, issues: &[ParseIssue]) -> Vec<RepairSuggestion> {
    let mut suggestions = Vec::new();
    let has = |kind: IssueKind| issues.iter().any(|issue| issue.kind == kind);

    if has(IssueKind::InvalidDelimiter) {
        // Re-scan the raw text rather than trusting issue data; pipe wins
        // over caret, matching the relaxed parser's priority.
        if let Some(delimiter) = [PIPE, CARET].into_iter().find(|d| raw.contains(*d)) {
            let repaired = raw.replace(delimiter, SOH_STR);
            suggestions.push(RepairSuggestion::with_preview(
                SuggestionKind::NormalizeDelimiters,
                format!("Replace every '{delimiter}' with the SOH delimiter (\\x01)"),
                truncate_preview(&repaired),
            ));
        }
    }

    if has(IssueKind::WhitespaceIssue) {
        suggestions.push(RepairSuggestion::with_preview(
            SuggestionKind::TrimWhitespace,
            "Remove leading and trailing whitespace",
            truncate_preview(raw.trim()),
        ));
    }

    if let Some(issue) = issues.iter().find(|i| i.kind == IssueKind::MissingEquals) {
        // Recover the offending token from the issue message and split it
        // into a digit run and the remainder.
        let fragment = QUOTED_TOKEN
            .captures(&issue.message)
            .and_then(|captures| {
                TAG_THEN_VALUE
                    .captures(captures.get(1).map_or("", |m| m.as_str()))
                    .map(|parts| format!("{}={}", &parts[1], &parts[2]))
            });
        match fragment {
            Some(fragment) => suggestions.push(RepairSuggestion::with_preview(
                SuggestionKind::AddEquals,
                "Insert '=' between the tag number and its value",
                truncate_preview(&fragment),
            )),
            None => suggestions.push(RepairSuggestion::new(
                SuggestionKind::AddEquals,
                "Insert '=' between each tag number and its value",
            )),
        }
    }

    if has(IssueKind::InvalidTag) {
        suggestions.push(RepairSuggestion::new(
            SuggestionKind::FixTagFormat,
            "Tags must be numeric; rewrite each field as <number>=<value>",
        ));
    }

    let missing: Vec<String> = issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::MissingRequiredField)
        .filter_map(|issue| {
            MISSING_FIELD
                .captures(&issue.message)
                .map(|parts| format!("{} (tag {})", &parts[1], &parts[2]))
        })
        .collect();
    if !missing.is_empty() {
        suggestions.push(RepairSuggestion::new(
            SuggestionKind::AddRequiredFields,
            format!("Add the required field(s): {}", missing.join(", ")),
        ));
    }

    // One suggestion per distinct order violation.
    let mut seen_order_messages: Vec<&str> = Vec::new();
    for issue in issues.iter().filter(|i| i.kind == IssueKind::InvalidFieldOrder) {
        if seen_order_messages.contains(&issue.message.as_str()) {
            continue;
        }
        seen_order_messages.push(&issue.message);
        if issue.message.contains("BeginString") {
            suggestions.push(RepairSuggestion::new(
                SuggestionKind::ReorderFields,
                "Move BeginString (tag 8) to the front of the message",
            ));
        } else if issue.message.contains("CheckSum") {
            suggestions.push(RepairSuggestion::new(
                SuggestionKind::ReorderFields,
                "Move CheckSum (tag 10) to the end of the message",
            ));
        }
    }

    if suggestions.is_empty() && !issues.is_empty() {
        suggestions.push(RepairSuggestion::new(
            SuggestionKind::General,
            format!(
                "{} issue(s) detected; review the message against the tag=value format",
                issues.len()
            ),
        ));
    }

    suggestions
}

/// Apply the safe subset of repairs directly to the text.
///
/// Trims surrounding whitespace and normalizes pipe and caret delimiters
/// (either or both) to SOH. Returns `None` when nothing changed, which is
/// distinct from repairing a message to itself.
pub fn auto_repair(raw: &str) -> Option<String> {
    let repaired = raw.trim().replace(PIPE, SOH_STR).replace(CARET, SOH_STR);
    if repaired == raw {
        None
    } else {
        debug!("auto-repair normalized whitespace or delimiters");
        Some(repaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ParseIssue;

    fn issue(kind: IssueKind, message: &str) -> ParseIssue {
        ParseIssue::new(kind, message)
    }

    #[test]
    fn test_no_issues_no_suggestions() {
        assert!(generate_repair_suggestions("8=FIX.4.4\x01", &[]).is_empty());
    }

    #[test]
    fn test_delimiter_suggestion_previews_soh_text() {
        let raw = "8=FIX.4.4|35=D|11=X|";
        let issues = vec![issue(IssueKind::InvalidDelimiter, "pipe delimiter")];
        let suggestions = generate_repair_suggestions(raw, &issues);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::NormalizeDelimiters);
        assert_eq!(
            suggestions[0].preview.as_deref(),
            Some("8=FIX.4.4\x0135=D\x0111=X\x01")
        );
    }

    #[test]
    fn test_delimiter_suggestion_prefers_pipe_over_caret() {
        let raw = "8=FIX.4.4|35=D^11=X";
        let issues = vec![
            issue(IssueKind::InvalidDelimiter, "pipe"),
            issue(IssueKind::InvalidDelimiter, "caret"),
        ];
        let suggestions = generate_repair_suggestions(raw, &issues);

        // One suggestion for the type; the caret survives in the preview.
        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].preview.as_deref(),
            Some("8=FIX.4.4\x0135=D^11=X")
        );
        assert!(suggestions[0].description.contains("'|'"));
    }

    #[test]
    fn test_whitespace_suggestion_previews_trimmed_text() {
        let raw = " 8=FIX.4.4\x0135=D\x01 ";
        let issues = vec![
            issue(IssueKind::WhitespaceIssue, "leading"),
            issue(IssueKind::WhitespaceIssue, "trailing"),
        ];
        let suggestions = generate_repair_suggestions(raw, &issues);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::TrimWhitespace);
        assert_eq!(suggestions[0].preview.as_deref(), Some("8=FIX.4.4\x0135=D\x01"));
    }

    #[test]
    fn test_add_equals_previews_corrected_fragment_only() {
        let issues = vec![issue(
            IssueKind::MissingEquals,
            "Field \"35D\" is missing the '=' separator",
        )];
        let suggestions = generate_repair_suggestions("8=FIX.4.4\x019=100\x0135D\x01", &issues);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::AddEquals);
        assert_eq!(suggestions[0].preview.as_deref(), Some("35=D"));
    }

    #[test]
    fn test_add_equals_without_recoverable_token_drops_preview() {
        let issues = vec![issue(
            IssueKind::MissingEquals,
            "Field \"???\" is missing the '=' separator",
        )];
        let suggestions = generate_repair_suggestions("???\x01", &issues);

        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].preview.is_none());
    }

    #[test]
    fn test_missing_required_fields_collapse_into_one_suggestion() {
        let issues = vec![
            issue(
                IssueKind::MissingRequiredField,
                "Missing required field: BeginString (tag 8)",
            ),
            issue(
                IssueKind::MissingRequiredField,
                "Missing required field: BodyLength (tag 9)",
            ),
        ];
        let suggestions = generate_repair_suggestions("35=D\x01", &issues);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::AddRequiredFields);
        assert_eq!(
            suggestions[0].description,
            "Add the required field(s): BeginString (tag 8), BodyLength (tag 9)"
        );
    }

    #[test]
    fn test_field_order_yields_one_suggestion_per_distinct_violation() {
        let issues = vec![
            issue(IssueKind::InvalidFieldOrder, "BeginString must be first"),
            issue(IssueKind::InvalidFieldOrder, "CheckSum must be last"),
            issue(IssueKind::InvalidFieldOrder, "CheckSum must be last"),
        ];
        let suggestions = generate_repair_suggestions("35=D\x018=FIX.4.4\x01", &issues);

        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].description.contains("BeginString"));
        assert!(suggestions[1].description.contains("CheckSum"));
    }

    #[test]
    fn test_suggestions_follow_priority_order_not_issue_order() {
        let issues = vec![
            issue(IssueKind::InvalidFieldOrder, "BeginString must be first"),
            issue(
                IssueKind::MissingRequiredField,
                "Missing required field: BodyLength (tag 9)",
            ),
            issue(IssueKind::WhitespaceIssue, "leading"),
            issue(IssueKind::InvalidDelimiter, "pipe"),
        ];
        let suggestions = generate_repair_suggestions(" 35=D|8=FIX.4.4", &issues);

        let kinds: Vec<_> = suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionKind::NormalizeDelimiters,
                SuggestionKind::TrimWhitespace,
                SuggestionKind::AddRequiredFields,
                SuggestionKind::ReorderFields,
            ]
        );
    }

    #[test]
    fn test_general_fallback_names_issue_count() {
        // empty_tag has no dedicated suggestion rule.
        let issues = vec![
            issue(IssueKind::EmptyTag, "Field \"=2\" has an empty tag"),
            issue(IssueKind::EmptyTag, "Field \"=3\" has an empty tag"),
        ];
        let suggestions = generate_repair_suggestions("=2\x01=3\x01", &issues);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::General);
        assert!(suggestions[0].description.starts_with("2 issue(s)"));
    }

    #[test]
    fn test_preview_truncation_appends_ellipsis() {
        let long_body: String = std::iter::repeat("55=AAPL|").take(30).collect();
        let issues = vec![issue(IssueKind::InvalidDelimiter, "pipe")];
        let suggestions = generate_repair_suggestions(&long_body, &issues);

        let preview = suggestions[0].preview.as_deref().unwrap();
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_auto_repair_trims_and_normalizes() {
        assert_eq!(
            auto_repair(" 8=FIX.4.4|35=D| ").as_deref(),
            Some("8=FIX.4.4\x0135=D\x01")
        );
        assert_eq!(
            auto_repair("8=FIX.4.4^35=D^").as_deref(),
            Some("8=FIX.4.4\x0135=D\x01")
        );
    }

    #[test]
    fn test_auto_repair_handles_both_delimiters_at_once() {
        assert_eq!(
            auto_repair("8=FIX.4.4|35=D^11=X").as_deref(),
            Some("8=FIX.4.4\x0135=D\x0111=X")
        );
    }

    #[test]
    fn test_auto_repair_returns_none_when_clean() {
        assert_eq!(auto_repair("8=FIX.4.4\x0135=D\x01"), None);
        assert_eq!(auto_repair(""), None);
    }

    #[test]
    fn test_auto_repair_never_touches_structure() {
        // Missing '=' and bad ordering are left alone.
        assert_eq!(auto_repair("35D\x018=FIX.4.4\x01"), None);
    }
}
