//! Validation diagnostics and repair proposals.
//!
//! `ParseIssue` is the unit of strict-validation output; `RepairSuggestion`
//! is the unit of repair-engine output. Both serialize their kind under the
//! JSON key `type` using the wire strings the dashboard filters on
//! (`invalid_delimiter`, `normalize_delimiters`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of structural issue classifications.
///
/// These are syntactic categories only. Semantic checks (side codes,
/// checksum arithmetic, session sequencing) are out of scope for the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidDelimiter,
    MissingEquals,
    InvalidTag,
    EmptyTag,
    MissingRequiredField,
    InvalidFieldOrder,
    WhitespaceIssue,
}

impl IssueKind {
    /// Wire string for this kind, identical to its JSON form.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidDelimiter => "invalid_delimiter",
            IssueKind::MissingEquals => "missing_equals",
            IssueKind::InvalidTag => "invalid_tag",
            IssueKind::EmptyTag => "empty_tag",
            IssueKind::MissingRequiredField => "missing_required_field",
            IssueKind::InvalidFieldOrder => "invalid_field_order",
            IssueKind::WhitespaceIssue => "whitespace_issue",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural defect found by strict validation.
///
/// `position` lives in one of two indexing spaces depending on the rule
/// that produced the issue: a zero-based token ordinal for format and
/// field-order issues, or a raw-string byte offset for delimiter and
/// whitespace issues. The spaces are intentionally not unified; consumers
/// pair the position with the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl ParseIssue {
    /// Message-level issue with no position.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
        }
    }

    /// Issue anchored to a token ordinal or byte offset.
    pub fn at(kind: IssueKind, message: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            position: Some(position),
        }
    }
}

/// Closed set of repair proposal classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    NormalizeDelimiters,
    TrimWhitespace,
    AddEquals,
    FixTagFormat,
    AddRequiredFields,
    ReorderFields,
    General,
}

impl SuggestionKind {
    /// Wire string for this kind, identical to its JSON form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::NormalizeDelimiters => "normalize_delimiters",
            SuggestionKind::TrimWhitespace => "trim_whitespace",
            SuggestionKind::AddEquals => "add_equals",
            SuggestionKind::FixTagFormat => "fix_tag_format",
            SuggestionKind::AddRequiredFields => "add_required_fields",
            SuggestionKind::ReorderFields => "reorder_fields",
            SuggestionKind::General => "general",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deterministic, human-reviewable fix proposal.
///
/// `preview` renders the corrected text (or fragment) capped at 100
/// characters; longer previews end in `"..."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl RepairSuggestion {
    pub fn new(kind: SuggestionKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            preview: None,
        }
    }

    pub fn with_preview(
        kind: SuggestionKind,
        description: impl Into<String>,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            preview: Some(preview.into()),
        }
    }
}
