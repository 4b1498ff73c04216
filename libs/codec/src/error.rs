//! Strict-validation failure type.
//!
//! Strict parsing is all-or-nothing: either the message passes every rule
//! category and the relaxed parse is returned, or the caller gets the full
//! aggregated issue list. Failure travels in the `Result`, never as a panic.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;
use types::{ParsedMessage, ParseIssue};

/// Outcome of [`parse_strict`](crate::validation::parse_strict).
pub type StrictParseResult = Result<ParsedMessage, ValidationFailure>;

/// Aggregated output of all five rule categories for a rejected message.
///
/// There is no partial-success state; one issue is enough to reject, and
/// every issue found is reported so the caller gets the complete diagnostic
/// picture in a single round trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("FIX message validation failed with {} issue(s)", .issues.len())]
pub struct ValidationFailure {
    /// Every issue found, in rule-category order.
    pub issues: Vec<ParseIssue>,
}

impl ValidationFailure {
    pub fn new(issues: Vec<ParseIssue>) -> Self {
        Self { issues }
    }
}

// Serialized as `{error, issues}` so the ingestion routes can embed the
// failure directly in their JSON responses.
impl Serialize for ValidationFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationFailure", 2)?;
        state.serialize_field("error", &self.to_string())?;
        state.serialize_field("issues", &self.issues)?;
        state.end()
    }
}
