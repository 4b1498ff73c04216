//! # FixLens Protocol Codec - FIX Parsing and Validation Rules
//!
//! ## Purpose
//!
//! This crate is the "rules layer" of the FixLens system: everything that
//! turns raw FIX message text into structured results or diagnostics lives
//! here. Ingestion routes, the message store, SSE fan-out, and the dashboard
//! are thin plumbing around these functions and live elsewhere.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → ingestion / store / UI
//!     ↑           ↓              ↓
//! Pure Data   Parsing Rules   JSON Payloads
//! Structures  Validation      Repair Actions
//! ```
//!
//! ## What This Crate Contains
//! - Tag dictionary and display code tables
//! - Relaxed parser tolerant of SOH, pipe, and caret delimiters
//! - Strict validator running five independent rule categories
//! - Repair suggestion engine and safe auto-repair
//!
//! ## What This Crate Does NOT Contain
//! - Network transport, persistence, or UI concerns
//! - Checksum or body-length arithmetic
//! - Session-level FIX semantics (logon/heartbeat sequencing)
//!
//! All entry points are pure, synchronous functions: no I/O, no shared
//! mutable state, safe to call concurrently without locking. Expected parse
//! failure travels in return values, never as a panic.

pub mod constants;
pub mod dictionary;
pub mod error;
pub mod relaxed;
pub mod repair;
pub mod validation;

// Re-export key items for convenience
pub use constants::{CARET, PIPE, PREVIEW_MAX_CHARS, REQUIRED_TAGS, SOH, SOH_STR};
pub use dictionary::{
    exec_type_label, msg_type_label, ord_status_label, resolve_tag_name, side_label,
    EXEC_TYPE_CODES, MSG_TYPES, ORD_STATUS_CODES, SIDE_CODES, TAG_DICTIONARY,
};
pub use error::{StrictParseResult, ValidationFailure};
pub use relaxed::parse_relaxed;
pub use repair::{auto_repair, generate_repair_suggestions};
pub use validation::parse_strict;

// Re-export the shared model so downstream callers need a single import path.
pub use types::{Field, IssueKind, MessageSummary, ParseIssue, ParsedMessage, RepairSuggestion, SuggestionKind};
