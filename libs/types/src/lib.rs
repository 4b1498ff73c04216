//! # FixLens Type System
//!
//! ## Purpose
//!
//! Pure data structures shared by the FixLens codec and its consumers:
//! the parsed-message model produced by the parsers and the diagnostic
//! records produced by strict validation and the repair engine.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → ingestion / store / UI
//!     ↑             ↓              ↓
//! Pure Data    Parsing Rules   JSON Payloads
//! Structures   Validation      SSE Frames
//! ```
//!
//! ## What This Crate Contains
//! - `Field`, `MessageSummary`, `ParsedMessage` message model
//! - `ParseIssue` / `IssueKind` validation diagnostics
//! - `RepairSuggestion` / `SuggestionKind` repair proposals
//!
//! ## What This Crate Does NOT Contain
//! - Parsing or validation logic (belongs in libs/codec)
//! - Transport, persistence, or UI concerns

pub mod diagnostics;
pub mod messages;

pub use diagnostics::{IssueKind, ParseIssue, RepairSuggestion, SuggestionKind};
pub use messages::{Field, MessageSummary, ParsedMessage};
