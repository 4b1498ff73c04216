//! # Strict FIX Message Validation
//!
//! ## Purpose
//!
//! Rule-based validation that rejects structurally non-conformant messages
//! with itemized diagnostics. Five independent rule categories run
//! unconditionally over the raw text; their issues are aggregated before
//! the pass/fail decision so a message with four defects reports four
//! issues, not just the first one encountered.
//!
//! ## Architecture
//!
//! ```text
//! Raw Text → rules (x5) → aggregate → decide
//!                ↓             ↓          ↓
//!          ParseIssue[]   full list   Ok(relaxed parse)
//!                                     Err(ValidationFailure)
//! ```

pub mod rules;
pub mod validator;

pub use rules::{
    check_delimiters, check_field_format, check_field_order, check_required_fields,
    check_whitespace,
};
pub use validator::parse_strict;
