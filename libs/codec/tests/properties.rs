//! Property tests for the parser and repair entry points.
//!
//! These validate the contracts that must hold for arbitrary input: the
//! relaxed parser is total, normalization is idempotent, and auto-repair
//! returns `None` exactly when there is nothing to repair.

use codec::{auto_repair, parse_relaxed, parse_strict};
use proptest::prelude::*;

/// Strategy for well-formed `tag=value` bodies: digit tags (kept clear of
/// 10/CheckSum, which carries a placement rule), values free of delimiters
/// and whitespace.
fn valid_body() -> impl Strategy<Value = String> {
    prop::collection::vec(("[2-9][0-9]{2}", "[A-Za-z0-9.]{1,8}"), 0..6).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(tag, value)| format!("{tag}={value}\x01"))
            .collect()
    })
}

proptest! {
    /// Property: any string parses without panicking into a well-formed
    /// message.
    #[test]
    fn relaxed_parse_is_total(raw in ".*") {
        let message = parse_relaxed(&raw);

        // Every field name agrees with the dictionary, or is the "Unknown"
        // placeholder a token without '=' gets.
        for field in &message.fields {
            let resolved = codec::resolve_tag_name(&field.tag);
            prop_assert!(
                field.name == resolved || (field.tag == "?" && field.name == "Unknown"),
                "field {:?} has unexpected name",
                field
            );
        }
        prop_assert!(message.order_key == message.summary.cl_ord_id);
    }

    /// Property: parsing the normalized text again changes nothing.
    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let first = parse_relaxed(&raw);
        let second = parse_relaxed(&first.raw);

        prop_assert_eq!(&first.raw, &second.raw);
        prop_assert_eq!(&first.fields, &second.fields);
        prop_assert_eq!(&first.summary, &second.summary);
    }

    /// Property: strict validation never panics, and rejection always
    /// carries at least one issue.
    #[test]
    fn strict_parse_is_total(raw in ".*") {
        match parse_strict(&raw) {
            Ok(message) => prop_assert!(!message.fields.is_empty()),
            Err(failure) => prop_assert!(!failure.issues.is_empty()),
        }
    }

    /// Property: auto-repair returns `None` exactly when the text has no
    /// surrounding whitespace and neither alternate delimiter.
    #[test]
    fn auto_repair_none_iff_nothing_to_repair(raw in ".*") {
        let nothing_to_repair = raw.trim() == raw && !raw.contains('|') && !raw.contains('^');
        prop_assert_eq!(auto_repair(&raw).is_none(), nothing_to_repair);
    }

    /// Property: auto-repaired text never trips the delimiter or
    /// whitespace rules again.
    #[test]
    fn auto_repair_output_is_stable(raw in ".*") {
        if let Some(repaired) = auto_repair(&raw) {
            prop_assert_eq!(auto_repair(&repaired), None);
        }
    }

    /// Property: well-formed bodies pass strict validation and produce the
    /// same fields through both entry points.
    #[test]
    fn valid_bodies_pass_strict(body in valid_body()) {
        let raw = format!("8=FIX.4.4\x019=100\x0135=D\x01{body}");

        let strict = parse_strict(&raw);
        prop_assert!(strict.is_ok(), "unexpected issues: {:?}", strict.err());
        prop_assert_eq!(strict.unwrap().fields, parse_relaxed(&raw).fields);
    }
}
