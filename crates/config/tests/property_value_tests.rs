//! Property-based tests for scalar classification and custom-format parsing.
//!
//! Test coverage:
//! - Integers, booleans, and quoted strings classify to the matching variant
//! - Unrecognized tokens come back verbatim
//! - Parsing the same document twice gives equal results
//! - Repeated keys accumulate in order

use proptest::prelude::*;

use confval_config::{RepeatedKeyPolicy, Value, classify_scalar, parse_custom};

/// Keys made of identifier characters, never containing `.` or `=`.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}".prop_map(String::from)
}

/// Words that are not numbers, booleans, or quoted.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_:/-]{0,16}"
        .prop_filter("not a boolean", |s| {
            !s.eq_ignore_ascii_case("true") && !s.eq_ignore_ascii_case("false")
        })
        .prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_integers_classify_as_integers(n in any::<i64>()) {
        prop_assert_eq!(classify_scalar(&n.to_string()), Value::Integer(n));
    }

    #[test]
    fn prop_booleans_ignore_case(b in any::<bool>(), upper in any::<bool>()) {
        let text = if upper { b.to_string().to_uppercase() } else { b.to_string() };
        prop_assert_eq!(classify_scalar(&text), Value::Bool(b));
    }

    #[test]
    fn prop_quoted_strings_are_unwrapped(s in "[a-zA-Z0-9 _.-]{0,24}") {
        prop_assert_eq!(classify_scalar(&format!("\"{s}\"")), Value::String(s));
    }

    #[test]
    fn prop_words_are_verbatim(word in word_strategy()) {
        prop_assert_eq!(classify_scalar(&word), Value::String(word.clone()));
    }

    #[test]
    fn prop_parse_is_deterministic(
        entries in prop::collection::vec((key_strategy(), any::<i32>()), 0..16)
    ) {
        let document: String = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        let first = parse_custom(&document, RepeatedKeyPolicy::Accumulate).unwrap();
        let second = parse_custom(&document, RepeatedKeyPolicy::Accumulate).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_repeated_key_accumulates_in_order(
        key in key_strategy(),
        values in prop::collection::vec(any::<i32>(), 2..8)
    ) {
        let document: String = values.iter().map(|v| format!("{key}={v}\n")).collect();
        let parsed = parse_custom(&document, RepeatedKeyPolicy::Accumulate).unwrap();
        let expected = Value::List(values.iter().map(|v| Value::Integer(i64::from(*v))).collect());
        prop_assert_eq!(&parsed[&key], &expected);

        let parsed = parse_custom(&document, RepeatedKeyPolicy::Overwrite).unwrap();
        let last = i64::from(*values.last().unwrap());
        prop_assert_eq!(&parsed[&key], &Value::Integer(last));
    }
}
