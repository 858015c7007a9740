// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lenient scalar conversions applied while parsing values.
//!
//! Numeric values follow C-style conversion: leading whitespace is skipped
//! and the longest numeric prefix is parsed, so a unit-suffixed value like
//! `3.5kpc` loads as `3.5`. The original tool this format comes from
//! converts text with no numeric prefix to zero and unrecognized booleans to
//! false without reporting anything. That behavior is kept so existing
//! parameter files load identically, but every fallback now emits a
//! `tracing` warning so the failure is observable.

use tracing::warn;

/// Converts a value token to a double by parsing its longest numeric prefix.
/// Text with no numeric prefix yields `0.0` with a warning.
pub(crate) fn to_double(raw: &str) -> f64 {
    match numeric_prefix(raw.trim_start()) {
        Some(prefix) => prefix.parse().unwrap_or(0.0),
        None => {
            warn!(value = raw, "value is not numeric, defaulting to 0");
            0.0
        }
    }
}

/// Returns the longest prefix of `s` that parses as a float: an optional
/// sign, a mantissa with at least one digit, and an optional exponent.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let at = |i: usize| bytes.get(i).copied();

    let mut end = 0;
    if matches!(at(end), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut digits = 0;
    while at(end).map_or(false, |b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }
    if at(end) == Some(b'.') {
        end += 1;
        while at(end).map_or(false, |b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent counts only if at least one digit follows it.
    if matches!(at(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(at(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = exp;
        while at(exp).map_or(false, |b| b.is_ascii_digit()) {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }

    Some(&s[..end])
}

/// Converts a value token to an int: the double rule, truncated toward zero.
pub(crate) fn to_int(raw: &str) -> i64 {
    to_double(raw) as i64
}

/// Converts a value token to a bool. Recognizes `true`/`false` case
/// insensitively; anything else yields `false` with a warning.
pub(crate) fn to_bool(raw: &str) -> bool {
    let token = raw.trim();
    if token.eq_ignore_ascii_case("true") {
        true
    } else if token.eq_ignore_ascii_case("false") {
        false
    } else {
        warn!(value = raw, "value is not a boolean literal, defaulting to false");
        false
    }
}

/// Splits a vector value on literal commas.
///
/// Elements are not trimmed. A single trailing empty element produced by a
/// trailing comma is dropped, matching a delimiter scan that stops at end of
/// input; interior empty elements are kept.
pub(crate) fn split_elements(raw: &str) -> Vec<&str> {
    let mut elements: Vec<&str> = raw.split(',').collect();
    if raw.ends_with(',') {
        elements.pop();
    }
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_double_valid() {
        assert_eq!(to_double("3.5"), 3.5);
        assert_eq!(to_double("-2"), -2.0);
        assert_eq!(to_double("1e3"), 1000.0);
    }

    #[test]
    fn test_to_double_trims_whitespace() {
        assert_eq!(to_double(" 2.5"), 2.5);
        assert_eq!(to_double("7 "), 7.0);
    }

    #[test]
    fn test_to_double_non_numeric_defaults_to_zero() {
        assert_eq!(to_double("abc"), 0.0);
        assert_eq!(to_double(""), 0.0);
        assert_eq!(to_double("."), 0.0);
        assert_eq!(to_double("-"), 0.0);
    }

    #[test]
    fn test_to_double_parses_numeric_prefix() {
        assert_eq!(to_double("3.5kpc"), 3.5);
        assert_eq!(to_double("-2.5abc"), -2.5);
        assert_eq!(to_double("1e3x"), 1000.0);
        // An exponent marker without digits is not part of the number.
        assert_eq!(to_double("1ex"), 1.0);
        assert_eq!(to_double("5.men"), 5.0);
    }

    #[test]
    fn test_to_int_truncates_toward_zero() {
        assert_eq!(to_int("5"), 5);
        assert_eq!(to_int("3.9"), 3);
        assert_eq!(to_int("-3.9"), -3);
    }

    #[test]
    fn test_to_int_non_numeric_defaults_to_zero() {
        assert_eq!(to_int("five"), 0);
    }

    #[test]
    fn test_to_int_parses_numeric_prefix() {
        assert_eq!(to_int("5years"), 5);
        assert_eq!(to_int("-3.9s"), -3);
    }

    #[test]
    fn test_to_bool_case_insensitive() {
        assert!(to_bool("true"));
        assert!(to_bool("TRUE"));
        assert!(to_bool("True"));
        assert!(!to_bool("false"));
        assert!(!to_bool("FALSE"));
    }

    #[test]
    fn test_to_bool_unrecognized_defaults_to_false() {
        assert!(!to_bool("yes"));
        assert!(!to_bool("1"));
        assert!(!to_bool(""));
    }

    #[test]
    fn test_split_elements_basic() {
        assert_eq!(split_elements("1,2,3"), vec!["1", "2", "3"]);
        assert_eq!(split_elements("solo"), vec!["solo"]);
    }

    #[test]
    fn test_split_elements_keeps_whitespace() {
        assert_eq!(split_elements("a, b"), vec!["a", " b"]);
    }

    #[test]
    fn test_split_elements_trailing_comma() {
        assert_eq!(split_elements("1,2,"), vec!["1", "2"]);
        assert_eq!(split_elements(","), vec![""]);
    }

    #[test]
    fn test_split_elements_interior_empty() {
        assert_eq!(split_elements("a,,b"), vec!["a", "", "b"]);
    }
}
