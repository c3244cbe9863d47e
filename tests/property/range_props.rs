//! Bounds, index and predicate properties.

use super::common::is_even;
use meticulous::{
    check_argument_in_range, check_argument_satisfies, check_index_in_range, ViolationKind,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Ordered bounds with a value inside them.
fn inside_strategy() -> impl Strategy<Value = (i64, i64, i64)> {
    (any::<i64>(), any::<i64>())
        .prop_map(|(a, b)| (a.min(b), a.max(b)))
        .prop_flat_map(|(lo, hi)| (lo..=hi, Just(lo), Just(hi)))
}

/// A collection length and an index anywhere around it.
fn index_strategy() -> impl Strategy<Value = (usize, isize)> {
    (0usize..128).prop_flat_map(|len| (Just(len), -256isize..256))
}

// ============================================================================
// BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn prop_inside_bounds_passes((value, lo, hi) in inside_strategy()) {
        prop_assert!(check_argument_in_range(&value, "v", &lo, &hi).is_ok());
    }

    #[test]
    fn prop_bounds_are_inclusive(a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(check_argument_in_range(&lo, "v", &lo, &hi).is_ok());
        prop_assert!(check_argument_in_range(&hi, "v", &lo, &hi).is_ok());
    }

    #[test]
    fn prop_matches_inclusive_rule(value in any::<i32>(), lo in any::<i32>(), hi in any::<i32>()) {
        let result = check_argument_in_range(&value, "v", &lo, &hi);
        prop_assert_eq!(result.is_ok(), lo <= value && value <= hi);
        if let Err(violation) = result {
            prop_assert_eq!(violation.kind(), ViolationKind::Range);
            prop_assert_eq!(violation.name(), Some("v"));
        }
    }

    #[test]
    fn prop_inverted_bounds_reject_all(value in any::<i64>(), lo in any::<i64>(), hi in any::<i64>()) {
        prop_assume!(lo > hi);
        prop_assert!(check_argument_in_range(&value, "v", &lo, &hi).is_err());
    }

    #[test]
    fn prop_degenerate_five_two(value in any::<i64>()) {
        prop_assert!(check_argument_in_range(&value, "v", &5, &2).is_err());
    }
}

// ============================================================================
// INDEX
// ============================================================================

proptest! {
    #[test]
    fn prop_index_matches_rule((len, index) in index_strategy()) {
        let items = vec![0u8; len];
        let result = check_index_in_range(index, "i", Some(&items));
        let valid = index >= 0 && (index as usize) < len;
        prop_assert_eq!(result.is_ok(), valid);
        if let Err(violation) = result {
            prop_assert_eq!(violation.kind(), ViolationKind::Range);
        }
    }

    #[test]
    fn prop_index_at_len_fails(len in 0usize..1024) {
        let items = vec![(); len];
        prop_assert!(check_index_in_range(len as isize, "i", Some(&items)).is_err());
    }

    #[test]
    fn prop_absent_collection_is_null(index in any::<isize>()) {
        let violation = check_index_in_range::<Vec<u8>>(index, "i", None).unwrap_err();
        prop_assert_eq!(violation.kind(), ViolationKind::Null);
    }
}

// ============================================================================
// PREDICATE
// ============================================================================

proptest! {
    #[test]
    fn prop_predicate_matches_rule(value in any::<i64>()) {
        let result = check_argument_satisfies(&value, "n", Some(is_even));
        prop_assert_eq!(result.is_ok(), value % 2 == 0);
        if let Err(violation) = result {
            let rendered = value.to_string();
            prop_assert_eq!(violation.value(), Some(rendered.as_str()));
        }
    }
}
