// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the meticulous range predicates.
//!
//! This standalone crate extracts the two predicates every range check is
//! built on and proves them against their arithmetic definitions.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither predicate panics for any input
//! 2. **Inclusive bounds**: `lo` and `hi` are accepted whenever `lo <= hi`
//! 3. **Empty inverted range**: `lo > hi` rejects every value
//! 4. **Index bounds**: `index_within(i, len)` iff `0 <= i < len`

// ============================================================================
// PREDICATES (copied from src/check/range.rs)
// ============================================================================

/// `lo <= value <= hi`, never reordering the bounds.
pub fn within<T: PartialOrd + ?Sized>(value: &T, lo: &T, hi: &T) -> bool {
    lo <= value && value <= hi
}

/// `0 <= index < len`.
pub fn index_within(index: isize, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|index| index < len)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify `within` agrees with the two-sided comparison for every i64 triple.
    #[kani::proof]
    fn verify_within_matches_definition() {
        let value: i64 = kani::any();
        let lo: i64 = kani::any();
        let hi: i64 = kani::any();

        kani::assert(
            within(&value, &lo, &hi) == (lo <= value && value <= hi),
            "within must equal lo <= value <= hi",
        );
    }

    /// Verify both bounds are accepted for any non-empty range.
    #[kani::proof]
    fn verify_bounds_inclusive() {
        let lo: i64 = kani::any();
        let hi: i64 = kani::any();
        kani::assume(lo <= hi);

        kani::assert(within(&lo, &lo, &hi), "lower bound must be accepted");
        kani::assert(within(&hi, &lo, &hi), "upper bound must be accepted");
    }

    /// Verify an inverted range accepts nothing.
    #[kani::proof]
    fn verify_inverted_range_empty() {
        let value: i64 = kani::any();
        let lo: i64 = kani::any();
        let hi: i64 = kani::any();
        kani::assume(lo > hi);

        kani::assert(!within(&value, &lo, &hi), "inverted range must reject every value");
    }

    /// Verify NaN is outside every float range.
    #[kani::proof]
    fn verify_nan_rejected() {
        let lo: f64 = kani::any();
        let hi: f64 = kani::any();

        kani::assert(!within(&f64::NAN, &lo, &hi), "NaN must be rejected");
    }

    /// Verify `index_within` against signed arithmetic, including isize::MIN.
    #[kani::proof]
    fn verify_index_within_matches_definition() {
        let index: isize = kani::any();
        let len: usize = kani::any();

        let expected = index >= 0 && (index as usize) < len;
        kani::assert(index_within(index, len) == expected, "0 <= index < len");
    }

    /// Verify `index == len` is always rejected.
    #[kani::proof]
    fn verify_index_at_len_rejected() {
        let len: usize = kani::any();
        kani::assume(len <= isize::MAX as usize);

        kani::assert(!index_within(len as isize, len), "index == len must be rejected");
    }
}
