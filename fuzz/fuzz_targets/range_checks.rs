// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the range family.
//!
//! Every range check must agree with its one-line rule and must never panic,
//! whatever the bounds, index, or collection size.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use meticulous::{
    check_argument_in_range, check_argument_satisfies, check_index_in_range, ViolationKind,
};

#[derive(Debug, Arbitrary)]
struct Input {
    value: i64,
    lo: i64,
    hi: i64,
    float: f64,
    index: isize,
    len: u8,
    present: bool,
}

fuzz_target!(|input: Input| {
    // Bounds: inclusive on both sides, never reordered
    let result = check_argument_in_range(&input.value, "value", &input.lo, &input.hi);
    let expected = input.lo <= input.value && input.value <= input.hi;
    assert_eq!(result.is_ok(), expected);

    // Floats: NaN is outside every range
    let float_result = check_argument_in_range(&input.float, "float", &-1.0, &1.0);
    if input.float.is_nan() {
        assert!(float_result.is_err());
    }

    // Index: null collection first, then 0 <= index < len
    let items = vec![0u8; input.len as usize];
    let collection = input.present.then_some(&items);
    match check_index_in_range(input.index, "index", collection) {
        Ok(()) => {
            assert!(input.present);
            assert!(input.index >= 0 && (input.index as usize) < items.len());
        }
        Err(violation) if !input.present => assert_eq!(violation.kind(), ViolationKind::Null),
        Err(violation) => assert_eq!(violation.kind(), ViolationKind::Range),
    }

    // Predicate: rejected values are carried on the violation
    if let Err(violation) = check_argument_satisfies(&input.value, "value", Some(|v: &i64| v % 3 == 0)) {
        assert_eq!(violation.value(), Some(input.value.to_string().as_str()));
    }
});
