// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range checks.
//!
//! Three shapes of "is this value acceptable":
//!
//! | Function                   | Valid iff                  | Prerequisite          |
//! |----------------------------|----------------------------|-----------------------|
//! | `check_argument_in_range`  | `lo <= value <= hi`        | none                  |
//! | `check_index_in_range`     | `0 <= index < len`         | collection present    |
//! | `check_argument_satisfies` | `predicate(value)`         | predicate present     |
//!
//! Prerequisites are checked first and reported as `Null` violations, so a
//! missing collection never shows up as a `Range` failure.

use std::borrow::Cow;
use std::fmt::Debug;

use crate::check::null::check_argument_not_null;
use crate::collection::Collection;
use crate::violation::{CheckResult, Violation, ViolationKind};

/// Parameter name reported when the collection of an index check is absent.
pub const COLLECTION_NAME: &str = "collection";

/// Parameter name reported when the predicate of a predicate check is absent.
pub const PREDICATE_NAME: &str = "predicate";

/// `lo <= value <= hi`, never reordering the bounds.
///
/// INVARIANT: `lo > hi` is an empty range; unordered values (NaN) are outside.
#[inline]
pub(crate) fn within<T: PartialOrd + ?Sized>(value: &T, lo: &T, hi: &T) -> bool {
    lo <= value && value <= hi
}

/// `0 <= index < len`.
#[inline]
pub(crate) fn index_within(index: isize, len: usize) -> bool {
    usize::try_from(index).is_ok_and(|index| index < len)
}

/// Check `lo <= value <= hi` (both bounds inclusive).
///
/// The bounds are taken as given: if `lo > hi` every value is rejected.
#[inline]
pub fn check_argument_in_range<T: PartialOrd + ?Sized>(
    value: &T,
    name: &'static str,
    lo: &T,
    hi: &T,
) -> CheckResult {
    if within(value, lo, hi) {
        return Ok(());
    }
    Err(Violation::new(ViolationKind::Range, Some(name)))
}

/// Same as [`check_argument_in_range`], reporting `message` on failure.
#[inline]
pub fn check_argument_in_range_with_message<T: PartialOrd + ?Sized>(
    value: &T,
    name: &'static str,
    lo: &T,
    hi: &T,
    message: impl Into<Cow<'static, str>>,
) -> CheckResult {
    if within(value, lo, hi) {
        return Ok(());
    }
    Err(Violation::with_message(ViolationKind::Range, Some(name), message))
}

/// Check `index` addresses an element of `collection`.
///
/// An absent collection is a `Null` violation named `"collection"` whatever
/// the index. Negative indexes and `index == len` are `Range` violations.
#[inline]
pub fn check_index_in_range<C: Collection + ?Sized>(
    index: isize,
    name: &'static str,
    collection: Option<&C>,
) -> CheckResult {
    check_argument_not_null(collection, COLLECTION_NAME)?;

    match collection {
        Some(collection) if index_within(index, collection.len()) => Ok(()),
        _ => Err(Violation::new(ViolationKind::Range, Some(name))),
    }
}

/// Check `predicate(value)` holds.
///
/// An absent predicate is a `Null` violation named `"predicate"`, reported
/// without evaluating anything. A rejected value is a `Range` violation that
/// carries the value's `Debug` rendering.
#[inline]
pub fn check_argument_satisfies<T, P>(
    value: &T,
    name: &'static str,
    predicate: Option<P>,
) -> CheckResult
where
    T: Debug + ?Sized,
    P: FnOnce(&T) -> bool,
{
    satisfies(value, name, predicate, None)
}

/// Same as [`check_argument_satisfies`], reporting `message` on failure.
#[inline]
pub fn check_argument_satisfies_with_message<T, P>(
    value: &T,
    name: &'static str,
    predicate: Option<P>,
    message: impl Into<Cow<'static, str>>,
) -> CheckResult
where
    T: Debug + ?Sized,
    P: FnOnce(&T) -> bool,
{
    satisfies(value, name, predicate, Some(message.into()))
}

#[inline]
fn satisfies<T, P>(
    value: &T,
    name: &'static str,
    predicate: Option<P>,
    message: Option<Cow<'static, str>>,
) -> CheckResult
where
    T: Debug + ?Sized,
    P: FnOnce(&T) -> bool,
{
    check_argument_not_null(predicate.as_ref(), PREDICATE_NAME)?;

    if predicate.is_some_and(|predicate| predicate(value)) {
        return Ok(());
    }
    Err(Violation::build(
        ViolationKind::Range,
        Some(name),
        message,
        Some(format!("{:?}", value)),
    ))
}
