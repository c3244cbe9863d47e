// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Not-null checks.
//!
//! A nullable argument is an `Option<&T>`. These checks only test for `None`;
//! the success path never touches the value and never allocates.

use std::borrow::Cow;

use crate::violation::{CheckResult, Violation, ViolationKind};

/// Parameter name reported by [`check_this`].
pub const RECEIVER_NAME: &str = "this";

/// Message reported by [`check_this`].
pub const RECEIVER_MESSAGE: &str = "the receiver of the call is null";

/// Check the receiver of a method-style call is present.
///
/// Reports a `Null` violation named `"this"` with a fixed message.
#[inline]
pub fn check_this<T: ?Sized>(value: Option<&T>) -> CheckResult {
    if value.is_some() {
        return Ok(());
    }
    Err(Violation::with_message(
        ViolationKind::Null,
        Some(RECEIVER_NAME),
        RECEIVER_MESSAGE,
    ))
}

/// Check an argument is present.
#[inline]
pub fn check_argument_not_null<T: ?Sized>(value: Option<&T>, name: &'static str) -> CheckResult {
    if value.is_some() {
        return Ok(());
    }
    Err(Violation::new(ViolationKind::Null, Some(name)))
}

/// Check an argument is present, reporting `message` if it is not.
#[inline]
pub fn check_argument_not_null_with_message<T: ?Sized>(
    value: Option<&T>,
    name: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> CheckResult {
    if value.is_some() {
        return Ok(());
    }
    Err(Violation::with_message(ViolationKind::Null, Some(name), message))
}
