// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operation validity checks.

use std::borrow::Cow;

use crate::violation::{CheckResult, Violation, ViolationKind};

/// Check a caller-evaluated invariant about program or object state.
///
/// `condition` is evaluated before the call, so any short-circuiting is the
/// caller's. A false condition is a `State` violation carrying `message`.
#[inline]
pub fn check_operation_valid(
    condition: bool,
    message: impl Into<Cow<'static, str>>,
) -> CheckResult {
    if condition {
        return Ok(());
    }
    Err(Violation::with_message(ViolationKind::State, None, message))
}
