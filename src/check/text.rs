//! Non-empty string checks.
//!
//! Absent and empty are different failures: `None` is a `Null` violation,
//! `Some("")` is an `Empty` violation.

use std::borrow::Cow;

use crate::check::null::{check_argument_not_null, check_argument_not_null_with_message};
use crate::violation::{CheckResult, Violation, ViolationKind};

/// Check `text` is present and has at least one byte.
#[inline]
pub fn check_argument_not_empty(text: Option<&str>, name: &'static str) -> CheckResult {
    check_argument_not_null(text, name)?;

    match text {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(Violation::new(ViolationKind::Empty, Some(name))),
    }
}

/// Same as [`check_argument_not_empty`]; `message` is attached to whichever
/// violation fires.
#[inline]
pub fn check_argument_not_empty_with_message(
    text: Option<&str>,
    name: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> CheckResult {
    match text {
        Some(text) if !text.is_empty() => Ok(()),
        Some(_) => Err(Violation::with_message(ViolationKind::Empty, Some(name), message)),
        None => check_argument_not_null_with_message(text, name, message),
    }
}
