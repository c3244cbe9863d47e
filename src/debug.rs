// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-only checks that compile away in release builds.
//!
//! These mirror the not-null family exactly. With debug checks enabled they
//! forward to the always-on functions; with debug checks disabled their bodies
//! are removed by `#[cfg]` and they return `Ok(())` without looking at their
//! arguments. There is no runtime switch.
//!
//! | Debug function                         | Always-on counterpart                  |
//! |----------------------------------------|----------------------------------------|
//! | `debug::check_this`                    | `check_this`                           |
//! | `debug::check_argument_not_null`       | `check_argument_not_null`              |
//! | `debug::check_argument_not_null_with_message` | `check_argument_not_null_with_message` |
//!
//! # Activation
//!
//! `build.rs` sets the `meticulous_debug_checks` cfg. In order of precedence:
//! `METICULOUS_DEBUG_CHECKS=on|off` in the build environment, the
//! `debug-checks` feature, then `debug_assertions` of the profile.
//!
//! # Usage
//!
//! ```
//! use meticulous::debug;
//!
//! fn render(template: Option<&str>) -> Result<(), meticulous::Violation> {
//!     // Checked in debug builds only
//!     debug::check_argument_not_null(template, "template")?;
//!     Ok(())
//! }
//!
//! assert_eq!(render(None).is_err(), debug::ENABLED);
//! ```
//!
//! The functions still receive their arguments, so the caller evaluates them
//! even when the layer is disabled. When building an argument costs something
//! (a `format!` message, a lookup), use the macro forms instead. A disabled
//! macro expands to `Ok(())` and never evaluates its arguments:
//!
//! ```
//! use meticulous::{debug, debug_check_argument_not_null};
//!
//! fn open(path: Option<&str>, attempt: u32) -> Result<(), meticulous::Violation> {
//!     debug_check_argument_not_null!(path, "path", format!("no path on attempt {}", attempt))?;
//!     Ok(())
//! }
//!
//! assert_eq!(open(None, 3).is_err(), debug::ENABLED);
//! ```
//!
//! | Debug macro                                      | Always-on counterpart                  |
//! |--------------------------------------------------|----------------------------------------|
//! | `debug_check_this!(value)`                       | `check_this`                           |
//! | `debug_check_argument_not_null!(value, name)`    | `check_argument_not_null`              |
//! | `debug_check_argument_not_null!(value, name, m)` | `check_argument_not_null_with_message` |

use std::borrow::Cow;

use crate::violation::CheckResult;

/// Whether this build compiled the debug-only checks in.
pub const ENABLED: bool = cfg!(meticulous_debug_checks);

/// Debug-only [`check_this`](crate::check_this).
#[inline(always)]
pub fn check_this<T: ?Sized>(value: Option<&T>) -> CheckResult {
    #[cfg(meticulous_debug_checks)]
    {
        crate::check::null::check_this(value)
    }
    #[cfg(not(meticulous_debug_checks))]
    {
        let _ = value;
        Ok(())
    }
}

/// Debug-only [`check_argument_not_null`](crate::check_argument_not_null).
#[inline(always)]
pub fn check_argument_not_null<T: ?Sized>(value: Option<&T>, name: &'static str) -> CheckResult {
    #[cfg(meticulous_debug_checks)]
    {
        crate::check::null::check_argument_not_null(value, name)
    }
    #[cfg(not(meticulous_debug_checks))]
    {
        let _ = (value, name);
        Ok(())
    }
}

/// Debug-only
/// [`check_argument_not_null_with_message`](crate::check_argument_not_null_with_message).
#[inline(always)]
pub fn check_argument_not_null_with_message<T: ?Sized>(
    value: Option<&T>,
    name: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> CheckResult {
    #[cfg(meticulous_debug_checks)]
    {
        crate::check::null::check_argument_not_null_with_message(value, name, message)
    }
    #[cfg(not(meticulous_debug_checks))]
    {
        let _ = (value, name, message);
        Ok(())
    }
}

/// Debug-only [`check_this`](crate::check_this) that skips evaluating its
/// argument when debug checks are disabled.
#[cfg(meticulous_debug_checks)]
#[macro_export]
macro_rules! debug_check_this {
    ($value:expr $(,)?) => {
        $crate::check_this($value)
    };
}

/// Debug-only [`check_this`](crate::check_this) that skips evaluating its
/// argument when debug checks are disabled.
#[cfg(not(meticulous_debug_checks))]
#[macro_export]
macro_rules! debug_check_this {
    ($value:expr $(,)?) => {{
        // Type-checked, never called
        let _ = || $crate::check_this($value);
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}

/// Debug-only [`check_argument_not_null`](crate::check_argument_not_null),
/// with an optional message, that skips evaluating its arguments when debug
/// checks are disabled.
#[cfg(meticulous_debug_checks)]
#[macro_export]
macro_rules! debug_check_argument_not_null {
    ($value:expr, $name:expr $(,)?) => {
        $crate::check_argument_not_null($value, $name)
    };
    ($value:expr, $name:expr, $message:expr $(,)?) => {
        $crate::check_argument_not_null_with_message($value, $name, $message)
    };
}

/// Debug-only [`check_argument_not_null`](crate::check_argument_not_null),
/// with an optional message, that skips evaluating its arguments when debug
/// checks are disabled.
#[cfg(not(meticulous_debug_checks))]
#[macro_export]
macro_rules! debug_check_argument_not_null {
    ($value:expr, $name:expr $(,)?) => {{
        let _ = || $crate::check_argument_not_null($value, $name);
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
    ($value:expr, $name:expr, $message:expr $(,)?) => {{
        let _ = || $crate::check_argument_not_null_with_message($value, $name, $message);
        ::core::result::Result::<(), $crate::Violation>::Ok(())
    }};
}
