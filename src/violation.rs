// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure value every check produces.
//!
//! A [`Violation`] is built only on the failure path and handed straight back
//! to the caller. Callers branch on [`ViolationKind`]; the set of kinds is a
//! compatibility contract, so it is closed and matched exhaustively.
//!
//! | Kind    | Meaning                                              |
//! |---------|------------------------------------------------------|
//! | `Null`  | a required value was absent                          |
//! | `Range` | a value or index fell outside a bound or predicate   |
//! | `Empty` | a required string was present but had zero length    |
//! | `State` | a caller-evaluated invariant about state was false   |

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Result type returned by every check.
pub type CheckResult = Result<(), Violation>;

/// Category of a failed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ViolationKind {
    /// A required reference or value was absent.
    Null,
    /// A value or index fell outside an accepted bound or failed a predicate.
    Range,
    /// A required string was present but empty.
    Empty,
    /// A caller-evaluated invariant about program or object state was false.
    State,
}

impl ViolationKind {
    /// All kinds, in declaration order.
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::Null,
        ViolationKind::Range,
        ViolationKind::Empty,
        ViolationKind::State,
    ];

    /// Stable lowercase name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Null => "null",
            ViolationKind::Range => "range",
            ViolationKind::Empty => "empty",
            ViolationKind::State => "state",
        }
    }

    /// Message used when the caller did not supply one.
    pub const fn default_message(self) -> &'static str {
        match self {
            ViolationKind::Null => "value cannot be null",
            ViolationKind::Range => "value is out of range",
            ViolationKind::Empty => "value is empty",
            ViolationKind::State => "operation is not valid in the current state",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed contract: what kind, which parameter, and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind} violation: {message}{}", context(.name, .value))]
pub struct Violation {
    kind: ViolationKind,
    name: Option<&'static str>,
    message: Cow<'static, str>,
    custom: bool,
    value: Option<String>,
}

impl Violation {
    /// Create a violation with the kind's default message.
    pub fn new(kind: ViolationKind, name: Option<&'static str>) -> Self {
        Self::build(kind, name, None, None)
    }

    /// Create a violation carrying a caller-supplied message.
    pub fn with_message(
        kind: ViolationKind,
        name: Option<&'static str>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::build(kind, name, Some(message.into()), None)
    }

    pub(crate) fn build(
        kind: ViolationKind,
        name: Option<&'static str>,
        message: Option<Cow<'static, str>>,
        value: Option<String>,
    ) -> Self {
        let custom = message.is_some();
        let violation = Self {
            kind,
            name,
            message: message.unwrap_or(Cow::Borrowed(kind.default_message())),
            custom,
            value,
        };

        #[cfg(feature = "trace-violations")]
        tracing::trace!(
            target: "meticulous::violation",
            kind = violation.kind.as_str(),
            name = violation.name,
            reason = %violation.message,
            "contract violated"
        );

        violation
    }

    /// The violated contract's category.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Whether this violation is of `kind`.
    pub fn is(&self, kind: ViolationKind) -> bool {
        self.kind == kind
    }

    /// Name of the violated parameter. `None` for state violations.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The caller's message, or the kind's default message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The caller's message, if one was supplied.
    pub fn custom_message(&self) -> Option<&str> {
        self.custom.then_some(&*self.message)
    }

    /// The rejected value rendered with `Debug` (predicate checks only).
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Trailing parameter/value details of a violation's display text.
struct Context<'a> {
    name: Option<&'a str>,
    value: Option<&'a str>,
}

fn context<'a>(name: &'a Option<&'static str>, value: &'a Option<String>) -> Context<'a> {
    Context {
        name: *name,
        value: value.as_deref(),
    }
}

impl fmt::Display for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name {
            write!(f, " (parameter `{}`)", name)?;
        }
        if let Some(value) = self.value {
            write!(f, " (actual value: {})", value)?;
        }
        Ok(())
    }
}

/// Panic with the violation's message if `result` is a violation.
///
/// For call sites that treat any violation as fatal.
#[track_caller]
pub fn enforce(result: CheckResult) {
    if let Err(violation) = result {
        panic!("{}", violation);
    }
}
