// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The always-on checks, one module per precondition family.
//!
//! Every function returns [`CheckResult`](crate::CheckResult): `Ok(())` when
//! the contract holds, otherwise the [`Violation`](crate::Violation) for the
//! most specific failed condition. Prerequisites (collection present,
//! predicate present, text present) are checked before the main condition.

pub mod null;
pub mod range;
pub mod state;
pub mod text;

pub use null::{check_argument_not_null, check_argument_not_null_with_message, check_this};
pub use range::{
    check_argument_in_range, check_argument_in_range_with_message, check_argument_satisfies,
    check_argument_satisfies_with_message, check_index_in_range,
};
pub use state::check_operation_valid;
pub use text::{check_argument_not_empty, check_argument_not_empty_with_message};
