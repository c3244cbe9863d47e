//! Fail-fast precondition checks for API boundaries.
//!
//! A handful of guard functions that validate arguments and object state at
//! the top of a call and report a categorized [`Violation`] when a contract is
//! broken. Every check returns [`CheckResult`], so a violation propagates with
//! `?` and aborts the current operation right where the contract failed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │  debug.rs    │────▶│  check/*.rs   │────▶│  violation.rs    │
//! │ (compiled out│     │ (null, range, │     │ (Violation,      │
//! │  in release) │     │  text, state) │     │  ViolationKind)  │
//! └──────────────┘     └───────────────┘     └──────────────────┘
//!                              │
//!                              ▼
//!                      ┌───────────────┐
//!                      │ collection.rs │
//!                      │ (size query)  │
//!                      └───────────────┘
//! ```
//!
//! # Catalogue
//!
//! | Function                                  | Violation kinds  |
//! |-------------------------------------------|------------------|
//! | `check_this`                              | `Null`           |
//! | `check_argument_not_null[_with_message]`  | `Null`           |
//! | `check_argument_in_range[_with_message]`  | `Range`          |
//! | `check_index_in_range`                    | `Null`, `Range`  |
//! | `check_argument_satisfies[_with_message]` | `Null`, `Range`  |
//! | `check_argument_not_empty[_with_message]` | `Null`, `Empty`  |
//! | `check_operation_valid`                   | `State`          |
//!
//! The [`debug`] module mirrors the not-null family and compiles to nothing
//! when debug checks are off. The [`debug_check_this!`] and
//! [`debug_check_argument_not_null!`] macros go further and skip evaluating
//! their arguments too.
//!
//! # Usage
//!
//! ```
//! use meticulous::{
//!     check_argument_in_range, check_argument_not_empty, check_operation_valid, CheckResult,
//!     ViolationKind,
//! };
//!
//! struct Pool {
//!     open: bool,
//! }
//!
//! impl Pool {
//!     fn connect(&self, host: Option<&str>, port: u16) -> CheckResult {
//!         check_argument_not_empty(host, "host")?;
//!         check_argument_in_range(&port, "port", &1024, &u16::MAX)?;
//!         check_operation_valid(self.open, "pool is closed")?;
//!         Ok(())
//!     }
//! }
//!
//! let pool = Pool { open: true };
//! assert!(pool.connect(Some("db"), 5432).is_ok());
//!
//! let violation = pool.connect(Some(""), 5432).unwrap_err();
//! assert_eq!(violation.kind(), ViolationKind::Empty);
//! assert_eq!(violation.name(), Some("host"));
//! ```

pub mod check;
pub mod collection;
pub mod debug;
mod violation;

// Re-exports for public API
pub use check::{
    check_argument_in_range, check_argument_in_range_with_message, check_argument_not_empty,
    check_argument_not_empty_with_message, check_argument_not_null,
    check_argument_not_null_with_message, check_argument_satisfies,
    check_argument_satisfies_with_message, check_index_in_range, check_operation_valid,
    check_this,
};
pub use collection::Collection;
pub use violation::{enforce, CheckResult, Violation, ViolationKind};
