//! Fuzz target for non-empty text checks.
//!
//! Absent text is always a null violation; present text fails only when it
//! has zero length. Messages must come back unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use meticulous::{check_argument_not_empty, check_argument_not_empty_with_message, ViolationKind};

fuzz_target!(|data: (Option<String>, String)| {
    let (text, message) = data;

    match check_argument_not_empty(text.as_deref(), "text") {
        Ok(()) => assert!(text.as_deref().is_some_and(|t| !t.is_empty())),
        Err(violation) if text.is_none() => assert_eq!(violation.kind(), ViolationKind::Null),
        Err(violation) => assert_eq!(violation.kind(), ViolationKind::Empty),
    }

    if let Err(violation) = check_argument_not_empty_with_message(text.as_deref(), "text", message.clone()) {
        assert_eq!(violation.custom_message(), Some(message.as_str()));
    }
});
