//! Non-empty string checks.

use super::common::{assert_default_message, assert_violation};
use meticulous::{check_argument_not_empty, check_argument_not_empty_with_message, ViolationKind};

#[test]
fn test_absent_is_null_not_empty() {
    let violation = assert_violation(
        check_argument_not_empty(None, "name"),
        ViolationKind::Null,
        Some("name"),
    );
    assert_default_message(&violation);
}

#[test]
fn test_empty() {
    let violation = assert_violation(
        check_argument_not_empty(Some(""), "name"),
        ViolationKind::Empty,
        Some("name"),
    );
    assert_eq!(violation.message(), "value is empty");
}

#[test]
fn test_non_empty() {
    assert!(check_argument_not_empty(Some("x"), "name").is_ok());
    assert!(check_argument_not_empty(Some("\u{200b}"), "name").is_ok());
}

#[test]
fn test_owned_string_via_as_deref() {
    let group: Option<String> = Some(String::from("externals"));
    assert!(check_argument_not_empty(group.as_deref(), "group").is_ok());

    let missing: Option<String> = None;
    assert_violation(
        check_argument_not_empty(missing.as_deref(), "group"),
        ViolationKind::Null,
        Some("group"),
    );
}

#[test]
fn test_message_propagates_to_null() {
    let violation = assert_violation(
        check_argument_not_empty_with_message(None, "name", "a group needs a name"),
        ViolationKind::Null,
        Some("name"),
    );
    assert_eq!(violation.custom_message(), Some("a group needs a name"));
}

#[test]
fn test_message_on_empty() {
    let violation = assert_violation(
        check_argument_not_empty_with_message(Some(""), "name", "a group needs a name"),
        ViolationKind::Empty,
        Some("name"),
    );
    assert_eq!(violation.message(), "a group needs a name");
}
