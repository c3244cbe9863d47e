//! Debug-only layer: identical to the always-on checks when compiled in,
//! `Ok(())` for every input when compiled out.

use std::cell::Cell;

use meticulous::{
    check_argument_not_null, check_argument_not_null_with_message, check_this, debug,
    debug_check_argument_not_null, debug_check_this, ViolationKind,
};

#[test]
fn test_present_values_pass_in_every_build() {
    let value = "present";
    assert!(debug::check_this(Some(value)).is_ok());
    assert!(debug::check_argument_not_null(Some(value), "value").is_ok());
    assert!(debug::check_argument_not_null_with_message(Some(value), "value", "m").is_ok());
}

#[test]
fn test_absent_values_follow_build_configuration() {
    let cases = [
        (debug::check_this::<str>(None), check_this::<str>(None)),
        (
            debug::check_argument_not_null::<str>(None, "value"),
            check_argument_not_null::<str>(None, "value"),
        ),
        (
            debug::check_argument_not_null_with_message::<str>(None, "value", "missing"),
            check_argument_not_null_with_message::<str>(None, "value", "missing"),
        ),
    ];

    for (debug_result, always_on) in cases {
        if debug::ENABLED {
            assert_eq!(debug_result, always_on);
        } else {
            assert_eq!(debug_result, Ok(()));
            assert!(always_on.is_err());
        }
    }
}

#[test]
fn test_macro_message_built_only_when_enabled() {
    let built = Cell::new(0);
    let describe = |id: u32| {
        built.set(built.get() + 1);
        format!("session {} has no user", id)
    };

    let result = debug_check_argument_not_null!(None::<&str>, "user", describe(7));

    if debug::ENABLED {
        let violation = result.unwrap_err();
        assert_eq!(violation.kind(), ViolationKind::Null);
        assert_eq!(violation.custom_message(), Some("session 7 has no user"));
        assert_eq!(built.get(), 1);
    } else {
        assert_eq!(result, Ok(()));
        assert_eq!(built.get(), 0);
    }
}

#[test]
fn test_macro_value_evaluated_only_when_enabled() {
    let lookups = Cell::new(0);
    let lookup = || {
        lookups.set(lookups.get() + 1);
        None::<&str>
    };

    let this = debug_check_this!(lookup());
    let argument = debug_check_argument_not_null!(lookup(), "user");

    if debug::ENABLED {
        assert_eq!(this, check_this::<str>(None));
        assert_eq!(argument, check_argument_not_null::<str>(None, "user"));
        assert_eq!(lookups.get(), 2);
    } else {
        assert_eq!(this, Ok(()));
        assert_eq!(argument, Ok(()));
        assert_eq!(lookups.get(), 0);
    }
}

#[test]
fn test_default_configuration_follows_profile() {
    // Without overrides the layer tracks debug_assertions.
    if std::env::var_os("METICULOUS_DEBUG_CHECKS").is_none() && !cfg!(feature = "debug-checks") {
        assert_eq!(debug::ENABLED, cfg!(debug_assertions));
    }
}

#[cfg(feature = "debug-checks")]
#[test]
fn test_feature_forces_layer_on() {
    if std::env::var_os("METICULOUS_DEBUG_CHECKS").is_none() {
        assert!(debug::ENABLED);
    }
}
