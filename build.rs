//! Build script for meticulous.
//!
//! Decides whether the debug-only check layer is compiled in and emits the
//! `meticulous_debug_checks` cfg when it is. Precedence:
//! 1. `METICULOUS_DEBUG_CHECKS` in the build environment (on/off)
//! 2. the `debug-checks` feature (forces on)
//! 3. `debug_assertions` of the active profile

use std::env;

const OVERRIDE_VAR: &str = "METICULOUS_DEBUG_CHECKS";

fn main() {
    println!("cargo:rustc-check-cfg=cfg(meticulous_debug_checks)");
    println!("cargo:rerun-if-env-changed={OVERRIDE_VAR}");
    println!("cargo:rerun-if-changed=build.rs");

    let forced = env::var(OVERRIDE_VAR)
        .ok()
        .and_then(|value| parse_switch(&value));
    let feature = env::var_os("CARGO_FEATURE_DEBUG_CHECKS").is_some();
    let profile = env::var_os("CARGO_CFG_DEBUG_ASSERTIONS").is_some();

    let enabled = forced.unwrap_or(feature || profile);
    if enabled {
        println!("cargo:rustc-cfg=meticulous_debug_checks");
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        "" => None,
        other => {
            println!("cargo:warning=ignoring {OVERRIDE_VAR}={other:?} (expected on/off)");
            None
        }
    }
}
