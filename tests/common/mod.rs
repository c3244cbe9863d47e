//! Shared test utilities and fixtures.

#![allow(dead_code)]

use meticulous::{CheckResult, Violation, ViolationKind};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Unwrap a violation, failing the test with context if the check passed.
#[track_caller]
pub fn expect_violation(result: CheckResult) -> Violation {
    match result {
        Ok(()) => panic!("expected a violation, but the check passed"),
        Err(violation) => violation,
    }
}

/// Assert `result` is a violation of `kind` naming `name`.
#[track_caller]
pub fn assert_violation(result: CheckResult, kind: ViolationKind, name: Option<&str>) -> Violation {
    let violation = expect_violation(result);
    assert_eq!(violation.kind(), kind, "wrong kind for {}", violation);
    assert_eq!(violation.name(), name, "wrong name for {}", violation);
    violation
}

/// Assert the violation carries the default message of its kind.
#[track_caller]
pub fn assert_default_message(violation: &Violation) {
    assert_eq!(violation.message(), violation.kind().default_message());
    assert_eq!(violation.custom_message(), None);
}

// ============================================================================
// FIXTURES
// ============================================================================

pub fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

/// A receiver for method-style checks.
#[derive(Debug, Default)]
pub struct Playlist {
    pub tracks: Vec<String>,
    pub locked: bool,
}

impl Playlist {
    pub fn with_tracks(tracks: &[&str]) -> Self {
        Self {
            tracks: tracks.iter().map(|t| t.to_string()).collect(),
            locked: false,
        }
    }
}

/// Method-style helper in the shape the receiver check exists for.
pub fn track_title(playlist: Option<&Playlist>, index: isize) -> Result<&str, Violation> {
    meticulous::check_this(playlist)?;
    let tracks = playlist.map(|p| &p.tracks);
    meticulous::check_index_in_range(index, "index", tracks)?;
    Ok(match (playlist, usize::try_from(index)) {
        (Some(p), Ok(i)) => p.tracks[i].as_str(),
        _ => unreachable!("checked above"),
    })
}
