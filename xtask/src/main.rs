//! Custom cargo commands for the meticulous crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run tests with debug checks on and off
//!   cargo xtask kani      - Run Kani model checking proofs
//!   cargo xtask fuzz      - Short fuzzing pass over every target
//!   cargo xtask check     - Quick check (tests + clippy)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Build-time override read by build.rs.
const DEBUG_CHECKS_VAR: &str = "METICULOUS_DEBUG_CHECKS";

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["range_checks", "text_checks"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (test matrix + features + Kani)
  test      Run tests with the debug-only layer both on and off
  kani      Run Kani proofs (skipped if cargo-kani is missing)
  fuzz      Run each fuzz target for 30 seconds (requires nightly + cargo-fuzz)
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("meticulous Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running test matrix...");
    test()?;
    println!("✓ Debug layer on and off\n");

    println!("[2/4] Running feature tests...");
    run_cargo(&["test", "--quiet", "--all-features"], &[])?;
    run_cargo(&["test", "--quiet", "--release", "--features", "debug-checks"], &[])?;
    println!("✓ Features pass\n");

    println!("[3/4] Running clippy...");
    run_cargo(
        &["clippy", "--quiet", "--all-targets", "--all-features", "--", "-D", "warnings"],
        &[],
    )?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani step done\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run tests in every debug-layer configuration.
///
/// The layer is decided at build time, so each configuration is a separate
/// build: debug profile, debug profile forced off, release profile.
fn test() -> Result<()> {
    println!("  debug profile (layer on)...");
    run_cargo(&["test", "--quiet"], &[])?;

    println!("  debug profile, {}=off (layer off)...", DEBUG_CHECKS_VAR);
    run_cargo(&["test", "--quiet"], &[(DEBUG_CHECKS_VAR, "off")])?;

    println!("  release profile (layer off)...");
    run_cargo(&["test", "--quiet", "--release"], &[])
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    if !has_cargo_subcommand("kani") {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Short fuzzing pass
fn fuzz() -> Result<()> {
    let root = project_root()?;
    for target in FUZZ_TARGETS {
        println!("  fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=30"])
            .current_dir(&root)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"], &[])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"], &[])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"], &[])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str], envs: &[(&str, &str)]) -> Result<()> {
    let root = project_root()?;

    let mut command = Command::new("cargo");
    command.args(args).current_dir(&root);
    // An inherited override would make every configuration identical
    command.env_remove(DEBUG_CHECKS_VAR);
    for (key, value) in envs {
        command.env(key, value);
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed (env {:?})", args, envs);
    }

    Ok(())
}

fn has_cargo_subcommand(name: &str) -> bool {
    Command::new("cargo")
        .args([name, "--version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
