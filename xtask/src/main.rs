//! Custom cargo commands for lithos.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (with and without rayon)
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Base row of the worked example, `elevation,lithostatic,pore,effective`.
const REFERENCE_BASE_ROW: &str = "12.0,454.0,140.0,314.0,";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
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
  verify    Run full verification suite (markers, tests, clippy, worked example)
  test      Run all Rust tests, parallel and sequential builds
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Lithos Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Evaluating the worked example end to end...");
    verify_reference()?;
    println!("✓ Worked example matches\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, with the default (rayon) build and without it
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Run `cargo run -- <args>` and capture stdout.
fn run_lithos(args: &[&str]) -> Result<String> {
    let root = project_root()?;

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "lithos", "--"])
        .args(args)
        .env("NO_COLOR", "1")
        .current_dir(&root)
        .output()
        .with_context(|| format!("Failed to run lithos {:?}", args))?;

    if !output.status.success() {
        bail!(
            "lithos {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8(output.stdout).context("lithos wrote non-UTF-8 output")
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// Write the worked example to disk, profile it through the binary, and
/// compare the base of the column with the hand calculation.
fn verify_reference() -> Result<()> {
    let root = project_root()?;
    let scratch = root.join("target").join("xtask");
    std::fs::create_dir_all(&scratch).context("Failed to create target/xtask")?;

    let example = run_lithos(&["example", "--format", "json"])?;
    let path = scratch.join("reference.json");
    std::fs::write(&path, example).context("Failed to write reference.json")?;

    let path_str = path.to_string_lossy();
    let csv = run_lithos(&["profile", path_str.as_ref(), "--format", "csv"])?;
    let rows: Vec<&str> = csv.lines().collect();

    if rows.len() != 8 {
        bail!("Expected header + 7 samples, got {} lines:\n{}", rows.len(), csv);
    }
    let base = rows[rows.len() - 1];
    if !base.starts_with(REFERENCE_BASE_ROW) {
        bail!("Base row {:?} does not start with {:?}", base, REFERENCE_BASE_ROW);
    }

    Ok(())
}
