//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without computing anything.

use predicates::prelude::*;

use super::helpers::exactly_cmd;

#[test]
fn test_help_output() {
    exactly_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exactly"))
        .stdout(predicate::str::contains("floating"))
        .stdout(predicate::str::contains("fixed"))
        .stdout(predicate::str::contains("curve"));
}

#[test]
fn test_floating_help_output() {
    exactly_cmd()
        .args(["floating", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--u-floating"))
        .stdout(predicate::str::contains("--u-global"))
        .stdout(predicate::str::contains("--max-rate"));
}

#[test]
fn test_fixed_help_output() {
    exactly_cmd()
        .args(["fixed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--maturity"))
        .stdout(predicate::str::contains("--timestamp"))
        .stdout(predicate::str::contains("--max-pools"));
}

#[test]
fn test_invalid_command() {
    exactly_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_floating_missing_utilization() {
    exactly_cmd()
        .arg("floating")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_fixed_missing_maturity() {
    exactly_cmd()
        .args([
            "fixed",
            "--u-fixed",
            "0",
            "--u-floating",
            "0",
            "--u-global",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_wad_value() {
    exactly_cmd()
        .args(["floating", "--u-floating", "not-a-number", "--u-global", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid WAD integer"));
}

#[test]
fn test_curve_rejects_zero_steps() {
    exactly_cmd()
        .args(["curve", "--steps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--steps must be positive"));
}

#[test]
fn test_curve_rejects_inverted_range() {
    exactly_cmd()
        .args(["curve", "--from", "1000000000000000000", "--to", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to must exceed --from"));
}
