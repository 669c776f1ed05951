//! Rate computation tests against exact fixtures.
//!
//! The default parameter flags are a live market calibration, so every
//! expected value here comes from a trusted reference run of that
//! calibration.

use predicates::prelude::*;

use super::helpers::exactly_cmd;

#[test]
fn test_floating_rate_at_zero_utilization() {
    exactly_cmd()
        .args(["floating", "--u-floating", "0", "--u-global", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30000818181818181"))
        .stdout(predicate::str::contains("3.0001%"));
}

#[test]
fn test_floating_rate_at_natural_utilization() {
    exactly_cmd()
        .args([
            "floating",
            "--u-floating",
            "700000000000000000",
            "--u-global",
            "700000000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("80002307692307692"));
}

#[test]
fn test_floating_rate_saturates_at_full_global_utilization() {
    // u_global == 1 WAD returns the ceiling directly.
    exactly_cmd()
        .args([
            "floating",
            "--u-floating",
            "400000000000000000",
            "--u-global",
            "1000000000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("150000000000000000000"));
}

#[test]
fn test_floating_rate_json_output() {
    let output = exactly_cmd()
        .args([
            "floating",
            "--u-floating",
            "0",
            "--u-global",
            "0",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rate_wad"], "30000818181818181");
    assert!(value["rate_percent"].as_f64().unwrap() > 3.0);
}

#[test]
fn test_floating_rate_undefined_at_max_utilization() {
    // The curve is asymptotic at max utilization; the CLI surfaces the
    // division by zero instead of printing a number.
    exactly_cmd()
        .args([
            "floating",
            "--u-floating",
            "1100000000000000000",
            "--u-global",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_fixed_rate_with_explicit_timestamp() {
    exactly_cmd()
        .args([
            "fixed",
            "--u-fixed",
            "400000000000000000",
            "--u-floating",
            "500000000000000000",
            "--u-global",
            "800000000000000000",
            "--maturity",
            "1720051200",
            "--timestamp",
            "1717200000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("111625829476290577"));
}

#[test]
fn test_fixed_rate_zero_fixed_equals_floating() {
    // No demand at the maturity: the quote is exactly the floating rate.
    exactly_cmd()
        .args([
            "fixed",
            "--u-fixed",
            "0",
            "--u-floating",
            "500000000000000000",
            "--u-global",
            "800000000000000000",
            "--maturity",
            "1720051200",
            "--timestamp",
            "1717200000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("110889312012308727"));
}

#[test]
fn test_fixed_rate_json_includes_inputs() {
    let output = exactly_cmd()
        .args([
            "fixed",
            "--u-fixed",
            "400000000000000000",
            "--u-floating",
            "500000000000000000",
            "--u-global",
            "800000000000000000",
            "--maturity",
            "1720051200",
            "--timestamp",
            "1717200000",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rate_wad"], "111625829476290577");
    assert_eq!(value["maturity"], 1_720_051_200u64);
    assert_eq!(value["timestamp"], 1_717_200_000u64);
}

#[test]
fn test_fixed_rate_matured_fails() {
    exactly_cmd()
        .args([
            "fixed",
            "--u-fixed",
            "100000000000000000",
            "--u-floating",
            "500000000000000000",
            "--u-global",
            "800000000000000000",
            "--maturity",
            "1715212800",
            "--timestamp",
            "1717200000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the function domain"));
}

#[test]
fn test_curve_table_output() {
    exactly_cmd()
        .arg("curve")
        .assert()
        .success()
        .stdout(predicate::str::contains("Utilization"))
        .stdout(predicate::str::contains("Borrow Rate"))
        .stdout(predicate::str::contains("30000818181818181"));
}

#[test]
fn test_curve_json_output() {
    let output = exactly_cmd()
        .args(["curve", "--steps", "4", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["utilization_wad"], "0");
    assert_eq!(rows[0]["rate_wad"], "30000818181818181");
}
