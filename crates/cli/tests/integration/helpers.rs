//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command for the `exactly` binary.
pub fn exactly_cmd() -> Command {
    Command::cargo_bin("exactly").unwrap()
}
