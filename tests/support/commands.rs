//! Command helpers for running the keysmith binary.

use assert_cmd::Command;
use std::process::Output;

/// Create a keysmith command with a clean, colorless environment.
pub fn cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("keysmith").expect("failed to find keysmith binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("KEYSMITH_LOG");
    cmd
}

/// Run keysmith with no arguments.
pub fn run() -> Output {
    cmd().output().expect("failed to run keysmith")
}
