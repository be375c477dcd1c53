//! Common test utilities for CLI tests.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns the path to the subcmd binary built by `cargo test`.
pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_subcmd"))
}

/// Runs `program` with `args` and no user configuration.
pub fn run_binary(program: &Path, args: &[&str]) -> (i32, String, String) {
    run_with_config(program, args, Path::new("/nonexistent/subcmd/config.toml"))
}

/// Runs `program` with `args`, reading configuration from `config`.
pub fn run_with_config(program: &Path, args: &[&str], config: &Path) -> (i32, String, String) {
    let output = Command::new(program)
        .args(args)
        .env("SUBCMD_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Runs the subcmd binary with `args`.
pub fn run_subcmd(args: &[&str]) -> (i32, String, String) {
    run_binary(&binary_path(), args)
}
