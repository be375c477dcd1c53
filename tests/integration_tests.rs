//! Integration tests for the `subcmd` demo binary.
//!
//! These spawn the built executable, so they exercise argument handling,
//! exit codes, and the stdout/stderr split end to end.
//!
//! Run with: `cargo test --test integration_tests`

mod cli;
