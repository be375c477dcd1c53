//! End-to-end tests of the demo binary.

pub mod common;
pub mod completion_test;
pub mod config_test;
pub mod dispatch_test;
