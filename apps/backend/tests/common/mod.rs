#![allow(dead_code)]

// tests/common/mod.rs
pub use backend_test_support::envelope::{assert_failure_envelope, trace_id};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub mod proptest_prelude;
