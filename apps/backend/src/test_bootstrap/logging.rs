#![cfg(test)]

//! Logging for the crate's own unit tests.
//!
//! Installed once from the `ctor` hook in `lib.rs`. Level comes from
//! `TEST_LOG`, then `RUST_LOG`, then defaults to `warn`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another harness may have installed a subscriber first.
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
