//! Test logging initialization shared by every integration test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per process.
///
/// Level precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`. Set
/// `TEST_LOG_JSON=1` to see events exactly as the service emits them.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1");

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time();

        // Ignore the error if another harness got there first.
        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
