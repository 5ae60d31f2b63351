//! Shared helpers for the dispatch-auth integration tests.
//!
//! Logging setup, failure-envelope assertions and unique test data.

pub mod envelope;
pub mod logging;
pub mod unique_helpers;
