//! Error handling for the dispatch-auth backend.

pub mod error_code;

pub use error_code::ErrorCode;
