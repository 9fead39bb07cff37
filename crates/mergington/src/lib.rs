//! The shared library for Mergington, the activity sign-up service for Mergington High School.
//!
//! This library provides the data structures exchanged over the API, the domain
//! error types, and the logging setup used by the backend.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
