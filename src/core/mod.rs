//! Core module containing error types and shared primitives

pub mod error;
pub mod query;
pub mod required;

pub use error::{ConfigError, ErrorResponse, InputError, IntakeError, IntakeResult};
pub use query::QueryParams;
pub use required::{is_present, required};
