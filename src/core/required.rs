//! Presence guard used pervasively to assert arguments and fail fast
//!
//! "Nil" means the value is absent or JSON null; both read the same to the
//! engine. The probing and the asserting flavors are separate functions:
//! [`is_present`] never fails, [`required`] fails with a configuration-class
//! error naming the parameter.

use crate::core::error::{ConfigError, IntakeError, IntakeResult};
use serde_json::Value;

/// Check whether a value is present (neither absent nor JSON null)
pub fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// Assert that a value is present, failing with `"<name> is required"` otherwise
pub fn required(value: Option<&Value>, name: &str) -> IntakeResult<()> {
    if is_present(value) {
        Ok(())
    } else {
        Err(IntakeError::Config(ConfigError::MissingArgument {
            name: name.to_string(),
        }))
    }
}
