//! Typed error handling for the intake engine
//!
//! Two failure classes flow out of this crate and they are not interchangeable:
//!
//! - [`ConfigError`]: a programming or configuration mistake (a missing argument,
//!   a schema nested past the depth cap, an unsupported filter operator). Callers
//!   should log these and answer with a 5xx-class response.
//! - [`InputError`]: bad user input (a required field is missing or a field failed
//!   its validator). The message carries the offending field name; callers map these
//!   to a 4xx-class response.
//!
//! User-supplied hooks report failures through `anyhow`; a hook error that is not
//! itself an [`IntakeError`] surfaces as [`IntakeError::Hook`].
//!
//! # Example
//!
//! ```rust,ignore
//! match validator.validate(&schema, &input).await {
//!     Ok(record) => { /* record is clean */ }
//!     Err(e) if e.status_code().is_client_error() => { /* reject the request */ }
//!     Err(e) => { /* log and 500 */ }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Convenience alias for results produced by this crate
pub type IntakeResult<T> = Result<T, IntakeError>;

/// The main error type for the intake engine
#[derive(Debug)]
pub enum IntakeError {
    /// Configuration or caller-programming mistakes
    Config(ConfigError),

    /// User-input failures, carrying the offending field name
    Input(InputError),

    /// A user-supplied transformer or validator hook failed
    Hook {
        field: String,
        source: anyhow::Error,
    },
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::Config(e) => write!(f, "{}", e),
            IntakeError::Input(e) => write!(f, "{}", e),
            IntakeError::Hook { field, source } => write!(f, "{}: {}", field, source),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Config(e) => Some(e),
            IntakeError::Input(e) => Some(e),
            IntakeError::Hook { source, .. } => Some(source.as_ref()),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntakeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            IntakeError::Input(_) => StatusCode::BAD_REQUEST,
            IntakeError::Hook { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            IntakeError::Config(e) => e.error_code(),
            IntakeError::Input(e) => e.error_code(),
            IntakeError::Hook { .. } => "HOOK_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            IntakeError::Input(InputError::MissingField { field })
            | IntakeError::Input(InputError::InvalidField { field }) => {
                Some(serde_json::json!({ "field": field }))
            }
            IntakeError::Hook { field, .. } => Some(serde_json::json!({ "field": field })),
            _ => None,
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors caused by the caller's configuration, not by user input
#[derive(Debug)]
pub enum ConfigError {
    /// A mandatory argument was nil
    MissingArgument { name: String },

    /// A nested schema descends past the configured depth cap
    DepthExceeded { max: usize },

    /// A filter description used an operator outside the supported set
    UnsupportedOperator { operator: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingArgument { name } => {
                write!(f, "{} is required", name)
            }
            ConfigError::DepthExceeded { max } => {
                write!(f, "input depth exceeds {}", max)
            }
            ConfigError::UnsupportedOperator { operator } => {
                write!(f, "{} is not supported", operator)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingArgument { .. } => "MISSING_ARGUMENT",
            ConfigError::DepthExceeded { .. } => "DEPTH_EXCEEDED",
            ConfigError::UnsupportedOperator { .. } => "UNSUPPORTED_OPERATOR",
        }
    }
}

impl From<ConfigError> for IntakeError {
    fn from(err: ConfigError) -> Self {
        IntakeError::Config(err)
    }
}

// =============================================================================
// Input Errors
// =============================================================================

/// Errors caused by the request payload failing its schema
#[derive(Debug)]
pub enum InputError {
    /// A required field resolved to no value
    MissingField { field: String },

    /// A field's validator rejected its value
    InvalidField { field: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingField { field } => {
                write!(f, "{} is required", field)
            }
            InputError::InvalidField { field } => {
                write!(f, "{} is invalid", field)
            }
        }
    }
}

impl std::error::Error for InputError {}

impl InputError {
    pub fn error_code(&self) -> &'static str {
        match self {
            InputError::MissingField { .. } => "FIELD_REQUIRED",
            InputError::InvalidField { .. } => "FIELD_INVALID",
        }
    }
}

impl From<InputError> for IntakeError {
    fn from(err: InputError) -> Self {
        IntakeError::Input(err)
    }
}
