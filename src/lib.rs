//! # Intake
//!
//! Schema-driven input validation and declarative query-scope compilation for REST APIs in Rust.
//!
//! ## Features
//!
//! - **Declarative Schemas**: Describe each field once (required flag, default value,
//!   transformer, validator, nested schema) and get back a typed, sanitized record
//! - **Ordered Pipelines**: Hooks run in schema-declaration order, per field:
//!   default, required, transform, validate, recurse
//! - **Async Hooks**: Transformers and validators may be synchronous closures or async
//!   functions; the engine suspends until each hook settles
//! - **Depth-Capped Recursion**: Nested schemas validate nested records, bounded by a
//!   configurable maximum depth
//! - **Query Scopes**: Compile filter/sort/page descriptions into ordered directives
//!   for the data-access layer, with a deterministic `id` tie-break
//! - **Typed Errors**: Configuration mistakes map to 5xx, bad user input to 4xx, with
//!   ready-to-serve JSON error responses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use intake::prelude::*;
//!
//! let schema = Schema::new()
//!     .field(
//!         "id",
//!         FieldRule::new()
//!             .required()
//!             .transformer(transformers::parse_int())
//!             .validator(validators::is_integer()),
//!     )
//!     .field("name", FieldRule::new().default_value("N/A"));
//!
//! let record = SchemaValidator::new()
//!     .validate(&schema, &json!({ "id": "42" }))
//!     .await?;
//! // record == json!({ "id": 42, "name": "N/A" })
//!
//! let scopes = compile_scopes(
//!     Some(&filters),          // { "status": { "eq": "active" } }
//!     Some(&sort),             // { "rank": "ASC" }
//!     Some(2),
//!     Some(25),
//! )?;
//! // [filter("status", "active", eq), pagination(25, 25, [[rank, ASC], [id, ASC]])]
//! ```

pub mod config;
pub mod core;
pub mod scope;
pub mod validation;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ErrorResponse, InputError, IntakeError, IntakeResult,
    };

    // === Required-check primitive ===
    pub use crate::core::required::{is_present, required};

    // === Query boundary ===
    pub use crate::core::query::QueryParams;

    // === Validation ===
    pub use crate::config::ValidationConfig;
    pub use crate::validation::{
        FieldRule, Schema, SchemaValidator, transformers, validators,
    };

    // === Scopes ===
    pub use crate::scope::{
        ComparisonOperator, FilterMap, FilterValue, ScopeDirective, SortDirection, SortMap,
        compile_filters, compile_pagination, compile_scopes,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
