//! Validation and transformation of untrusted request data
//!
//! A declarative [`Schema`] describes what a clean record looks like; the
//! [`SchemaValidator`] projects an input object through it, applying defaults,
//! required checks, transformers, validators and nested schemas in a fixed
//! order. The [`transformers`] and [`validators`] modules carry the reusable
//! hooks endpoint schemas are built from.

pub mod schema;
pub mod transformers;
pub mod validators;

pub use schema::{FieldRule, Schema, SchemaValidator, Transformer, Validator};
