//! Recursive, schema-driven validation of untrusted request data
//!
//! A [`Schema`] maps field names to [`FieldRule`]s. Running an input object
//! through [`SchemaValidator::validate`] produces a fresh record containing
//! exactly the schema's fields; everything else in the input is dropped.
//! Per field the pipeline is fixed: default, required-check, transform,
//! validate, nested-recurse. Hooks run sequentially in schema-declaration
//! order, and the first failing field rejects the whole call.
//!
//! Absence and JSON null are distinct: a default value fills in only when the
//! field is absent, while an explicit null flows through the pipeline and is
//! preserved in the output.

use crate::config::{DEFAULT_MAX_DEPTH, ValidationConfig};
use crate::core::error::{ConfigError, InputError, IntakeError, IntakeResult};
use crate::core::required::required;
use anyhow::Result;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;
use std::future::{Future, ready};
use std::sync::Arc;

/// Hook that rewrites a field value before validation
pub type Transformer = Arc<dyn Fn(Value) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// Hook that judges a field value, returning a verdict value
///
/// The verdict is a JSON value. Only a verdict of exactly `false` rejects the
/// field; every other verdict passes, including `0`, `""` and `null`. This
/// asymmetry is part of the engine's contract.
pub type Validator = Arc<dyn Fn(Value) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// The rule set for one schema field
#[derive(Clone, Default)]
pub struct FieldRule {
    required: bool,
    default_value: Option<Value>,
    transformer: Option<Transformer>,
    validator: Option<Validator>,
    schema: Option<Schema>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the field as required: it must resolve to a value after defaulting
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value substituted when the field is absent from the input
    ///
    /// Defaulting never triggers on an explicit null.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Attach a synchronous transformer
    pub fn transformer<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(move |value| Box::pin(ready(f(value)))));
        self
    }

    /// Attach an asynchronous transformer
    pub fn async_transformer<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.transformer = Some(Arc::new(move |value| Box::pin(f(value))));
        self
    }

    /// Attach a synchronous validator
    ///
    /// The closure may return anything convertible to a JSON value; `bool`
    /// works directly.
    pub fn validator<F, V>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        self.validator = Some(Arc::new(move |value| {
            let verdict = f(&value).into();
            Box::pin(ready(Ok(verdict)))
        }));
        self
    }

    /// Attach an asynchronous validator
    pub fn async_validator<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.validator = Some(Arc::new(move |value| Box::pin(f(value))));
        self
    }

    /// Validate the field's value recursively against a nested schema
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("default_value", &self.default_value)
            .field("transformer", &self.transformer.is_some())
            .field("validator", &self.validator.is_some())
            .field("schema", &self.schema)
            .finish()
    }
}

/// Ordered mapping from field name to rule
///
/// Declaration order is the iteration order, and the iteration order is the
/// hook invocation order. Callers may rely on side-effecting hooks running
/// in sequence.
#[derive(Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field rule, keeping declaration order
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(name.into(), rule);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldRule> {
        self.fields.iter()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

/// The validation engine
///
/// Holds the recursion depth cap; everything else lives in the arguments of
/// each call, so one validator can serve concurrent requests without locking.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    max_depth: usize,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with an explicit depth cap
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn with_config(config: &ValidationConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Validate `input` against `schema`, producing a clean record
    ///
    /// The output object holds exactly the schema keys that resolved to a
    /// value; input keys outside the schema never appear. Fails fast on the
    /// first offending field.
    pub async fn validate(&self, schema: &Schema, input: &Value) -> IntakeResult<Value> {
        self.validate_at(schema, input, 0).await
    }

    fn validate_at<'a>(
        &'a self,
        schema: &'a Schema,
        input: &'a Value,
        depth: usize,
    ) -> BoxFuture<'a, IntakeResult<Value>> {
        Box::pin(async move {
            required(Some(input), "input")?;
            tracing::debug!(fields = schema.len(), depth, "validating input");

            let mut output = Map::new();
            for (key, rule) in schema.iter() {
                let mut value = input.get(key).cloned();
                if value.is_none() {
                    value = rule.default_value.clone();
                }
                if rule.required && value.is_none() {
                    return Err(InputError::MissingField { field: key.clone() }.into());
                }
                let Some(mut value) = value else {
                    continue;
                };

                if let Some(transformer) = &rule.transformer {
                    value = transformer(value)
                        .await
                        .map_err(|e| hook_error(key, e))?;
                }
                if let Some(validator) = &rule.validator {
                    let verdict = validator(value.clone())
                        .await
                        .map_err(|e| hook_error(key, e))?;
                    if verdict == Value::Bool(false) {
                        return Err(InputError::InvalidField { field: key.clone() }.into());
                    }
                }
                if let Some(nested) = &rule.schema {
                    if depth >= self.max_depth {
                        return Err(ConfigError::DepthExceeded {
                            max: self.max_depth,
                        }
                        .into());
                    }
                    value = self.validate_at(nested, &value, depth + 1).await?;
                }

                output.insert(key.clone(), value);
            }

            Ok(Value::Object(output))
        })
    }
}

/// A hook error that carries a typed `IntakeError` keeps its class; anything
/// else is wrapped as a hook failure on the named field.
fn hook_error(field: &str, source: anyhow::Error) -> IntakeError {
    match source.downcast::<IntakeError>() {
        Ok(err) => err,
        Err(source) => IntakeError::Hook {
            field: field.to_string(),
            source,
        },
    }
}
