//! # Payload Dispatch
//!
//! Single entry point for untyped payloads. [`parse`] selects the shape by
//! looking for the nested marker key and constructs that shape only; there
//! is no fallback to the other shape when construction fails.
//!
//! The marker, `project_description`, is also a field name inside the
//! project information section. A flat payload that carries a
//! `project_description` text is therefore routed to the nested shape and
//! rejected there. Callers that know their shape should use [`parse_as`].

use std::fmt;
use std::str::FromStr;

use echo_core::EchoError;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::record::{FlatEcho, NestedEcho};
use crate::validate::{ValidationError, ValidationViolations};

/// Top-level key whose presence selects the nested shape.
pub const NESTED_MARKER: &str = "project_description";

/// The two equivalent layouts of an ECHO record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Fields grouped under one key per section.
    Nested,
    /// Every field at the top level.
    Flat,
}

impl Shape {
    /// Returns the lowercase name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Nested => "nested",
            Shape::Flat => "flat",
        }
    }

    /// Both shapes.
    pub fn all() -> &'static [Shape] {
        &[Shape::Nested, Shape::Flat]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = EchoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" => Ok(Shape::Nested),
            "flat" => Ok(Shape::Flat),
            other => Err(EchoError::UnknownValue {
                domain: "Shape",
                value: other.to_string(),
            }),
        }
    }
}

/// A payload did not validate as the shape it was dispatched to.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("payload doesn't match {shape} schema: {source}")]
pub struct ParseError {
    /// Shape that was attempted.
    pub shape: Shape,
    /// Every violation found while constructing that shape.
    #[source]
    pub source: ValidationError,
}

impl ParseError {
    /// The per-field violations.
    pub fn violations(&self) -> &ValidationViolations {
        &self.source.violations
    }
}

/// A validated record in whichever shape the payload used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EchoRecord {
    /// Grouped by section.
    Nested(NestedEcho),
    /// Single namespace.
    Flat(FlatEcho),
}

impl EchoRecord {
    /// Shape of the record.
    pub fn shape(&self) -> Shape {
        match self {
            EchoRecord::Nested(_) => Shape::Nested,
            EchoRecord::Flat(_) => Shape::Flat,
        }
    }

    /// Value of one field by name, whatever the shape.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            EchoRecord::Nested(r) => r.field(name),
            EchoRecord::Flat(r) => r.field(name),
        }
    }

    /// The record's own serialized form, in its shape.
    pub fn to_map(&self) -> Map<String, Value> {
        match self {
            EchoRecord::Nested(r) => r.to_map(),
            EchoRecord::Flat(r) => r.to_map(),
        }
    }

    /// Convert to the nested shape.
    pub fn into_nested(self) -> NestedEcho {
        match self {
            EchoRecord::Nested(r) => r,
            EchoRecord::Flat(r) => r.into(),
        }
    }

    /// Convert to the flat shape.
    pub fn into_flat(self) -> FlatEcho {
        match self {
            EchoRecord::Nested(r) => r.into(),
            EchoRecord::Flat(r) => r,
        }
    }
}

/// Shape a payload will be dispatched to.
pub fn detect_shape(payload: &Value) -> Shape {
    match payload {
        Value::Object(map) if map.contains_key(NESTED_MARKER) => Shape::Nested,
        _ => Shape::Flat,
    }
}

/// Validate a payload, selecting the shape by the nested marker key.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the attempted shape and carrying every
/// violation. Non-object payloads are dispatched to the flat shape and
/// rejected there as a shape mismatch.
pub fn parse(payload: &Value) -> Result<EchoRecord, ParseError> {
    let shape = detect_shape(payload);
    tracing::debug!(shape = %shape, "dispatching payload");
    parse_as(shape, payload)
}

/// Validate a payload as an explicitly chosen shape.
///
/// # Errors
///
/// Returns a [`ParseError`] for `shape` carrying every violation.
pub fn parse_as(shape: Shape, payload: &Value) -> Result<EchoRecord, ParseError> {
    let result = match shape {
        Shape::Nested => NestedEcho::from_value(payload).map(EchoRecord::Nested),
        Shape::Flat => FlatEcho::from_value(payload).map(EchoRecord::Flat),
    };
    result.map_err(|source| {
        tracing::debug!(
            shape = %shape,
            violations = source.violations.len(),
            "payload rejected"
        );
        ParseError { shape, source }
    })
}
