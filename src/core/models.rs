//! Core data models for fleet_encoder
//!
//! This module contains the scalar value type shared by all serializers.

use std::fmt;

/// A scalar field value accepted by [`Serializer::add_field`]
///
/// The closed set of value types mirrors what the output formats can carry
/// without a schema: strings, integers, and floats.
///
/// [`Serializer::add_field`]: crate::core::serialization::Serializer::add_field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text value, emitted verbatim
    Str(String),
    /// Integer value, rendered as plain decimal
    Int(i64),
    /// Floating-point value, rendered with six fractional digits
    Float(f64),
}

impl FieldValue {
    /// Render the value as a JSON literal: strings quoted, numbers bare
    ///
    /// Quote characters inside string values are not escaped; the emitted
    /// text is the raw value.
    pub fn json_literal(&self) -> String {
        match self {
            FieldValue::Str(s) => format!("\"{}\"", s),
            _ => self.to_string(),
        }
    }
}

/// Textual form shared by both formats. Floats use fixed precision so the
/// same value renders identically in XML and JSON.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{:.6}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}
