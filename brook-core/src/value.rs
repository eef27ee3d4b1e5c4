//! Runtime values in Brook
//!
//! Events deliver one `Value` per bound argument. Values are plain data:
//! a missing attribute arrives as `Null`, and functions decide per call
//! whether null is acceptable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of an expression slot, known when a query is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
    String,
    Int,
    Long,
    Double,
    Bool,
}

impl AttributeType {
    /// Uppercase tag used in messages and metadata
    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::String => "STRING",
            AttributeType::Int => "INT",
            AttributeType::Long => "LONG",
            AttributeType::Double => "DOUBLE",
            AttributeType::Bool => "BOOL",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runtime value in Brook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    String(String),
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    Null,
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "STRING",
            Value::Int(_) => "INT",
            Value::Long(_) => "LONG",
            Value::Double(_) => "DOUBLE",
            Value::Bool(_) => "BOOL",
            Value::Null => "NULL",
        }
    }

    /// Declared type this value would satisfy (`None` for null)
    pub fn attribute_type(&self) -> Option<AttributeType> {
        match self {
            Value::String(_) => Some(AttributeType::String),
            Value::Int(_) => Some(AttributeType::Int),
            Value::Long(_) => Some(AttributeType::Long),
            Value::Double(_) => Some(AttributeType::Double),
            Value::Bool(_) => Some(AttributeType::Bool),
            Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// From implementations for convenience
impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
