//! Value types for annotation properties.
//!
//! Values are the typed payloads stored under each annotation property name.

use std::fmt;

use crate::model::Handle;

/// Kinds of property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    Void = 0,
    Bool = 1,
    Int32 = 2,
    Int64 = 3,
    Float32 = 4,
    Float64 = 5,
    StringLiteral = 6,
    Array = 7,
}

impl ValueKind {
    /// Returns the lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Void => "void",
            ValueKind::Bool => "bool",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::StringLiteral => "string",
            ValueKind::Array => "array",
        }
    }
}

/// A typed value that can be attached to an annotation property.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The empty value. Returned for lookups of absent properties.
    #[default]
    Void,

    /// Boolean value.
    Bool(bool),

    /// 32-bit signed integer.
    Int32(i32),

    /// 64-bit signed integer.
    Int64(i64),

    /// 32-bit IEEE 754 float.
    Float32(f32),

    /// 64-bit IEEE 754 float.
    Float64(f64),

    /// Reference to text interned in a [`StringDictionary`](crate::StringDictionary).
    ///
    /// The text itself is not stored; renderers resolve the handle.
    StringLiteral(Handle),

    /// Ordered list of values.
    Array(Vec<Value>),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Void => ValueKind::Void,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::StringLiteral(_) => ValueKind::StringLiteral,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Returns true for [`Value::Void`].
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Converts a scalar to a boolean. Numbers are true when non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            Value::Int32(v) => Some(*v != 0),
            Value::Int64(v) => Some(*v != 0),
            Value::Float32(v) => Some(*v != 0.0),
            Value::Float64(v) => Some(*v != 0.0),
            Value::Void | Value::StringLiteral(_) | Value::Array(_) => None,
        }
    }

    /// Converts a scalar to a 64-bit integer.
    ///
    /// Floats truncate toward zero and saturate at the integer range; NaN
    /// becomes zero.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Bool(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::Float32(v) => Some(*v as i64),
            Value::Float64(v) => Some(*v as i64),
            Value::Void | Value::StringLiteral(_) | Value::Array(_) => None,
        }
    }

    /// Converts a scalar to a 64-bit float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::Int32(v) => Some(f64::from(*v)),
            Value::Int64(v) => Some(*v as f64),
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            Value::Void | Value::StringLiteral(_) | Value::Array(_) => None,
        }
    }

    /// Returns the dictionary handle if this is a string literal.
    pub fn as_string_literal(&self) -> Option<Handle> {
        match self {
            Value::StringLiteral(handle) => Some(*handle),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => f.write_str("void"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::StringLiteral(handle) => write!(f, "string#{}", handle.raw()),
            Value::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<Handle> for Value {
    fn from(handle: Handle) -> Self {
        Value::StringLiteral(handle)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
