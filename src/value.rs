//! Dynamic value representation for form-data inputs.
//!
//! This module provides the [`Value`] enum which represents any input the
//! encoder accepts. It is useful when the shape of the data isn't known at
//! compile time, and it is the input type of the dynamic entry point
//! [`encode`](crate::encode).
//!
//! ## Core Types
//!
//! - [`Value`]: a closed enum over the supported input shapes: the scalar
//!   kinds (bool, number, string), an explicit optional reference, and the
//!   ready-made [`FieldMap`] bypass shape
//! - [`Number`]: a numeric scalar keeping the signed / unsigned / float
//!   distinction, since each classifies and renders differently
//!
//! The set of variants is deliberately closed: anything that is not
//! expressible here (sequences, mappings, records, ...) is not encodable
//! and fails with [`Error::UnsupportedType`](crate::Error::UnsupportedType)
//! naming the rejected shape.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_urlform::{Number, Value};
//!
//! let boolean = Value::from(true);
//! let number = Value::Number(Number::Int(42));
//! let text = Value::from("hello");
//! let absent = Value::Ref(None);
//! ```
//!
//! ### Encoding
//!
//! ```rust
//! use serde_urlform::{encode, Value};
//!
//! let bytes = encode(&Value::from("Hello world")).unwrap();
//! assert_eq!(bytes, b"=Hello+world");
//! ```

use crate::FieldMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any encodable input.
///
/// This enum is the closed classification the type dispatcher works over.
/// It is particularly useful when:
///
/// - The input shape isn't known at compile time
/// - Callers have a pre-built [`FieldMap`] and want the bypass path
/// - Building inputs programmatically for tests
///
/// # Examples
///
/// ```rust
/// use serde_urlform::{Number, Value};
///
/// let num = Value::Number(Number::Int(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(Number),
    String(String),
    /// An explicit optional reference. `Ref(None)` is an absent pointee
    /// and encodes to [`Error::NilValue`](crate::Error::NilValue), never
    /// to silent output.
    Ref(Option<Box<Value>>),
    /// The bypass shape: a ready-made key→values mapping that skips type
    /// dispatch entirely and goes straight to the renderer.
    Fields(FieldMap),
}

/// A numeric scalar that is a signed integer, an unsigned integer, or a
/// float.
///
/// The three kinds stay distinct because they classify differently (any
/// signed width widens to `i64`, any unsigned width to `u64`) and render
/// differently: integers as plain base-10 text, floats as the shortest
/// decimal text that round-trips the binary value.
///
/// # Examples
///
/// ```rust
/// use serde_urlform::Number;
///
/// assert_eq!(Number::Int(-1).to_string(), "-1");
/// assert_eq!(Number::UInt(0).to_string(), "0");
/// assert_eq!(Number::Float(1.0).to_string(), "1");
/// assert_eq!(Number::Float(-1.5).to_string(), "-1.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is a signed integer value.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Returns `true` if this is an unsigned integer value.
    #[inline]
    #[must_use]
    pub const fn is_uint(&self) -> bool {
        matches!(self, Number::UInt(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::Number;
    ///
    /// assert_eq!(Number::Int(-1).as_i64(), Some(-1));
    /// assert_eq!(Number::UInt(42).as_i64(), Some(42));
    /// assert_eq!(Number::UInt(u64::MAX).as_i64(), None);
    /// assert_eq!(Number::Float(1.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::UInt(u) => i64::try_from(*u).ok(),
            Number::Float(_) => None,
        }
    }

    /// Converts this number to a `u64` if it is a non-negative integer.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Int(i) => u64::try_from(*i).ok(),
            Number::UInt(u) => Some(*u),
            Number::Float(_) => None,
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::UInt(u) => *u as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    /// Renders the canonical text form: base-10 for integers, shortest
    /// round-tripping decimal for floats (`1.0` displays as `1`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::UInt(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Int(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Int(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::UInt(value as u64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::UInt(value as u64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::UInt(value as u64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::UInt(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a reference (present or absent).
    #[inline]
    #[must_use]
    pub const fn is_ref(&self) -> bool {
        matches!(self, Value::Ref(_))
    }

    /// Returns `true` if the value is the bypass field-map shape.
    #[inline]
    #[must_use]
    pub const fn is_fields(&self) -> bool {
        matches!(self, Value::Fields(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer that fits in `i64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is the bypass field-map shape, returns a reference to
    /// the map. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_fields(&self) -> Option<&FieldMap> {
        match self {
            Value::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the name of this value's shape, as used in diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::Value;
    ///
    /// assert_eq!(Value::Bool(true).kind(), "bool");
    /// assert_eq!(Value::Ref(None).kind(), "reference");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(Number::Int(_)) => "integer",
            Value::Number(Number::UInt(_)) => "unsigned integer",
            Value::Number(Number::Float(_)) => "float",
            Value::String(_) => "string",
            Value::Ref(_) => "reference",
            Value::Fields(_) => "field map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Ref(Some(v)) => write!(f, "{}", v),
            Value::Ref(None) => write!(f, "nil"),
            Value::Fields(fields) => write!(f, "{{{} fields}}", fields.len()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::UInt(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Ref(Some(v)) => serializer.serialize_some(&**v),
            Value::Ref(None) => serializer.serialize_none(),
            Value::Fields(fields) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

// TryFrom implementations for extracting scalars from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {}", value.kind())))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {}", value.kind())))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| crate::Error::custom(format!("expected bool, found {}", value.kind())))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<FieldMap> for Value {
    fn from(value: FieldMap) -> Self {
        Value::Fields(value)
    }
}

impl From<Option<Value>> for Value {
    fn from(value: Option<Value>) -> Self {
        Value::Ref(value.map(Box::new))
    }
}
