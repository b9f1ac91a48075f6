//! Form-urlencoded serialization.
//!
//! This module provides the [`Serializer`] implementation that converts
//! Rust values into `application/x-www-form-urlencoded` byte sequences.
//!
//! ## Overview
//!
//! Encoding runs in two phases:
//!
//! 1. **Dispatch**: the value is driven through `serde`, and every
//!    supported scalar (bool, integer, unsigned integer, float, string)
//!    is appended to a [`FieldMap`] under the current field key. Composite
//!    shapes (sequences, tuples, maps, structs) are rejected with
//!    [`Error::UnsupportedType`]; an absent `Option` is rejected with
//!    [`Error::NilValue`].
//! 2. **Render**: the finished map is serialized deterministically, with
//!    keys sorted byte-wise ascending, single-valued keys as `key=value`,
//!    multi-valued keys as `key[0]=v0&key[1]=v1&...` in append order, and
//!    every component percent-escaped with space as `+`.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_urlform::to_bytes;
//!
//! let bytes = to_bytes("Hello world").unwrap();
//! assert_eq!(bytes, b"=Hello+world");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! For advanced use cases, you can use the serializer directly:
//!
//! ```rust
//! use serde_urlform::Serializer;
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new();
//! true.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_bytes(), b"=true");
//! ```

use crate::{Error, FieldMap, Result};
use serde::{ser, Serialize};

/// Percent-escapes one key or value component.
///
/// Standard form-urlencoding rules: ASCII alphanumerics and `*-._` pass
/// through unchanged, space becomes `+`, every other byte becomes a `%XX`
/// escape of its value.
fn escape_into(out: &mut String, component: &str) {
    out.extend(form_urlencoded::byte_serialize(component.as_bytes()));
}

/// The form-urlencoded serializer.
///
/// Owns the [`FieldMap`] accumulator for one encoding call. Scalars
/// dispatched through `serde` are appended under the current field key
/// (the empty string at the top level), and [`Serializer::into_bytes`]
/// consumes the accumulator into the final byte sequence.
pub struct Serializer {
    fields: FieldMap,
    // Field-key prefix for appended scalars. Stays empty: nested
    // field-name composition only exists once composite inputs do, and
    // those are rejected during dispatch.
    key: String,
}

impl Serializer {
    /// Creates a serializer with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Serializer {
            fields: FieldMap::new(),
            key: String::new(),
        }
    }

    /// Creates a serializer over a pre-built field map.
    ///
    /// This is the bypass path: the map's contents go straight to the
    /// renderer without any type dispatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::{FieldMap, Serializer};
    ///
    /// let mut fields = FieldMap::new();
    /// fields.append("q", "rust serde");
    /// let bytes = Serializer::from_fields(fields).into_bytes();
    /// assert_eq!(bytes, b"q=rust+serde");
    /// ```
    #[must_use]
    pub fn from_fields(fields: FieldMap) -> Self {
        Serializer {
            fields,
            key: String::new(),
        }
    }

    /// Consumes the accumulator and renders the encoded byte sequence.
    ///
    /// Keys are emitted in byte-wise ascending order regardless of
    /// insertion order, so the output for a given map is always
    /// byte-identical. A key with one value renders as `key=value`; a key
    /// with n values renders as n `key[i]=value` pairs with zero-based
    /// indices in append order. Pairs are joined by `&`.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut entries: Vec<(&String, &Vec<String>)> = self.fields.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut out = String::with_capacity(256);
        // One flag across both loops: every pair after the very first one
        // is preceded by '&', whether its key is single- or multi-valued.
        let mut wrote_pair = false;

        for (key, values) in entries {
            if values.len() == 1 {
                if wrote_pair {
                    out.push('&');
                }
                wrote_pair = true;

                escape_into(&mut out, key);
                out.push('=');
                escape_into(&mut out, &values[0]);
            } else {
                for (index, value) in values.iter().enumerate() {
                    if wrote_pair {
                        out.push('&');
                    }
                    wrote_pair = true;

                    escape_into(&mut out, key);
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                    out.push('=');
                    escape_into(&mut out, value);
                }
            }
        }

        out.into_bytes()
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = ser::Impossible<(), Error>;
    type SerializeTuple = ser::Impossible<(), Error>;
    type SerializeTupleStruct = ser::Impossible<(), Error>;
    type SerializeTupleVariant = ser::Impossible<(), Error>;
    type SerializeMap = ser::Impossible<(), Error>;
    type SerializeStruct = ser::Impossible<(), Error>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.fields
            .append(self.key.as_str(), if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.fields.append(self.key.as_str(), v.to_string());
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.fields.append(self.key.as_str(), v.to_string());
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        // f64's Display is the shortest decimal text that round-trips the
        // binary value: 1.0 renders as "1", 1.0/3.0 as "0.3333333333333333".
        self.fields.append(self.key.as_str(), v.to_string());
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.serialize_str(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.fields.append(self.key.as_str(), v);
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_type("byte string"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::nil_value())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type("unit value"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(Error::unsupported_type(format!("unit struct `{}`", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(format!(
            "newtype variant `{}::{}`",
            name, variant
        )))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type(format!("tuple struct `{}`", name)))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(format!(
            "tuple variant `{}::{}`",
            name, variant
        )))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(format!("struct `{}`", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(format!(
            "struct variant `{}::{}`",
            name, variant
        )))
    }
}
