//! # serde_urlform
//!
//! A Serde-compatible encoder for the `application/x-www-form-urlencoded`
//! wire format with deterministic, byte-stable output.
//!
//! ## What does it produce?
//!
//! The classic HTML-form body and querystring format: `key=value` pairs
//! joined by `&`, percent-escaped, with space encoded as `+`. This crate
//! adds two guarantees on top of the format itself:
//!
//! - **Determinism**: keys are emitted in byte-wise sorted order, so the
//!   same input always yields byte-identical output regardless of map
//!   iteration order. Encoded forms are safe to cache, diff, and sign.
//! - **Indexed multi-values**: a key holding several values renders as
//!   `key[0]=v0&key[1]=v1&...` with zero-based indices in append order.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: any `T: Serialize` scalar encodes directly
//! - **Bypass Shape**: callers with ready-made key/values data pass a
//!   [`FieldMap`] and skip type dispatch entirely
//! - **Closed Dispatch**: unsupported shapes fail with an error naming
//!   the rejected type; nothing is silently dropped
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_urlform = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Encoding scalars
//!
//! ```rust
//! use serde_urlform::to_string;
//!
//! // Scalars encode as a single pair under the empty key
//! assert_eq!(to_string(&true).unwrap(), "=true");
//! assert_eq!(to_string(&-1).unwrap(), "=-1");
//! assert_eq!(to_string(&1.0).unwrap(), "=1");
//! assert_eq!(to_string("Hello world").unwrap(), "=Hello+world");
//! ```
//!
//! ### Encoding a pre-built field map
//!
//! ```rust
//! use serde_urlform::{encode, fields, Value};
//!
//! let form = fields! {
//!     "name" => "Alice",
//!     "city" => "Carrot City",
//!     "tag" => ["admin", "ops"],
//! };
//!
//! let bytes = encode(&Value::Fields(form)).unwrap();
//! assert_eq!(
//!     bytes,
//!     b"city=Carrot+City&name=Alice&tag[0]=admin&tag[1]=ops",
//! );
//! ```
//!
//! ## Supported inputs
//!
//! Booleans, signed and unsigned integers of any width, floats, strings
//! and chars, references and `Option`s of these, and the [`FieldMap`]
//! bypass shape. Everything else (sequences, tuples, maps, structs, byte
//! strings, unit values) fails with
//! [`Error::UnsupportedType`]; an absent `Option` fails with
//! [`Error::NilValue`]. Failure is atomic: no partial output is ever
//! produced.
//!
//! The decoding direction is out of scope for this crate.

pub mod error;
pub mod fields;
pub mod macros;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use fields::FieldMap;
pub use ser::Serializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Encodes a dynamically-typed [`Value`] to form-urlencoded bytes.
///
/// This is the single entry point over dynamic inputs. A
/// [`Value::Fields`] input is the bypass shape: its map goes straight to
/// the renderer with no type dispatch. Every other variant is classified
/// and accumulated scalar by scalar, then rendered.
///
/// # Examples
///
/// ```rust
/// use serde_urlform::{encode, Value};
///
/// assert_eq!(encode(&Value::from(true)).unwrap(), b"=true");
/// assert_eq!(encode(&Value::from("Hello world")).unwrap(), b"=Hello+world");
/// ```
///
/// # Errors
///
/// Returns [`Error::NilValue`] for an absent reference
/// (`Value::Ref(None)`).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    if let Value::Fields(fields) = value {
        return Ok(Serializer::from_fields(fields.clone()).into_bytes());
    }
    to_bytes(value)
}

/// Encodes any `T: Serialize` scalar to form-urlencoded bytes.
///
/// # Examples
///
/// ```rust
/// use serde_urlform::to_bytes;
///
/// assert_eq!(to_bytes(&0u32).unwrap(), b"=0");
/// assert_eq!(to_bytes(&-1.5).unwrap(), b"=-1.5");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value's shape is not a
/// supported scalar, or [`Error::NilValue`] for an absent `Option`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_bytes())
}

/// Encodes any `T: Serialize` scalar to a form-urlencoded `String`.
///
/// The encoded output is always ASCII, so this is a lossless convenience
/// over [`to_bytes`].
///
/// # Examples
///
/// ```rust
/// use serde_urlform::to_string;
///
/// assert_eq!(to_string(&1.0f64).unwrap(), "=1");
/// assert_eq!(to_string("").unwrap(), "=");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be encoded (unsupported shape or
/// absent `Option`).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let bytes = to_bytes(value)?;
    String::from_utf8(bytes).map_err(|e| Error::custom(e.to_string()))
}

/// Encodes any `T: Serialize` scalar to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_urlform::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &42).unwrap();
/// assert_eq!(buffer, b"=42");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_bytes(value)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
