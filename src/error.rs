//! Error types for form-urlencoded serialization.
//!
//! Encoding fails atomically: either the whole input value is classifiable
//! as a supported scalar (or a ready-made [`FieldMap`](crate::FieldMap))
//! and a byte sequence is produced, or the call returns an error before
//! any output exists. There is no partial output.
//!
//! ## Error Categories
//!
//! - **Unsupported Types**: the value's shape is not in the supported
//!   scalar set (sequences, maps, structs, unit values, ...)
//! - **Nil Values**: an absent optional reference was dereferenced
//! - **I/O Errors**: writer failures in [`to_writer`](crate::to_writer)
//!
//! ## Examples
//!
//! ```rust
//! use serde_urlform::{to_bytes, Error};
//!
//! let result = to_bytes(&vec![1, 2, 3]);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during form-urlencoded
/// serialization.
///
/// `UnsupportedType` and `NilValue` indicate a usage error (the input has
/// the wrong shape); retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value's dynamic shape is not a supported scalar. Carries the
    /// name of the rejected shape for diagnostics.
    #[error("unsupported value type: {0}")]
    UnsupportedType(String),

    /// An optional reference with no pointee was encountered.
    #[error("cannot encode an absent (nil) value")]
    NilValue,

    /// IO error while writing encoded output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through `serde::ser::Error`
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error naming the rejected shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::Error;
    ///
    /// let err = Error::unsupported_type("sequence");
    /// assert!(err.to_string().contains("sequence"));
    /// ```
    pub fn unsupported_type(what: impl Into<String>) -> Self {
        Error::UnsupportedType(what.into())
    }

    /// Creates a nil value error for a dereferenced absent optional.
    pub fn nil_value() -> Self {
        Error::NilValue
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_urlform::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
