//! Error types for the polypath library.
//!
//! Every operation is a pure string transformation, so the only failures are
//! caller-input problems. They are reported synchronously through the
//! [`Error`] enum, built with `thiserror`.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for operations that may fail with a polypath error.
///
/// # Examples
///
/// ```
/// use polypath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/var/lib".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the polypath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A dynamically-typed value was passed where a string (or record) was
    /// required.
    #[error("{context} must be {expected}, not {found}")]
    InvalidArgument {
        /// Which argument was rejected, e.g. `Parameter 'pathString'`.
        context: String,
        /// What the argument must be, e.g. `a string`.
        expected: &'static str,
        /// The type of the value actually supplied.
        found: ValueKind,
    },

    /// A path string could not be decomposed into root, dir, base and ext.
    #[error("invalid path '{path}': {reason}")]
    MalformedPath {
        /// The path that could not be decomposed.
        path: String,
        /// The reason the decomposition failed.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field (or environment variable) that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Builds an [`Error::InvalidArgument`] describing `value`.
    pub(crate) fn invalid_argument(
        context: impl Into<String>,
        expected: &'static str,
        value: &Value,
    ) -> Self {
        Self::InvalidArgument {
            context: context.into(),
            expected,
            found: ValueKind::of(value),
        }
    }

    /// Check if error was caused by a wrongly-typed argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::{Error, ValueKind};
    ///
    /// let err = Error::InvalidArgument {
    ///     context: "Parameter 'pathString'".to_string(),
    ///     expected: "a string",
    ///     found: ValueKind::Null,
    /// };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error indicates a path could not be decomposed.
    #[must_use]
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Self::MalformedPath { .. })
    }
}

/// The type of a dynamically-typed value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object (record).
    Object,
}

impl ValueKind {
    /// Classifies a JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!(12)), ValueKind::Number);
    /// assert_eq!(ValueKind::of(&json!({"root": "/"})), ValueKind::Object);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}
