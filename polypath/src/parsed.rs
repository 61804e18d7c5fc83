//! Structured path records and the dynamically-typed input boundary.
//!
//! [`ParsedPath`] is what `parse` produces; [`PathParts`] is what `format`
//! consumes. Both serialize with `serde`, so a record can cross a JSON
//! boundary and come back. Values arriving from such a boundary are checked
//! here before they reach an engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A path decomposed into its structural fields.
///
/// `name + ext == base` always holds, and formatting the record with the
/// dialect that parsed it reproduces the original path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Root of an absolute path (`/`, `C:\`, `\\host\share\`), else empty.
    pub root: String,
    /// Directory containing the final segment.
    pub dir: String,
    /// Final segment, including its extension.
    pub base: String,
    /// Extension of `base`: empty, `.`, or a dot followed by non-dots.
    pub ext: String,
    /// `base` without `ext`.
    pub name: String,
}

impl ParsedPath {
    /// Convert into the input record of `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::{PathEngine, PosixEngine};
    ///
    /// let posix = PosixEngine::new();
    /// let parsed = posix.parse("/home/user/file.txt").unwrap();
    /// assert_eq!(posix.format(&parsed.to_parts()), "/home/user/file.txt");
    /// ```
    #[must_use]
    pub fn to_parts(&self) -> PathParts {
        PathParts {
            root: Some(self.root.clone()),
            dir: Some(self.dir.clone()),
            base: Some(self.base.clone()),
            ext: Some(self.ext.clone()),
            name: Some(self.name.clone()),
        }
    }
}

/// Input record of `format`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParts {
    /// Root of the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Directory, used verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Final segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Extension; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    /// Name without extension; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PathParts {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the directory.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Set the base name.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Root, or empty.
    #[must_use]
    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or_default()
    }

    /// Directory, or empty.
    #[must_use]
    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or_default()
    }

    /// Base name, or empty.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base.as_deref().unwrap_or_default()
    }

    /// Validate a dynamically-typed `format` argument.
    ///
    /// The value must be an object; each known field must be absent, `null`
    /// or a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the offending value's type.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::PathParts;
    /// use serde_json::json;
    ///
    /// let parts = PathParts::from_value(&json!({"dir": "/tmp", "base": "a.txt"})).unwrap();
    /// assert_eq!(parts.dir(), "/tmp");
    ///
    /// let err = PathParts::from_value(&json!({"root": 12})).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "'pathObject.root' must be a string or undefined, not number"
    /// );
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(Error::invalid_argument(
                "Parameter 'pathObject'",
                "an object",
                value,
            ));
        };

        Ok(Self {
            root: optional_string(fields, "root")?,
            dir: optional_string(fields, "dir")?,
            base: optional_string(fields, "base")?,
            ext: optional_string(fields, "ext")?,
            name: optional_string(fields, "name")?,
        })
    }
}

fn optional_string(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Error::invalid_argument(
            format!("'pathObject.{key}'"),
            "a string or undefined",
            other,
        )),
    }
}

/// Validate a dynamically-typed `parse` argument.
pub(crate) fn path_string(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::invalid_argument("Parameter 'pathString'", "a string", value))
}

/// Validate the dynamically-typed arguments of a variadic operation.
pub(crate) fn path_strings<'a>(values: &'a [Value], operation: &str) -> Result<Vec<&'a str>> {
    values
        .iter()
        .map(|value| {
            value.as_str().ok_or_else(|| {
                Error::invalid_argument(format!("Arguments to path.{operation}"), "strings", value)
            })
        })
        .collect()
}
