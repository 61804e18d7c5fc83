//! The operation set shared by both path dialects.

use serde_json::Value;

use crate::error::Result;
use crate::parsed::{self, ParsedPath, PathParts};

/// A path dialect: the complete set of path string operations.
///
/// Implemented by [`PosixEngine`](crate::PosixEngine) and
/// [`WindowsEngine`](crate::WindowsEngine). All operations are pure string
/// transformations; only `resolve` (and `relative`, through it) consults the
/// engine's [`PathContext`](crate::PathContext).
///
/// The `*_value` methods accept dynamically-typed arguments, check them on
/// entry and then delegate to the typed operation.
pub trait PathEngine {
    /// Normalize a path, collapsing `.`, `..` and repeated separators.
    fn normalize(&self, path: &str) -> String;

    /// Join path segments with the separator and normalize the result.
    /// Empty segments are ignored.
    fn join(&self, paths: &[&str]) -> String;

    /// Resolve a sequence of paths, right to left, into an absolute path,
    /// falling back on the context's working directory.
    fn resolve(&self, paths: &[&str]) -> String;

    /// The relative path from `from` to `to`, after resolving both.
    fn relative(&self, from: &str, to: &str) -> String;

    /// Whether `path` is absolute.
    fn is_absolute(&self, path: &str) -> bool;

    /// The directory portion of `path`.
    fn dirname(&self, path: &str) -> String;

    /// The last portion of `path`, without `ext` if it is a suffix.
    fn basename(&self, path: &str, ext: Option<&str>) -> String;

    /// The extension of the last portion of `path`.
    fn extname(&self, path: &str) -> String;

    /// The segment separator.
    fn sep(&self) -> &'static str;

    /// The delimiter between entries of a `PATH`-style list.
    fn delimiter(&self) -> &'static str;

    /// Decompose `path` into root, dir, base, ext and name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`](crate::Error::MalformedPath) if the
    /// structural split cannot account for the input.
    fn parse(&self, path: &str) -> Result<ParsedPath>;

    /// Assemble a path from its parts. The inverse of [`parse`](Self::parse).
    fn format(&self, parts: &PathParts) -> String;

    /// [`join`](Self::join) over dynamically-typed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// any argument is not a string.
    fn join_values(&self, paths: &[Value]) -> Result<String> {
        let paths = parsed::path_strings(paths, "join")?;
        Ok(self.join(&paths))
    }

    /// [`resolve`](Self::resolve) over dynamically-typed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// any argument is not a string.
    fn resolve_values(&self, paths: &[Value]) -> Result<String> {
        let paths = parsed::path_strings(paths, "resolve")?;
        Ok(self.resolve(&paths))
    }

    /// [`parse`](Self::parse) over a dynamically-typed argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `path` is not a string, or whatever `parse` returns.
    fn parse_value(&self, path: &Value) -> Result<ParsedPath> {
        self.parse(parsed::path_string(path)?)
    }

    /// [`format`](Self::format) over a dynamically-typed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `parts` is not an object or one of its fields is not a string.
    fn format_value(&self, parts: &Value) -> Result<String> {
        Ok(self.format(&PathParts::from_value(parts)?))
    }
}
