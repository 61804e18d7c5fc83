//! Dialect selection.
//!
//! A [`Dialect`] is a plain value chosen once by the caller, from the host
//! platform, from configuration, or explicitly, and then turned into an
//! engine. Nothing is cached globally.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::context::{PathContext, ProcessContext};
use crate::engine::PathEngine;
use crate::error::{Error, Result};
use crate::posix::PosixEngine;
use crate::windows::WindowsEngine;

/// Environment variable that overrides the host dialect in
/// [`Dialect::from_env`].
pub const DIALECT_ENV_VAR: &str = "POLYPATH_DIALECT";

/// A path grammar.
///
/// # Examples
///
/// ```
/// use polypath::Dialect;
///
/// let engine = Dialect::Posix.engine();
/// assert_eq!(engine.join(&["a", "b"]), "a/b");
///
/// let engine = Dialect::Windows.engine();
/// assert_eq!(engine.join(&["a", "b"]), "a\\b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `/`-separated, case-sensitive paths.
    Posix,
    /// Win32 paths with drive letters and UNC roots.
    #[serde(alias = "win32")]
    Windows,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl Dialect {
    /// The dialect of the platform this crate was compiled for.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::Dialect;
    ///
    /// if cfg!(windows) {
    ///     assert_eq!(Dialect::host(), Dialect::Windows);
    /// } else {
    ///     assert_eq!(Dialect::host(), Dialect::Posix);
    /// }
    /// ```
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Parses a dialect name.
    ///
    /// Recognizes: "posix", "windows", "win32" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::Dialect;
    ///
    /// assert_eq!(Dialect::parse("POSIX").unwrap(), Dialect::Posix);
    /// assert_eq!(Dialect::parse("win32").unwrap(), Dialect::Windows);
    /// assert!(Dialect::parse("vms").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: DIALECT_ENV_VAR.to_string(),
                message: format!("unknown dialect '{s}', expected posix, windows or win32"),
            }),
        }
    }

    /// The dialect named by `POLYPATH_DIALECT`, or the host dialect if the
    /// variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the variable is set to an unknown
    /// dialect.
    pub fn from_env() -> Result<Self> {
        match env::var(DIALECT_ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::host()),
        }
    }

    /// An engine for this dialect that resolves against the process
    /// environment.
    #[must_use]
    pub fn engine(self) -> Box<dyn PathEngine + Send + Sync> {
        self.engine_with(ProcessContext)
    }

    /// An engine for this dialect that resolves against `context`.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::{Dialect, FixedContext};
    ///
    /// let engine = Dialect::Posix.engine_with(FixedContext::new().with_current_dir("/srv"));
    /// assert_eq!(engine.resolve(&["app"]), "/srv/app");
    /// ```
    #[must_use]
    pub fn engine_with<C>(self, context: C) -> Box<dyn PathEngine + Send + Sync>
    where
        C: PathContext + Send + Sync + 'static,
    {
        match self {
            Self::Posix => Box::new(PosixEngine::with_context(context)),
            Self::Windows => Box::new(WindowsEngine::with_context(context)),
        }
    }
}
