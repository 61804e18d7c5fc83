#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # polypath
//!
//! Path string manipulation in two dialects, POSIX and Win32, without ever
//! touching the filesystem.
//!
//! Given path strings, the engines normalize, join, resolve against a
//! working-directory context, compute relative paths, and decompose paths
//! into root, directory, base name, extension and stem (and back).
//!
//! ## Core Types
//!
//! - [`PathEngine`]: the operation set, implemented by [`PosixEngine`] and
//!   [`WindowsEngine`]
//! - [`Dialect`]: picks an engine, from the host platform or configuration
//! - [`PathContext`]: the working directories `resolve` falls back on
//! - [`ParsedPath`] and [`PathParts`]: the records of `parse` and `format`
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use polypath::{FixedContext, PathEngine, PosixEngine, WindowsEngine};
//!
//! let posix = PosixEngine::with_context(FixedContext::new().with_current_dir("/var"));
//! assert_eq!(posix.resolve(&["lib", "../log"]), "/var/log");
//! assert_eq!(posix.extname("archive.tar.gz"), ".gz");
//!
//! let win32 = WindowsEngine::new();
//! assert_eq!(win32.normalize("C:/temp\\\\foo/../bar"), "C:\\temp\\bar");
//! assert!(win32.is_absolute("\\\\server\\share"));
//!
//! let parsed = win32.parse("C:\\path\\dir\\index.html").unwrap();
//! assert_eq!(parsed.root, "C:\\");
//! assert_eq!(parsed.dir, "C:\\path\\dir");
//! assert_eq!(parsed.name, "index");
//! assert_eq!(win32.format(&parsed.to_parts()), "C:\\path\\dir\\index.html");
//! ```

pub mod context;
pub mod device;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod parsed;
pub mod posix;
pub mod segments;
pub mod split;
pub mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use context::{FixedContext, PathContext, ProcessContext};
pub use dialect::{Dialect, DIALECT_ENV_VAR};
pub use engine::PathEngine;
pub use error::{Error, Result, ValueKind};
pub use parsed::{ParsedPath, PathParts};
pub use posix::PosixEngine;
pub use windows::WindowsEngine;
