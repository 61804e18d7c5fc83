//! Common test utilities for integration tests.
//!
//! Engines here resolve against fixed working directories so results do not
//! depend on where the tests run.

use std::env;

use polypath::{FixedContext, PosixEngine, WindowsEngine};

/// Working directory of the POSIX fixture engine.
#[allow(dead_code)]
pub const POSIX_CWD: &str = "/home/tester/project";

/// Working directory of the Windows fixture engine.
#[allow(dead_code)]
pub const WINDOWS_CWD: &str = "C:\\Users\\tester\\project";

/// A POSIX engine resolving against [`POSIX_CWD`].
#[allow(dead_code)]
pub fn posix() -> PosixEngine<FixedContext> {
    PosixEngine::with_context(FixedContext::new().with_current_dir(POSIX_CWD))
}

/// A Windows engine resolving against [`WINDOWS_CWD`].
#[allow(dead_code)]
pub fn win32() -> WindowsEngine<FixedContext> {
    WindowsEngine::with_context(FixedContext::new().with_current_dir(WINDOWS_CWD))
}

/// Cases shared by both dialects' `join` tests, written with `/`.
#[allow(dead_code)]
pub const JOIN_CASES: &[(&[&str], &str)] = &[
    (&[".", "x/b", "..", "/b/c.js"], "x/b/c.js"),
    (&["/.", "x/b", "..", "/b/c.js"], "/x/b/c.js"),
    (&["/foo", "../../../bar"], "/bar"),
    (&["foo", "../../../bar"], "../../bar"),
    (&["foo/", "../../../bar"], "../../bar"),
    (&["foo/x", "../../../bar"], "../bar"),
    (&["foo/x", "./bar"], "foo/x/bar"),
    (&["foo/x/", "./bar"], "foo/x/bar"),
    (&["foo/x/", ".", "bar"], "foo/x/bar"),
    (&["./"], "./"),
    (&[".", "./"], "./"),
    (&[".", ".", "."], "."),
    (&[".", "./", "."], "."),
    (&[".", "/./", "."], "."),
    (&[".", "/////./", "."], "."),
    (&["."], "."),
    (&["", "."], "."),
    (&["", "foo"], "foo"),
    (&["foo", "/bar"], "foo/bar"),
    (&["", "/foo"], "/foo"),
    (&["", "", "/foo"], "/foo"),
    (&["", "", "foo"], "foo"),
    (&["foo", ""], "foo"),
    (&["foo/", ""], "foo/"),
    (&["foo", "", "/bar"], "foo/bar"),
    (&["./", "..", "/foo"], "../foo"),
    (&["./", "..", "..", "/foo"], "../../foo"),
    (&[".", "..", "..", "/foo"], "../../foo"),
    (&["", "..", "..", "/foo"], "../../foo"),
    (&["/"], "/"),
    (&["/", "."], "/"),
    (&["/", ".."], "/"),
    (&["/", "..", ".."], "/"),
    (&[""], "."),
    (&["", ""], "."),
    (&[" /foo"], " /foo"),
    (&[" ", "foo"], " /foo"),
    (&[" ", "."], " "),
    (&[" ", "/"], " /"),
    (&[" ", ""], " "),
    (&["/", "foo"], "/foo"),
    (&["/", "/foo"], "/foo"),
    (&["/", "//foo"], "/foo"),
    (&["/", "", "/foo"], "/foo"),
    (&["", "/", "foo"], "/foo"),
    (&["", "/", "/foo"], "/foo"),
];

/// Sets or clears one environment variable for the lifetime of the guard,
/// then puts back whatever value it had before.
///
/// The environment is process-global: tests holding a guard must be
/// `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value`.
    pub fn set(key: &'static str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    /// Clear `key`.
    pub fn unset(key: &'static str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}
