//! Working-directory context consumed by `resolve`.
//!
//! The engines never read the process environment directly. `resolve` asks a
//! [`PathContext`] for the current working directory and, on Windows, for a
//! drive's own working directory. [`ProcessContext`] reads the real process
//! environment; [`FixedContext`] is an immutable snapshot built by the caller.

use std::collections::HashMap;
use std::env;

/// Read-only source of working directories.
///
/// Implementations are consulted at most once per value per `resolve` call.
pub trait PathContext {
    /// The current working directory, or `None` if it cannot be determined.
    fn current_dir(&self) -> Option<String>;

    /// The last working directory used on a Windows drive (`device` is e.g.
    /// `C:`), or `None` if unknown.
    fn drive_dir(&self, device: &str) -> Option<String>;
}

impl<C: PathContext + ?Sized> PathContext for &C {
    fn current_dir(&self) -> Option<String> {
        (**self).current_dir()
    }

    fn drive_dir(&self, device: &str) -> Option<String> {
        (**self).drive_dir(device)
    }
}

/// Context backed by the running process.
///
/// The working directory comes from [`std::env::current_dir`]; drive
/// directories come from the hidden `=C:`-style environment variables that
/// Windows shells maintain.
///
/// # Examples
///
/// ```
/// use polypath::{PathContext, ProcessContext};
///
/// let context = ProcessContext;
/// assert!(context.current_dir().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessContext;

impl PathContext for ProcessContext {
    fn current_dir(&self) -> Option<String> {
        match env::current_dir() {
            Ok(dir) => match dir.into_os_string().into_string() {
                Ok(dir) => Some(dir),
                Err(dir) => {
                    log::debug!("Working directory is not valid UTF-8: {dir:?}");
                    None
                }
            },
            Err(e) => {
                log::debug!("Cannot get current directory: {e}");
                None
            }
        }
    }

    fn drive_dir(&self, device: &str) -> Option<String> {
        env::var(format!("={device}")).ok()
    }
}

/// A fixed working-directory snapshot.
///
/// # Examples
///
/// ```
/// use polypath::{FixedContext, PathContext};
///
/// let context = FixedContext::new()
///     .with_current_dir("C:\\Users\\me")
///     .with_drive_dir("d:", "D:\\games");
///
/// assert_eq!(context.current_dir().as_deref(), Some("C:\\Users\\me"));
/// assert_eq!(context.drive_dir("D:").as_deref(), Some("D:\\games"));
/// assert_eq!(context.drive_dir("e:"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedContext {
    current_dir: Option<String>,
    drive_dirs: HashMap<String, String>,
}

impl FixedContext {
    /// Create an empty context: no working directory, no drive directories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory.
    #[must_use]
    pub fn with_current_dir(mut self, dir: impl Into<String>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Record the working directory of a drive. Drive names are matched
    /// case-insensitively.
    #[must_use]
    pub fn with_drive_dir(mut self, device: &str, dir: impl Into<String>) -> Self {
        self.drive_dirs.insert(device.to_lowercase(), dir.into());
        self
    }
}

impl PathContext for FixedContext {
    fn current_dir(&self) -> Option<String> {
        self.current_dir.clone()
    }

    fn drive_dir(&self, device: &str) -> Option<String> {
        self.drive_dirs.get(&device.to_lowercase()).cloned()
    }
}
