//! The Win32 path dialect.
//!
//! Both `\` and `/` separate segments on input; output always uses `\`.
//! Paths may start with a drive letter (`C:`) or a UNC root
//! (`\\host\share`), and each drive has its own working directory. Equality
//! checks in `relative` ignore case.

use std::borrow::Cow;

use crate::context::{PathContext, ProcessContext};
use crate::device::{is_separator, is_unc, normalize_unc_root, same_device, DeviceSplit};
use crate::engine::PathEngine;
use crate::error::Result;
use crate::parsed::{ParsedPath, PathParts};
use crate::segments::{common_prefix_len, normalize_segments, trim_empty};
use crate::split::SplitPath;

const SEP: char = '\\';

/// Win32 path operations.
///
/// # Examples
///
/// ```
/// use polypath::{FixedContext, PathEngine, WindowsEngine};
///
/// let context = FixedContext::new()
///     .with_current_dir("C:\\Users\\me")
///     .with_drive_dir("d:", "D:\\games");
/// let win32 = WindowsEngine::with_context(context);
///
/// assert_eq!(win32.normalize("./fixtures///b/../b/c.js"), "fixtures\\b\\c.js");
/// assert_eq!(win32.join(&["//server", "share"]), "\\\\server\\share\\");
/// assert_eq!(win32.resolve(&["d:saves"]), "d:\\games\\saves");
/// assert_eq!(win32.relative("C:\\ORANDEA\\test", "c:\\orandea\\impl"), "..\\impl");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsEngine<C = ProcessContext> {
    context: C,
}

impl WindowsEngine {
    /// Create an engine that resolves against the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: PathContext> WindowsEngine<C> {
    /// Create an engine that resolves against `context`.
    #[must_use]
    pub fn with_context(context: C) -> Self {
        Self { context }
    }

    /// The context this engine resolves against.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Working directory of `device`, or its root when the context has none
    /// (or has one that belongs to another drive).
    fn drive_dir(&self, device: &str) -> String {
        match self.context.drive_dir(device) {
            Some(dir)
                if dir
                    .get(..device.len())
                    .is_some_and(|head| same_device(head, device))
                    && dir[device.len()..].starts_with(SEP) =>
            {
                dir
            }
            Some(dir) => {
                log::debug!("Ignoring working directory {dir:?} recorded for drive {device}");
                format!("{device}\\")
            }
            None => {
                log::debug!("No working directory recorded for drive {device}, using its root");
                format!("{device}\\")
            }
        }
    }
}

/// Normalize the tail of a path, splitting on either separator.
fn normalize_tail(tail: &str, allow_above_root: bool) -> String {
    normalize_segments(tail.split(is_separator), allow_above_root).join("\\")
}

/// Replace a leading run of two or more separators with a single `\`.
fn collapse_leading_separators(path: &str) -> Cow<'_, str> {
    let rest = path.trim_start_matches(is_separator);
    if path.len() - rest.len() >= 2 {
        Cow::Owned(format!("\\{rest}"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Whether `path` starts with exactly two separators and then a
/// non-separator, i.e. it is meant as a UNC root.
fn is_unc_intent(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), Some(c)) if is_separator(a) && is_separator(b) && !is_separator(c)
    )
}

impl<C: PathContext> PathEngine for WindowsEngine<C> {
    fn normalize(&self, path: &str) -> String {
        let split = DeviceSplit::new(path);
        let absolute = split.is_absolute();
        let trailing_separator = split.tail.ends_with(is_separator);

        let mut tail = normalize_tail(split.tail, !absolute);
        if tail.is_empty() && !absolute {
            tail.push('.');
        }
        if !tail.is_empty() && trailing_separator {
            tail.push(SEP);
        }
        // `x/../c:` collapses to `c:`, which would read back as a drive
        if split.device.is_empty() && !absolute && !DeviceSplit::new(&tail).device.is_empty() {
            tail.insert_str(0, ".\\");
        }

        let device = if split.is_unc() {
            Cow::Owned(normalize_unc_root(split.device))
        } else {
            Cow::Borrowed(split.device)
        };

        format!("{device}{}{tail}", if absolute { "\\" } else { "" })
    }

    fn join(&self, paths: &[&str]) -> String {
        let paths: Vec<&str> = paths.iter().filter(|p| !p.is_empty()).copied().collect();
        let joined = paths.join("\\");

        // Two leading separators would read as a UNC root; keep them only
        // when the first segment clearly names one (`//server`).
        match paths.first() {
            Some(first) if is_unc_intent(first) => self.normalize(&joined),
            _ => self.normalize(&collapse_leading_separators(&joined)),
        }
    }

    fn resolve(&self, paths: &[&str]) -> String {
        let mut resolved_device = String::new();
        let mut resolved_tail = String::new();
        let mut resolved_absolute = false;

        let candidates = paths.iter().rev().map(|p| Some(*p)).chain([None]);
        for candidate in candidates {
            let path = match candidate {
                Some(path) => Cow::Borrowed(path),
                None if resolved_device.is_empty() => {
                    Cow::Owned(self.context.current_dir().unwrap_or_default())
                }
                // drive-relative so far; UNC roots are always absolute
                None => Cow::Owned(self.drive_dir(&resolved_device)),
            };
            if path.is_empty() {
                continue;
            }

            let split = DeviceSplit::new(&path);

            if !split.device.is_empty()
                && !resolved_device.is_empty()
                && !same_device(split.device, &resolved_device)
            {
                // another drive cannot contribute to this one
                continue;
            }

            if resolved_device.is_empty() {
                resolved_device = split.device.to_string();
            }

            if !resolved_absolute {
                resolved_tail = format!("{}\\{resolved_tail}", split.tail);
                resolved_absolute = split.is_absolute();
            }

            if !resolved_device.is_empty() && resolved_absolute {
                break;
            }
        }

        if is_unc(&resolved_device) {
            resolved_device = normalize_unc_root(&resolved_device);
        }

        let tail = normalize_tail(&resolved_tail, !resolved_absolute);
        let result = format!(
            "{resolved_device}{}{tail}",
            if resolved_absolute { "\\" } else { "" }
        );
        let result = if result.is_empty() {
            ".".to_string()
        } else {
            result
        };
        log::trace!("win32 resolve {paths:?} -> {result}");
        result
    }

    fn relative(&self, from: &str, to: &str) -> String {
        let from = self.resolve(&[from]);
        let to = self.resolve(&[to]);

        let lower_from = from.to_lowercase();
        let lower_to = to.to_lowercase();

        let lower_from_parts: Vec<&str> = lower_from.split(SEP).collect();
        let lower_to_parts: Vec<&str> = lower_to.split(SEP).collect();
        let lower_from_parts = trim_empty(&lower_from_parts);
        let lower_to_parts = trim_empty(&lower_to_parts);

        let same = common_prefix_len(lower_from_parts, lower_to_parts);
        if same == 0 {
            // different drives share no root
            return to;
        }

        let to_parts: Vec<&str> = to.split(SEP).collect();
        let to_parts = trim_empty(&to_parts);

        let mut output = vec![".."; lower_from_parts.len() - same];
        output.extend_from_slice(&to_parts[same..]);
        output.join("\\")
    }

    fn is_absolute(&self, path: &str) -> bool {
        DeviceSplit::new(path).is_absolute()
    }

    fn dirname(&self, path: &str) -> String {
        SplitPath::windows(path).dirname()
    }

    fn basename(&self, path: &str, ext: Option<&str>) -> String {
        SplitPath::windows(path).basename(ext)
    }

    fn extname(&self, path: &str) -> String {
        SplitPath::windows(path).ext.to_string()
    }

    fn sep(&self) -> &'static str {
        "\\"
    }

    fn delimiter(&self) -> &'static str {
        ";"
    }

    fn parse(&self, path: &str) -> Result<ParsedPath> {
        let split = SplitPath::windows(path);
        let root = if self.is_absolute(path) { split.root } else { "" };
        split.to_parsed(path, root)
    }

    fn format(&self, parts: &PathParts) -> String {
        let dir = parts.dir();
        let base = parts.base();

        let needs_separator = !(dir.is_empty()
            || dir.ends_with(is_separator)
            || dir == parts.root()
            || is_bare_drive(dir));

        if needs_separator {
            format!("{dir}\\{base}")
        } else {
            format!("{dir}{base}")
        }
    }
}

fn is_bare_drive(dir: &str) -> bool {
    let split = DeviceSplit::new(dir);
    !split.device.is_empty() && !split.is_unc() && split.device.len() == dir.len()
}
