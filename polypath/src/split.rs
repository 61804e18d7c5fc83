//! Structural decomposition of a path into root, directory, base and
//! extension.
//!
//! The grammar, shared by both dialects apart from what counts as a
//! separator and as the root:
//!
//! ```text
//! path     := root dir base trailing
//! dir      := everything up to and including the last separator run
//!             that precedes the final segment
//! base     := the final segment (no separators)
//! trailing := separator*
//! ```
//!
//! The extension is the suffix of `base` starting at its last dot, except
//! that a name made of one leading dot-run (`.`, `..`, `.file`) keeps an
//! empty extension. See [`extension`] for the exact rule.

use crate::device::{self, DeviceSplit};
use crate::error::{Error, Result};
use crate::parsed::ParsedPath;

/// The four structural groups of a path, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPath<'a> {
    /// Root prefix: `/` on POSIX; device plus root separator on Windows.
    pub root: &'a str,
    /// Directory portion after the root, including its trailing separators.
    pub dir: &'a str,
    /// Final segment.
    pub base: &'a str,
    /// Extension of `base` (a suffix of it).
    pub ext: &'a str,
}

impl<'a> SplitPath<'a> {
    /// Split a POSIX path. Only `/` separates; a backslash is an ordinary
    /// character.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::split::SplitPath;
    ///
    /// let split = SplitPath::posix("/home/user/file.txt");
    /// assert_eq!(split.root, "/");
    /// assert_eq!(split.dir, "home/user/");
    /// assert_eq!(split.base, "file.txt");
    /// assert_eq!(split.ext, ".txt");
    /// ```
    #[must_use]
    pub fn posix(path: &'a str) -> Self {
        let (root, rest) = match path.strip_prefix('/') {
            Some(rest) => (&path[..1], rest),
            None => ("", path),
        };
        Self::from_tail(root, rest, |c| c == '/')
    }

    /// Split a Win32 path. The device and root separator form the root, and
    /// both `/` and `\` separate.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::split::SplitPath;
    ///
    /// let split = SplitPath::windows("c:\\foo\\bar.js\\");
    /// assert_eq!(split.root, "c:\\");
    /// assert_eq!(split.dir, "foo\\");
    /// assert_eq!(split.base, "bar.js");
    /// assert_eq!(split.ext, ".js");
    /// ```
    #[must_use]
    pub fn windows(path: &'a str) -> Self {
        let split = DeviceSplit::new(path);
        Self::from_tail(split.prefix(path), split.tail, device::is_separator)
    }

    fn from_tail(root: &'a str, tail: &'a str, is_separator: fn(char) -> bool) -> Self {
        let trimmed = tail.trim_end_matches(is_separator);
        let dir_len = trimmed.rfind(is_separator).map_or(0, |i| i + 1);
        let (dir, base) = trimmed.split_at(dir_len);

        Self {
            root,
            dir,
            base,
            ext: extension(base),
        }
    }

    /// Directory name: root plus directory with one trailing separator
    /// removed, or `.` when there is neither.
    #[must_use]
    pub fn dirname(&self) -> String {
        if self.root.is_empty() && self.dir.is_empty() {
            return ".".to_string();
        }
        format!("{}{}", self.root, strip_last_char(self.dir))
    }

    /// Base name, with `ext` removed when it is a (case-sensitive) suffix.
    #[must_use]
    pub fn basename(&self, ext: Option<&str>) -> String {
        match ext {
            Some(ext) if !ext.is_empty() => self.base.strip_suffix(ext).unwrap_or(self.base),
            _ => self.base,
        }
        .to_string()
    }

    /// `base` without its extension.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.base[..self.base.len() - self.ext.len()]
    }

    /// Build the `parse` record. `root` is the root to report, which on
    /// Windows is empty for drive-relative paths even though the device is
    /// part of `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] if the groups do not reassemble into
    /// a prefix of `path`.
    pub fn to_parsed(&self, path: &str, root: &str) -> Result<ParsedPath> {
        let covered = [self.root, self.dir, self.base].concat();
        if path.get(..covered.len()) != Some(covered.as_str()) || !self.base.ends_with(self.ext) {
            return Err(Error::MalformedPath {
                path: path.to_string(),
                reason: "root, dir and base do not reassemble the path".to_string(),
            });
        }

        Ok(ParsedPath {
            root: root.to_string(),
            dir: format!("{}{}", self.root, strip_last_char(self.dir)),
            base: self.base.to_string(),
            ext: self.ext.to_string(),
            name: self.name().to_string(),
        })
    }
}

/// Extension of a single path segment.
///
/// The extension is a suffix that is empty or starts with a dot and contains
/// no further dot. It is chosen by trying, in order, a base of `..`, a base
/// of `.`, and then the shortest non-empty base:
///
/// * `file.ext` → `.ext`, `file.` → `.`, `file` → empty
/// * `.file` → empty, `.file.ext` → `.ext`
/// * `.` and `..` → empty, `...` → `.`, `..file` → `.file`
///
/// # Examples
///
/// ```
/// use polypath::split::extension;
///
/// assert_eq!(extension("index.html"), ".html");
/// assert_eq!(extension(".bashrc"), "");
/// assert_eq!(extension("..file"), ".file");
/// assert_eq!(extension("..file.ext"), ".ext");
/// assert_eq!(extension("...."), ".");
/// ```
#[must_use]
pub fn extension(segment: &str) -> &str {
    let is_extension = |s: &str| {
        s.is_empty() || (s.starts_with('.') && !s[1..].contains('.'))
    };

    if let Some(rest) = segment.strip_prefix("..") {
        if is_extension(rest) {
            return rest;
        }
    }
    if let Some(rest) = segment.strip_prefix('.') {
        if is_extension(rest) {
            return rest;
        }
    }

    match segment.rfind('.') {
        Some(dot) if dot > 0 => &segment[dot..],
        _ => "",
    }
}

fn strip_last_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}
