//! The POSIX path dialect.
//!
//! `/` is the only separator, there are no devices, and all comparisons are
//! byte-exact.

use crate::context::{PathContext, ProcessContext};
use crate::engine::PathEngine;
use crate::error::Result;
use crate::parsed::{ParsedPath, PathParts};
use crate::segments::{common_prefix_len, normalize_segments, trim_empty};
use crate::split::SplitPath;

const SEP: char = '/';

/// POSIX path operations.
///
/// # Examples
///
/// ```
/// use polypath::{FixedContext, PathEngine, PosixEngine};
///
/// let posix = PosixEngine::with_context(FixedContext::new().with_current_dir("/home/me"));
///
/// assert_eq!(posix.normalize("a//b//../b"), "a/b");
/// assert_eq!(posix.join(&["foo/x", "../../../bar"]), "../bar");
/// assert_eq!(posix.resolve(&["src", "../lib"]), "/home/me/lib");
/// assert_eq!(posix.relative("/var/lib", "/var/apache"), "../apache");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PosixEngine<C = ProcessContext> {
    context: C,
}

impl PosixEngine {
    /// Create an engine that resolves against the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: PathContext> PosixEngine<C> {
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
}

impl<C: PathContext> PathEngine for PosixEngine<C> {
    fn normalize(&self, path: &str) -> String {
        let absolute = self.is_absolute(path);
        let trailing_separator = path.ends_with(SEP);

        let mut normalized = normalize_segments(path.split(SEP), !absolute).join("/");

        if normalized.is_empty() && !absolute {
            normalized.push('.');
        }
        if !normalized.is_empty() && trailing_separator {
            normalized.push(SEP);
        }

        if absolute {
            normalized.insert(0, SEP);
        }
        normalized
    }

    fn join(&self, paths: &[&str]) -> String {
        let joined = paths
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/");
        self.normalize(&joined)
    }

    fn resolve(&self, paths: &[&str]) -> String {
        let mut resolved = String::new();
        let mut absolute = false;

        let candidates = paths.iter().rev().map(|p| Some(*p)).chain([None]);
        for candidate in candidates {
            if absolute {
                break;
            }
            let path = match candidate {
                Some(path) => path.to_string(),
                None => self.context.current_dir().unwrap_or_default(),
            };
            if path.is_empty() {
                continue;
            }

            absolute = path.starts_with(SEP);
            resolved = format!("{path}/{resolved}");
        }

        // the result is treated as absolute even if the working directory was
        // unavailable, so ".." never survives
        let tail = normalize_segments(resolved.split(SEP), false).join("/");

        let result = match (absolute, tail.is_empty()) {
            (true, _) => format!("/{tail}"),
            (false, true) => ".".to_string(),
            (false, false) => tail,
        };
        log::trace!("posix resolve {paths:?} -> {result}");
        result
    }

    fn relative(&self, from: &str, to: &str) -> String {
        let from = self.resolve(&[from]);
        let to = self.resolve(&[to]);

        let from_parts: Vec<&str> = from.strip_prefix(SEP).unwrap_or(&from).split(SEP).collect();
        let to_parts: Vec<&str> = to.strip_prefix(SEP).unwrap_or(&to).split(SEP).collect();
        let from_parts = trim_empty(&from_parts);
        let to_parts = trim_empty(&to_parts);

        let same = common_prefix_len(from_parts, to_parts);

        let mut output = vec![".."; from_parts.len() - same];
        output.extend_from_slice(&to_parts[same..]);
        output.join("/")
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with(SEP)
    }

    fn dirname(&self, path: &str) -> String {
        SplitPath::posix(path).dirname()
    }

    fn basename(&self, path: &str, ext: Option<&str>) -> String {
        SplitPath::posix(path).basename(ext)
    }

    fn extname(&self, path: &str) -> String {
        SplitPath::posix(path).ext.to_string()
    }

    fn sep(&self) -> &'static str {
        "/"
    }

    fn delimiter(&self) -> &'static str {
        ":"
    }

    fn parse(&self, path: &str) -> Result<ParsedPath> {
        let split = SplitPath::posix(path);
        split.to_parsed(path, split.root)
    }

    fn format(&self, parts: &PathParts) -> String {
        let dir = parts.dir();
        let base = parts.base();

        if dir.is_empty() || dir == parts.root() {
            format!("{dir}{base}")
        } else {
            format!("{dir}/{base}")
        }
    }
}
