//! Dot-segment normalization shared by both dialects.
//!
//! Paths are split on their separator(s) before reaching this module, so the
//! functions here only ever see individual segments.

/// Collapse `.` and `..` segments.
///
/// Empty and `.` segments are dropped. A `..` removes the preceding real
/// segment; when there is none it is kept literally only if
/// `allow_above_root` is set, otherwise it is discarded (an absolute path
/// cannot climb above its root).
///
/// # Examples
///
/// ```
/// use polypath::segments::normalize_segments;
///
/// let parts = normalize_segments("a//b/../c/.".split('/'), true);
/// assert_eq!(parts, vec!["a", "c"]);
///
/// let parts = normalize_segments("../../x".split('/'), true);
/// assert_eq!(parts, vec!["..", "..", "x"]);
///
/// let parts = normalize_segments("../../x".split('/'), false);
/// assert_eq!(parts, vec!["x"]);
/// ```
pub fn normalize_segments<'a, I>(segments: I, allow_above_root: bool) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result: Vec<&'a str> = Vec::new();

    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => match result.last() {
                Some(&last) if last != ".." => {
                    result.pop();
                }
                _ if allow_above_root => result.push(".."),
                _ => {}
            },
            _ => result.push(segment),
        }
    }

    result
}

/// Strip leading and trailing empty segments.
///
/// # Examples
///
/// ```
/// use polypath::segments::trim_empty;
///
/// assert_eq!(trim_empty(&["", "var", "lib", ""]), &["var", "lib"]);
/// assert!(trim_empty(&["", ""]).is_empty());
/// ```
#[must_use]
pub fn trim_empty<'s, 'a>(segments: &'s [&'a str]) -> &'s [&'a str] {
    let Some(start) = segments.iter().position(|s| !s.is_empty()) else {
        return &[];
    };
    let end = segments
        .iter()
        .rposition(|s| !s.is_empty())
        .unwrap_or(start);
    &segments[start..=end]
}

/// Length of the common prefix of two segment lists.
pub(crate) fn common_prefix_len<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    left.iter()
        .zip(right)
        .take_while(|(l, r)| l == r)
        .count()
}
