//! Windows device detection.
//!
//! A Win32 path may begin with a device: either a drive letter (`C:`) or a
//! UNC root (`\\host\share`). The splitter scans the prefix grammar by index:
//!
//! ```text
//! path   := device? separator? tail
//! device := letter ':' | sep sep host sep+ share
//! ```
//!
//! where `host` and `share` are maximal runs of non-separator characters and
//! either `/` or `\` counts as a separator.

/// Returns true for either Win32 separator.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// A path split into its device prefix, root marker and remaining tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSplit<'a> {
    /// The drive letter or UNC prefix, empty when there is none.
    pub device: &'a str,
    /// Whether a separator immediately follows the device.
    pub has_root: bool,
    /// Everything after the device and root separator.
    pub tail: &'a str,
}

impl<'a> DeviceSplit<'a> {
    /// Split `path` into device, root separator and tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use polypath::device::DeviceSplit;
    ///
    /// let split = DeviceSplit::new("C:\\Users\\me");
    /// assert_eq!(split.device, "C:");
    /// assert!(split.has_root);
    /// assert_eq!(split.tail, "Users\\me");
    ///
    /// let split = DeviceSplit::new("//server/share/file");
    /// assert_eq!(split.device, "//server/share");
    /// assert!(split.is_unc());
    /// assert_eq!(split.tail, "file");
    /// ```
    #[must_use]
    pub fn new(path: &'a str) -> Self {
        let device_len = drive_len(path).or_else(|| unc_len(path)).unwrap_or(0);
        let (device, rest) = path.split_at(device_len);

        match rest.strip_prefix(is_separator) {
            Some(tail) => Self {
                device,
                has_root: true,
                tail,
            },
            None => Self {
                device,
                has_root: false,
                tail: rest,
            },
        }
    }

    /// Whether the device is a UNC root rather than a drive letter.
    #[must_use]
    pub fn is_unc(&self) -> bool {
        is_unc(self.device)
    }

    /// Whether the path is absolute: it has a root separator, or a UNC root
    /// (which is always absolute).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.has_root || self.is_unc()
    }

    /// The device followed by the root separator, as written.
    #[must_use]
    pub fn prefix(&self, path: &'a str) -> &'a str {
        &path[..path.len() - self.tail.len()]
    }
}

/// Whether `device` is a UNC prefix (non-empty and not `<letter>:`).
#[must_use]
pub fn is_unc(device: &str) -> bool {
    !device.is_empty() && device.as_bytes().get(1) != Some(&b':')
}

/// Case-insensitive device comparison.
#[must_use]
pub fn same_device(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// Canonicalize a UNC device: backslashes only, single separators, and a
/// leading `\\`.
///
/// # Examples
///
/// ```
/// use polypath::device::normalize_unc_root;
///
/// assert_eq!(normalize_unc_root("//server//share"), "\\\\server\\share");
/// assert_eq!(normalize_unc_root("\\/host/share"), "\\\\host\\share");
/// ```
#[must_use]
pub fn normalize_unc_root(device: &str) -> String {
    let mut root = String::from("\\\\");
    let mut previous_separator = false;

    for c in device.trim_start_matches(is_separator).chars() {
        if is_separator(c) {
            if !previous_separator {
                root.push('\\');
            }
            previous_separator = true;
        } else {
            root.push(c);
            previous_separator = false;
        }
    }

    root
}

fn drive_len(path: &str) -> Option<usize> {
    match path.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => Some(2),
        _ => None,
    }
}

fn unc_len(path: &str) -> Option<usize> {
    let mut chars = path.char_indices().peekable();

    for _ in 0..2 {
        if !chars.next().is_some_and(|(_, c)| is_separator(c)) {
            return None;
        }
    }

    let mut run = |want_separator: bool| {
        let mut matched = false;
        while chars.next_if(|&(_, c)| is_separator(c) == want_separator).is_some() {
            matched = true;
        }
        matched
    };

    // host, separator run, share: each at least one character
    if !(run(false) && run(true) && run(false)) {
        return None;
    }

    Some(chars.peek().map_or(path.len(), |&(i, _)| i))
}
