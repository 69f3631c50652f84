// src/filtering/line.rs

use regex::Regex;

/// Strips a trailing `\n` or `\r\n`.
fn without_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Decides whether a line is kept in the merged output.
///
/// With `ignore_pattern` set, every line is kept. Otherwise the line is kept
/// unless `exclude_pattern` matches anywhere in it. The pattern sees the line
/// without its terminator.
///
/// # Examples
/// ```
/// use cgmerger::filtering::should_include;
/// use regex::Regex;
///
/// let imports = Regex::new("^import").unwrap();
/// assert!(!should_include("import sys\n", Some(&imports), false));
/// assert!(should_include("x = 1\n", Some(&imports), false));
/// assert!(should_include("import sys\n", Some(&imports), true));
/// assert!(should_include("import sys\n", None, false));
/// ```
pub fn should_include(line: &str, exclude_pattern: Option<&Regex>, ignore_pattern: bool) -> bool {
    if ignore_pattern {
        return true;
    }
    match exclude_pattern {
        Some(pattern) => !pattern.is_match(without_terminator(line)),
        None => true,
    }
}

/// The per-file line filter used by the merge engine.
#[derive(Debug, Clone, Copy)]
pub struct LineFilter<'a> {
    exclude_pattern: Option<&'a Regex>,
    ignore_pattern: bool,
}

impl<'a> LineFilter<'a> {
    /// Keeps every line (header passthrough).
    pub fn passthrough() -> Self {
        Self {
            exclude_pattern: None,
            ignore_pattern: true,
        }
    }

    /// Drops lines matching `exclude_pattern`, if any.
    pub fn excluding(exclude_pattern: Option<&'a Regex>) -> Self {
        Self {
            exclude_pattern,
            ignore_pattern: false,
        }
    }

    pub fn should_include(&self, line: &str) -> bool {
        should_include(line, self.exclude_pattern, self.ignore_pattern)
    }
}
