// src/config/parsing.rs

use crate::errors::{ConfigError, Error, Result};
use regex::Regex;

/// Compiles a configured pattern, naming the setting on failure.
pub(super) fn compile_pattern(pattern: &str, setting: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        setting: setting.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Compiles the line-exclusion pattern. An empty pattern excludes nothing.
pub(super) fn compile_exclude_pattern(pattern: &str, setting: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    compile_pattern(pattern, setting).map(Some)
}

/// Splits a comma-separated order list. Order and duplicates are preserved;
/// surrounding whitespace and empty segments are dropped.
pub(crate) fn split_order(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Takes the first character of a separator setting.
pub(super) fn first_char(value: &str, setting: &str) -> Result<char> {
    value.chars().next().ok_or_else(|| {
        ConfigError::EmptyValue {
            option: setting.to_string(),
        }
        .into()
    })
}
