// src/filtering/file_name.rs

use crate::config::MergeConfig;

/// Checks if a file name passes the include pattern of `MergeConfig`.
///
/// The pattern is searched anywhere in the bare file name, so `\.py$` selects
/// Python files and `.*` selects everything.
pub fn passes_file_regex(file_name: &str, config: &MergeConfig) -> bool {
    config.file_include_pattern.is_match(file_name)
}

/// Checks if a file name is the configured header or footer.
pub fn is_header_or_footer(file_name: &str, config: &MergeConfig) -> bool {
    config.header_file.as_deref() == Some(file_name)
        || config.footer_file.as_deref() == Some(file_name)
}
