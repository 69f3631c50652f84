// src/output/banner.rs

//! Builds the comment lines that wrap each body file in the merged output.

use crate::config::MergeConfig;

/// Appends `pad` to `text` until it is `width` characters long.
///
/// Text that is already at least `width` characters long is returned as is.
fn pad_to_width(mut text: String, pad: char, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        text.extend(std::iter::repeat(pad).take(width - len));
    }
    text
}

/// Formats the banner written before a body file's content.
///
/// # Examples
/// ```
/// use cgmerger::config::{ConfigBuilder, Operation};
/// use cgmerger::output::banner::format_start_banner;
///
/// let config = ConfigBuilder::new()
///     .separator_length(20)
///     .operation(Operation::Debug)
///     .build()
///     .unwrap();
/// assert_eq!(format_start_banner("a.py", &config), "# file \"a.py\" ------");
/// ```
pub fn format_start_banner(file_name: &str, config: &MergeConfig) -> String {
    pad_to_width(
        format!("{} file \"{}\" ", config.comment, file_name),
        config.start_pad,
        config.banner_width,
    )
}

/// Formats the banner written after a body file's content.
pub fn format_end_banner(file_name: &str, config: &MergeConfig) -> String {
    pad_to_width(
        format!("{} end of file \"{}\" ", config.comment, file_name),
        config.end_pad,
        config.banner_width,
    )
}
