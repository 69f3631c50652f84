//! Defines the core `MergeConfig` struct and its resolution from layered settings.
//!
//! Settings come from three layers, lowest to highest precedence: built-in
//! defaults, the persisted settings file, and run-time overrides. [`resolve`]
//! merges them, compiles the patterns once, and validates the paths the
//! requested [`Operation`] needs.

use regex::Regex;
use std::path::PathBuf;

use crate::errors::{ConfigError, Result};

pub use builder::ConfigBuilder;
pub use settings::{load_settings, save_settings, OrderSetting, Settings};
mod builder;
mod parsing;
pub mod settings;
mod validation;

use parsing::{compile_exclude_pattern, compile_pattern, first_char};
use validation::validate_merge_paths;

/// What the run is going to do with the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Merge the working directory into the output file.
    #[default]
    Merge,
    /// Print the resolved settings and stop.
    Debug,
    /// Persist the resolved settings and stop.
    WriteSettings,
}

/// The resolved, immutable configuration of one merge run.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// The file the merge is written to. Must exist before a merge.
    pub output_path: PathBuf,
    /// The directory whose files are merged (flat, not recursive).
    pub work_dir: PathBuf,
    /// Files whose name does not match are left out of the merge.
    pub file_include_pattern: Regex,
    /// Lines matching this are dropped from body files and the footer.
    pub line_exclude_pattern: Option<Regex>,
    /// Name of the file emitted first, verbatim, inside `work_dir`.
    pub header_file: Option<String>,
    /// Name of the file emitted last, inside `work_dir`.
    pub footer_file: Option<String>,
    /// Body files emitted first, in this order. May contain duplicates.
    pub explicit_order: Vec<String>,
    /// Comment marker starting each banner.
    pub comment: String,
    /// Pad character of start banners.
    pub start_pad: char,
    /// Pad character of end banners.
    pub end_pad: char,
    /// Width banners are padded to, in characters.
    pub banner_width: usize,
    /// Whether body files are wrapped in banners.
    pub banners: bool,
}

/// Fetches a setting every layer stack must provide.
fn required<'a>(value: &'a Option<String>, option: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(ConfigError::EmptyValue {
            option: option.to_string(),
        }
        .into()),
        None => Err(ConfigError::MissingValue {
            option: option.to_string(),
        }
        .into()),
    }
}

/// Resolves the layered settings into a [`MergeConfig`].
///
/// `persisted` and `overrides` are put on top of `defaults` in that order;
/// any field they set wins. Patterns are compiled for every operation. Paths
/// are only checked for [`Operation::Merge`]: the output file must exist, the
/// working directory must be a directory, and the header and footer must be
/// files inside it.
///
/// # Errors
/// `InvalidPattern` for a pattern that does not compile, `Config` for empty
/// or missing values, `FileNotFound` / `DirectoryNotFound` for missing paths.
///
/// # Examples
///
/// ```
/// use cgmerger::config::{resolve, Operation, Settings};
///
/// let overrides = Settings {
///     order: Some(cgmerger::config::OrderSetting::Joined("b.py,a.py".to_string())),
///     ..Default::default()
/// };
/// let config = resolve(Settings::defaults(), None, overrides, Operation::Debug).unwrap();
/// assert_eq!(config.explicit_order, vec!["b.py", "a.py"]);
/// assert_eq!(config.banner_width, 80);
/// ```
pub fn resolve(
    defaults: Settings,
    persisted: Option<Settings>,
    overrides: Settings,
    operation: Operation,
) -> Result<MergeConfig> {
    let layered = match persisted {
        Some(persisted) => defaults.layer(persisted),
        None => defaults,
    }
    .layer(overrides);
    MergeConfig::from_settings(&layered, operation)
}

impl MergeConfig {
    /// Builds the configuration from an already layered [`Settings`].
    pub fn from_settings(settings: &Settings, operation: Operation) -> Result<Self> {
        let output_path = PathBuf::from(required(&settings.output, "output")?);
        let work_dir = PathBuf::from(required(&settings.workdir, "workdir")?);

        let file_regex = settings.file_regex.as_deref().unwrap_or("");
        let file_include_pattern = compile_pattern(file_regex, "file_regex")?;
        let line_exclude_pattern = compile_exclude_pattern(
            settings.exclude_line_regex.as_deref().unwrap_or(""),
            "exclude_line_regex",
        )?;

        let start_pad = first_char(
            required(&settings.separator_start, "separator_start")?,
            "separator_start",
        )?;
        let end_pad = first_char(
            required(&settings.separator_end, "separator_end")?,
            "separator_end",
        )?;

        let header_file = settings.header.clone().filter(|h| !h.is_empty());
        let footer_file = settings.footer.clone().filter(|f| !f.is_empty());

        let config = MergeConfig {
            output_path,
            work_dir,
            file_include_pattern,
            line_exclude_pattern,
            header_file,
            footer_file,
            explicit_order: settings
                .order
                .as_ref()
                .map(OrderSetting::names)
                .unwrap_or_default(),
            comment: settings.comment.clone().unwrap_or_default(),
            start_pad,
            end_pad,
            banner_width: settings.separator_length.unwrap_or_default(),
            banners: settings.banners.unwrap_or(true),
        };

        if operation == Operation::Merge {
            validate_merge_paths(
                &config.output_path,
                &config.work_dir,
                config.header_file.as_deref(),
                config.footer_file.as_deref(),
            )?;
        }

        log::debug!("Resolved configuration for {:?}: {:?}", operation, config);
        Ok(config)
    }
}
