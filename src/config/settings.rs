// src/config/settings.rs

//! The uncompiled, layered view of the configuration and its persistence.
//!
//! A [`Settings`] value is one layer: built-in defaults, the persisted settings
//! file, or run-time overrides. Layers are combined with [`Settings::layer`]
//! before being resolved into a `MergeConfig`.

use crate::constants::{
    DEFAULT_COMMENT, DEFAULT_EXCLUDE_LINE_REGEX, DEFAULT_FILE_REGEX, DEFAULT_OUTPUT,
    DEFAULT_SEPARATOR_END, DEFAULT_SEPARATOR_LENGTH, DEFAULT_SEPARATOR_START, DEFAULT_WORKDIR,
};
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// An explicit file order, either as a comma-separated string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderSetting {
    /// `"a.py,b.py"`, as given on the command line.
    Joined(String),
    /// `["a.py", "b.py"]`, as allowed in the settings file.
    List(Vec<String>),
}

impl OrderSetting {
    /// The file names in order. Duplicates are kept.
    pub fn names(&self) -> Vec<String> {
        match self {
            OrderSetting::Joined(joined) => super::parsing::split_order(joined),
            OrderSetting::List(names) => names
                .iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }
}

impl fmt::Display for OrderSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSetting::Joined(joined) => f.write_str(joined),
            OrderSetting::List(names) => f.write_str(&names.join(",")),
        }
    }
}

/// One configuration layer. Every field is optional; `None` means "not set in
/// this layer".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_line_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banners: Option<bool>,
}

/// On-disk shape of the settings file: all keys live under `[merger]`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    merger: Settings,
}

impl Settings {
    /// The built-in defaults. Header, footer and order are unset.
    pub fn defaults() -> Self {
        Self {
            output: Some(DEFAULT_OUTPUT.to_string()),
            workdir: Some(DEFAULT_WORKDIR.to_string()),
            order: None,
            header: None,
            footer: None,
            comment: Some(DEFAULT_COMMENT.to_string()),
            separator_start: Some(DEFAULT_SEPARATOR_START.to_string()),
            separator_end: Some(DEFAULT_SEPARATOR_END.to_string()),
            separator_length: Some(DEFAULT_SEPARATOR_LENGTH),
            file_regex: Some(DEFAULT_FILE_REGEX.to_string()),
            exclude_line_regex: Some(DEFAULT_EXCLUDE_LINE_REGEX.to_string()),
            banners: Some(true),
        }
    }

    /// Puts `upper` on top of `self`: every field set in `upper` wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use cgmerger::config::Settings;
    ///
    /// let overrides = Settings {
    ///     output: Some("solution.py".to_string()),
    ///     ..Default::default()
    /// };
    /// let merged = Settings::defaults().layer(overrides);
    /// assert_eq!(merged.output.as_deref(), Some("solution.py"));
    /// assert_eq!(merged.comment.as_deref(), Some("#"));
    /// ```
    pub fn layer(self, upper: Settings) -> Settings {
        Settings {
            output: upper.output.or(self.output),
            workdir: upper.workdir.or(self.workdir),
            order: upper.order.or(self.order),
            header: upper.header.or(self.header),
            footer: upper.footer.or(self.footer),
            comment: upper.comment.or(self.comment),
            separator_start: upper.separator_start.or(self.separator_start),
            separator_end: upper.separator_end.or(self.separator_end),
            separator_length: upper.separator_length.or(self.separator_length),
            file_regex: upper.file_regex.or(self.file_regex),
            exclude_line_regex: upper.exclude_line_regex.or(self.exclude_line_regex),
            banners: upper.banners.or(self.banners),
        }
    }
}

/// Prints one `key: value` line per setting, `none` for unset ones.
impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| "none".to_string(), |v| v.to_string())
        }

        writeln!(f, "output: {}", show(&self.output))?;
        writeln!(f, "workdir: {}", show(&self.workdir))?;
        writeln!(f, "order: {}", show(&self.order))?;
        writeln!(f, "file_regex: {}", show(&self.file_regex))?;
        writeln!(f, "exclude_line_regex: {}", show(&self.exclude_line_regex))?;
        writeln!(f, "header: {}", show(&self.header))?;
        writeln!(f, "footer: {}", show(&self.footer))?;
        writeln!(f, "comment: {}", show(&self.comment))?;
        writeln!(f, "separator_start: {}", show(&self.separator_start))?;
        writeln!(f, "separator_end: {}", show(&self.separator_end))?;
        writeln!(f, "separator_length: {}", show(&self.separator_length))?;
        writeln!(f, "banners: {}", show(&self.banners))
    }
}

/// Loads the persisted settings layer.
///
/// Returns `Ok(None)` when no settings file exists at `path`.
///
/// # Errors
/// Returns `Error::Io` if the file exists but cannot be read, and
/// `Error::Settings` if it is not valid settings TOML.
pub fn load_settings(path: &Path) -> Result<Option<Settings>> {
    if !path.is_file() {
        debug!("No settings file at {}", path.display());
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let parsed: SettingsFile = toml::from_str(&content).map_err(|e| Error::Settings {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!("Loaded settings from {}: {:?}", path.display(), parsed.merger);
    Ok(Some(parsed.merger))
}

/// Writes `settings` to `path` under a `[merger]` table, replacing any existing file.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let file = SettingsFile {
        merger: settings.clone(),
    };
    let content = toml::to_string_pretty(&file).map_err(|e| Error::Settings {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    fs::write(path, content).map_err(|e| io_error_with_path(e, path))?;
    debug!("Wrote settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_layer_prefers_upper_fields() {
        let persisted = Settings {
            workdir: Some("src/".to_string()),
            comment: Some("//".to_string()),
            ..Default::default()
        };
        let overrides = Settings {
            comment: Some(";".to_string()),
            ..Default::default()
        };

        let merged = Settings::defaults().layer(persisted).layer(overrides);
        assert_eq!(merged.workdir.as_deref(), Some("src/"));
        assert_eq!(merged.comment.as_deref(), Some(";"));
        assert_eq!(merged.output.as_deref(), Some(DEFAULT_OUTPUT));
        assert_eq!(merged.separator_length, Some(80));
    }

    #[test]
    fn test_order_setting_names() {
        let joined = OrderSetting::Joined("b.py,a.py,b.py".to_string());
        assert_eq!(joined.names(), vec!["b.py", "a.py", "b.py"]);

        let list = OrderSetting::List(vec!["x.py".to_string(), " ".to_string()]);
        assert_eq!(list.names(), vec!["x.py"]);
    }

    #[test]
    fn test_load_missing_file_is_none() -> anyhow::Result<()> {
        let temp = tempdir()?;
        assert!(load_settings(&temp.path().join("cgmerger.toml"))?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_then_load_keeps_values() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("cgmerger.toml");
        let settings = Settings::defaults().layer(Settings {
            order: Some(OrderSetting::Joined("main.py,utils.py".to_string())),
            header: Some("head.py".to_string()),
            ..Default::default()
        });

        save_settings(&path, &settings)?;
        let written = fs::read_to_string(&path)?;
        assert!(written.contains("[merger]"));
        assert!(written.contains("order = \"main.py,utils.py\""));

        let loaded = load_settings(&path)?.expect("settings file should exist");
        assert_eq!(loaded, settings);
        Ok(())
    }

    #[test]
    fn test_load_accepts_order_list() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("cgmerger.toml");
        fs::write(&path, "[merger]\norder = [\"b.py\", \"a.py\"]\nseparator_length = 40\n")?;

        let loaded = load_settings(&path)?.expect("settings file should exist");
        assert_eq!(
            loaded.order.map(|o| o.names()),
            Some(vec!["b.py".to_string(), "a.py".to_string()])
        );
        assert_eq!(loaded.separator_length, Some(40));
        assert!(loaded.output.is_none());
        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_keys() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("cgmerger.toml");
        fs::write(&path, "[merger]\noutptu = \"typo.py\"\n")?;

        let result = load_settings(&path);
        assert!(matches!(result, Err(Error::Settings { .. })));
        Ok(())
    }

    #[test]
    fn test_display_lists_unset_as_none() {
        let dump = Settings::defaults().to_string();
        assert!(dump.contains("output: codingame.volatile.py\n"));
        assert!(dump.contains("header: none\n"));
        assert!(dump.contains("separator_length: 80\n"));
    }
}
