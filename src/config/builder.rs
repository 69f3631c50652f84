// src/config/builder.rs

use super::{resolve, MergeConfig, Operation, OrderSetting, Settings};
use crate::cli::Cli;
use crate::errors::Result;

/// A builder for creating a [`MergeConfig`] programmatically.
///
/// Every setter fills the run-time override layer, which takes precedence
/// over the persisted settings and the built-in defaults.
///
/// # Examples
///
/// ```
/// use cgmerger::config::{ConfigBuilder, Operation};
///
/// let config = ConfigBuilder::new()
///     .output("solution.py")
///     .work_dir("src/")
///     .order("main.py,board.py")
///     .comment("//")
///     .operation(Operation::Debug)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.explicit_order, vec!["main.py", "board.py"]);
/// assert_eq!(config.comment, "//");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    overrides: Settings,
    persisted: Option<Settings>,
    operation: Operation,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides, no persisted layer, and the `Merge` operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps parsed command-line flags onto the override layer.
    ///
    /// Only flags that were given become overrides. `--debug` and `--write`
    /// select the operation.
    pub fn from_cli(cli: Cli) -> Self {
        let operation = cli.operation();
        let overrides = Settings {
            output: cli.output,
            workdir: cli.workdir,
            order: cli.order.map(OrderSetting::Joined),
            header: cli.header,
            footer: cli.footer,
            comment: cli.comment,
            separator_start: cli.separator_start,
            separator_end: cli.separator_end,
            separator_length: cli.separator_length,
            file_regex: cli.file_regex,
            exclude_line_regex: cli.exclude_line_regex,
            banners: cli.no_banners.then_some(false),
        };
        Self {
            overrides,
            persisted: None,
            operation,
        }
    }

    pub fn output(mut self, path: &str) -> Self {
        self.overrides.output = Some(path.to_string());
        self
    }

    pub fn work_dir(mut self, path: &str) -> Self {
        self.overrides.workdir = Some(path.to_string());
        self
    }

    /// Sets the explicit order as a comma-separated list of file names.
    pub fn order(mut self, joined: &str) -> Self {
        self.overrides.order = Some(OrderSetting::Joined(joined.to_string()));
        self
    }

    /// Sets the explicit order from individual file names.
    pub fn order_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.order = Some(OrderSetting::List(
            names.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn header(mut self, name: &str) -> Self {
        self.overrides.header = Some(name.to_string());
        self
    }

    pub fn footer(mut self, name: &str) -> Self {
        self.overrides.footer = Some(name.to_string());
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.overrides.comment = Some(comment.to_string());
        self
    }

    pub fn separator_start(mut self, pad: &str) -> Self {
        self.overrides.separator_start = Some(pad.to_string());
        self
    }

    pub fn separator_end(mut self, pad: &str) -> Self {
        self.overrides.separator_end = Some(pad.to_string());
        self
    }

    pub fn separator_length(mut self, width: usize) -> Self {
        self.overrides.separator_length = Some(width);
        self
    }

    pub fn file_regex(mut self, pattern: &str) -> Self {
        self.overrides.file_regex = Some(pattern.to_string());
        self
    }

    pub fn exclude_line_regex(mut self, pattern: &str) -> Self {
        self.overrides.exclude_line_regex = Some(pattern.to_string());
        self
    }

    pub fn banners(mut self, enabled: bool) -> Self {
        self.overrides.banners = Some(enabled);
        self
    }

    /// Sets the layer loaded from the settings file, below the overrides.
    pub fn persisted(mut self, settings: Option<Settings>) -> Self {
        self.persisted = settings;
        self
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn get_operation(&self) -> Operation {
        self.operation
    }

    /// The effective settings: defaults, then the persisted layer, then the overrides.
    pub fn layered(&self) -> Settings {
        let base = match &self.persisted {
            Some(persisted) => Settings::defaults().layer(persisted.clone()),
            None => Settings::defaults(),
        };
        base.layer(self.overrides.clone())
    }

    /// Resolves the layers into a validated [`MergeConfig`].
    ///
    /// # Errors
    /// See [`resolve`].
    pub fn build(&self) -> Result<MergeConfig> {
        resolve(
            Settings::defaults(),
            self.persisted.clone(),
            self.overrides.clone(),
            self.operation,
        )
    }
}
