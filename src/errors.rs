//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur while resolving a configuration, building a merge plan, or writing
//! the merged output. Validation errors are always raised before the output
//! file is opened.

use std::path::Path;
use thiserror::Error;

/// A `Result` alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors related to configuration values that are present but unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting that must not be empty was empty.
    #[error("'{option}' must not be empty")]
    EmptyValue {
        /// The name of the setting.
        option: String,
    },
    /// A required setting was absent from every layer.
    #[error("'{option}' is not set")]
    MissingValue {
        /// The name of the setting.
        option: String,
    },
}

/// Errors used throughout `cgmerger`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Validation Errors ---
    /// A file required by the run is missing: the output file, the header or
    /// footer, or a file named in the explicit order.
    #[error("No \"{path}\" file present in {location}")]
    FileNotFound {
        /// The missing file, as configured.
        path: String,
        /// Where it was looked up.
        location: String,
    },

    /// The working directory is missing or is not a directory.
    #[error("No \"{path}\" directory present")]
    DirectoryNotFound {
        /// The configured working directory.
        path: String,
    },

    /// A file-name or line pattern failed to compile.
    #[error("Invalid {setting} regex: '{pattern}'")]
    InvalidPattern {
        /// The setting holding the pattern (e.g. `file_regex`).
        setting: String,
        /// The pattern as configured.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// Generic error related to invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The persisted settings file could not be read, parsed, or written.
    #[error("Settings file '{path}': {reason}")]
    Settings {
        /// The settings file path.
        path: String,
        /// What went wrong.
        reason: String,
    },

    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, metadata, listing).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error while writing to the merged output.
    #[error("Failed to write merged output: {0}")]
    Output(#[source] std::io::Error),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

impl From<std::io::Error> for Error {
    /// Unqualified I/O errors only arise from the output sink; reads go through
    /// [`io_error_with_path`].
    fn from(source: std::io::Error) -> Self {
        Error::Output(source)
    }
}
