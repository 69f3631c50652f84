//! `cgmerger` is a library and command-line tool for merging the files of a
//! directory into a single output file.
//!
//! It is designed for single-file submissions built from a multi-file
//! project: an optional header file goes first, body files are wrapped in
//! comment banners, an optional footer goes last, and lines matching an
//! exclusion pattern (local imports, by default) are dropped on the way.
//!
//! As a library, it provides a three-stage pipeline:
//! 1.  **Resolve**: Layer defaults, persisted settings, and overrides into a
//!     validated [`MergeConfig`].
//! 2.  **Select**: List the working directory and build a [`MergePlan`].
//! 3.  **Merge**: Decode each planned file and write it to a sink.
//!
//! # Example: Library Usage
//!
//! ```
//! use cgmerger::{merge, select_files, ConfigBuilder, Operation};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a working directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("board.py"), "from .util import clamp\nBOARD = []\n").unwrap();
//! fs::write(temp_dir.path().join("main.py"), "print(BOARD)\n").unwrap();
//!
//! // 2. Resolve a configuration. `Debug` skips the output-file check.
//! let config = ConfigBuilder::new()
//!     .work_dir(temp_dir.path().to_str().unwrap())
//!     .order("board.py,main.py")
//!     .banners(false)
//!     .operation(Operation::Debug)
//!     .build()
//!     .unwrap();
//!
//! // 3. Select the files and merge them into a buffer.
//! let plan = select_files(&config.work_dir, &config).unwrap();
//! let mut output = Vec::new();
//! let report = merge(&plan, &config, &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "BOARD = []\nprint(BOARD)\n");
//! assert_eq!(report.lines_excluded, 1);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{ConfigBuilder, MergeConfig, Operation, Settings};
pub use core_types::{FileEntry, MergePlan, MergeReport};
pub use discovery::select_files;
pub use output::{merge, merge_with_detector};

use crate::errors::Result;
use log::info;

/// Executes a complete merge: select files, open the output, merge, flush.
///
/// The plan is built before the output file is opened, so a missing order
/// entry, header, or footer leaves the output untouched. A failure while
/// merging leaves a partially written output.
///
/// # Errors
/// Propagates `Error::FileNotFound` and `Error::Io` from file selection,
/// `Error::Io` if the output cannot be created, and any error of the merge.
pub fn run(config: &MergeConfig) -> Result<MergeReport> {
    let plan = select_files(&config.work_dir, config)?;

    let mut writer = output::writer::open_output(&config.output_path)?;
    let report = merge(&plan, config, &mut writer)?;
    output::writer::finalize_output(writer)?;

    info!(
        "Merged {} files into {} ({} lines written, {} excluded)",
        report.files_merged,
        config.output_path.display(),
        report.lines_written,
        report.lines_excluded
    );
    Ok(report)
}
