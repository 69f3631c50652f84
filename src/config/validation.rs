// src/config/validation.rs

use crate::errors::{Error, Result};
use std::env;
use std::path::Path;

/// Describes where a relative path is looked up, for error messages.
fn current_dir_display() -> String {
    env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".".to_string())
}

/// Checks the paths a merge needs before anything is written.
///
/// The output file must already exist, the working directory must be a
/// directory, and the header and footer (if set) must be files inside it.
pub(super) fn validate_merge_paths(
    output_path: &Path,
    work_dir: &Path,
    header_file: Option<&str>,
    footer_file: Option<&str>,
) -> Result<()> {
    if !output_path.exists() {
        return Err(Error::FileNotFound {
            path: output_path.display().to_string(),
            location: current_dir_display(),
        });
    }

    if !work_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: work_dir.display().to_string(),
        });
    }

    for name in header_file.into_iter().chain(footer_file) {
        let candidate = work_dir.join(name);
        if !candidate.is_file() {
            return Err(Error::FileNotFound {
                path: candidate.display().to_string(),
                location: current_dir_display(),
            });
        }
    }

    Ok(())
}
