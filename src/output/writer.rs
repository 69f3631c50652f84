// src/output/writer.rs

//! Manages the merged output file.
//!
//! The output is opened only after the merge plan has been built, truncated,
//! buffered, and flushed explicitly once the merge engine is done. Dropping
//! the writer on an error path still closes the file.

use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates (or truncates) the output file and wraps it in a `BufWriter`.
///
/// # Errors
/// Returns `Error::Io` naming `path` if the file cannot be created.
pub fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    debug!("Opened output file {}", path.display());
    Ok(BufWriter::new(file))
}

/// Flushes the buffered output.
///
/// # Errors
/// Returns `Error::Output` if the pending bytes cannot be written.
pub fn finalize_output(mut writer: impl Write) -> Result<()> {
    writer.flush().map_err(Error::Output)
}
