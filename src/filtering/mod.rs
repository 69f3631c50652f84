// src/filtering/mod.rs

//! Provides standalone functions for file and line filtering logic.
//!
//! File-name filters are used by the discovery stage to decide which files of
//! the working directory take part in the merge; the line filter is used by
//! the merge engine for every emitted line.

mod file_name;
mod line;

pub use file_name::{is_header_or_footer, passes_file_regex};
pub use line::{should_include, LineFilter};
