//! The `cgmerger` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `cgmerger` library.
//!
//! # Example
//!
//! ```
//! use cgmerger::prelude::*;
//! # fn main() -> Result<()> {
//!
//! // Now you can use ConfigBuilder, select_files, merge, etc. without full paths.
//! let config = ConfigBuilder::new()
//!     .work_dir(".")
//!     .file_regex(r"\.toml$")
//!     .operation(Operation::Debug)
//!     .build()?;
//! let plan = select_files(&config.work_dir, &config)?;
//! let mut merged = Vec::new();
//! let report = merge(&plan, &config, &mut merged)?;
//! assert_eq!(report.files_merged, plan.body().count());
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{
    load_settings, save_settings, ConfigBuilder, MergeConfig, Operation, OrderSetting, Settings,
};
pub use crate::core_types::{BodyGroup, FileEntry, FileRole, MergePlan, MergeReport};
pub use crate::discovery::{build_plan, list_work_dir, select_files};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_header_or_footer, passes_file_regex, should_include, LineFilter};
pub use crate::output::banner::{format_end_banner, format_start_banner};
pub use crate::output::{merge, merge_with_detector};
pub use crate::processing::encoding::{
    detect_encoding, ChardetDetector, EncodingDetector, FixedDetector,
};
pub use crate::processing::{read_decoded, DecodedFile};
pub use crate::run;
