// src/constants.rs

/// Default name of the merged output file.
pub const DEFAULT_OUTPUT: &str = "codingame.volatile.py";

/// Default directory scanned for files to merge.
pub const DEFAULT_WORKDIR: &str = "codingame/";

/// Default file-name pattern: every file in the working directory.
pub const DEFAULT_FILE_REGEX: &str = ".*";

/// Default line-exclusion pattern, dropping Python imports of local modules.
pub const DEFAULT_EXCLUDE_LINE_REGEX: &str =
    r"^from codingame\.|^import codingame|^from \.|^import \.";

/// Default comment marker used in banners.
pub const DEFAULT_COMMENT: &str = "#";

/// Default pad character for start banners.
pub const DEFAULT_SEPARATOR_START: &str = "-";

/// Default pad character for end banners.
pub const DEFAULT_SEPARATOR_END: &str = "=";

/// Default banner width, in characters.
pub const DEFAULT_SEPARATOR_LENGTH: usize = 80;

/// Default location of the persisted settings file, relative to the current directory.
pub const SETTINGS_FILE_NAME: &str = "cgmerger.toml";

/// Maximum number of leading bytes inspected by encoding detection.
pub const ENCODING_SAMPLE_SIZE: usize = 32;

/// Written between the last body file and the footer.
pub const FOOTER_SEPARATOR: &str = "\n";
