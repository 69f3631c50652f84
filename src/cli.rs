// src/cli.rs

use crate::config::Operation;
use clap::Parser;

/// Merges the contents of a folder into one output file.
///
/// cgmerger concatenates the files of a working directory into a single file,
/// wrapping each one in comment banners. A header file can be emitted first
/// (put your imports there), a footer file last, and an explicit order forces
/// selected files to the front. Lines matching an exclusion regex (by default,
/// Python imports of local modules) are dropped.
///
/// Settings are read from `cgmerger.toml` when present; flags override them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file location ("codingame.volatile.py" by default). The file must already exist.
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Folder that will be searched for files to merge into the output file ("codingame/" by default).
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<String>,

    /// Force the order of files copied from the workdir (comma-separated file names).
    #[arg(long, value_name = "NAMES")]
    pub order: Option<String>,

    /// File (inside the workdir) copied verbatim to the top of the output.
    /// Put all imports/using/includes here, depending on your language.
    #[arg(long, value_name = "FILE")]
    pub header: Option<String>,

    /// File (inside the workdir) copied to the bottom of the output, after line filtering.
    #[arg(long, value_name = "FILE")]
    pub footer: Option<String>,

    /// Comment marker used in banners ("#" by default).
    #[arg(long, value_name = "TEXT")]
    pub comment: Option<String>,

    /// Character padding the banner that starts each file ("-" by default).
    #[arg(long, value_name = "CHAR")]
    pub separator_start: Option<String>,

    /// Character padding the banner that ends each file ("=" by default).
    #[arg(long, value_name = "CHAR")]
    pub separator_end: Option<String>,

    /// Width banners are padded to (80 by default).
    #[arg(long, value_name = "WIDTH")]
    pub separator_length: Option<usize>,

    /// Regex selecting which files of the workdir are merged (".*" by default).
    #[arg(long, value_name = "REGEX")]
    pub file_regex: Option<String>,

    /// Regex of lines dropped from merged files (Python local imports by default).
    /// An empty value keeps every line.
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub exclude_line_regex: Option<String>,

    /// Do not wrap merged files in start/end banners.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_banners: bool,

    /// Location of the settings file ("cgmerger.toml" by default).
    #[arg(long, value_name = "FILE")]
    pub settings: Option<String>,

    /// Print the current settings and exit without merging.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "write")]
    pub debug: bool,

    /// Write the current settings to the settings file and exit without merging.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub write: bool,
}

impl Cli {
    /// The operation selected by `--debug` / `--write`.
    pub fn operation(&self) -> Operation {
        if self.debug {
            Operation::Debug
        } else if self.write {
            Operation::WriteSettings
        } else {
            Operation::Merge
        }
    }
}
