//! Defines core data structures used throughout the merge pipeline.
//!
//! `FileEntry` and `MergePlan` describe what will be emitted and in which
//! order; `MergeReport` describes what was emitted.

use std::path::{Path, PathBuf};

/// The group a body file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyGroup {
    /// Named in the explicit order list.
    Ordered,
    /// Not named in the explicit order list; emitted in directory-listing order.
    Unordered,
}

/// The role a file plays in the merged output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Emitted first, verbatim.
    Header,
    /// Emitted last, line-filtered but without banners.
    Footer,
    /// Wrapped in banners and line-filtered.
    Body(BodyGroup),
}

/// A file found directly inside the working directory.
///
/// # Examples
///
/// ```
/// use cgmerger::core_types::{BodyGroup, FileEntry, FileRole};
/// use std::path::Path;
///
/// let entry = FileEntry::new(Path::new("codingame"), "solver.py", FileRole::Body(BodyGroup::Ordered));
/// assert_eq!(entry.name, "solver.py");
/// assert!(entry.path.ends_with("solver.py"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The bare file name, as used in banners and order lists.
    pub name: String,
    /// The path of the file, `work_dir` joined with `name`.
    pub path: PathBuf,
    /// How the file is emitted.
    pub role: FileRole,
}

impl FileEntry {
    pub fn new(work_dir: &Path, name: &str, role: FileRole) -> Self {
        Self {
            name: name.to_string(),
            path: work_dir.join(name),
            role,
        }
    }
}

/// The concrete emission sequence for one run.
///
/// Derived once from a `MergeConfig` and a snapshot of the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    pub header: Option<FileEntry>,
    /// Body files named in the explicit order, in that order (duplicates kept).
    pub ordered: Vec<FileEntry>,
    /// Remaining body files, in directory-listing order.
    pub unordered: Vec<FileEntry>,
    pub footer: Option<FileEntry>,
}

impl MergePlan {
    /// Body files in emission order: the ordered group, then the unordered group.
    pub fn body(&self) -> impl Iterator<Item = &FileEntry> {
        self.ordered.iter().chain(self.unordered.iter())
    }

    /// Every file in emission order, header and footer included.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.header
            .iter()
            .chain(self.body())
            .chain(self.footer.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// Counts gathered while merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of body sections written (duplicates counted).
    pub files_merged: usize,
    /// Lines written from the header, body files, and footer.
    pub lines_written: usize,
    /// Lines dropped by the exclude pattern.
    pub lines_excluded: usize,
    pub header_written: bool,
    pub footer_written: bool,
}
