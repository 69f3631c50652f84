//! Discovers the files of the working directory and builds the merge plan.
//!
//! The directory is listed once; the resulting snapshot is split into the
//! header, the ordered group, the unordered group, and the footer.

use crate::config::MergeConfig;
use crate::core_types::{BodyGroup, FileEntry, FileRole, MergePlan};
use crate::errors::{Error, Result};
use crate::filtering::{is_header_or_footer, passes_file_regex};
use log::debug;
use std::collections::HashSet;
use std::path::Path;

mod listing;

pub use listing::list_work_dir;

/// Lists `work_dir` and builds the [`MergePlan`] for `config`.
///
/// # Errors
/// Returns `Error::Io` if the directory cannot be listed, and
/// `Error::FileNotFound` if a name in the explicit order (or the header or
/// footer) is not a file of `work_dir`.
///
/// # Examples
///
/// ```
/// use cgmerger::config::{ConfigBuilder, Operation};
/// use cgmerger::discovery::select_files;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::write(temp.path().join("a.py"), "A = 1\n").unwrap();
/// fs::write(temp.path().join("b.py"), "B = 2\n").unwrap();
///
/// let config = ConfigBuilder::new()
///     .work_dir(temp.path().to_str().unwrap())
///     .order("b.py")
///     .operation(Operation::Debug)
///     .build()
///     .unwrap();
///
/// let plan = select_files(&config.work_dir, &config).unwrap();
/// let names: Vec<&str> = plan.body().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, vec!["b.py", "a.py"]);
/// ```
pub fn select_files(work_dir: &Path, config: &MergeConfig) -> Result<MergePlan> {
    let listing = list_work_dir(work_dir)?;
    build_plan(work_dir, &listing, config)
}

/// Builds the [`MergePlan`] from a snapshot of the directory listing.
///
/// `listing` holds the names of the regular files of `work_dir`, in
/// directory-listing order. The unordered group keeps that order. When the
/// output file lives in `work_dir` it is never part of the body.
pub fn build_plan(
    work_dir: &Path,
    listing: &[String],
    config: &MergeConfig,
) -> Result<MergePlan> {
    let present: HashSet<&str> = listing.iter().map(String::as_str).collect();
    let missing = |name: &str| Error::FileNotFound {
        path: name.to_string(),
        location: work_dir.display().to_string(),
    };

    let pick = |name: &Option<String>, role: FileRole| -> Result<Option<FileEntry>> {
        match name.as_deref() {
            Some(name) if present.contains(name) => {
                Ok(Some(FileEntry::new(work_dir, name, role)))
            }
            Some(name) => Err(missing(name)),
            None => Ok(None),
        }
    };
    let header = pick(&config.header_file, FileRole::Header)?;
    let footer = pick(&config.footer_file, FileRole::Footer)?;

    // Every order entry must exist, even one the include pattern later drops.
    if let Some(absent) = config
        .explicit_order
        .iter()
        .find(|name| !present.contains(name.as_str()))
    {
        return Err(missing(absent.as_str()));
    }

    let output_name = output_name_in(work_dir, &config.output_path);
    if let Some(name) = output_name {
        debug!("Skipping '{}': it is the output file", name);
    }
    let is_body = |name: &str| {
        Some(name) != output_name
            && !is_header_or_footer(name, config)
            && passes_file_regex(name, config)
    };

    let ordered: Vec<FileEntry> = config
        .explicit_order
        .iter()
        .filter(|name| is_body(name.as_str()))
        .map(|name| FileEntry::new(work_dir, name, FileRole::Body(BodyGroup::Ordered)))
        .collect();

    let order_set: HashSet<&str> = config.explicit_order.iter().map(String::as_str).collect();
    let unordered: Vec<FileEntry> = listing
        .iter()
        .filter(|name| !order_set.contains(name.as_str()) && is_body(name.as_str()))
        .map(|name| FileEntry::new(work_dir, name, FileRole::Body(BodyGroup::Unordered)))
        .collect();

    for skipped in listing
        .iter()
        .filter(|name| !is_header_or_footer(name, config) && !passes_file_regex(name, config))
    {
        debug!("Skipping '{}': does not match the file regex", skipped);
    }

    debug!(
        "Merge plan: header={:?}, ordered={}, unordered={}, footer={:?}",
        header.as_ref().map(|e| &e.name),
        ordered.len(),
        unordered.len(),
        footer.as_ref().map(|e| &e.name)
    );

    Ok(MergePlan {
        header,
        ordered,
        unordered,
        footer,
    })
}

/// The file name of `output_path` if the output lives directly in `work_dir`.
fn output_name_in<'a>(work_dir: &Path, output_path: &'a Path) -> Option<&'a str> {
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let same_dir = match (parent.canonicalize(), work_dir.canonicalize()) {
        (Ok(parent), Ok(work_dir)) => parent == work_dir,
        _ => parent == work_dir,
    };
    if same_dir {
        output_path.file_name()?.to_str()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, Operation};
    use std::path::PathBuf;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn body_names(plan: &MergePlan) -> Vec<&str> {
        plan.body().map(|e| e.name.as_str()).collect()
    }

    fn debug_config(builder: ConfigBuilder) -> MergeConfig {
        builder.operation(Operation::Debug).build().unwrap()
    }

    #[test]
    fn test_ordered_before_unordered_in_listing_order() -> Result<()> {
        let config = debug_config(ConfigBuilder::new().order("c.py,a.py"));
        let listing = names(&["a.py", "z.py", "b.py", "c.py"]);

        let plan = build_plan(Path::new("wd"), &listing, &config)?;
        assert_eq!(body_names(&plan), vec!["c.py", "a.py", "z.py", "b.py"]);
        assert!(plan
            .ordered
            .iter()
            .all(|e| e.role == FileRole::Body(BodyGroup::Ordered)));
        assert!(plan
            .unordered
            .iter()
            .all(|e| e.role == FileRole::Body(BodyGroup::Unordered)));
        assert_eq!(plan.ordered[0].path, PathBuf::from("wd").join("c.py"));
        Ok(())
    }

    #[test]
    fn test_duplicates_in_order_are_emitted_twice() -> Result<()> {
        let config = debug_config(ConfigBuilder::new().order("util.py,main.py,util.py"));
        let listing = names(&["main.py", "util.py", "other.py"]);

        let plan = build_plan(Path::new("wd"), &listing, &config)?;
        assert_eq!(
            body_names(&plan),
            vec!["util.py", "main.py", "util.py", "other.py"]
        );
        Ok(())
    }

    #[test]
    fn test_header_and_footer_never_in_body() -> Result<()> {
        let config = debug_config(
            ConfigBuilder::new()
                .header("head.py")
                .footer("foot.py")
                .order("head.py,main.py,foot.py"),
        );
        let listing = names(&["foot.py", "main.py", "head.py", "lib.py"]);

        let plan = build_plan(Path::new("wd"), &listing, &config)?;
        assert_eq!(plan.header.as_ref().map(|e| e.name.as_str()), Some("head.py"));
        assert_eq!(plan.footer.as_ref().map(|e| e.name.as_str()), Some("foot.py"));
        assert_eq!(body_names(&plan), vec!["main.py", "lib.py"]);
        Ok(())
    }

    #[test]
    fn test_file_regex_drops_non_matching_files() -> Result<()> {
        let config = debug_config(
            ConfigBuilder::new()
                .file_regex(r"\.py$")
                .header("header.txt")
                .order("notes.md,main.py"),
        );
        let listing = names(&["header.txt", "main.py", "notes.md", "README", "lib.py"]);

        let plan = build_plan(Path::new("wd"), &listing, &config)?;
        // The header is emitted even though it does not match the file regex.
        assert!(plan.header.is_some());
        assert_eq!(body_names(&plan), vec!["main.py", "lib.py"]);
        Ok(())
    }

    #[test]
    fn test_missing_order_entry_fails() {
        let config = debug_config(ConfigBuilder::new().order("a.py,ghost.py"));
        let listing = names(&["a.py"]);

        match build_plan(Path::new("wd"), &listing, &config) {
            Err(Error::FileNotFound { path, location }) => {
                assert_eq!(path, "ghost.py");
                assert_eq!(location, "wd");
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_header_fails() {
        let config = debug_config(ConfigBuilder::new().header("head.py"));
        let result = build_plan(Path::new("wd"), &names(&["a.py"]), &config);
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_listing_gives_empty_plan() -> Result<()> {
        let config = debug_config(ConfigBuilder::new());
        let plan = build_plan(Path::new("wd"), &[], &config)?;
        assert!(plan.is_empty());
        Ok(())
    }

    #[test]
    fn test_output_inside_work_dir_is_not_merged() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let output = temp.path().join("out.py");
        let config = debug_config(
            ConfigBuilder::new()
                .output(output.to_str().unwrap())
                .order("out.py,main.py"),
        );
        std::fs::write(&output, "")?;
        let listing = names(&["main.py", "out.py", "lib.py"]);

        let plan = build_plan(temp.path(), &listing, &config)?;
        assert_eq!(body_names(&plan), vec!["main.py", "lib.py"]);

        // Without the directories on disk, paths are compared as written.
        let config = debug_config(ConfigBuilder::new().output("wd/out.py"));
        let plan = build_plan(Path::new("wd"), &listing, &config)?;
        assert_eq!(body_names(&plan), vec!["main.py", "lib.py"]);
        Ok(())
    }

    #[test]
    fn test_output_elsewhere_keeps_same_named_file() -> Result<()> {
        let config = debug_config(ConfigBuilder::new().output("out.py"));
        let plan = build_plan(Path::new("wd"), &names(&["out.py"]), &config)?;
        assert_eq!(body_names(&plan), vec!["out.py"]);
        Ok(())
    }
}
