// src/discovery/listing.rs

use crate::errors::{io_error_with_path, Result};
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Lists the names of the regular files directly inside `work_dir`.
///
/// Symlinks are followed, subdirectories are skipped, and names that are not
/// valid UTF-8 are skipped with a warning. Symlinks whose target cannot be
/// resolved (dangling links, such as editor lock files) are not regular files
/// and are skipped with a warning too. The result keeps the order in which
/// the directory listing returned the entries.
///
/// # Errors
/// Returns `Error::Io` if the directory or one of its entries cannot be read.
pub fn list_work_dir(work_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let walker = WalkDir::new(work_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_unresolvable_link(&e) => {
                warn!(
                    "Skipping '{}': symlink target cannot be resolved",
                    e.path().unwrap_or(work_dir).display()
                );
                continue;
            }
            Err(e) => return Err(io_error_with_path(e.into(), work_dir)),
        };
        if !entry.file_type().is_file() {
            debug!("Skipping non-file entry '{}'", entry.path().display());
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!(
                "Skipping '{}': file name is not valid UTF-8",
                entry.path().display()
            ),
        }
    }

    debug!("Listed {} files in {}", names.len(), work_dir.display());
    Ok(names)
}

/// An entry error raised while following a symlink inside the directory.
fn is_unresolvable_link(error: &walkdir::Error) -> bool {
    error.depth() > 0 && error.path().is_some_and(Path::is_symlink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_lists_only_top_level_files() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.py"), "a")?;
        fs::write(temp.path().join("b.txt"), "b")?;
        fs::create_dir(temp.path().join("pkg"))?;
        fs::write(temp.path().join("pkg").join("inner.py"), "inner")?;

        let mut names = list_work_dir(temp.path())?;
        names.sort();
        assert_eq!(names, vec!["a.py", "b.txt"]);
        Ok(())
    }

    #[test]
    fn test_empty_directory() -> anyhow::Result<()> {
        let temp = tempdir()?;
        assert!(list_work_dir(temp.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let result = list_work_dir(Path::new("no_such_dir_for_cgmerger"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_listed() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let outside = tempdir()?;
        let target = outside.path().join("shared.py");
        fs::write(&target, "shared")?;
        std::os::unix::fs::symlink(&target, temp.path().join("link.py"))?;

        assert_eq!(list_work_dir(temp.path())?, vec!["link.py"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("main.py"), "x = 1\n")?;
        std::os::unix::fs::symlink(
            temp.path().join("nowhere.py"),
            temp.path().join(".#main.py"),
        )?;

        assert_eq!(list_work_dir(temp.path())?, vec!["main.py"]);
        Ok(())
    }
}
