// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, TempDir};

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn cgmerger_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cgmerger"))
}

/// A project laid out the default way: an empty `codingame.volatile.py` next
/// to a `codingame/` directory holding `files`.
#[allow(dead_code)]
pub fn default_project(files: &[(&str, &str)]) -> Result<TempDir, Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("codingame.volatile.py"), "")?;
    let work_dir = temp.path().join("codingame");
    fs::create_dir(&work_dir)?;
    for (name, content) in files {
        fs::write(work_dir.join(name), content)?;
    }
    Ok(temp)
}

#[allow(dead_code)]
pub fn read_output(project: &Path) -> Result<String, Box<dyn std::error::Error>> {
    Ok(fs::read_to_string(project.join("codingame.volatile.py"))?)
}
