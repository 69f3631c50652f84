// tests/encoding.rs

mod common;

use assert_cmd::prelude::*;
use common::{cgmerger_cmd, default_project, read_output};
use std::fs;

#[test]
fn test_utf8_with_bom_is_merged_without_bom() -> Result<(), Box<dyn std::error::Error>> {
    let temp = default_project(&[])?;
    fs::write(
        temp.path().join("codingame").join("main.py"),
        b"\xEF\xBB\xBFprint('h\xC3\xA9')\n",
    )?;

    cgmerger_cmd()
        .arg("--no-banners")
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(read_output(temp.path())?, "print('hé')\n");
    temp.close()?;
    Ok(())
}

#[test]
fn test_utf16_with_bom_is_transcoded() -> Result<(), Box<dyn std::error::Error>> {
    let temp = default_project(&[])?;
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "x = 1\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(temp.path().join("codingame").join("wide.py"), bytes)?;

    cgmerger_cmd()
        .arg("--no-banners")
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(read_output(temp.path())?, "x = 1\n");
    temp.close()?;
    Ok(())
}

#[test]
fn test_undecodable_bytes_do_not_abort_the_merge() -> Result<(), Box<dyn std::error::Error>> {
    let temp = default_project(&[("ok.py", "OK = True\n")])?;
    fs::write(
        temp.path().join("codingame").join("odd.py"),
        b"# \xff\xfe\xfd\nODD = 1\n",
    )?;

    cgmerger_cmd()
        .args(["--order", "odd.py,ok.py", "--no-banners"])
        .current_dir(temp.path())
        .assert()
        .success();

    let output = read_output(temp.path())?;
    assert!(output.contains("ODD = 1\n"));
    assert!(output.ends_with("OK = True\n"));
    temp.close()?;
    Ok(())
}

#[test]
fn test_empty_file_is_merged() -> Result<(), Box<dyn std::error::Error>> {
    let temp = default_project(&[("empty.py", "")])?;

    cgmerger_cmd().current_dir(temp.path()).assert().success();

    let output = read_output(temp.path())?;
    assert!(output.starts_with("# file \"empty.py\" "));
    assert!(output.contains("\n# end of file \"empty.py\" "));
    temp.close()?;
    Ok(())
}
