//! Handles reading file content for the merge.
//!
//! Each file is decoded with the encoding its first bytes suggest, so the
//! merge engine only ever deals with `String`s.

use crate::errors::{io_error_with_path, Result};
use encoding_rs::Encoding;
use log::{debug, warn};
use std::fs;
use std::path::Path;

pub mod encoding;

use encoding::{detect_encoding, EncodingDetector};

/// The decoded content of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub text: String,
    /// The encoding the file was decoded with.
    pub encoding: &'static Encoding,
}

/// Reads the file at `path` and decodes it with the encoding `detector` picks.
///
/// A byte-order mark, if present, takes precedence over the detected encoding
/// and is stripped. Malformed sequences are replaced with U+FFFD and logged.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read.
pub fn read_decoded(path: &Path, detector: &dyn EncodingDetector) -> Result<DecodedFile> {
    let detected = detect_encoding(path, detector);
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;

    let (text, used, had_errors) = detected.decode(&bytes);
    if had_errors {
        warn!(
            "'{}' is not valid {}; malformed sequences were replaced",
            path.display(),
            used.name()
        );
    }
    debug!(
        "Read {} bytes from {} as {}",
        bytes.len(),
        path.display(),
        used.name()
    );

    Ok(DecodedFile {
        text: text.into_owned(),
        encoding: used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::processing::encoding::{ChardetDetector, FixedDetector};
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use tempfile::tempdir;

    #[test]
    fn test_read_utf8() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.py");
        fs::write(&path, "print('héllo')\n")?;

        let decoded = read_decoded(&path, &ChardetDetector)?;
        assert_eq!(decoded.text, "print('héllo')\n");
        assert_eq!(decoded.encoding, UTF_8);
        Ok(())
    }

    #[test]
    fn test_bom_is_stripped() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("bom.py");
        fs::write(&path, b"\xEF\xBB\xBFx = 1\n")?;

        let decoded = read_decoded(&path, &ChardetDetector)?;
        assert_eq!(decoded.text, "x = 1\n");
        Ok(())
    }

    #[test]
    fn test_decodes_with_detected_encoding() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("latin.py");
        fs::write(&path, b"# caf\xe9\n")?;

        let decoded = read_decoded(&path, &FixedDetector(WINDOWS_1252))?;
        assert_eq!(decoded.text, "# café\n");
        assert_eq!(decoded.encoding, WINDOWS_1252);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_decoded(Path::new("no_such_file_for_cgmerger.py"), &ChardetDetector);
        match result {
            Err(Error::Io { path, .. }) => assert!(path.contains("no_such_file_for_cgmerger")),
            other => panic!("Expected Error::Io, got {:?}", other),
        }
    }
}
