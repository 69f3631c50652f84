// src/processing/encoding.rs

//! Best-effort detection of a file's text encoding from its first bytes.

use crate::constants::ENCODING_SAMPLE_SIZE;
use chardetng::EncodingDetector as ChardetEngine;
use encoding_rs::{Encoding, UTF_8};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Guesses a text encoding from a leading byte sample.
///
/// Implementations return `None` when the sample gives no usable signal; the
/// caller then falls back to UTF-8.
pub trait EncodingDetector: Send + Sync {
    /// Inspects `sample` (at most a few dozen bytes) and returns a guess.
    fn detect(&self, sample: &[u8]) -> Option<&'static Encoding>;
    /// Returns a descriptive name for the detector.
    fn name(&self) -> &'static str;
}

/// The default detector: BOM, then UTF-8 validity, then a statistical guess.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChardetDetector;

impl EncodingDetector for ChardetDetector {
    fn detect(&self, sample: &[u8]) -> Option<&'static Encoding> {
        if sample.is_empty() {
            return None;
        }
        if let Some((encoding, _bom_len)) = Encoding::for_bom(sample) {
            return Some(encoding);
        }
        if is_utf8_prefix(sample) {
            return Some(UTF_8);
        }
        let mut engine = ChardetEngine::new();
        engine.feed(sample, true);
        Some(engine.guess(None, true))
    }

    fn name(&self) -> &'static str {
        "ChardetDetector"
    }
}

/// Always answers with the same encoding.
#[derive(Debug, Clone, Copy)]
pub struct FixedDetector(pub &'static Encoding);

impl EncodingDetector for FixedDetector {
    fn detect(&self, _sample: &[u8]) -> Option<&'static Encoding> {
        Some(self.0)
    }

    fn name(&self) -> &'static str {
        "FixedDetector"
    }
}

/// Whether `sample` is valid UTF-8, allowing a multi-byte sequence to be cut
/// off by the end of the sample.
fn is_utf8_prefix(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // `error_len() == None` means the input ended mid-sequence.
        Err(e) => e.error_len().is_none(),
    }
}

/// Detects the encoding of the file at `path` from its first
/// [`ENCODING_SAMPLE_SIZE`] bytes.
///
/// Never fails: an unreadable sample, an empty file, or a detector with no
/// answer all fall back to UTF-8.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use cgmerger::processing::encoding::{detect_encoding, ChardetDetector};
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let file = temp.path().join("main.py");
/// fs::write(&file, "print('hello')\n")?;
///
/// assert_eq!(detect_encoding(&file, &ChardetDetector), encoding_rs::UTF_8);
/// # Ok(())
/// # }
/// ```
pub fn detect_encoding(path: &Path, detector: &dyn EncodingDetector) -> &'static Encoding {
    let sample = match read_sample(path) {
        Ok(sample) => sample,
        Err(e) => {
            warn!(
                "Could not sample '{}' for encoding detection, assuming UTF-8: {}",
                path.display(),
                e
            );
            return UTF_8;
        }
    };

    match detector.detect(&sample) {
        Some(encoding) => {
            debug!(
                "{} detected {} for {}",
                detector.name(),
                encoding.name(),
                path.display()
            );
            encoding
        }
        None => {
            debug!(
                "{} had no guess for {}, assuming UTF-8",
                detector.name(),
                path.display()
            );
            UTF_8
        }
    }
}

fn read_sample(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut sample = Vec::with_capacity(ENCODING_SAMPLE_SIZE);
    File::open(path)?
        .take(ENCODING_SAMPLE_SIZE as u64)
        .read_to_end(&mut sample)?;
    Ok(sample)
}
