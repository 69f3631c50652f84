// src/output/mod.rs

//! The merge engine: writes the files of a [`MergePlan`] to a sink.
//!
//! Emission is a single pass in plan order:
//! 1. the header, verbatim;
//! 2. every body file, wrapped in banners, with excluded lines dropped;
//! 3. the footer, after a blank-line separator, with excluded lines dropped.

use crate::config::MergeConfig;
use crate::constants::FOOTER_SEPARATOR;
use crate::core_types::{FileEntry, MergePlan, MergeReport};
use crate::errors::Result;
use crate::filtering::LineFilter;
use crate::processing::encoding::{ChardetDetector, EncodingDetector};
use crate::processing::read_decoded;
use log::debug;
use std::io::Write;

pub mod banner;
pub mod writer;

use banner::{format_end_banner, format_start_banner};

/// What a pass over one file's lines emitted.
#[derive(Debug, Clone, Copy)]
struct LineStats {
    written: usize,
    excluded: usize,
    /// `false` when the last emitted line has no terminator.
    terminated: bool,
}

/// Writes the lines of `text` that pass `filter`, keeping their terminators.
fn write_lines(sink: &mut dyn Write, text: &str, filter: LineFilter<'_>) -> Result<LineStats> {
    let mut stats = LineStats {
        written: 0,
        excluded: 0,
        terminated: true,
    };
    for line in text.split_inclusive('\n') {
        if filter.should_include(line) {
            sink.write_all(line.as_bytes())?;
            stats.written += 1;
            stats.terminated = line.ends_with('\n');
        } else {
            stats.excluded += 1;
        }
    }
    Ok(stats)
}

/// Merges the files of `plan` into `sink` using the default encoding detector.
///
/// # Errors
/// Returns `Error::Io` if a planned file cannot be read and `Error::Output`
/// if writing to `sink` fails. Bytes already written stay in the sink.
pub fn merge(
    plan: &MergePlan,
    config: &MergeConfig,
    sink: &mut dyn Write,
) -> Result<MergeReport> {
    merge_with_detector(plan, config, &ChardetDetector, sink)
}

/// Merges the files of `plan` into `sink`, decoding each file with the
/// encoding `detector` picks for it.
pub fn merge_with_detector(
    plan: &MergePlan,
    config: &MergeConfig,
    detector: &dyn EncodingDetector,
    sink: &mut dyn Write,
) -> Result<MergeReport> {
    debug!("Starting merge with detector {}", detector.name());
    let mut report = MergeReport::default();
    let filter = LineFilter::excluding(config.line_exclude_pattern.as_ref());

    if let Some(header) = &plan.header {
        let stats = write_unbannered(sink, header, detector, LineFilter::passthrough(), "")?;
        report.lines_written += stats.written;
        report.header_written = true;
    }

    for entry in plan.body() {
        let stats = write_body_file(sink, entry, config, detector, filter)?;
        report.files_merged += 1;
        report.lines_written += stats.written;
        report.lines_excluded += stats.excluded;
    }

    if let Some(footer) = &plan.footer {
        let stats = write_unbannered(sink, footer, detector, filter, FOOTER_SEPARATOR)?;
        report.lines_written += stats.written;
        report.lines_excluded += stats.excluded;
        report.footer_written = true;
    }

    debug!("Merge complete: {:?}", report);
    Ok(report)
}

/// Writes a header or footer: `leading` first, then the filtered content.
fn write_unbannered(
    sink: &mut dyn Write,
    entry: &FileEntry,
    detector: &dyn EncodingDetector,
    filter: LineFilter<'_>,
    leading: &str,
) -> Result<LineStats> {
    let decoded = read_decoded(&entry.path, detector)?;
    debug!(
        "Writing {:?} '{}' ({})",
        entry.role,
        entry.name,
        decoded.encoding.name()
    );
    sink.write_all(leading.as_bytes())?;
    write_lines(sink, &decoded.text, filter)
}

fn write_body_file(
    sink: &mut dyn Write,
    entry: &FileEntry,
    config: &MergeConfig,
    detector: &dyn EncodingDetector,
    filter: LineFilter<'_>,
) -> Result<LineStats> {
    let decoded = read_decoded(&entry.path, detector)?;
    debug!(
        "Writing {:?} '{}' ({})",
        entry.role,
        entry.name,
        decoded.encoding.name()
    );

    if config.banners {
        writeln!(sink, "{}", format_start_banner(&entry.name, config))?;
    }
    let stats = write_lines(sink, &decoded.text, filter)?;
    if config.banners {
        if !stats.terminated {
            writeln!(sink)?;
        }
        writeln!(sink, "{}", format_end_banner(&entry.name, config))?;
        sink.write_all(b"\n\n")?;
    }

    if stats.excluded > 0 {
        debug!("Excluded {} lines from '{}'", stats.excluded, entry.name);
    }
    Ok(stats)
}
