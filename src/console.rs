//! Progress messages printed by the command-line tools.
//!
//! Everything here writes to a caller-supplied `Write` so the binaries can
//! pass stdout and tests can pass a buffer.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use crate::error::ExtractError;
use crate::executor::{ExtractionReport, display_name};

/// Scan results: the file count (or the scan error), one line per unreadable
/// file, then the number of collected entries.
pub fn write_scan_summary<W: Write, T>(
    out: &mut W,
    report: &ExtractionReport<T>,
    entries: usize,
    noun: &str,
) -> io::Result<()> {
    match &report.scan_error {
        Some(e) => writeln!(out, "Error: {e}")?,
        None => writeln!(out, "Found {} .dat files", report.files_found)?,
    }
    for failed in report.failures() {
        writeln!(
            out,
            "Error processing {}: {}",
            display_name(&failed.path),
            failed.reason
        )?;
    }
    writeln!(out, "Found {entries} {noun}")
}

/// Where the output went, or why it could not be written.
pub fn write_save_result<W: Write>(
    out: &mut W,
    label: &str,
    path: &Path,
    written: &Result<(), ExtractError>,
) -> io::Result<()> {
    match written {
        Ok(()) => writeln!(out, "{label} saved to: {}", path.display()),
        Err(e) => writeln!(out, "Error writing {}: {e}", path.display()),
    }
}

/// The first `limit` mappings, one `username -> name` per line.
pub fn write_mapping_sample<W: Write>(
    out: &mut W,
    mapping: &BTreeMap<String, String>,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "Sample mappings (first {limit}):")?;
    for (username, name) in mapping.iter().take(limit) {
        writeln!(out, "  {username} -> {name}")?;
    }
    Ok(())
}

/// The first `limit` usernames on a single line.
pub fn write_username_sample<W: Write>(
    out: &mut W,
    usernames: &[String],
    limit: usize,
) -> io::Result<()> {
    let sample: Vec<&str> = usernames.iter().take(limit).map(String::as_str).collect();
    writeln!(out, "First {limit} usernames: {sample:?}")
}
