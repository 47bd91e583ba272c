//! Single-pass extraction executor.
//!
//! Scans the source directory, pushes each file's record through an
//! aggregator, and keeps a per-file account of what was skipped and why.
//! A missing source directory or an unreadable file is recorded in the report
//! and the run carries on; nothing here aborts a scan. Callers decide how to
//! present those problems.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::aggregate::Aggregator;
use crate::config::ExtractConfig;
use crate::error::{ExtractError, SkipReason};
use crate::extract::{FileOutcome, extract_record};
use crate::scanner::scan_dat_files;
use crate::writer::write_json;

/// A file that contributed nothing, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of scanning a directory into an aggregator.
#[derive(Debug)]
pub struct ExtractionReport<T> {
    /// Set when the source directory could not be scanned at all.
    pub scan_error: Option<String>,
    /// Number of `.dat` files found.
    pub files_found: usize,
    /// Number of files whose record was folded into the aggregator.
    pub accepted: usize,
    /// Files that contributed nothing, in scan order.
    pub skipped: Vec<SkippedFile>,
    /// The aggregated value, ready to serialize.
    pub output: T,
}

impl<T> ExtractionReport<T> {
    /// Skipped files caused by I/O or decoding errors.
    pub fn failures(&self) -> impl Iterator<Item = &SkippedFile> {
        self.skipped.iter().filter(|s| s.reason.is_failure())
    }
}

/// Scan `source_dir` and fold every record into `aggregator`.
pub fn execute<A: Aggregator>(source_dir: &Path, mut aggregator: A) -> ExtractionReport<A::Output> {
    let (files, scan_error) = match scan_dat_files(source_dir) {
        Ok(files) => (files, None),
        Err(e) => {
            debug!("scan failed: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let files_found = files.len();
    let mut accepted = 0;
    let mut skipped = Vec::new();

    for path in files {
        let result = match extract_record(&path) {
            FileOutcome::Record(record) => aggregator.process(&record),
            FileOutcome::Skipped(reason) => Err(reason),
        };

        match result {
            Ok(()) => accepted += 1,
            Err(reason) => {
                let file = display_name(&path);
                debug!("Skipping {file}: {reason}");
                skipped.push(SkippedFile { path, reason });
            }
        }
    }

    debug!(
        aggregator = aggregator.name(),
        files_found,
        accepted,
        entries = aggregator.len(),
        "scan complete"
    );

    ExtractionReport {
        scan_error,
        files_found,
        accepted,
        skipped,
        output: aggregator.finish(),
    }
}

/// Run a full extraction: scan, aggregate, and write the JSON output.
///
/// The report is returned even when the write fails so callers can still
/// describe what was scanned.
pub fn run<A: Aggregator>(
    config: &ExtractConfig,
    aggregator: A,
) -> (ExtractionReport<A::Output>, Result<(), ExtractError>) {
    let report = execute(&config.source_dir, aggregator);
    let written = write_json(&config.output_path, &report.output);
    if written.is_ok() {
        info!(path = %config.output_path.display(), "wrote output");
    }
    (report, written)
}

/// File name of `path` for console messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{UsernameMapping, UsernameSet};
    use std::fs;
    use tempfile::TempDir;

    fn roster(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_mapping_and_set_from_same_files() {
        let dir = roster(&[(
            "101.dat",
            "101 | Jane Doe | BTech | CSE | HostelA | JDoe123 | F\n",
        )]);

        let mapping = execute(dir.path(), UsernameMapping::new());
        assert_eq!(mapping.files_found, 1);
        assert_eq!(mapping.accepted, 1);
        assert_eq!(mapping.output.get("jdoe123").map(String::as_str), Some("Jane Doe"));

        let set = execute(dir.path(), UsernameSet::new());
        assert_eq!(set.output, vec!["JDoe123"]);
    }

    #[test]
    fn test_skips_are_recorded_with_reasons() {
        let dir = roster(&[
            ("a.dat", "1 | OnlyName\n"),
            ("b.dat", "2 | Bob | P | D | H | bob | M\n"),
            ("c.dat", ""),
            ("d.dat", "4 |  | P | D | H | dee | F\n"),
        ]);

        let report = execute(dir.path(), UsernameMapping::new());
        assert_eq!(report.files_found, 4);
        assert_eq!(report.accepted, 1);

        let reasons: Vec<_> = report.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::TooFewFields { found: 2 },
                SkipReason::EmptyLine,
                SkipReason::MissingName,
            ]
        );
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_unreadable_file_does_not_abort() {
        let dir = roster(&[
            ("a.dat", "1 | Ann | P | D | H | ann | F\n"),
            ("z.dat", "3 | Zed | P | D | H | zed | M\n"),
        ]);
        fs::write(dir.path().join("m.dat"), b"2 | \xff\xfe | P | D | H | m | M\n").unwrap();

        let report = execute(dir.path(), UsernameSet::new());
        assert_eq!(report.files_found, 3);
        assert_eq!(report.output, vec!["ann", "zed"]);

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].path.ends_with("m.dat"));
    }

    #[test]
    fn test_later_file_wins_in_name_order() {
        let dir = roster(&[
            ("002.dat", "2 | Second | P | D | H | dup | M\n"),
            ("001.dat", "1 | First | P | D | H | DUP | M\n"),
        ]);
        let report = execute(dir.path(), UsernameMapping::new());
        assert_eq!(report.output.len(), 1);
        assert_eq!(report.output.get("dup").map(String::as_str), Some("Second"));
    }

    #[test]
    fn test_missing_source_dir_yields_empty_output() {
        let dir = TempDir::new().unwrap();
        let report = execute(&dir.path().join("absent"), UsernameMapping::new());
        assert!(report.scan_error.is_some());
        assert_eq!(report.files_found, 0);
        assert!(report.output.is_empty());
    }

    #[test]
    fn test_run_writes_output() {
        let src = roster(&[("a.dat", "1 | Ann | P | D | H | Ann | F\n")]);
        let out = TempDir::new().unwrap();
        let config = ExtractConfig::new(src.path(), out.path().join("data").join("usernames.json"));

        let (report, written) = run(&config, UsernameSet::new());
        written.unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(
            fs::read_to_string(&config.output_path).unwrap(),
            "[\n  \"Ann\"\n]"
        );
    }
}
