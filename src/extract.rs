//! Per-file record extraction.
//!
//! Each `.dat` file is opened, its first line read and decoded as UTF-8,
//! and the file closed again before the next one is touched. Nothing past
//! the first line terminator is decoded.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ExtractError, SkipReason};
use crate::record::Record;

/// Result of extracting one `.dat` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Record(Record),
    Skipped(SkipReason),
}

/// Read the first line of a file.
///
/// The line ends at the first `\n`, `\r\n`, or lone `\r`; the terminator is
/// not included. An empty file yields an empty string.
pub fn read_first_line(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    first_line(BufReader::new(file)).map_err(|e| ExtractError::io(path, e))
}

fn first_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;

    if let Some(end) = buf.iter().position(|&b| b == b'\r' || b == b'\n') {
        buf.truncate(end);
    }

    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Extract the record carried by a `.dat` file.
///
/// I/O and decoding failures become [`SkipReason::Unreadable`] so a single
/// bad file never aborts a scan.
pub fn extract_record(path: &Path) -> FileOutcome {
    let line = match read_first_line(path) {
        Ok(line) => line,
        Err(e) => return FileOutcome::Skipped(SkipReason::Unreadable(io_message(&e))),
    };

    match Record::parse(&line) {
        Ok(record) => FileOutcome::Record(record),
        Err(reason) => FileOutcome::Skipped(reason),
    }
}

fn io_message(err: &ExtractError) -> String {
    match err {
        ExtractError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
