//! # yearbook-roster
//!
//! Build username lookup tables from a directory of `.dat` student records.
//!
//! Every `.dat` file carries one record on its first line:
//!
//! ```text
//! rollno | name | program | department | hostel | username | gender
//! ```
//!
//! Two pipelines share the same scan and extraction code and differ only in
//! how records are aggregated:
//! - **Username mapping**: lowercase username -> full name, written as a JSON object
//! - **Username set**: unique usernames (case kept), written as a sorted JSON array
//!
//! Files are processed one at a time. A file that cannot be read, or whose
//! first line is not a usable record, is skipped and the scan continues.
//!
//! ## Example
//!
//! ```
//! use yearbook_roster::{Aggregator, Record, UsernameMapping, UsernameSet};
//!
//! let record = Record::parse("101 | Jane Doe | BTech | CSE | HostelA | JDoe123 | F").unwrap();
//!
//! let mut mapping = UsernameMapping::new();
//! mapping.process(&record).unwrap();
//! assert_eq!(mapping.get("jdoe123"), Some("Jane Doe"));
//!
//! let mut usernames = UsernameSet::new();
//! usernames.process(&record).unwrap();
//! assert_eq!(usernames.finish(), vec!["JDoe123"]);
//! ```

pub mod aggregate;
pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod extract;
pub mod record;
pub mod scanner;
pub mod writer;

pub use aggregate::{Aggregator, UsernameMapping, UsernameSet};
pub use config::{ExtractConfig, project_root};
pub use error::{ExtractError, SkipReason};
pub use executor::{ExtractionReport, SkippedFile, execute, run};
pub use extract::{FileOutcome, extract_record, read_first_line};
pub use record::{DELIMITER, MIN_FIELDS, Record};
pub use scanner::scan_dat_files;
pub use writer::{to_json, write_json};

/// Install the `tracing` subscriber used by the command-line tools.
///
/// Logs go to stderr at `warn` for this crate, or `debug` when `verbose` is
/// set. `RUST_LOG` takes precedence when present.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,yearbook_roster={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
