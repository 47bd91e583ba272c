//! Build `username_to_name.json` from a directory of `.dat` records.
//!
//! Usage:
//!   extract-username-mapping
//!   extract-username-mapping --source-dir <dir> --output <file.json>
//!
//! With no arguments, reads `archive/chhaatr-khoj-data/data` and writes
//! `public/data/username_to_name.json` under the project root.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use yearbook_roster::console::{write_mapping_sample, write_save_result, write_scan_summary};
use yearbook_roster::{ExtractConfig, UsernameMapping, init_tracing, project_root, run};

/// Map lowercase usernames to full names.
#[derive(Parser)]
#[command(name = "extract-username-mapping")]
struct Cli {
    /// Project root used for the default paths
    #[arg(long)]
    root: Option<PathBuf>,

    /// Directory of .dat record files
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// JSON file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of mappings to echo after writing
    #[arg(long, default_value_t = 5)]
    sample: usize,

    /// Log skipped records on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = cli.root.unwrap_or_else(project_root);
    let config = ExtractConfig::mapping_defaults(&root).with_overrides(cli.source_dir, cli.output);

    let mut out = io::stdout().lock();
    let _ = print_run(&mut out, &config, cli.sample);
}

fn print_run<W: Write>(out: &mut W, config: &ExtractConfig, sample: usize) -> io::Result<()> {
    writeln!(
        out,
        "Extracting username mapping from: {}",
        config.source_dir.display()
    )?;

    let (report, written) = run(config, UsernameMapping::new());

    write_scan_summary(out, &report, report.output.len(), "username mappings")?;
    write_save_result(out, "Username mapping", &config.output_path, &written)?;
    if written.is_ok() {
        write_mapping_sample(out, &report.output, sample)?;
    }
    Ok(())
}
