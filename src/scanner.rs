//! Source directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// File name suffix of roster record files.
pub const DAT_SUFFIX: &str = ".dat";

/// List the `*.dat` files directly inside `dir`.
///
/// Subdirectories are not descended into. The name must end in `.dat`
/// (case-sensitive); a file named exactly `.dat` counts. Paths are returned
/// sorted by file name so that repeated runs visit files in the same order
/// on every platform.
pub fn scan_dat_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    if !dir.exists() {
        return Err(ExtractError::MissingSourceDir(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ExtractError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ExtractError::io(dir, e))? {
        let entry = entry.map_err(|e| ExtractError::io(dir, e))?;
        let path = entry.path();
        if is_dat_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_dat_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(DAT_SUFFIX.as_bytes()))
}
