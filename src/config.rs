//! Source and output locations for an extraction run.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Source directory of `.dat` files, relative to the project root.
pub const DEFAULT_SOURCE_SUFFIX: &str = "archive/chhaatr-khoj-data/data";

/// Mapping output, relative to the project root.
pub const DEFAULT_MAPPING_SUFFIX: &str = "public/data/username_to_name.json";

/// Username list output, relative to the project root.
pub const DEFAULT_USERNAMES_SUFFIX: &str = "public/data/usernames.json";

/// Where to read records from and where to write the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
}

impl ExtractConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_path: output_path.into(),
        }
    }

    /// Default paths for the username mapping pipeline under `root`.
    pub fn mapping_defaults(root: &Path) -> Self {
        Self::new(
            root.join(DEFAULT_SOURCE_SUFFIX),
            root.join(DEFAULT_MAPPING_SUFFIX),
        )
    }

    /// Default paths for the username list pipeline under `root`.
    pub fn usernames_defaults(root: &Path) -> Self {
        Self::new(
            root.join(DEFAULT_SOURCE_SUFFIX),
            root.join(DEFAULT_USERNAMES_SUFFIX),
        )
    }

    /// Replace whichever paths were given explicitly.
    pub fn with_overrides(mut self, source_dir: Option<PathBuf>, output_path: Option<PathBuf>) -> Self {
        if let Some(dir) = source_dir {
            self.source_dir = dir;
        }
        if let Some(path) = output_path {
            self.output_path = path;
        }
        self
    }
}

/// Project root: `CARGO_MANIFEST_DIR` when run via cargo, otherwise the
/// crate directory the binary was built from. Never the working directory.
pub fn project_root() -> PathBuf {
    root_from(std::env::var_os("CARGO_MANIFEST_DIR"))
}

fn root_from(manifest_dir: Option<OsString>) -> PathBuf {
    manifest_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}
