//! Command implementations for Daygen CLI

pub mod completions;
pub mod generate;
pub mod status;
pub mod version;

use std::path::PathBuf;

/// Default target directory when no --dir is given
const DEFAULT_DIR: &str = "src";

/// Resolve the target directory from CLI argument or the default
pub fn target_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DIR))
}
