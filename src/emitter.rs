//! The template emitter
//!
//! Writes the fixed stub template to `day01.rs`..`day25.rs` inside the
//! target directory, one file per iteration in increasing index order.
//! Each write opens and releases its file handle within the iteration.

use std::path::{Path, PathBuf};

use crate::error::{DaygenError, Result};
use crate::progress::ProgressDisplay;
use crate::template::{self, TEMPLATE};

/// Write the stub template for one day, overwriting any existing file
pub fn emit_day(dir: &Path, day: u32) -> Result<PathBuf> {
    let path = dir.join(template::day_filename(day));
    std::fs::write(&path, TEMPLATE).map_err(|e| DaygenError::write_failed(&path, &e))?;
    Ok(path)
}

/// Write stubs for the whole day range
///
/// The target directory must already exist; missing directories are an
/// error, never created implicitly. A write failure aborts the remaining
/// iterations and leaves earlier files on disk.
pub fn emit_all(dir: &Path, progress: Option<&ProgressDisplay>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DaygenError::TargetDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut written = Vec::with_capacity(template::days().count());
    for day in template::days() {
        let path = emit_day(dir, day)?;
        if let Some(pb) = progress {
            pb.update_file(&template::day_filename(day));
        }
        written.push(path);
    }

    Ok(written)
}
