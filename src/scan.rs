//! Stub state detection
//!
//! Compares on-disk day files against the fixed template to find stubs
//! that have been edited downstream.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DaygenError, Result};
use crate::hash;
use crate::template::{self, TEMPLATE};

/// State of one expected day stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubState {
    /// File exists with byte-identical template content
    Pristine,
    /// File exists but its content differs from the template
    Modified,
    /// File does not exist
    Missing,
}

/// Scan result for one day index
#[derive(Debug, Clone)]
pub struct DayStub {
    pub day: u32,
    pub path: PathBuf,
    pub state: StubState,
}

/// Full scan of a target directory
#[derive(Debug)]
pub struct ScanReport {
    /// One entry per day in the generated range, in index order
    pub stubs: Vec<DayStub>,
    /// Day-shaped files whose index falls outside the range (e.g. day00.rs)
    pub strays: Vec<PathBuf>,
}

impl ScanReport {
    pub fn count(&self, state: &StubState) -> usize {
        self.stubs.iter().filter(|s| s.state == *state).count()
    }
}

/// Scan the target directory and classify every expected day stub
pub fn scan(dir: &Path) -> Result<ScanReport> {
    if !dir.is_dir() {
        return Err(DaygenError::TargetDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let template_hash = hash::hash_bytes(TEMPLATE.as_bytes());

    let mut stubs = Vec::new();
    for day in template::days() {
        let path = dir.join(template::day_filename(day));
        let state = if path.is_file() {
            if hash::hash_file(&path)? == template_hash {
                StubState::Pristine
            } else {
                StubState::Modified
            }
        } else {
            StubState::Missing
        };
        stubs.push(DayStub { day, path, state });
    }

    let strays = find_strays(dir);

    Ok(ScanReport { stubs, strays })
}

/// Find files shaped like day stubs whose index is outside the range
fn find_strays(dir: &Path) -> Vec<PathBuf> {
    let mut strays: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(template::parse_day_filename)
                .is_some_and(|day| !template::days().contains(&day))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();
    strays.sort();
    strays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter;
    use tempfile::TempDir;

    #[test]
    fn test_scan_empty_dir_all_missing() {
        let temp = TempDir::new().unwrap();
        let report = scan(temp.path()).unwrap();

        assert_eq!(report.stubs.len(), 25);
        assert_eq!(report.count(&StubState::Missing), 25);
        assert!(report.strays.is_empty());
    }

    #[test]
    fn test_scan_after_generate_all_pristine() {
        let temp = TempDir::new().unwrap();
        emitter::emit_all(temp.path(), None).unwrap();

        let report = scan(temp.path()).unwrap();
        assert_eq!(report.count(&StubState::Pristine), 25);
    }

    #[test]
    fn test_scan_detects_modified_stub() {
        let temp = TempDir::new().unwrap();
        emitter::emit_all(temp.path(), None).unwrap();
        std::fs::write(temp.path().join("day03.rs"), "// solved!").unwrap();

        let report = scan(temp.path()).unwrap();
        assert_eq!(report.count(&StubState::Pristine), 24);
        assert_eq!(report.count(&StubState::Modified), 1);
        assert_eq!(report.stubs[2].state, StubState::Modified);
        assert_eq!(report.stubs[2].day, 3);
    }

    #[test]
    fn test_scan_flags_out_of_range_strays() {
        let temp = TempDir::new().unwrap();
        emitter::emit_all(temp.path(), None).unwrap();
        std::fs::write(temp.path().join("day00.rs"), "stray").unwrap();
        std::fs::write(temp.path().join("day26.rs"), "stray").unwrap();
        std::fs::write(temp.path().join("shared.rs"), "not a stub").unwrap();

        let report = scan(temp.path()).unwrap();
        assert_eq!(report.strays.len(), 2);
        assert_eq!(report.count(&StubState::Pristine), 25);
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let result = scan(&temp.path().join("nope"));
        assert!(matches!(
            result.unwrap_err(),
            DaygenError::TargetDirNotFound { .. }
        ));
    }
}
