//! Common test utilities for Daygen integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// The exact stub content every generated day file must contain,
/// spelled out independently of the binary under test
pub const EXPECTED_STUB: &str = r#"use crate::shared::AppResult;

pub fn part1(_input: &str) -> AppResult<u32> {
    Ok(0)
}


pub fn part2(_input: &str) -> AppResult<u32> {
    Ok(0)
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_part1() {
        assert_eq!(part1("").unwrap(), 0);
    }
}"#;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the stub target directory
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an existing target directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the target directory
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write file");
    }

    /// Read a file from the target directory
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Check if a file exists in the target directory
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }

    /// Count entries in the target directory
    #[allow(dead_code)]
    pub fn file_count(&self) -> usize {
        std::fs::read_dir(&self.path)
            .expect("Failed to read target directory")
            .count()
    }
}
