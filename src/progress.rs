//! Progress bar display for stub generation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the generation loop
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);

        Self { file_pb }
    }

    /// Update to show the file just written
    pub fn update_file(&self, file_name: &str) {
        self.file_pb.set_message(file_name.to_string());
        self.file_pb.inc(1);
    }

    /// Finish the bar after a clean run
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}
