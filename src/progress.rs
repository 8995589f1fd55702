//! Progress bar display for file copies

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display while writing component files into a project
pub struct CopyProgress {
    bar: ProgressBar,
}

impl CopyProgress {
    /// Create a progress bar sized to the total number of files to write
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total_files);
        bar.set_style(style);

        Self { bar }
    }

    /// Update the message to the file currently being written
    pub fn start_file(&self, path: &str) {
        // Truncate long paths for display
        let display_path = if path.len() > 50 {
            format!("...{}", &path[path.len() - 47..])
        } else {
            path.to_string()
        };
        self.bar.set_message(display_path);
    }

    /// Mark one file as written
    pub fn file_done(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error, leaving the bar visible
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
