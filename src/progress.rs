//! Progress bar display for extraction and relocation copies

use indicatif::{ProgressBar, ProgressStyle};

/// File-count progress for a copy or extract pass.
pub struct CopyProgress {
    pb: ProgressBar,
}

impl CopyProgress {
    /// Create a progress bar over `total` files.
    pub fn files(total: u64, message: &'static str) -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total);
        pb.set_style(style);
        pb.set_message(message);

        Self { pb }
    }

    /// Advance by one file.
    pub fn tick(&self) {
        self.pb.inc(1);
    }

    /// Remove the bar once the pass is complete.
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
