//! Progress bar display for the download loop

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the resolved bundle slice
pub struct ProgressDisplay {
    bundle_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total_bundles: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bundle_pb = ProgressBar::new(total_bundles);
        bundle_pb.set_style(style);

        Self { bundle_pb }
    }

    /// Show the bundle currently being downloaded
    pub fn update(&self, filename: &str) {
        self.bundle_pb.set_message(filename.to_string());
    }

    /// Increment bundle progress
    pub fn inc(&self) {
        self.bundle_pb.inc(1);
    }

    /// Finish the bar
    pub fn finish(&self) {
        self.bundle_pb.finish_and_clear();
    }
}
